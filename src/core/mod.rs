pub mod chart;
pub mod engine;
pub mod enumerator;
pub mod primality;
pub mod service;

pub use crate::domain::model::{ChartPoint, CheckReport, PrimeCheckResult, SortOrder};
pub use crate::domain::ports::{ConfigProvider, Exporter, PrimeService, Storage};
pub use crate::utils::error::Result;
