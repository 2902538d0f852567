pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

#[cfg(feature = "lambda")]
pub use config::lambda::{handle_request, LambdaConfig, LambdaRequest, LambdaResponse};

pub use adapters::storage::LocalStorage;
pub use config::Settings;
pub use core::{
    chart::prime_chart_series, engine::CheckEngine, enumerator::primes_below,
    enumerator::PrimesBelow, primality::is_prime, service::TrialDivision,
};
pub use domain::model::{ChartPoint, CheckReport, PrimeCheckResult, SortOrder};
pub use domain::ports::PrimeService;
pub use utils::error::{PrimeError, Result};
