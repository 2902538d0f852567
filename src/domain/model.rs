use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 質數列表的排序方式，預設遞增
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Ascending => write!(f, "ascending"),
            SortOrder::Descending => write!(f, "descending"),
        }
    }
}

/// One point of the cumulative prime count: `y` primes are `<= x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: i64,
    pub y: usize,
}

impl From<(i64, usize)> for ChartPoint {
    fn from((x, y): (i64, usize)) -> Self {
        Self { x, y }
    }
}

/// Everything the presentation layer needs after one confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimeCheckResult {
    pub is_prime: bool,
    pub lower_primes: Vec<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_data: Option<Vec<ChartPoint>>,
}

/// 匯出用的報告，包含原始輸入與產生時間
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckReport {
    pub input: i64,
    pub order: SortOrder,
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub result: PrimeCheckResult,
}

impl CheckReport {
    pub fn new(input: i64, order: SortOrder, result: PrimeCheckResult) -> Self {
        Self {
            input,
            order,
            generated_at: Utc::now(),
            result,
        }
    }
}
