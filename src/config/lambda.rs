#[cfg(feature = "lambda")]
use crate::core::engine::CheckEngine;
#[cfg(feature = "lambda")]
use crate::core::service::TrialDivision;
#[cfg(feature = "lambda")]
use crate::core::{ConfigProvider, PrimeCheckResult, SortOrder};
#[cfg(feature = "lambda")]
use crate::utils::error::{PrimeError, Result};
#[cfg(feature = "lambda")]
use crate::utils::validation::{validate_max_digits, Validate, DEFAULT_MAX_DIGITS};
#[cfg(feature = "lambda")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "lambda")]
use std::env;

/// Lambda 事件內容，`order` 與 `chart` 覆蓋環境變數
#[cfg(feature = "lambda")]
#[derive(Debug, Clone, Deserialize)]
pub struct LambdaRequest {
    pub input: String,
    #[serde(default)]
    pub order: Option<SortOrder>,
    #[serde(default)]
    pub chart: Option<bool>,
}

#[cfg(feature = "lambda")]
#[derive(Debug, Clone, Serialize)]
pub struct LambdaResponse {
    pub message: String,
    pub input: i64,
    #[serde(flatten)]
    pub result: PrimeCheckResult,
}

#[cfg(feature = "lambda")]
#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub max_digits: usize,
    pub order: SortOrder,
    pub include_chart: bool,
}

#[cfg(feature = "lambda")]
impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 從任意來源讀取 `PRIME_*` 變數，未設定時使用預設值
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let order = match lookup("PRIME_ORDER") {
            Some(value) => parse_order(&value)?,
            None => SortOrder::default(),
        };

        let max_digits = match lookup("PRIME_MAX_DIGITS") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| PrimeError::InvalidConfigValueError {
                    field: "PRIME_MAX_DIGITS".to_string(),
                    value: value.clone(),
                    reason: "Expected a positive integer".to_string(),
                })?,
            None => DEFAULT_MAX_DIGITS,
        };

        let include_chart = lookup("PRIME_CHART")
            .map(|value| matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            max_digits,
            order,
            include_chart,
        })
    }

    /// 事件內的設定覆蓋環境變數
    pub fn with_overrides(mut self, order: Option<SortOrder>, chart: Option<bool>) -> Self {
        if let Some(order) = order {
            self.order = order;
        }
        if let Some(chart) = chart {
            self.include_chart = chart;
        }
        self
    }
}

/// 處理一個事件：套用覆蓋、驗證設定、計算結果並組出回覆訊息
#[cfg(feature = "lambda")]
pub fn handle_request(request: LambdaRequest, base: LambdaConfig) -> Result<LambdaResponse> {
    tracing::info!("Checking input '{}'", request.input);

    let config = base.with_overrides(request.order, request.chart);
    config.validate()?;

    let report = CheckEngine::new(TrialDivision, config).evaluate(&request.input)?;
    let message = format!(
        "{} is {}a prime number.",
        report.input,
        if report.result.is_prime { "" } else { "not " }
    );

    Ok(LambdaResponse {
        message,
        input: report.input,
        result: report.result,
    })
}

#[cfg(feature = "lambda")]
fn parse_order(value: &str) -> Result<SortOrder> {
    match value.trim().to_ascii_lowercase().as_str() {
        "asc" | "ascending" => Ok(SortOrder::Ascending),
        "desc" | "descending" => Ok(SortOrder::Descending),
        _ => Err(PrimeError::InvalidConfigValueError {
            field: "PRIME_ORDER".to_string(),
            value: value.to_string(),
            reason: "Expected 'ascending' or 'descending'".to_string(),
        }),
    }
}

#[cfg(feature = "lambda")]
impl ConfigProvider for LambdaConfig {
    fn max_digits(&self) -> usize {
        self.max_digits
    }

    fn order(&self) -> SortOrder {
        self.order
    }

    fn include_chart(&self) -> bool {
        self.include_chart
    }
}

#[cfg(feature = "lambda")]
impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        validate_max_digits("PRIME_MAX_DIGITS", self.max_digits)?;

        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}
