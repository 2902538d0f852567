use crate::app::export::ExportFormat;
use crate::app::presenter::OutputFormat;
use crate::core::{ConfigProvider, SortOrder};
use crate::utils::error::{PrimeError, Result};
use crate::utils::validation::{
    validate_max_digits, validate_non_empty_string, validate_path, validate_range, Validate,
    DEFAULT_MAX_DIGITS,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub presentation: PresentationConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    pub max_digits: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub order: Option<SortOrder>,
    pub chart: Option<bool>,
    pub chart_rows: Option<usize>,
    pub format: Option<OutputFormat>,
    pub path: Option<String>,
    pub export_formats: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PresentationConfig {
    pub quotes: Option<Vec<String>>,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PrimeError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${PRIME_ORDER})，找不到時保留原字串
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PrimeError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn export_formats(&self) -> Result<Vec<ExportFormat>> {
        match &self.output.export_formats {
            Some(formats) => formats.iter().map(|f| f.parse()).collect(),
            None => Ok(vec![ExportFormat::Json]),
        }
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(max_digits) = self.input.max_digits {
            validate_max_digits("input.max_digits", max_digits)?;
        }

        if let Some(rows) = self.output.chart_rows {
            validate_range("output.chart_rows", rows, 1, 1000)?;
        }

        if let Some(path) = &self.output.path {
            validate_path("output.path", path)?;
        }

        self.export_formats()?;

        if let Some(quotes) = &self.presentation.quotes {
            if quotes.is_empty() {
                return Err(PrimeError::ConfigValidationError {
                    field: "presentation.quotes".to_string(),
                    message: "At least one quote is required when the list is given".to_string(),
                });
            }
            for quote in quotes {
                validate_non_empty_string("presentation.quotes", quote)?;
            }
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn max_digits(&self) -> usize {
        self.input.max_digits.unwrap_or(DEFAULT_MAX_DIGITS)
    }

    fn order(&self) -> SortOrder {
        self.output.order.unwrap_or_default()
    }

    fn include_chart(&self) -> bool {
        self.output.chart.unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
