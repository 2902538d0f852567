#[cfg(feature = "cli")]
pub mod cli;
pub mod lambda;
pub mod toml_config;

use crate::app::export::ExportFormat;
use crate::app::presenter::{OutputFormat, DEFAULT_CHART_ROWS};
use crate::app::quotes::PRIME_QUOTES;
use crate::core::{ConfigProvider, SortOrder};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_max_digits, validate_path, validate_range, Validate, DEFAULT_MAX_DIGITS,
};
use self::toml_config::TomlConfig;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

/// Effective settings after merging the TOML file and command line flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub max_digits: usize,
    pub order: SortOrder,
    pub include_chart: bool,
    pub chart_rows: usize,
    pub format: OutputFormat,
    pub output_path: Option<String>,
    pub export_formats: Vec<ExportFormat>,
    pub quotes: Vec<String>,
    pub seed: Option<u64>,
    pub monitor: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_digits: DEFAULT_MAX_DIGITS,
            order: SortOrder::default(),
            include_chart: false,
            chart_rows: DEFAULT_CHART_ROWS,
            format: OutputFormat::default(),
            output_path: None,
            export_formats: vec![ExportFormat::Json],
            quotes: PRIME_QUOTES.iter().map(|q| q.to_string()).collect(),
            seed: None,
            monitor: false,
        }
    }
}

impl Settings {
    pub fn from_toml(config: &TomlConfig) -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            max_digits: config.max_digits(),
            order: config.order(),
            include_chart: config.include_chart(),
            chart_rows: config.output.chart_rows.unwrap_or(defaults.chart_rows),
            format: config.output.format.unwrap_or(defaults.format),
            output_path: config.output.path.clone(),
            export_formats: config.export_formats()?,
            quotes: config
                .presentation
                .quotes
                .clone()
                .unwrap_or(defaults.quotes),
            seed: config.presentation.seed,
            monitor: config.monitoring_enabled(),
        })
    }

    /// 命令列參數優先於設定檔
    #[cfg(feature = "cli")]
    pub fn apply_cli(mut self, cli: &CliConfig) -> Self {
        if let Some(max_digits) = cli.max_digits {
            self.max_digits = max_digits;
        }
        if let Some(order) = cli.order {
            self.order = order;
        }
        if cli.chart {
            self.include_chart = true;
        }
        if let Some(rows) = cli.chart_rows {
            self.chart_rows = rows;
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
        if let Some(path) = &cli.output_path {
            self.output_path = Some(path.clone());
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if cli.monitor {
            self.monitor = true;
        }
        self
    }
}

impl ConfigProvider for Settings {
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

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_max_digits("max_digits", self.max_digits)?;
        validate_range("chart_rows", self.chart_rows, 1, 1000)?;
        if let Some(path) = &self.output_path {
            validate_path("output_path", path)?;
        }
        Ok(())
    }
}
