use crate::app::presenter::OutputFormat;
use crate::core::{ConfigProvider, SortOrder};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_max_digits, validate_path, validate_range, Validate, DEFAULT_MAX_DIGITS,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "prime-checker")]
#[command(about = "Check whether a number is prime and list the primes below it")]
pub struct CliConfig {
    /// Number to check; omit it to start interactive mode
    pub number: Option<String>,

    /// Order of the listed primes
    #[arg(long, value_enum)]
    pub order: Option<SortOrder>,

    /// Include the cumulative prime count chart
    #[arg(long)]
    pub chart: bool,

    /// Number of rows used to draw the chart
    #[arg(long)]
    pub chart_rows: Option<usize>,

    /// Maximum number of digits accepted as input
    #[arg(long)]
    pub max_digits: Option<usize>,

    /// Output format written to stdout
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Directory where report files are exported
    #[arg(long)]
    pub output_path: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Seed for quote selection
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU and memory usage around each check")]
    pub monitor: bool,
}

impl ConfigProvider for CliConfig {
    fn max_digits(&self) -> usize {
        self.max_digits.unwrap_or(DEFAULT_MAX_DIGITS)
    }

    fn order(&self) -> SortOrder {
        self.order.unwrap_or_default()
    }

    fn include_chart(&self) -> bool {
        self.chart
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(max_digits) = self.max_digits {
            validate_max_digits("max_digits", max_digits)?;
        }
        if let Some(rows) = self.chart_rows {
            validate_range("chart_rows", rows, 1, 1000)?;
        }
        if let Some(path) = &self.output_path {
            validate_path("output_path", path)?;
        }
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}
