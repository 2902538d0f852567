use crate::core::chart::sample_series;
use crate::domain::model::{ChartPoint, CheckReport};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

pub const DEFAULT_CHART_ROWS: usize = 20;
const BAR_WIDTH: usize = 40;
const PRIMES_PER_ROW: usize = 10;

/// 把結果轉成終端機輸出
#[derive(Debug, Clone)]
pub struct Presenter {
    chart_rows: usize,
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new(DEFAULT_CHART_ROWS)
    }
}

impl Presenter {
    pub fn new(chart_rows: usize) -> Self {
        Self { chart_rows }
    }

    pub fn render(&self, format: OutputFormat, report: &CheckReport, quote: &str) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text(report, quote)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Csv => {
                let bytes = crate::app::export::primes_csv(&report.result.lower_primes)?;
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
        }
    }

    pub fn render_text(&self, report: &CheckReport, quote: &str) -> String {
        let mut out = String::new();
        let n = report.input;
        let result = &report.result;

        let _ = writeln!(
            out,
            "{} is {}a prime number.",
            n,
            if result.is_prime { "" } else { "not " }
        );
        let _ = writeln!(out, "\u{201C} {}", quote);
        let _ = writeln!(out);
        let _ = writeln!(out, "Prime numbers lower than {}:", n);

        if result.lower_primes.is_empty() {
            let _ = writeln!(out, "No prime numbers found.");
        } else {
            let width = result
                .lower_primes
                .iter()
                .map(|p| p.to_string().len())
                .max()
                .unwrap_or(1);
            for row in result.lower_primes.chunks(PRIMES_PER_ROW) {
                let line: Vec<String> = row.iter().map(|p| format!("{:>width$}", p)).collect();
                let _ = writeln!(out, "  {}", line.join("  "));
            }
        }

        if let Some(series) = &result.chart_data {
            let _ = writeln!(out);
            out.push_str(&self.render_chart(series));
        }

        out
    }

    pub fn render_chart(&self, series: &[ChartPoint]) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Distribution of primes:");

        let sampled = sample_series(series, self.chart_rows);
        let Some(max_y) = sampled.iter().map(|p| p.y).max() else {
            let _ = writeln!(out, "  (no data)");
            return out;
        };
        let label_width = sampled
            .last()
            .map(|p| p.x.to_string().len())
            .unwrap_or(1);

        for point in &sampled {
            let filled = if max_y == 0 {
                0
            } else {
                point.y * BAR_WIDTH / max_y
            };
            let _ = writeln!(
                out,
                "  {:>label_width$} | {} {}",
                point.x,
                "\u{2588}".repeat(filled),
                point.y
            );
        }
        out
    }
}
