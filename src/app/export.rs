use crate::core::{ChartPoint, CheckReport, Exporter, Storage};
use crate::utils::error::{PrimeError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub const REPORT_FILE: &str = "report.json";
pub const PRIMES_FILE: &str = "primes.csv";
pub const CHART_FILE: &str = "chart.csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Csv,
}

impl std::str::FromStr for ExportFormat {
    type Err = PrimeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(PrimeError::InvalidConfigValueError {
                field: "export_formats".to_string(),
                value: other.to_string(),
                reason: "Unsupported format. Valid formats: json, csv".to_string(),
            }),
        }
    }
}

#[derive(Serialize)]
struct PrimeRow {
    prime: i64,
}

#[derive(Serialize)]
struct ChartRow {
    x: i64,
    count: usize,
}

fn finish_csv(writer: csv::Writer<Vec<u8>>) -> Result<Vec<u8>> {
    writer
        .into_inner()
        .map_err(|e| PrimeError::IoError(e.into_error()))
}

pub fn primes_csv(primes: &[i64]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if primes.is_empty() {
        // 沒有資料時 serialize 不會寫表頭
        writer.write_record(["prime"])?;
    }
    for &prime in primes {
        writer.serialize(PrimeRow { prime })?;
    }
    finish_csv(writer)
}

pub fn chart_csv(series: &[ChartPoint]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if series.is_empty() {
        writer.write_record(["x", "count"])?;
    }
    for point in series {
        writer.serialize(ChartRow {
            x: point.x,
            count: point.y,
        })?;
    }
    finish_csv(writer)
}

/// Writes a report through a [`Storage`] in every configured format.
pub struct FileExporter<S: Storage> {
    storage: S,
    formats: Vec<ExportFormat>,
}

impl<S: Storage> FileExporter<S> {
    pub fn new(storage: S, formats: Vec<ExportFormat>) -> Self {
        Self { storage, formats }
    }
}

#[async_trait]
impl<S: Storage> Exporter for FileExporter<S> {
    async fn export(&self, report: &CheckReport) -> Result<Vec<String>> {
        let mut written = Vec::new();

        for format in &self.formats {
            match format {
                ExportFormat::Json => {
                    let data = serde_json::to_vec_pretty(report)?;
                    self.storage.write_file(REPORT_FILE, &data).await?;
                    written.push(REPORT_FILE.to_string());
                }
                ExportFormat::Csv => {
                    let primes = primes_csv(&report.result.lower_primes)?;
                    self.storage.write_file(PRIMES_FILE, &primes).await?;
                    written.push(PRIMES_FILE.to_string());

                    if let Some(series) = &report.result.chart_data {
                        let chart = chart_csv(series)?;
                        self.storage.write_file(CHART_FILE, &chart).await?;
                        written.push(CHART_FILE.to_string());
                    }
                }
            }
        }

        tracing::debug!("Exported {} file(s) for input {}", written.len(), report.input);
        Ok(written)
    }
}

/// Exporter used when no output directory is configured.
pub struct NoopExporter;

#[async_trait]
impl Exporter for NoopExporter {
    async fn export(&self, _report: &CheckReport) -> Result<Vec<String>> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{PrimeCheckResult, SortOrder};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn get_file(&self, path: &str) -> Option<String> {
            let files = self.files.lock().unwrap();
            files
                .get(path)
                .map(|data| String::from_utf8_lossy(data).into_owned())
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().unwrap();
            files.get(path).cloned().ok_or_else(|| {
                PrimeError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().unwrap();
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    fn sample_report(with_chart: bool) -> CheckReport {
        CheckReport::new(
            5,
            SortOrder::Ascending,
            PrimeCheckResult {
                is_prime: true,
                lower_primes: vec![2, 3],
                chart_data: with_chart
                    .then(|| vec![(2, 1).into(), (3, 2).into(), (4, 2).into(), (5, 3).into()]),
            },
        )
    }

    #[test]
    fn test_primes_csv() {
        let csv = String::from_utf8(primes_csv(&[2, 3, 5]).unwrap()).unwrap();
        assert_eq!(csv, "prime\n2\n3\n5\n");

        let empty = String::from_utf8(primes_csv(&[]).unwrap()).unwrap();
        assert_eq!(empty, "prime\n");
    }

    #[test]
    fn test_chart_csv() {
        let series: Vec<ChartPoint> = vec![(2, 1).into(), (3, 2).into()];
        let csv = String::from_utf8(chart_csv(&series).unwrap()).unwrap();
        assert_eq!(csv, "x,count\n2,1\n3,2\n");
    }

    #[test]
    fn test_export_format_from_str() {
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!(" csv ".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert!("tsv".parse::<ExportFormat>().is_err());
    }

    #[tokio::test]
    async fn test_export_all_formats() {
        let storage = MockStorage::default();
        let exporter = FileExporter::new(
            storage.clone(),
            vec![ExportFormat::Json, ExportFormat::Csv],
        );

        let written = exporter.export(&sample_report(true)).await.unwrap();

        assert_eq!(written, vec![REPORT_FILE, PRIMES_FILE, CHART_FILE]);
        let json: serde_json::Value =
            serde_json::from_str(&storage.get_file(REPORT_FILE).unwrap()).unwrap();
        assert_eq!(json["isPrime"], true);
        assert_eq!(storage.get_file(CHART_FILE).unwrap().lines().count(), 5);
    }

    #[tokio::test]
    async fn test_csv_without_chart_skips_chart_file() {
        let storage = MockStorage::default();
        let exporter = FileExporter::new(storage.clone(), vec![ExportFormat::Csv]);

        let written = exporter.export(&sample_report(false)).await.unwrap();

        assert_eq!(written, vec![PRIMES_FILE]);
        assert!(storage.get_file(CHART_FILE).is_none());
    }
}
