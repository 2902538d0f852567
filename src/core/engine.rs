use crate::core::{ConfigProvider, Exporter, PrimeService};
use crate::domain::model::CheckReport;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use crate::utils::validation::parse_bound;

/// Validates raw input, runs the prime service and hands the report to an
/// exporter.
pub struct CheckEngine<P: PrimeService, C: ConfigProvider> {
    service: P,
    config: C,
    monitor: SystemMonitor,
}

impl<P: PrimeService, C: ConfigProvider> CheckEngine<P, C> {
    pub fn new(service: P, config: C) -> Self {
        Self::new_with_monitoring(service, config, false)
    }

    pub fn new_with_monitoring(service: P, config: C, monitor_enabled: bool) -> Self {
        Self {
            service,
            config,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn service(&self) -> &P {
        &self.service
    }

    /// 驗證輸入並計算結果
    pub fn evaluate(&self, input: &str) -> Result<CheckReport> {
        let bound = parse_bound(input, self.config.max_digits())?;
        Ok(self.evaluate_bound(bound))
    }

    pub fn evaluate_bound(&self, bound: i64) -> CheckReport {
        let order = self.config.order();
        let include_chart = self.config.include_chart();

        tracing::debug!(
            "Checking {} (order: {}, chart: {})",
            bound,
            order,
            include_chart
        );
        self.monitor.log_stats("Before check");

        let result = self.service.check(bound, order, include_chart);

        self.monitor.log_stats("After check");
        tracing::info!(
            "🔢 {} is {}prime, {} primes below it",
            bound,
            if result.is_prime { "" } else { "not " },
            result.lower_primes.len()
        );

        CheckReport::new(bound, order, result)
    }

    pub async fn run<E: Exporter + ?Sized>(
        &self,
        input: &str,
        exporter: &E,
    ) -> Result<(CheckReport, Vec<String>)> {
        let report = self.evaluate(input)?;

        let written = exporter.export(&report).await?;
        for path in &written {
            tracing::info!("📁 Report saved to: {}", path);
        }

        Ok((report, written))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::service::TrialDivision;
    use crate::domain::model::SortOrder;
    use crate::utils::error::PrimeError;
    use std::sync::Mutex;

    struct FixedConfig {
        order: SortOrder,
        chart: bool,
    }

    impl ConfigProvider for FixedConfig {
        fn max_digits(&self) -> usize {
            5
        }

        fn order(&self) -> SortOrder {
            self.order
        }

        fn include_chart(&self) -> bool {
            self.chart
        }
    }

    #[derive(Default)]
    struct RecordingExporter {
        inputs: Mutex<Vec<i64>>,
    }

    #[async_trait::async_trait]
    impl Exporter for RecordingExporter {
        async fn export(&self, report: &CheckReport) -> Result<Vec<String>> {
            self.inputs.lock().unwrap().push(report.input);
            Ok(vec![format!("memory://{}", report.input)])
        }
    }

    #[test]
    fn test_evaluate_uses_configured_order() {
        let engine = CheckEngine::new(
            TrialDivision,
            FixedConfig {
                order: SortOrder::Descending,
                chart: true,
            },
        );

        let report = engine.evaluate("10").unwrap();
        assert_eq!(report.input, 10);
        assert!(!report.result.is_prime);
        assert_eq!(report.result.lower_primes, vec![7, 5, 3, 2]);
        assert_eq!(report.result.chart_data.as_ref().map(Vec::len), Some(9));
    }

    #[test]
    fn test_evaluate_rejects_bad_input_before_computing() {
        let engine = CheckEngine::new(
            TrialDivision,
            FixedConfig {
                order: SortOrder::Ascending,
                chart: false,
            },
        );

        assert!(matches!(
            engine.evaluate("9x"),
            Err(PrimeError::InvalidInput { .. })
        ));
        assert!(matches!(
            engine.evaluate("123456"),
            Err(PrimeError::InputTooLong { .. })
        ));
    }

    #[tokio::test]
    async fn test_run_exports_report() {
        let engine = CheckEngine::new(
            TrialDivision,
            FixedConfig {
                order: SortOrder::Ascending,
                chart: false,
            },
        );
        let exporter = RecordingExporter::default();

        let (report, written) = engine.run("97", &exporter).await.unwrap();

        assert!(report.result.is_prime);
        assert_eq!(written, vec!["memory://97".to_string()]);
        assert_eq!(*exporter.inputs.lock().unwrap(), vec![97]);
    }
}
