use crate::domain::model::{ChartPoint, CheckReport, PrimeCheckResult, SortOrder};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The three pure operations the presentation layer is allowed to call.
///
/// Implementations must be stateless: calling any method twice with the
/// same arguments yields the same value.
pub trait PrimeService: Send + Sync {
    fn is_prime(&self, n: i64) -> bool;

    fn primes_below(&self, bound: i64, order: SortOrder) -> Vec<i64>;

    fn prime_chart_series(&self, bound: i64) -> Vec<ChartPoint>;

    fn check(&self, n: i64, order: SortOrder, include_chart: bool) -> PrimeCheckResult {
        PrimeCheckResult {
            is_prime: self.is_prime(n),
            lower_primes: self.primes_below(n, order),
            chart_data: include_chart.then(|| self.prime_chart_series(n)),
        }
    }
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn max_digits(&self) -> usize;
    fn order(&self) -> SortOrder;
    fn include_chart(&self) -> bool;
}

#[async_trait]
pub trait Exporter: Send + Sync {
    /// 匯出報告，回傳寫入的檔案路徑
    async fn export(&self, report: &CheckReport) -> Result<Vec<String>>;
}
