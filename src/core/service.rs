use crate::core::{chart, enumerator, primality};
use crate::domain::model::{ChartPoint, PrimeCheckResult, SortOrder};
use crate::domain::ports::PrimeService;

/// Trial-division implementation of [`PrimeService`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TrialDivision;

impl TrialDivision {
    pub fn new() -> Self {
        Self
    }
}

impl PrimeService for TrialDivision {
    fn is_prime(&self, n: i64) -> bool {
        primality::is_prime(n)
    }

    fn primes_below(&self, bound: i64, order: SortOrder) -> Vec<i64> {
        enumerator::primes_below(bound, order)
    }

    fn prime_chart_series(&self, bound: i64) -> Vec<ChartPoint> {
        chart::prime_chart_series(bound)
    }

    // 一次走訪同時算出三個欄位
    fn check(&self, n: i64, order: SortOrder, include_chart: bool) -> PrimeCheckResult {
        let sieve = chart::sieve(n, order, include_chart);
        PrimeCheckResult {
            is_prime: sieve.bound_is_prime,
            lower_primes: sieve.primes,
            chart_data: sieve.chart,
        }
    }
}
