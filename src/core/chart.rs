use crate::core::primality::is_prime;
use crate::domain::model::{ChartPoint, SortOrder};

/// 累計質數數量：x 從 2 到 bound（含），y 為 <= x 的質數個數
pub fn prime_chart_series(bound: i64) -> Vec<ChartPoint> {
    (2..=bound)
        .scan(0usize, |count, x| {
            if is_prime(x) {
                *count += 1;
            }
            Some(ChartPoint { x, y: *count })
        })
        .collect()
}

/// Output of a single fused traversal over `2..=bound`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sieve {
    pub bound_is_prime: bool,
    pub primes: Vec<i64>,
    pub chart: Option<Vec<ChartPoint>>,
}

/// Tests every candidate once and fills both the prime list (`< bound`) and,
/// when asked, the chart series (`<= bound`).
pub fn sieve(bound: i64, order: SortOrder, with_chart: bool) -> Sieve {
    let mut primes = Vec::new();
    let mut chart = with_chart.then(Vec::new);
    let mut bound_is_prime = false;
    let mut count = 0usize;

    for x in 2..=bound {
        let prime = is_prime(x);
        if prime {
            count += 1;
            if x < bound {
                primes.push(x);
            } else {
                bound_is_prime = true;
            }
        }
        if let Some(points) = chart.as_mut() {
            points.push(ChartPoint { x, y: count });
        }
    }

    if order == SortOrder::Descending {
        primes.reverse();
    }

    Sieve {
        bound_is_prime,
        primes,
        chart,
    }
}

/// 將序列抽樣成最多 `rows` 個點，保留最後一個點
pub fn sample_series(series: &[ChartPoint], rows: usize) -> Vec<ChartPoint> {
    if rows == 0 || series.is_empty() {
        return Vec::new();
    }
    if series.len() <= rows {
        return series.to_vec();
    }

    let step = series.len().div_ceil(rows);
    let mut sampled: Vec<ChartPoint> = series.iter().step_by(step).copied().collect();
    if let (Some(last), Some(tail)) = (series.last(), sampled.last()) {
        if last.x != tail.x {
            if sampled.len() == rows {
                sampled.pop();
            }
            sampled.push(*last);
        }
    }
    sampled
}
