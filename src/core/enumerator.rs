use crate::core::primality::is_prime;
use crate::domain::model::SortOrder;
use std::iter::Filter;
use std::ops::Range;

type Candidates = Filter<Range<i64>, fn(&i64) -> bool>;

fn is_prime_candidate(n: &i64) -> bool {
    is_prime(*n)
}

/// Lazy sequence of the primes strictly below `bound`.
///
/// The value holds no iteration state, so it can be iterated any number of
/// times and always starts again from 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimesBelow {
    bound: i64,
}

impl PrimesBelow {
    pub fn new(bound: i64) -> Self {
        Self { bound }
    }

    pub fn bound(&self) -> i64 {
        self.bound
    }

    /// 遞增順序
    pub fn iter(&self) -> Candidates {
        // bound <= 2 時 2..bound 為空區間
        (2..self.bound).filter(is_prime_candidate as fn(&i64) -> bool)
    }

    /// 遞減順序，從 bound - 1 往下找
    pub fn descending(&self) -> std::iter::Rev<Candidates> {
        self.iter().rev()
    }

    pub fn collect_ordered(&self, order: SortOrder) -> Vec<i64> {
        match order {
            SortOrder::Ascending => self.iter().collect(),
            SortOrder::Descending => self.descending().collect(),
        }
    }
}

impl IntoIterator for PrimesBelow {
    type Item = i64;
    type IntoIter = Candidates;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &PrimesBelow {
    type Item = i64;
    type IntoIter = Candidates;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub fn primes_below(bound: i64, order: SortOrder) -> Vec<i64> {
    PrimesBelow::new(bound).collect_ordered(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primes_below_ten() {
        assert_eq!(primes_below(10, SortOrder::Ascending), vec![2, 3, 5, 7]);
        assert_eq!(primes_below(10, SortOrder::Descending), vec![7, 5, 3, 2]);
    }

    #[test]
    fn test_bound_is_exclusive() {
        assert_eq!(primes_below(7, SortOrder::Ascending), vec![2, 3, 5]);
        assert_eq!(primes_below(3, SortOrder::Ascending), vec![2]);
    }

    #[test]
    fn test_small_and_negative_bounds_are_empty() {
        for bound in [i64::MIN, -5, 0, 1, 2] {
            assert!(primes_below(bound, SortOrder::Ascending).is_empty());
            assert!(primes_below(bound, SortOrder::Descending).is_empty());
        }
    }

    #[test]
    fn test_sequence_is_restartable() {
        let primes = PrimesBelow::new(30);
        let first: Vec<i64> = primes.into_iter().collect();
        let second: Vec<i64> = (&primes).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(primes.iter().count(), 10);
        assert_eq!(primes.descending().next(), Some(29));
    }
}
