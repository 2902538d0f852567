/// Exact `floor(sqrt(n))` for non-negative `n`; negative input yields 0.
///
/// The float estimate is corrected in both directions so perfect squares
/// such as 4, 9 and 25 never lose their root to rounding.
pub fn floor_sqrt(n: i64) -> i64 {
    if n < 2 {
        return n.max(0);
    }

    let mut root = (n as f64).sqrt() as i64;
    while root > 0 && root.checked_mul(root).map_or(true, |square| square > n) {
        root -= 1;
    }
    while (root + 1)
        .checked_mul(root + 1)
        .is_some_and(|square| square <= n)
    {
        root += 1;
    }
    root
}

/// 試除法判斷質數：n <= 1 一律不是質數
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    (2..=floor_sqrt(n)).all(|divisor| n % divisor != 0)
}
