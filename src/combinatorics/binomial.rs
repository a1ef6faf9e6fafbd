//! Exact binomial coefficients.
//!
//! Uses the multiplicative form `C(n, k) = prod_{i=1..k} (n - k + i) / i`,
//! which keeps every intermediate value an exact integer, with checked
//! arithmetic so overflow is reported instead of wrapping.

/// Compute `C(n, k)` exactly.
///
/// # Returns
///
/// * `Some(0)` when `k > n`
/// * `Some(c)` when the coefficient fits in `u128`
/// * `None` on overflow
///
/// # Example
///
/// ```
/// use sku_coverage::combinatorics::binomial;
///
/// assert_eq!(binomial(3, 2), Some(3));
/// assert_eq!(binomial(10, 0), Some(1));
/// assert_eq!(binomial(2, 5), Some(0));
/// ```
pub fn binomial(n: usize, k: usize) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 1..=k as u128 {
        let factor = n as u128 - k as u128 + i;
        // result * factor is divisible by i at every step
        result = result.checked_mul(factor)? / i;
    }
    Some(result)
}

/// `C(n, k)` as a `usize` family size, or `None` if it cannot be indexed
pub fn family_size(n: usize, k: usize) -> Option<usize> {
    binomial(n, k).and_then(|c| usize::try_from(c).ok())
}
