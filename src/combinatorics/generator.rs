//! Exhaustive `k`-of-`M` subset generation.
//!
//! ## Algorithm
//!
//! Recursive choose-without-replacement over positions `0..M-1`. At depth `d`
//! the call sets each position `x >= first` in a working vector and recurses
//! with `first = x + 1`; at depth `k - 1` the vector is emitted. Positions are
//! chosen in strictly increasing order, so each combination is produced once.
//!
//! Branches that cannot place the remaining ones are never entered: at depth
//! `d` the largest usable position leaves `k - d - 1` slots to its right.
//!
//! ## Post-conditions
//!
//! After generation the family is checked for value-uniqueness, per-vector
//! cardinality and total size `C(M, k)`. A failure here is a defect in this
//! module and panics.

use std::collections::HashSet;

use crate::combinatorics::binomial::family_size;
use crate::error::{Result, SimulationError};
use crate::types::SkuSubset;

/// Upper bound on the up-front reservation; larger families grow as they fill.
const MAX_RESERVED_SUBSETS: usize = 1 << 16;

/// Generate every subset of exactly `k` positions out of `m`.
///
/// # Arguments
///
/// * `k` - Number of selected SKUs
/// * `m` - Catalog size
///
/// # Errors
///
/// * `SubsetTooLarge` if `k > m`
/// * `FamilyTooLarge` if `C(m, k)` subsets cannot be indexed or addressed
///
/// # Panics
///
/// If the generated family violates uniqueness or size post-conditions.
///
/// # Example
///
/// ```
/// use sku_coverage::combinatorics::generate;
///
/// let family = generate(2, 3).unwrap();
/// let bits: Vec<String> = family.iter().map(|s| s.to_bit_string()).collect();
/// assert_eq!(bits, vec!["110", "101", "011"]);
/// ```
pub fn generate(k: usize, m: usize) -> Result<Vec<SkuSubset>> {
    let expected = check_request(k, m)?;

    let mut family = Vec::with_capacity(expected.min(MAX_RESERVED_SUBSETS));
    if k == 0 {
        family.push(SkuSubset::empty(m));
    } else {
        let mut working = SkuSubset::empty(m);
        choose(0, 0, k, m, &mut working, &mut family);
    }

    verify_family(&family, k, m, expected);
    Ok(family)
}

/// Validate `k <= m` and return the family size.
///
/// The whole family must also fit in a single allocation, so counts that fit
/// in `usize` can still be rejected.
pub(crate) fn check_request(k: usize, m: usize) -> Result<usize> {
    if k > m {
        return Err(SimulationError::SubsetTooLarge { k, m });
    }
    let expected = family_size(m, k).ok_or(SimulationError::FamilyTooLarge { k, m })?;
    match expected.checked_mul(SkuSubset::footprint(m)) {
        Some(bytes) if bytes <= isize::MAX as usize => Ok(expected),
        _ => Err(SimulationError::FamilyTooLarge { k, m }),
    }
}

fn choose(
    first: usize,
    depth: usize,
    k: usize,
    m: usize,
    working: &mut SkuSubset,
    out: &mut Vec<SkuSubset>,
) {
    // Leave room for the k - depth - 1 ones still to place
    let end = m - (k - depth - 1);
    for x in first..end {
        working.insert(x);
        if depth + 1 == k {
            out.push(working.clone());
        } else {
            choose(x + 1, depth + 1, k, m, working, out);
        }
        working.remove(x);
    }
}

/// Check the generated family against its contract, panicking on violation.
pub(crate) fn verify_family(family: &[SkuSubset], k: usize, m: usize, expected: usize) {
    assert_eq!(
        family.len(),
        expected,
        "generated {} subsets for C({m}, {k}), expected {expected}",
        family.len()
    );

    let mut seen = HashSet::with_capacity(family.len());
    for subset in family {
        assert!(
            subset.len() == m && subset.cardinality() == k && subset.count_ones() == k,
            "generated subset {} does not select exactly {k} of {m} SKUs",
            subset.to_bit_string()
        );
        assert!(
            seen.insert(subset),
            "duplicate subset {} generated for C({m}, {k})",
            subset.to_bit_string()
        );
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinatorics::binomial;

    fn bit_strings(family: &[SkuSubset]) -> Vec<String> {
        family.iter().map(SkuSubset::to_bit_string).collect()
    }

    #[test]
    fn test_k_zero_yields_single_empty_vector() {
        let family = generate(0, 4).unwrap();
        assert_eq!(bit_strings(&family), vec!["0000"]);
    }

    #[test]
    fn test_k_equals_m_yields_single_full_vector() {
        let family = generate(4, 4).unwrap();
        assert_eq!(bit_strings(&family), vec!["1111"]);
    }

    #[test]
    fn test_empty_catalog() {
        let family = generate(0, 0).unwrap();
        assert_eq!(family.len(), 1);
        assert!(family[0].is_empty());
    }

    #[test]
    fn test_three_choose_two() {
        let family = generate(2, 3).unwrap();
        assert_eq!(bit_strings(&family), vec!["110", "101", "011"]);
    }

    #[test]
    fn test_k_greater_than_m_rejected() {
        assert_eq!(
            generate(4, 3).unwrap_err(),
            SimulationError::SubsetTooLarge { k: 4, m: 3 }
        );
    }

    #[test]
    fn test_family_sizes_match_binomial() {
        for m in 0..=10 {
            for k in 0..=m {
                let family = generate(k, m).unwrap();
                assert_eq!(family.len() as u128, binomial(m, k).unwrap());
            }
        }
    }

    #[test]
    fn test_crosses_word_boundary() {
        let family = generate(1, 65).unwrap();
        assert_eq!(family.len(), 65);
        assert!(family[64].contains(64));
    }

    #[test]
    fn test_oversized_family_rejected() {
        assert_eq!(
            check_request(100, 200).unwrap_err(),
            SimulationError::FamilyTooLarge { k: 100, m: 200 }
        );
    }

    #[test]
    fn test_unaddressable_family_rejected() {
        // C(64, 32) fits in usize but not in memory
        assert!(binomial(64, 32).unwrap() <= usize::MAX as u128);
        assert_eq!(
            generate(32, 64).unwrap_err(),
            SimulationError::FamilyTooLarge { k: 32, m: 64 }
        );
    }

    #[test]
    fn test_large_catalog_small_k_accepted() {
        assert_eq!(check_request(2, 64).unwrap(), 2016);
        assert_eq!(generate(1, 200).unwrap().len(), 200);
    }

    #[test]
    #[should_panic(expected = "duplicate subset")]
    fn test_verify_detects_duplicates() {
        let family = vec![
            SkuSubset::from_bools(&[true, false]),
            SkuSubset::from_bools(&[true, false]),
        ];
        verify_family(&family, 1, 2, 2);
    }

    #[test]
    #[should_panic(expected = "expected 2")]
    fn test_verify_detects_wrong_count() {
        let family = vec![SkuSubset::from_bools(&[true, false])];
        verify_family(&family, 1, 2, 2);
    }

    #[test]
    #[should_panic(expected = "does not select exactly")]
    fn test_verify_detects_wrong_cardinality() {
        let family = vec![SkuSubset::from_bools(&[true, true])];
        verify_family(&family, 1, 2, 1);
    }
}
