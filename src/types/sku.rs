//! SKUs and the catalog that assigns their internal indices.
//!
//! ## Identifiers
//!
//! - [`SkuNumber`]: the external, human-meaningful product number
//! - [`InternalSkuIndex`]: dense `0..M-1` position used in bit vectors
//!
//! Only internal indices appear on the hot path. External numbers are
//! recovered through the catalog when results are reported.

use std::collections::HashMap;

use crate::error::{Result, SimulationError};
use crate::types::SkuSubset;

/// External SKU number as known to the warehouse
pub type SkuNumber = u64;

/// Dense internal position of a SKU, `0..M-1`
pub type InternalSkuIndex = usize;

/// A product variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sku {
    /// External SKU number
    pub number: SkuNumber,

    /// Display name
    pub name: String,

    /// Internal index, assigned once at load time
    pub index: InternalSkuIndex,
}

impl Sku {
    /// Create a new SKU
    pub fn new(number: SkuNumber, name: impl Into<String>, index: InternalSkuIndex) -> Self {
        Self {
            number,
            name: name.into(),
            index,
        }
    }
}

/// The full SKU universe, ordered by internal index.
///
/// ## Invariants
///
/// - `skus[i].index == i` for every position (dense, no gaps)
/// - external SKU numbers are unique
///
/// ## Example
///
/// ```
/// use sku_coverage::types::{SkuCatalog, SkuSubset};
///
/// let catalog = SkuCatalog::from_listing(vec![
///     (1001, "red shirt".to_string()),
///     (1002, "blue shirt".to_string()),
///     (1003, "green shirt".to_string()),
/// ]).unwrap();
///
/// let subset = SkuSubset::from_indices(3, &[0, 2]).unwrap();
/// assert_eq!(catalog.sku_numbers(&subset), vec![1001, 1003]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SkuCatalog {
    skus: Vec<Sku>,
    by_number: HashMap<SkuNumber, InternalSkuIndex>,
}

impl SkuCatalog {
    /// Build a catalog from SKUs that already carry internal indices.
    ///
    /// # Errors
    ///
    /// - `NonDenseSkuIndex` if any SKU's index differs from its position
    /// - `DuplicateSkuNumber` if two SKUs share an external number
    pub fn new(skus: Vec<Sku>) -> Result<Self> {
        let mut by_number = HashMap::with_capacity(skus.len());
        for (position, sku) in skus.iter().enumerate() {
            if sku.index != position {
                return Err(SimulationError::NonDenseSkuIndex {
                    position,
                    index: sku.index,
                });
            }
            if by_number.insert(sku.number, position).is_some() {
                return Err(SimulationError::DuplicateSkuNumber(sku.number));
            }
        }
        Ok(Self { skus, by_number })
    }

    /// Build a catalog from `(number, name)` pairs, assigning indices in
    /// listing order.
    pub fn from_listing(listing: Vec<(SkuNumber, String)>) -> Result<Self> {
        let skus = listing
            .into_iter()
            .enumerate()
            .map(|(index, (number, name))| Sku::new(number, name, index))
            .collect();
        Self::new(skus)
    }

    /// Catalog size `M`
    #[inline]
    pub fn len(&self) -> usize {
        self.skus.len()
    }

    /// True if the catalog holds no SKUs
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.skus.is_empty()
    }

    /// All SKUs in index order
    #[inline]
    pub fn skus(&self) -> &[Sku] {
        &self.skus
    }

    /// Look up a SKU by internal index
    #[inline]
    pub fn get(&self, index: InternalSkuIndex) -> Option<&Sku> {
        self.skus.get(index)
    }

    /// Resolve an external number to its internal index
    #[inline]
    pub fn index_of(&self, number: SkuNumber) -> Option<InternalSkuIndex> {
        self.by_number.get(&number).copied()
    }

    /// Map the set positions of `subset` back to external SKU numbers,
    /// in increasing index order.
    ///
    /// Positions beyond the catalog are skipped; subsets are always built
    /// against the same catalog so this never drops anything in practice.
    pub fn sku_numbers(&self, subset: &SkuSubset) -> Vec<SkuNumber> {
        subset
            .indices()
            .filter_map(|index| self.skus.get(index).map(|sku| sku.number))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> Vec<(SkuNumber, String)> {
        vec![
            (500, "mug".to_string()),
            (200, "plate".to_string()),
            (900, "bowl".to_string()),
        ]
    }

    #[test]
    fn test_from_listing_assigns_dense_indices() {
        let catalog = SkuCatalog::from_listing(listing()).unwrap();

        assert_eq!(catalog.len(), 3);
        for (position, sku) in catalog.skus().iter().enumerate() {
            assert_eq!(sku.index, position);
        }
        assert_eq!(catalog.index_of(900), Some(2));
        assert_eq!(catalog.index_of(1), None);
        assert_eq!(catalog.get(1).unwrap().name, "plate");
    }

    #[test]
    fn test_rejects_gap_in_indices() {
        let skus = vec![Sku::new(1, "a", 0), Sku::new(2, "b", 2)];
        let err = SkuCatalog::new(skus).unwrap_err();
        assert_eq!(
            err,
            SimulationError::NonDenseSkuIndex {
                position: 1,
                index: 2
            }
        );
    }

    #[test]
    fn test_rejects_duplicate_numbers() {
        let skus = vec![Sku::new(7, "a", 0), Sku::new(7, "b", 1)];
        assert_eq!(
            SkuCatalog::new(skus).unwrap_err(),
            SimulationError::DuplicateSkuNumber(7)
        );
    }

    #[test]
    fn test_sku_numbers_follow_index_order() {
        let catalog = SkuCatalog::from_listing(listing()).unwrap();
        let subset = SkuSubset::from_indices(3, &[2, 0]).unwrap();
        assert_eq!(catalog.sku_numbers(&subset), vec![500, 900]);
        assert!(catalog.sku_numbers(&SkuSubset::empty(3)).is_empty());
    }
}
