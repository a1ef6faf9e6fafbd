//! Customer orders expressed as SKU requirement sets.
//!
//! An order is fulfillable by a subset of stocked SKUs iff every SKU it
//! requires is in that subset. The requirement count is precomputed so the
//! evaluator can discard orders that need more SKUs than are stocked without
//! running the containment test.

use crate::error::Result;
use crate::types::{InternalSkuIndex, SkuSubset};

/// A customer order.
///
/// ## Example
///
/// ```
/// use sku_coverage::types::{Order, SkuSubset};
///
/// // Catalog of 3 SKUs; the order needs SKUs 0 and 1
/// let order = Order::new("A-1", 3, &[0, 1]).unwrap();
/// assert_eq!(order.required_count(), 2);
///
/// let stocked = SkuSubset::from_indices(3, &[0, 1]).unwrap();
/// assert!(order.can_be_fulfilled_by(&stocked));
///
/// let stocked = SkuSubset::from_indices(3, &[0, 2]).unwrap();
/// assert!(!order.can_be_fulfilled_by(&stocked));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    /// Stable order identifier
    id: String,

    /// Required SKUs over the catalog universe
    required: SkuSubset,

    /// `required.cardinality()`, kept alongside for the pre-filter
    required_count: usize,
}

impl Order {
    /// Create an order over a catalog of `catalog_size` SKUs.
    ///
    /// Repeated indices count once.
    ///
    /// # Errors
    ///
    /// `SkuIndexOutOfRange` if any index is outside `0..catalog_size`.
    pub fn new(
        id: impl Into<String>,
        catalog_size: usize,
        required: &[InternalSkuIndex],
    ) -> Result<Self> {
        let required = SkuSubset::from_indices(catalog_size, required)?;
        Ok(Self::from_subset(id, required))
    }

    /// Create an order from an already-built requirement vector
    pub fn from_subset(id: impl Into<String>, required: SkuSubset) -> Self {
        let required_count = required.cardinality();
        Self {
            id: id.into(),
            required,
            required_count,
        }
    }

    /// Order identifier
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Required SKUs as a bit vector
    #[inline]
    pub fn required(&self) -> &SkuSubset {
        &self.required
    }

    /// Number of distinct SKUs the order requires
    #[inline]
    pub fn required_count(&self) -> usize {
        self.required_count
    }

    /// Required internal indices in increasing order
    pub fn required_indices(&self) -> Vec<InternalSkuIndex> {
        self.required.indices().collect()
    }

    /// Check whether every required SKU is in `stocked`.
    ///
    /// An order with no requirements is fulfillable by any subset, the empty
    /// one included.
    #[inline]
    pub fn can_be_fulfilled_by(&self, stocked: &SkuSubset) -> bool {
        if self.required_count > stocked.cardinality() {
            return false;
        }
        stocked.is_superset_of(&self.required)
    }
}
