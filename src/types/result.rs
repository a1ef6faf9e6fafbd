//! Per-subset scores and the winners kept for each cardinality.

use crate::types::SkuSubset;

/// Score of one subset against the order workload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimulationResult {
    /// Number of orders fully contained in `skus`
    pub fulfillable_orders: usize,

    /// The evaluated subset
    pub skus: SkuSubset,
}

impl SimulationResult {
    /// Create a new result
    pub fn new(fulfillable_orders: usize, skus: SkuSubset) -> Self {
        Self {
            fulfillable_orders,
            skus,
        }
    }
}

/// All results tied for the maximal score at one cardinality.
///
/// ## Invariants
///
/// - non-empty
/// - every element shares the same `fulfillable_orders`
///
/// Only the selector builds one, so the invariants hold for every value a
/// caller can observe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestResultSet {
    results: Vec<SimulationResult>,
}

impl BestResultSet {
    /// Wrap a tie list that the selector has already checked
    pub(crate) fn from_checked(results: Vec<SimulationResult>) -> Self {
        debug_assert!(!results.is_empty());
        Self { results }
    }

    /// The shared maximal score
    #[inline]
    pub fn fulfillable_orders(&self) -> usize {
        self.results[0].fulfillable_orders
    }

    /// Tied winners in evaluation order
    #[inline]
    pub fn results(&self) -> &[SimulationResult] {
        &self.results
    }

    /// Number of tied winners
    #[inline]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Iterate over the winning subsets
    pub fn subsets(&self) -> impl Iterator<Item = &SkuSubset> {
        self.results.iter().map(|result| &result.skus)
    }

    /// Consume into the underlying tie list
    pub fn into_results(self) -> Vec<SimulationResult> {
        self.results
    }
}
