//! Best-result selection with tie tracking.
//!
//! ## Scan
//!
//! A single pass keeps a running maximum and the list of results tied for
//! it. A strictly greater score resets the list; an equal score appends.
//! The outcome does not depend on input order beyond the order of ties.
//!
//! ## Merging
//!
//! [`BestTracker::merge`] combines two partial scans. It is associative and
//! keeps the left operand's ties before the right's, so a parallel reduction
//! over contiguous batches yields the same tie list as a sequential scan.

use crate::error::{Result, SimulationError};
use crate::types::{BestResultSet, SimulationResult, SkuSubset};

/// Running maximum and tie list for one cardinality.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BestTracker {
    best: Option<usize>,
    ties: Vec<SimulationResult>,
    observed: usize,
}

impl BestTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one result into the scan
    pub fn observe(&mut self, result: SimulationResult) {
        self.observed += 1;
        match self.best {
            Some(best) if result.fulfillable_orders < best => {}
            Some(best) if result.fulfillable_orders == best => self.ties.push(result),
            _ => {
                self.best = Some(result.fulfillable_orders);
                self.ties.clear();
                self.ties.push(result);
            }
        }
    }

    /// Fold a scored subset in, cloning it only if it joins the tie list
    #[inline]
    pub fn offer(&mut self, fulfillable_orders: usize, skus: &SkuSubset) {
        if self.best.is_some_and(|best| fulfillable_orders < best) {
            self.observed += 1;
            return;
        }
        self.observe(SimulationResult::new(fulfillable_orders, skus.clone()));
    }

    /// Combine with a tracker that scanned later input
    pub fn merge(mut self, other: BestTracker) -> BestTracker {
        self.observed += other.observed;
        match (self.best, other.best) {
            (_, None) => self,
            (None, Some(_)) => BestTracker {
                observed: self.observed,
                ..other
            },
            (Some(mine), Some(theirs)) if theirs > mine => BestTracker {
                observed: self.observed,
                ..other
            },
            (Some(mine), Some(theirs)) if theirs == mine => {
                self.ties.extend(other.ties);
                self
            }
            _ => self,
        }
    }

    /// Current maximum, if any result was observed
    #[inline]
    pub fn best_score(&self) -> Option<usize> {
        self.best
    }

    /// Number of results folded in so far
    #[inline]
    pub fn observed(&self) -> usize {
        self.observed
    }

    /// Finish the scan for cardinality `k`.
    ///
    /// # Errors
    ///
    /// `EmptyResultFamily` if nothing was observed.
    ///
    /// # Panics
    ///
    /// If the tie list holds differing scores.
    pub fn finish(self, k: usize) -> Result<BestResultSet> {
        let first = match self.ties.first() {
            Some(first) => first.fulfillable_orders,
            None => return Err(SimulationError::EmptyResultFamily { k }),
        };
        if let Some(bad) = self
            .ties
            .iter()
            .find(|result| result.fulfillable_orders != first)
        {
            panic!(
                "bad tie tracking for k = {k}: {} tied with {first}",
                bad.fulfillable_orders
            );
        }
        Ok(BestResultSet::from_checked(self.ties))
    }
}

/// Select every result tied for the maximal score.
///
/// # Arguments
///
/// * `k` - Cardinality the results belong to (for diagnostics)
/// * `results` - Scored subsets in evaluation order
///
/// # Errors
///
/// `EmptyResultFamily` if `results` is empty. Callers iterating `0..=M`
/// never hit this because every such `k` has at least one subset.
///
/// # Example
///
/// ```
/// use sku_coverage::engine::select_best;
/// use sku_coverage::types::{SimulationResult, SkuSubset};
///
/// let results = vec![
///     SimulationResult::new(1, SkuSubset::from_bools(&[true, false])),
///     SimulationResult::new(1, SkuSubset::from_bools(&[false, true])),
/// ];
/// let best = select_best(1, results).unwrap();
/// assert_eq!(best.fulfillable_orders(), 1);
/// assert_eq!(best.len(), 2);
/// ```
pub fn select_best<I>(k: usize, results: I) -> Result<BestResultSet>
where
    I: IntoIterator<Item = SimulationResult>,
{
    let mut tracker = BestTracker::new();
    for result in results {
        tracker.observe(result);
    }
    tracker.finish(k)
}
