//! Fulfillment scoring of a subset against the order workload.
//!
//! ## Policy
//!
//! 1. **Pre-filter**: an order requiring more SKUs than the subset holds can
//!    never be fulfilled and is skipped without a containment test.
//! 2. **Containment**: an order counts iff every required SKU is in the
//!    subset. Orders with no requirements always count.
//!
//! For a fixed cardinality `k` every subset has the same size, so
//! [`FulfillmentEvaluator`] applies the pre-filter once per `k` and reuses
//! the surviving candidates for every subset in the family.

use crate::types::{Order, SkuSubset};

/// Count the orders fully contained in `subset`.
///
/// # Example
///
/// ```
/// use sku_coverage::engine::evaluate;
/// use sku_coverage::types::{Order, SkuSubset};
///
/// let orders = vec![Order::new("a", 3, &[0, 1]).unwrap()];
///
/// assert_eq!(evaluate(&SkuSubset::from_bools(&[true, true, false]), &orders), 1);
/// assert_eq!(evaluate(&SkuSubset::from_bools(&[true, false, true]), &orders), 0);
/// ```
pub fn evaluate(subset: &SkuSubset, orders: &[Order]) -> usize {
    orders
        .iter()
        .filter(|order| order.can_be_fulfilled_by(subset))
        .count()
}

/// Evaluator specialized for one subset cardinality.
///
/// Holds borrowed references to the orders that survive the pre-filter;
/// the workload itself is never copied or mutated.
#[derive(Debug, Clone)]
pub struct FulfillmentEvaluator<'a> {
    /// Orders with `required_count <= cardinality`
    candidates: Vec<&'a Order>,

    /// Orders dropped by the pre-filter
    discarded: usize,

    /// Subset cardinality this evaluator was built for
    cardinality: usize,
}

impl<'a> FulfillmentEvaluator<'a> {
    /// Apply the cardinality pre-filter for subsets of size `cardinality`
    pub fn for_cardinality(orders: &'a [Order], cardinality: usize) -> Self {
        let candidates: Vec<&Order> = orders
            .iter()
            .filter(|order| order.required_count() <= cardinality)
            .collect();
        let discarded = orders.len() - candidates.len();
        Self {
            candidates,
            discarded,
            cardinality,
        }
    }

    /// Score one subset
    ///
    /// `subset` must have the cardinality this evaluator was built for.
    #[inline]
    pub fn score(&self, subset: &SkuSubset) -> usize {
        debug_assert_eq!(subset.cardinality(), self.cardinality);
        self.candidates
            .iter()
            .filter(|order| subset.is_superset_of(order.required()))
            .count()
    }

    /// Orders that passed the pre-filter
    #[inline]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Orders dropped because they need more SKUs than `cardinality`
    #[inline]
    pub fn discarded_count(&self) -> usize {
        self.discarded
    }

    /// Cardinality the pre-filter was applied for
    #[inline]
    pub fn cardinality(&self) -> usize {
        self.cardinality
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orders() -> Vec<Order> {
        vec![
            Order::new("empty", 4, &[]).unwrap(),
            Order::new("single", 4, &[2]).unwrap(),
            Order::new("pair", 4, &[0, 1]).unwrap(),
            Order::new("triple", 4, &[0, 1, 3]).unwrap(),
        ]
    }

    #[test]
    fn test_empty_subset_fulfills_only_empty_orders() {
        assert_eq!(evaluate(&SkuSubset::empty(4), &orders()), 1);
    }

    #[test]
    fn test_full_subset_fulfills_everything() {
        assert_eq!(evaluate(&SkuSubset::full(4), &orders()), 4);
    }

    #[test]
    fn test_no_orders() {
        assert_eq!(evaluate(&SkuSubset::full(4), &[]), 0);
    }

    #[test]
    fn test_prefilter_counts() {
        let orders = orders();
        let evaluator = FulfillmentEvaluator::for_cardinality(&orders, 2);
        assert_eq!(evaluator.cardinality(), 2);
        assert_eq!(evaluator.candidate_count(), 3);
        assert_eq!(evaluator.discarded_count(), 1);

        let evaluator = FulfillmentEvaluator::for_cardinality(&orders, 0);
        assert_eq!(evaluator.candidate_count(), 1);
        assert_eq!(evaluator.discarded_count(), 3);
    }

    #[test]
    fn test_order_with_exact_cardinality_is_kept() {
        let orders = vec![Order::new("pair", 3, &[0, 1]).unwrap()];
        let evaluator = FulfillmentEvaluator::for_cardinality(&orders, 2);
        assert_eq!(evaluator.discarded_count(), 0);
        assert_eq!(evaluator.score(&SkuSubset::from_bools(&[true, true, false])), 1);
    }

    #[test]
    fn test_evaluator_matches_free_function() {
        let orders = orders();
        let subsets = [
            SkuSubset::from_indices(4, &[0, 1]).unwrap(),
            SkuSubset::from_indices(4, &[1, 2]).unwrap(),
            SkuSubset::from_indices(4, &[2, 3]).unwrap(),
        ];
        let evaluator = FulfillmentEvaluator::for_cardinality(&orders, 2);
        for subset in &subsets {
            assert_eq!(evaluator.score(subset), evaluate(subset, &orders));
        }
    }
}
