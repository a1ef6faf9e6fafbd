//! Orchestration of the exhaustive search over every cardinality.
//!
//! ## Flow
//!
//! For each `k` in `0..=M` (or up to the configured cap):
//!
//! 1. generate the `C(M, k)` subset family
//! 2. pre-filter orders by requirement count and score every subset
//! 3. reduce the scores to the maximal-score tie list
//!
//! Only the per-`k` summaries outlive an iteration.
//!
//! ## Parallel Mode
//!
//! The family is split into contiguous batches. Each rayon worker folds its
//! batch into a local [`BestTracker`]; the trackers are merged in batch order,
//! so ties come out exactly as a sequential scan would report them.
//!
//! ## Cancellation
//!
//! A [`CancellationToken`] is checked between cardinalities and between
//! batches. A single subset is never interrupted.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rayon::prelude::*;
use rayon::ThreadPool;

use crate::combinatorics::generate;
use crate::engine::config::{ExecutionMode, SimulatorConfig};
use crate::engine::evaluator::FulfillmentEvaluator;
use crate::engine::selector::BestTracker;
use crate::error::{Result, SimulationError};
use crate::types::{BestResultSet, Order, SkuCatalog, SkuSubset};

// ============================================================================
// Cancellation
// ============================================================================

/// Shared flag that stops a run at the next batch boundary.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    /// Create a token that is not cancelled
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Check whether cancellation was requested
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

// ============================================================================
// Outcome types
// ============================================================================

/// Winners and bookkeeping for one cardinality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardinalitySummary {
    /// Number of stocked SKUs `k`
    pub sku_count: usize,

    /// Subsets tied for the maximal fulfillable-order count
    pub best: BestResultSet,

    /// `C(M, k)`
    pub subsets_evaluated: usize,

    /// Orders skipped because they need more than `k` SKUs
    pub orders_discarded: usize,
}

impl CardinalitySummary {
    /// Winning fulfillable-order count
    #[inline]
    pub fn fulfillable_orders(&self) -> usize {
        self.best.fulfillable_orders()
    }
}

/// Per-cardinality winners for a whole run, indexed by `k`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationOutcome {
    catalog_size: usize,
    order_count: usize,
    summaries: Vec<CardinalitySummary>,
}

impl SimulationOutcome {
    /// Catalog size `M` the run was performed over
    #[inline]
    pub fn catalog_size(&self) -> usize {
        self.catalog_size
    }

    /// Number of orders in the workload
    #[inline]
    pub fn order_count(&self) -> usize {
        self.order_count
    }

    /// Summaries in increasing `k`
    #[inline]
    pub fn summaries(&self) -> &[CardinalitySummary] {
        &self.summaries
    }

    /// Summary for cardinality `k`
    #[inline]
    pub fn get(&self, k: usize) -> Option<&CardinalitySummary> {
        self.summaries.get(k)
    }

    /// Consume into the summaries
    pub fn into_summaries(self) -> Vec<CardinalitySummary> {
        self.summaries
    }
}

// ============================================================================
// Simulator
// ============================================================================

/// Drives generate → evaluate → select for every cardinality.
///
/// ## Example
///
/// ```
/// use sku_coverage::engine::{Simulator, SimulatorConfig};
/// use sku_coverage::types::{Order, SkuCatalog};
///
/// let catalog = SkuCatalog::from_listing(vec![
///     (10, "a".to_string()),
///     (20, "b".to_string()),
/// ]).unwrap();
/// let orders = vec![
///     Order::new("o1", 2, &[0]).unwrap(),
///     Order::new("o2", 2, &[1]).unwrap(),
/// ];
///
/// let simulator = Simulator::new(SimulatorConfig::default()).unwrap();
/// let outcome = simulator.run(&catalog, &orders).unwrap();
///
/// assert_eq!(outcome.summaries().len(), 3);
/// assert_eq!(outcome.get(1).unwrap().fulfillable_orders(), 1);
/// assert_eq!(outcome.get(1).unwrap().best.len(), 2);
/// assert_eq!(outcome.get(2).unwrap().fulfillable_orders(), 2);
/// ```
pub struct Simulator {
    config: SimulatorConfig,
    pool: Option<ThreadPool>,
    cancel: Option<CancellationToken>,
}

impl std::fmt::Debug for Simulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulator")
            .field("config", &self.config)
            .field("workers", &self.pool.as_ref().map(ThreadPool::current_num_threads))
            .field("cancel", &self.cancel)
            .finish()
    }
}

impl Simulator {
    /// Create a simulator, building the worker pool for parallel mode.
    ///
    /// # Errors
    ///
    /// * `InvalidConfig` if the configuration fails validation
    /// * `WorkerPool` if rayon cannot spawn the pool
    pub fn new(config: SimulatorConfig) -> Result<Self> {
        config.validate()?;

        let pool = match config.execution {
            ExecutionMode::Sequential => None,
            ExecutionMode::Parallel { workers } => {
                let mut builder = rayon::ThreadPoolBuilder::new()
                    .thread_name(|index| format!("sku-coverage-{index}"));
                if let Some(workers) = workers {
                    builder = builder.num_threads(workers);
                }
                Some(
                    builder
                        .build()
                        .map_err(|e| SimulationError::WorkerPool(e.to_string()))?,
                )
            }
        };

        Ok(Self {
            config,
            pool,
            cancel: None,
        })
    }

    /// Attach a cancellation token
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Active configuration
    #[inline]
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Run every cardinality from 0 to the catalog size (or the cap).
    pub fn run(&self, catalog: &SkuCatalog, orders: &[Order]) -> Result<SimulationOutcome> {
        self.run_with_observer(catalog, orders, |_| {})
    }

    /// Like [`run`](Self::run), calling `observer` after each cardinality.
    ///
    /// The observer is the only progress channel; the simulator itself never
    /// logs or prints.
    pub fn run_with_observer<F>(
        &self,
        catalog: &SkuCatalog,
        orders: &[Order],
        mut observer: F,
    ) -> Result<SimulationOutcome>
    where
        F: FnMut(&CardinalitySummary),
    {
        let catalog_size = catalog.len();
        check_orders(orders, catalog_size)?;

        let last = self.config.last_sku_count(catalog_size);
        let mut summaries = Vec::with_capacity(last + 1);
        for k in 0..=last {
            self.check_cancelled(k)?;
            let summary = self.simulate(k, catalog_size, orders)?;
            observer(&summary);
            summaries.push(summary);
        }

        Ok(SimulationOutcome {
            catalog_size,
            order_count: orders.len(),
            summaries,
        })
    }

    /// Simulate a single cardinality `k` over a catalog of `catalog_size`.
    ///
    /// # Errors
    ///
    /// * `LengthMismatch` if an order is not expressed over `catalog_size`
    /// * `SubsetTooLarge` if `k > catalog_size`
    /// * `FamilyTooLarge` if `C(catalog_size, k)` cannot be enumerated
    /// * `Cancelled` if the token fires between batches
    pub fn run_cardinality(
        &self,
        k: usize,
        catalog_size: usize,
        orders: &[Order],
    ) -> Result<CardinalitySummary> {
        check_orders(orders, catalog_size)?;
        self.simulate(k, catalog_size, orders)
    }

    /// One cardinality over orders already checked against `catalog_size`.
    fn simulate(
        &self,
        k: usize,
        catalog_size: usize,
        orders: &[Order],
    ) -> Result<CardinalitySummary> {
        let family = generate(k, catalog_size)?;
        let evaluator = FulfillmentEvaluator::for_cardinality(orders, k);

        let tracker = match &self.pool {
            None => self.scan_sequential(k, &family, &evaluator)?,
            Some(pool) => self.scan_parallel(pool, k, &family, &evaluator)?,
        };

        Ok(CardinalitySummary {
            sku_count: k,
            best: tracker.finish(k)?,
            subsets_evaluated: family.len(),
            orders_discarded: evaluator.discarded_count(),
        })
    }

    fn scan_sequential(
        &self,
        k: usize,
        family: &[SkuSubset],
        evaluator: &FulfillmentEvaluator<'_>,
    ) -> Result<BestTracker> {
        let mut tracker = BestTracker::new();
        for batch in family.chunks(self.config.batch_size) {
            self.check_cancelled(k)?;
            for subset in batch {
                tracker.offer(evaluator.score(subset), subset);
            }
        }
        Ok(tracker)
    }

    fn scan_parallel(
        &self,
        pool: &ThreadPool,
        k: usize,
        family: &[SkuSubset],
        evaluator: &FulfillmentEvaluator<'_>,
    ) -> Result<BestTracker> {
        pool.install(|| {
            family
                .par_chunks(self.config.batch_size)
                .map(|batch| -> Result<BestTracker> {
                    self.check_cancelled(k)?;
                    let mut tracker = BestTracker::new();
                    for subset in batch {
                        tracker.offer(evaluator.score(subset), subset);
                    }
                    Ok(tracker)
                })
                .try_reduce(BestTracker::new, |left, right| Ok(left.merge(right)))
        })
    }

    #[inline]
    fn check_cancelled(&self, completed: usize) -> Result<()> {
        match &self.cancel {
            Some(token) if token.is_cancelled() => Err(SimulationError::Cancelled { completed }),
            _ => Ok(()),
        }
    }
}

/// Every order must be expressed over the same universe as the catalog.
fn check_orders(orders: &[Order], catalog_size: usize) -> Result<()> {
    match orders
        .iter()
        .find(|order| order.required().len() != catalog_size)
    {
        Some(order) => Err(SimulationError::LengthMismatch {
            expected: catalog_size,
            actual: order.required().len(),
        }),
        None => Ok(()),
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(size: usize) -> SkuCatalog {
        SkuCatalog::from_listing(
            (0..size)
                .map(|i| (100 + i as u64, format!("sku-{i}")))
                .collect(),
        )
        .unwrap()
    }

    fn sequential() -> Simulator {
        Simulator::new(SimulatorConfig::default()).unwrap()
    }

    #[test]
    fn test_run_covers_every_cardinality() {
        let catalog = catalog(4);
        let orders = vec![Order::new("o", 4, &[0, 1]).unwrap()];
        let outcome = sequential().run(&catalog, &orders).unwrap();

        assert_eq!(outcome.catalog_size(), 4);
        assert_eq!(outcome.order_count(), 1);
        let counts: Vec<usize> = outcome.summaries().iter().map(|s| s.subsets_evaluated).collect();
        assert_eq!(counts, vec![1, 4, 6, 4, 1]);
        for (k, summary) in outcome.summaries().iter().enumerate() {
            assert_eq!(summary.sku_count, k);
        }
    }

    #[test]
    fn test_single_pair_order() {
        let catalog = catalog(3);
        let orders = vec![Order::new("o", 3, &[0, 1]).unwrap()];
        let summary = sequential().run_cardinality(2, catalog.len(), &orders).unwrap();

        assert_eq!(summary.fulfillable_orders(), 1);
        assert_eq!(summary.best.len(), 1);
        assert_eq!(summary.best.results()[0].skus.to_bit_string(), "110");
        assert_eq!(summary.orders_discarded, 0);
    }

    #[test]
    fn test_discarded_orders_counted() {
        let orders = vec![
            Order::new("a", 3, &[0, 1, 2]).unwrap(),
            Order::new("b", 3, &[0]).unwrap(),
        ];
        let summary = sequential().run_cardinality(1, 3, &orders).unwrap();
        assert_eq!(summary.orders_discarded, 1);
        assert_eq!(summary.fulfillable_orders(), 1);
    }

    #[test]
    fn test_max_sku_count_caps_run() {
        let simulator =
            Simulator::new(SimulatorConfig::default().with_max_sku_count(Some(1))).unwrap();
        let outcome = simulator.run(&catalog(5), &[]).unwrap();
        assert_eq!(outcome.summaries().len(), 2);
    }

    #[test]
    fn test_empty_catalog() {
        let orders = vec![Order::new("empty", 0, &[]).unwrap()];
        let outcome = sequential().run(&catalog(0), &orders).unwrap();
        assert_eq!(outcome.summaries().len(), 1);
        assert_eq!(outcome.get(0).unwrap().fulfillable_orders(), 1);
    }

    #[test]
    fn test_k_beyond_catalog_rejected() {
        assert_eq!(
            sequential().run_cardinality(4, 3, &[]).unwrap_err(),
            SimulationError::SubsetTooLarge { k: 4, m: 3 }
        );
    }

    #[test]
    fn test_order_universe_mismatch_rejected() {
        let orders = vec![Order::new("o", 5, &[0]).unwrap()];
        assert_eq!(
            sequential().run(&catalog(3), &orders).unwrap_err(),
            SimulationError::LengthMismatch {
                expected: 3,
                actual: 5
            }
        );
    }

    #[test]
    fn test_single_cardinality_universe_mismatch_rejected() {
        // An empty order would count under every subset if it were scored
        let orders = vec![Order::new("empty", 5, &[]).unwrap()];
        assert_eq!(
            sequential().run_cardinality(0, 3, &orders).unwrap_err(),
            SimulationError::LengthMismatch {
                expected: 3,
                actual: 5
            }
        );
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let catalog = catalog(7);
        let orders = vec![
            Order::new("a", 7, &[0, 3]).unwrap(),
            Order::new("b", 7, &[3]).unwrap(),
            Order::new("c", 7, &[1, 2, 6]).unwrap(),
            Order::new("d", 7, &[5]).unwrap(),
            Order::new("e", 7, &[]).unwrap(),
        ];
        let parallel = Simulator::new(
            SimulatorConfig::default()
                .with_execution(ExecutionMode::Parallel { workers: Some(3) })
                .with_batch_size(4),
        )
        .unwrap();

        assert_eq!(
            parallel.run(&catalog, &orders).unwrap(),
            sequential().run(&catalog, &orders).unwrap()
        );
    }

    #[test]
    fn test_cancelled_before_start() {
        let token = CancellationToken::new();
        token.cancel();
        let simulator = sequential().with_cancellation(token);
        assert_eq!(
            simulator.run(&catalog(3), &[]).unwrap_err(),
            SimulationError::Cancelled { completed: 0 }
        );
    }

    #[test]
    fn test_cancel_from_observer_stops_next_cardinality() {
        let token = CancellationToken::new();
        let simulator = sequential().with_cancellation(token.clone());
        let mut seen = Vec::new();

        let err = simulator
            .run_with_observer(&catalog(4), &[], |summary| {
                seen.push(summary.sku_count);
                if summary.sku_count == 1 {
                    token.cancel();
                }
            })
            .unwrap_err();

        assert_eq!(err, SimulationError::Cancelled { completed: 2 });
        assert_eq!(seen, vec![0, 1]);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = Simulator::new(SimulatorConfig::default().with_batch_size(0)).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidConfig(_)));
    }
}
