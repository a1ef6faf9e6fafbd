//! # SKU Coverage
//!
//! Exhaustive simulator answering: if only `k` SKUs could be stocked, which
//! `k` maximize the number of orders that can be shipped complete?
//!
//! ## Architecture
//!
//! - **Types**: SKUs, catalog, bit-vector subsets, orders, results
//! - **Combinatorics**: duplicate-free `k`-of-`M` subset generation
//! - **Engine**: fulfillment evaluation, best-result selection, orchestration
//! - **Report**: outcome in external SKU numbers, text/JSON, digest
//! - **Input**: JSON workload loading for the CLI
//!
//! ## Design Principles
//!
//! 1. **Exact**: all `C(M, k)` subsets are scored for every `k`
//! 2. **Fail loud**: caller errors are `Err` values; internal invariant
//!    violations panic instead of returning a partial answer
//! 3. **No side effects in the core**: progress flows through an observer
//!    callback, never through logging
//! 4. **Deterministic**: parallel and sequential runs agree exactly
//!
//! ## Example
//!
//! ```
//! use sku_coverage::{Order, Simulator, SimulatorConfig, SkuCatalog};
//!
//! let catalog = SkuCatalog::from_listing(vec![
//!     (1, "a".to_string()),
//!     (2, "b".to_string()),
//!     (3, "c".to_string()),
//! ]).unwrap();
//! let orders = vec![Order::new("o", 3, &[0, 1]).unwrap()];
//!
//! let outcome = Simulator::new(SimulatorConfig::default())
//!     .unwrap()
//!     .run(&catalog, &orders)
//!     .unwrap();
//!
//! let two = outcome.get(2).unwrap();
//! assert_eq!(two.fulfillable_orders(), 1);
//! assert_eq!(catalog.sku_numbers(&two.best.results()[0].skus), vec![1, 2]);
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the core and the input shell
pub mod error;

/// Core data types: SKU, SkuSubset, Order, SimulationResult
pub mod types;

/// Subset enumeration and binomial coefficients
pub mod combinatorics;

/// Evaluator, selector and simulator
pub mod engine;

/// Outcome reporting and digests
pub mod report;

/// JSON workload loading
pub mod input;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use combinatorics::generate;
pub use engine::{
    evaluate, select_best, CancellationToken, CardinalitySummary, ExecutionMode,
    SimulationOutcome, Simulator, SimulatorConfig,
};
pub use error::{InputError, SimulationError};
pub use report::SimulationReport;
pub use types::{BestResultSet, Order, SimulationResult, Sku, SkuCatalog, SkuSubset};
