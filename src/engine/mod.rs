//! Simulation engine: evaluation, selection and orchestration.
//!
//! ## Design Principles
//!
//! 1. **Exact**: every `k`-subset is scored; nothing is sampled or pruned
//!    beyond the provably-safe requirement-count pre-filter
//! 2. **Pure**: the engine borrows catalog and orders read-only and returns
//!    structured data; it never logs or prints
//! 3. **Deterministic**: parallel runs report the same winners, in the same
//!    order, as sequential runs
//!
//! ## Example
//!
//! ```
//! use sku_coverage::engine::{evaluate, select_best};
//! use sku_coverage::combinatorics::generate;
//! use sku_coverage::types::{Order, SimulationResult};
//!
//! let orders = vec![Order::new("o", 3, &[0, 1]).unwrap()];
//! let results = generate(2, 3)
//!     .unwrap()
//!     .into_iter()
//!     .map(|subset| SimulationResult::new(evaluate(&subset, &orders), subset));
//!
//! let best = select_best(2, results).unwrap();
//! assert_eq!(best.fulfillable_orders(), 1);
//! assert_eq!(best.results()[0].skus.to_bit_string(), "110");
//! ```

pub mod config;
pub mod evaluator;
pub mod selector;
pub mod simulator;

pub use config::{ExecutionMode, SimulatorConfig, DEFAULT_BATCH_SIZE};
pub use evaluator::{evaluate, FulfillmentEvaluator};
pub use selector::{select_best, BestTracker};
pub use simulator::{CancellationToken, CardinalitySummary, SimulationOutcome, Simulator};
