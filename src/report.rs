//! Reporting of simulation outcomes in external SKU numbers.
//!
//! ## Formats
//!
//! - **Text**: one block per cardinality, for terminal output
//! - **JSON**: the [`SimulationReport`] structure via serde
//!
//! ## Digest
//!
//! [`SimulationReport::digest`] is a SHA-256 hash over a fixed little-endian
//! encoding of the report (not its JSON text), so two runs agree on the
//! digest iff they agree on every winner, in order.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::engine::{CardinalitySummary, SimulationOutcome};
use crate::types::{SkuCatalog, SkuNumber};

/// Winners for one cardinality, expressed in external SKU numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardinalityReport {
    /// Number of stocked SKUs `k`
    pub sku_count: usize,

    /// Maximal number of fulfillable orders
    pub fulfillable_orders: usize,

    /// Subsets scored for this `k`
    pub subsets_evaluated: usize,

    /// Orders skipped by the requirement-count pre-filter
    pub orders_discarded: usize,

    /// One entry per tied winning subset, SKU numbers in index order
    pub winners: Vec<Vec<SkuNumber>>,
}

impl CardinalityReport {
    /// Translate a summary through the catalog
    pub fn new(summary: &CardinalitySummary, catalog: &SkuCatalog) -> Self {
        Self {
            sku_count: summary.sku_count,
            fulfillable_orders: summary.fulfillable_orders(),
            subsets_evaluated: summary.subsets_evaluated,
            orders_discarded: summary.orders_discarded,
            winners: summary
                .best
                .subsets()
                .map(|subset| catalog.sku_numbers(subset))
                .collect(),
        }
    }
}

/// Full run report.
///
/// ## Example
///
/// ```
/// use sku_coverage::engine::{Simulator, SimulatorConfig};
/// use sku_coverage::report::SimulationReport;
/// use sku_coverage::types::{Order, SkuCatalog};
///
/// let catalog = SkuCatalog::from_listing(vec![
///     (7, "a".to_string()),
///     (9, "b".to_string()),
/// ]).unwrap();
/// let orders = vec![Order::new("o", 2, &[1]).unwrap()];
///
/// let outcome = Simulator::new(SimulatorConfig::default())
///     .unwrap()
///     .run(&catalog, &orders)
///     .unwrap();
/// let report = SimulationReport::new(&outcome, &catalog);
///
/// assert_eq!(report.cardinalities[1].winners, vec![vec![9]]);
/// assert_eq!(report.digest_hex().len(), 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Catalog size `M`
    pub catalog_size: usize,

    /// Orders in the workload
    pub order_count: usize,

    /// One entry per simulated `k`, in increasing order
    pub cardinalities: Vec<CardinalityReport>,
}

impl SimulationReport {
    /// Build a report from an outcome and the catalog it was computed over
    pub fn new(outcome: &SimulationOutcome, catalog: &SkuCatalog) -> Self {
        Self {
            catalog_size: outcome.catalog_size(),
            order_count: outcome.order_count(),
            cardinalities: outcome
                .summaries()
                .iter()
                .map(|summary| CardinalityReport::new(summary, catalog))
                .collect(),
        }
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Human-readable text, one block per cardinality
    pub fn render_text(&self) -> String {
        self.to_string()
    }

    /// SHA-256 over the canonical encoding of every winner
    pub fn digest(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update((self.catalog_size as u64).to_le_bytes());
        hasher.update((self.order_count as u64).to_le_bytes());
        for entry in &self.cardinalities {
            hasher.update((entry.sku_count as u64).to_le_bytes());
            hasher.update((entry.fulfillable_orders as u64).to_le_bytes());
            hasher.update((entry.winners.len() as u64).to_le_bytes());
            for winner in &entry.winners {
                hasher.update((winner.len() as u64).to_le_bytes());
                for number in winner {
                    hasher.update(number.to_le_bytes());
                }
            }
        }

        let mut digest = [0u8; 32];
        digest.copy_from_slice(&hasher.finalize());
        digest
    }

    /// Digest as a hex string
    pub fn digest_hex(&self) -> String {
        hex::encode(self.digest())
    }
}

impl fmt::Display for CardinalityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "With {} skus the best results are:", self.sku_count)?;
        writeln!(f, "> Fulfillable Orders: {}", self.fulfillable_orders)?;
        writeln!(f, "> SKU IDs that can fulfill orders:")?;
        for winner in &self.winners {
            writeln!(f, ">>> {:?}", winner)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.cardinalities.iter().try_for_each(|entry| write!(f, "{entry}"))
    }
}
