//! Simulator configuration.
//!
//! ## Example
//!
//! ```
//! use sku_coverage::engine::{ExecutionMode, SimulatorConfig};
//!
//! let config = SimulatorConfig::default()
//!     .with_execution(ExecutionMode::Parallel { workers: Some(4) })
//!     .with_batch_size(512)
//!     .with_max_sku_count(Some(6));
//!
//! assert!(config.validate().is_ok());
//! ```

use crate::error::{Result, SimulationError};

/// Default number of subsets per work batch
pub const DEFAULT_BATCH_SIZE: usize = 1024;

/// How the subset family for one cardinality is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// Single-threaded, in generation order
    #[default]
    Sequential,

    /// Batches spread over a fixed rayon worker pool
    Parallel {
        /// Pool size; `None` lets rayon pick one thread per core
        workers: Option<usize>,
    },
}

/// Knobs for a [`Simulator`](crate::engine::Simulator) run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatorConfig {
    /// Sequential or parallel evaluation
    pub execution: ExecutionMode,

    /// Subsets per batch; cancellation is checked between batches
    pub batch_size: usize,

    /// Highest cardinality to simulate; `None` runs up to the catalog size
    pub max_sku_count: Option<usize>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            execution: ExecutionMode::Sequential,
            batch_size: DEFAULT_BATCH_SIZE,
            max_sku_count: None,
        }
    }
}

impl SimulatorConfig {
    /// Set the execution mode
    pub fn with_execution(mut self, execution: ExecutionMode) -> Self {
        self.execution = execution;
        self
    }

    /// Set the batch size
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Cap the simulated cardinalities
    pub fn with_max_sku_count(mut self, max_sku_count: Option<usize>) -> Self {
        self.max_sku_count = max_sku_count;
        self
    }

    /// Reject configurations that cannot run.
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(SimulationError::InvalidConfig(
                "batch size must be at least 1".to_string(),
            ));
        }
        if let ExecutionMode::Parallel { workers: Some(0) } = self.execution {
            return Err(SimulationError::InvalidConfig(
                "worker count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Last cardinality to simulate for a catalog of `catalog_size`
    pub fn last_sku_count(&self, catalog_size: usize) -> usize {
        self.max_sku_count
            .map_or(catalog_size, |cap| cap.min(catalog_size))
    }
}
