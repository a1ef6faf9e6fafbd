//! Error types for the simulator core and its input shell.
//!
//! ## Two Failure Kinds
//!
//! - **Precondition violations** (caller misuse, malformed catalog data,
//!   cancelled runs) are returned as `Err` values.
//! - **Internal invariant violations** (duplicate subsets, wrong family size,
//!   inconsistent tie lists) are logic defects and panic. A miscounted subset
//!   family would invalidate every downstream comparison, so there is no
//!   partial answer to return.

use thiserror::Error;

use crate::types::{InternalSkuIndex, SkuNumber};

/// Result alias used throughout the core.
pub type Result<T> = std::result::Result<T, SimulationError>;

/// Errors returned by the simulation core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// Requested subset cardinality exceeds the catalog size
    #[error("cannot choose {k} SKUs from a catalog of {m}")]
    SubsetTooLarge { k: usize, m: usize },

    /// C(m, k) does not fit in memory-addressable size
    #[error("subset family C({m}, {k}) is too large to enumerate")]
    FamilyTooLarge { k: usize, m: usize },

    /// The selector was handed no results
    #[error("no simulation results to select from for k = {k}")]
    EmptyResultFamily { k: usize },

    /// An order or subset referenced a position outside the catalog
    #[error("SKU index {index} is out of range for a catalog of {catalog_size}")]
    SkuIndexOutOfRange {
        index: InternalSkuIndex,
        catalog_size: usize,
    },

    /// A catalog entry's internal index does not match its position
    #[error("SKU at position {position} carries internal index {index}")]
    NonDenseSkuIndex {
        position: usize,
        index: InternalSkuIndex,
    },

    /// Two catalog entries share an external SKU number
    #[error("duplicate SKU number {0}")]
    DuplicateSkuNumber(SkuNumber),

    /// An order is expressed over a different catalog size than the run
    #[error("subset length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Simulator configuration rejected by `validate`
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The rayon worker pool could not be built
    #[error("failed to build worker pool: {0}")]
    WorkerPool(String),

    /// The run was cancelled between units of work
    #[error("simulation cancelled after {completed} completed cardinalities")]
    Cancelled { completed: usize },
}

/// Errors raised while loading a workload.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("order {order_id} references unknown SKU number {sku}")]
    UnknownSku { order_id: String, sku: SkuNumber },

    #[error("invalid workload: {0}")]
    Model(#[from] SimulationError),
}
