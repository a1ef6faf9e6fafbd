//! Core data types for the SKU coverage simulator.
//!
//! ## Types
//!
//! - [`Sku`] / [`SkuCatalog`]: product variants and their dense indexing
//! - [`SkuSubset`]: fixed-length bit vector over the catalog
//! - [`Order`]: a customer order as a required SKU set
//! - [`SimulationResult`]: one subset's score
//! - [`BestResultSet`]: the maximal-score tie list for one cardinality
//!
//! Catalog and orders are built once and only borrowed by the engine.

mod order;
mod result;
mod sku;
mod subset;

pub use order::Order;
pub use result::{BestResultSet, SimulationResult};
pub use sku::{InternalSkuIndex, Sku, SkuCatalog, SkuNumber};
pub use subset::SkuSubset;
