//! Workload loading for the command-line shell.
//!
//! ## Format
//!
//! ```json
//! {
//!   "skus":   [ { "number": 1001, "name": "red shirt" } ],
//!   "orders": [ { "id": "A-1", "skus": [1001] } ]
//! }
//! ```
//!
//! Internal indices are assigned in `skus` listing order. Order SKU lists
//! are sets: repeated numbers count once.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::types::{Order, SkuCatalog, SkuNumber};

/// One catalog entry as it appears in the input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkuRecord {
    pub number: SkuNumber,
    #[serde(default)]
    pub name: String,
}

/// One order as it appears in the input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: String,
    #[serde(default)]
    pub skus: Vec<SkuNumber>,
}

/// Raw workload: SKU listing plus orders by external number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workload {
    pub skus: Vec<SkuRecord>,
    #[serde(default)]
    pub orders: Vec<OrderRecord>,
}

impl Workload {
    /// Parse a workload from JSON text
    pub fn from_json_str(json: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a workload file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Build the catalog and resolve every order against it.
    ///
    /// # Errors
    ///
    /// * `Model(DuplicateSkuNumber)` if the listing repeats a number
    /// * `UnknownSku` if an order references a number not in the listing
    pub fn into_model(self) -> Result<(SkuCatalog, Vec<Order>), InputError> {
        let listing = self
            .skus
            .into_iter()
            .map(|record| (record.number, record.name))
            .collect();
        let catalog = SkuCatalog::from_listing(listing)?;

        let orders = self
            .orders
            .into_iter()
            .map(|record| -> Result<Order, InputError> {
                let indices = record
                    .skus
                    .iter()
                    .map(|&sku| {
                        catalog.index_of(sku).ok_or_else(|| InputError::UnknownSku {
                            order_id: record.id.clone(),
                            sku,
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Order::new(record.id, catalog.len(), &indices)?)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok((catalog, orders))
    }
}
