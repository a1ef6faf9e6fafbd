//! Subset enumeration for the exhaustive search.
//!
//! ## Components
//!
//! - [`generate`]: every `k`-of-`M` subset as a [`SkuSubset`](crate::types::SkuSubset)
//! - [`binomial`]: exact `C(n, k)` used to check the generated family
//!
//! ## Complexity
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `generate(k, m)` | O(C(m, k) * m / 64) time and memory |
//! | `binomial(n, k)` | O(min(k, n - k)) |

pub mod binomial;
pub mod generator;

pub use binomial::{binomial, family_size};
pub use generator::generate;
