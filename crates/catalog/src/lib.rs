//! Catalog domain module.
//!
//! Holds the immutable product catalog and its two queries (substring search and
//! lookup by id), implemented purely as deterministic domain logic (no IO, no
//! HTTP, no storage).

pub mod catalog;
pub mod fixtures;
pub mod product;

pub use catalog::Catalog;
pub use product::{Product, ProductId};
