//! Read-only services shared by all handlers.
//!
//! The catalog is built once before the router exists and is never mutated, so
//! handlers share it through a plain `Arc` with no locking.

use shopfront_catalog::{Catalog, Product};
use shopfront_core::{DomainResult, IdGenerator};

#[derive(Debug)]
pub struct AppServices {
    catalog: Catalog,
}

impl AppServices {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Services over the built-in seed catalog, with ids drawn from `ids`.
    pub fn seeded(ids: &dyn IdGenerator) -> DomainResult<Self> {
        Ok(Self::new(Catalog::seeded(ids)?))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn products_search(&self, term: Option<&str>) -> Vec<&Product> {
        self.catalog.search(term)
    }

    pub fn products_get(&self, id: &str) -> Option<&Product> {
        self.catalog.find_by_id(id)
    }
}
