//! The six products the service starts with.

use shopfront_core::{DomainResult, IdGenerator};

use crate::product::{Product, ProductId};

/// Seed rows: `(title, description, retail price in cents)`, in catalog order.
pub const SEED_PRODUCTS: [(&str, &str, u64); 6] = [
    (
        "RESTful Web APIs",
        "Design web APIs that change gracefully over time by putting hypermedia at the centre of the client/server contract.",
        3_999,
    ),
    (
        "REST in Practice",
        "Integrating enterprise systems over HTTP with resource-oriented design and event feeds.",
        3_499,
    ),
    (
        "RESTful Java with JAX-RS 2.0",
        "Building distributed web services in Java, from resource classes to client APIs.",
        2_999,
    ),
    (
        "REST API Design Rulebook",
        "Consistent conventions for URIs, media types and request methods.",
        1_999,
    ),
    (
        "Building Microservices",
        "Splitting a system into fine-grained services that talk over RESTful HTTP.",
        4_499,
    ),
    (
        "Web API Design",
        "Crafting interfaces that developers love, the pragmatic REST way.",
        0,
    ),
];

/// Build the seed products, drawing one identifier per row in order.
pub fn seed_products(ids: &dyn IdGenerator) -> DomainResult<Vec<Product>> {
    SEED_PRODUCTS
        .iter()
        .map(|(title, description, price)| {
            Product::new(ProductId::new(ids.next_id()), *title, *description, *price)
        })
        .collect()
}
