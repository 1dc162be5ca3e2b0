use serde::Deserialize;
use serde_json::{json, Value};

use shopfront_catalog::{Product, ProductId};

pub const PRODUCTS_PATH: &str = "/products";
pub const SEARCH_TEMPLATE: &str = "/products{?q}";

// -------------------------
// Request DTOs
// -------------------------

/// Query string of `GET /products`. `?q=` yields `Some("")`, which matches everything.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

// -------------------------
// Hypermedia links
// -------------------------

/// Link to one product. The id is percent-encoded as a single path segment.
pub fn product_href(id: &ProductId) -> String {
    // byte_serialize is form encoding: '+' only ever stands for a space here.
    let segment = url::form_urlencoded::byte_serialize(id.as_str().as_bytes())
        .collect::<String>()
        .replace('+', "%20");
    format!("{PRODUCTS_PATH}/{segment}")
}

/// Link to a search: the bare collection without a term, `?q=` (form-encoded) with one.
pub fn search_href(term: Option<&str>) -> String {
    match term {
        None => PRODUCTS_PATH.to_string(),
        Some(term) => {
            let query = url::form_urlencoded::Serializer::new(String::new())
                .append_pair("q", term)
                .finish();
            format!("{PRODUCTS_PATH}?{query}")
        }
    }
}

fn link(href: impl Into<String>) -> Value {
    json!({ "href": href.into() })
}

fn search_link() -> Value {
    json!({ "href": SEARCH_TEMPLATE, "templated": true })
}

// -------------------------
// Response mapping
// -------------------------

/// The product's serde representation plus its `self` link.
pub fn product_to_json(product: &Product) -> serde_json::Result<Value> {
    let mut body = serde_json::to_value(product)?;
    body["_links"] = json!({ "self": link(product_href(product.id_typed())) });
    Ok(body)
}

/// Single product representation with a link back to the collection.
pub fn product_resource(product: &Product) -> serde_json::Result<Value> {
    let mut body = product_to_json(product)?;
    body["_links"]["collection"] = link(PRODUCTS_PATH);
    Ok(body)
}

pub fn product_collection(term: Option<&str>, products: &[&Product]) -> serde_json::Result<Value> {
    let items = products
        .iter()
        .map(|p| product_to_json(p))
        .collect::<serde_json::Result<Vec<_>>>()?;
    Ok(json!({
        "count": items.len(),
        "_embedded": { "products": items },
        "_links": {
            "self": link(search_href(term)),
            "search": search_link(),
        },
    }))
}

pub fn api_root() -> Value {
    json!({
        "_links": {
            "self": link("/"),
            "products": link(PRODUCTS_PATH),
            "search": search_link(),
        },
    })
}
