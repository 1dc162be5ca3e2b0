use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/products", get(search_products))
        .route("/products/:id", get(get_product))
}

pub async fn search_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::SearchParams>,
) -> axum::response::Response {
    let term = params.q.as_deref();
    let products = services.products_search(term);
    tracing::debug!(term = ?term, hits = products.len(), "product search");

    match dto::product_collection(term, &products) {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => errors::serialize_error(e),
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.products_get(&id) {
        Some(product) => match dto::product_resource(product) {
            Ok(body) => (StatusCode::OK, Json(body)).into_response(),
            Err(e) => errors::serialize_error(e),
        },
        None => {
            tracing::debug!(%id, "product not found");
            errors::not_found("product not found")
        }
    }
}
