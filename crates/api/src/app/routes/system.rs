use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::app::dto;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// API entry point: links to everything a client can do.
pub async fn root() -> impl IntoResponse {
    Json(dto::api_root())
}
