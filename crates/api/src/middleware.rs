use std::time::Instant;

use axum::{middleware::Next, response::Response};

/// Log one event per request with method, path, status and latency.
pub async fn trace_requests(req: axum::http::Request<axum::body::Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let started = Instant::now();

    let res = next.run(req).await;

    let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    tracing::info!(
        %method,
        %path,
        status = res.status().as_u16(),
        latency_ms,
        "request completed"
    );

    res
}
