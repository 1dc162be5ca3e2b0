use std::sync::Arc;

use anyhow::Context;

use shopfront_api::{app, config::ApiConfig};
use shopfront_core::RandomIdGenerator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shopfront_observability::init();

    let config = ApiConfig::from_env()?;

    let services = app::services::AppServices::seeded(&RandomIdGenerator)
        .context("failed to seed product catalog")?;
    tracing::info!(products = services.catalog().len(), "catalog ready");

    let app = app::build_app(Arc::new(services));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
