use anyhow::{Context, Result};
use product_catalog_core::Catalog;
use product_catalog_http::{AppState, create_router};
use std::sync::Arc;

pub(crate) async fn run(catalog: Catalog, port: u16, host: String) -> Result<()> {
    let state = Arc::new(AppState::new(catalog));
    tracing::info!(
        products = state.catalog.len(),
        max_limit = state.max_limit,
        "Catalog ready"
    );

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, router).await?;

    Ok(())
}
