//! HTTP catalog provider.
//!
//! Loads the catalog from `CATALOG_DIR` and serves it on `HOST:PORT`.

use anyhow::{Context, Result};
use tracing::info;

use catalog::CatalogStore;
use server::{AppState, Config, cors_layer, create_router};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = Config::from_env()?;

    let store = CatalogStore::load_from_dir(&config.catalog_dir)
        .with_context(|| format!("Failed to load catalog from {}", config.catalog_dir.display()))?;

    let app = create_router(
        AppState::new(store),
        cors_layer(config.cors_origin.as_deref())?,
    );

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Catalog server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Catalog server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
