//! Logo search server
//!
//! Main entry point for the `/api/logos` HTTP service.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use openeditor::{
    catalog::MemoryCatalog,
    config::{CatalogBackend, ServiceConfig, DEFAULT_CONFIG_PATH},
    server::{create_router, AppState},
    CatalogStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "openeditor=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting logo search server");

    let config_path =
        std::env::var("OPENEDITOR_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    tracing::info!(path = %config_path, "Loading configuration");

    let mut config = ServiceConfig::load_or_default(&config_path)?;
    config.apply_env()?;

    tracing::info!(
        backend = ?config.catalog.backend,
        min_query_len = config.search.min_query_len,
        max_results = config.search.max_results,
        "Configuration loaded"
    );

    let store = build_catalog(&config).await?;
    let state = AppState::new(store, &config.search);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.server.addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.addr))?;
    tracing::info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn build_catalog(config: &ServiceConfig) -> anyhow::Result<Arc<dyn CatalogStore>> {
    match config.catalog.backend {
        #[cfg(feature = "database")]
        CatalogBackend::Postgres => {
            let store = openeditor::PgCatalogStore::connect(
                &config.catalog.connection_string_env,
                &config.catalog.table,
            )
            .await?;
            Ok(Arc::new(store))
        }
        #[cfg(not(feature = "database"))]
        CatalogBackend::Postgres => {
            anyhow::bail!("Postgres catalog requested but the `database` feature is disabled")
        }
        CatalogBackend::Memory => {
            let catalog = match &config.catalog.seed_file {
                Some(path) => MemoryCatalog::from_file(path)
                    .with_context(|| format!("Failed to load seed file {}", path.display()))?,
                None => {
                    tracing::warn!("No seed file configured, catalog is empty");
                    MemoryCatalog::new(Vec::new())
                }
            };
            tracing::info!(entries = catalog.len(), "In-memory catalog ready");
            Ok(Arc::new(catalog.with_metric(config.catalog.similarity)))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
