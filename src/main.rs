//! Catalog Cache - an in-process catalog query accelerator
//!
//! Serves a product catalog over HTTP with a multi-index TTL cache between
//! the handlers and the backing store.

mod api;
mod cache;
mod config;
mod error;
mod models;
mod repository;
mod service;
mod tasks;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::{create_router, AppState};
use cache::CatalogCache;
use config::Config;
use repository::InMemoryProductRepository;
use service::ProductService;
use tasks::spawn_sweep_task;

/// Main entry point for the catalog cache server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Build the composition root: repository, cache coordinator, service
/// 4. Start the background cache sweep task
/// 5. Create Axum router with all endpoints
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_cache=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Catalog Cache Server");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: product_ttl={}s, category_ttl={}s, brand_ttl={}s, search_ttl={}s, port={}, sweep_interval={}s",
        config.product_ttl,
        config.category_ttl,
        config.brand_ttl,
        config.search_ttl,
        config.server_port,
        config.sweep_interval
    );

    // Composition root: everything is built once here and passed down,
    // no global service holders
    let repository = Arc::new(InMemoryProductRepository::new());
    let catalog_cache = Arc::new(CatalogCache::new(
        config.product_ttl(),
        config.category_ttl(),
        config.brand_ttl(),
        config.search_ttl(),
    ));
    let service = Arc::new(ProductService::new(catalog_cache.clone(), repository));
    let state = AppState::new(service);
    info!("Catalog cache and product service initialized");

    // Start background sweep task
    let sweep_handle = spawn_sweep_task(catalog_cache, config.sweep_interval);
    info!("Background sweep task started");

    // Create router with all endpoints
    let app = create_router(state);

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(sweep_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the sweep task and allows graceful shutdown.
async fn shutdown_signal(sweep_handle: tokio::task::JoinHandle<()>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    // Abort the sweep task
    sweep_handle.abort();
    warn!("Sweep task aborted");
}
