// Catalog Server Binary Entry Point
//
// Purpose: Start the Axum server over the built-in or a directory catalog
// Usage: cargo run --features api --bin catalog_server

use entry_catalog::config::CatalogConfig;
use entry_catalog::{create_router, AppState, Catalog};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "entry_catalog=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting catalog server...");

    let config = CatalogConfig::from_env()?;
    tracing::info!("Configuration:");
    tracing::info!("  CATALOG_DIR: {:?}", config.catalog_dir);
    tracing::info!("  PORT: {}", config.port);

    // Pages are composed once here and shared by every request
    let catalog = Catalog::load(config.catalog_dir.as_deref())?;
    let app = create_router(AppState::new(catalog));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
