//! # HR Metrics Server
//!
//! Main entry point for the HR Metrics reporting service: an Axum REST API
//! serving named analytics reports from PostgreSQL through an in-process
//! response cache.

use hrmetrics_config::ConfigLoader;
use hrmetrics_core::HrResult;
use hrmetrics_repository::{create_pool, PgReportRepository};
use hrmetrics_rest::{create_router, AppState};
use hrmetrics_service::{CacheInterface, MemoryCache, ReportServiceImpl};
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    // Initialize logging
    init_logging();

    info!("Starting HR Metrics Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run().await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> HrResult<()> {
    // Load configuration
    let config_loader = ConfigLoader::from_default_location()?;
    let config = config_loader.get().await;

    info!("Environment: {}", config.app.environment);

    // Create database pool
    let db_pool = create_pool(&config.database).await?;

    // Response cache: one shared instance for the process lifetime
    let cache: Arc<dyn CacheInterface> = if config.cache.enabled {
        info!("Response cache enabled (ttl: {:?})", config.cache.ttl());
        Arc::new(MemoryCache::new(config.cache.ttl()))
    } else {
        warn!("Response cache disabled; every request hits the database");
        Arc::new(MemoryCache::disabled())
    };

    // Wire up repository and service layers
    let repository = Arc::new(PgReportRepository::new(db_pool));
    let report_service = Arc::new(ReportServiceImpl::new(repository, cache));

    // Create application state for REST
    let app_state = AppState::new(report_service);
    let router = create_router(app_state, &config.server, &config.security);

    // Start the server
    let addr = config.server.addr();
    info!("REST server listening on {}", addr);
    info!("Swagger UI available at http://{}/docs", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| hrmetrics_core::HrError::internal(format!("Failed to bind {addr}: {e}")))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| hrmetrics_core::HrError::internal(format!("Server error: {e}")))?;

    info!("Server shut down cleanly");
    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,hrmetrics=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
