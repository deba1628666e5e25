//! minibank - In-memory Core Banking API
//!
//! Serves deposit, withdraw, and transfer operations against account
//! balances held in process memory.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{middleware, Router};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use minibank::{api, AccountStore, Config};

/// Initialize tracing/logging
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "minibank=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build the application router
fn build_router(store: Arc<AccountStore>) -> Router {
    // Axum layers are applied in reverse order (last added = first executed)
    let api_router = api::create_router().layer(middleware::from_fn(
        api::middleware::logging_middleware,
    ));

    Router::new()
        .route("/health", axum::routing::get(health_check))
        .merge(api_router)
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    init_tracing();

    let config = Config::from_env()?;
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    tracing::info!("Starting minibank server ({})", config.environment);

    // All accounts live in process memory; nothing survives a restart
    let store = Arc::new(AccountStore::new());
    let app = build_router(store);

    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down. Goodbye!");

    Ok(())
}

/// Shutdown signal handler for graceful shutdown
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        },
    }
}
