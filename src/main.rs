//! Quizmark - Application Entry Point
//!
//! This is the main entry point for the Quizmark server.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use quizmark::{
    config::{StorageBackend, CONFIG},
    constants::log_formats,
    create_router, db,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into());

    if CONFIG.server.log_format == log_formats::JSON {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting Quizmark server...");

    // Create application state for the configured storage backend
    let state = match CONFIG.storage.backend {
        StorageBackend::Postgres => {
            tracing::info!("Connecting to database...");
            let db_pool = db::create_pool(&CONFIG.database).await?;
            db::test_connection(&db_pool).await?;

            tracing::info!("Running database migrations...");
            db::run_migrations(&db_pool).await?;

            AppState::with_postgres(db_pool, CONFIG.clone())
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; data is lost on restart");
            AppState::with_memory(Arc::new(db::MemoryStore::new()), CONFIG.clone())
        }
    };

    // Build the router
    let app = create_router(state);

    // Start the server
    let addr = SocketAddr::new(CONFIG.server.host.parse()?, CONFIG.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
