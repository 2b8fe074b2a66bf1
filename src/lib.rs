use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod config;
pub mod context;
pub mod db;
pub mod error;
pub mod health;
pub mod routes;

use config::Config;
use context::AppContext;

pub async fn run() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;
    let config = Arc::new(config);

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.rust_log.clone()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Connect to database
    let db_pool = Arc::new(
        db::create_pool(&config.database_url, config.db.max_connections)
            .await
            .context("Failed to connect to database")?,
    );
    tracing::info!("Connected to database");

    // Apply database migrations
    sqlx::migrate!()
        .run(&*db_pool)
        .await
        .context("Failed to apply database migrations")?;
    tracing::info!("Database migrations applied");

    // Create application context and router
    let app_context = Arc::new(AppContext::new(db_pool, config.clone()));
    let app = routes::create_router(app_context);

    // Start server
    let bind_address = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind to address")?;
    tracing::info!("Guestbook server listening on {}", bind_address);

    axum::serve(listener, app)
        .await
        .context("Failed to start server")?;

    Ok(())
}
