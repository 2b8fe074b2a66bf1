// ============================================================================
// Axum Routes Module
// ============================================================================
//
// Structure:
// - mod.rs: Main router assembly and middleware
// - messages.rs: Guestbook message endpoints
// - about.rs: Static About page and profile photo
// - health.rs: Health check endpoint
// - middleware.rs: Request logging
//
// ============================================================================

pub mod about;
pub mod health;
pub mod messages;
mod middleware;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::context::AppContext;

/// Create the main application router with all routes
pub fn create_router(app_context: Arc<AppContext>) -> Router {
    // Static assets (images) served directly from the public directory
    let public_dir = app_context.config.public_dir.clone();

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Guestbook messages
        .route("/messages", get(messages::list_messages))
        .route("/messages/:message_id", get(messages::get_message))
        .route("/messages/save", post(messages::save_message))
        // About page
        .route("/about", get(about::about_page))
        .route("/profile-photo.jpg", get(about::profile_photo))
        .nest_service("/public", ServeDir::new(public_dir))
        // Apply middleware (order matters - last added runs first)
        .layer(
            ServiceBuilder::new()
                // Tracing layer (outermost - runs first)
                .layer(TraceLayer::new_for_http())
                // Request logging
                .layer(axum::middleware::from_fn(middleware::request_logging))
                // Allow cross-origin requests from the front end
                .layer(CorsLayer::permissive())
                .into_inner(),
        )
        .with_state(app_context)
}
