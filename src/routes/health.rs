// ============================================================================
// Health Routes
// ============================================================================
//
// Endpoints:
// - GET /health - Health check (database)
//
// ============================================================================

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

use crate::context::AppContext;
use crate::health;

/// GET /health
/// Health check endpoint
pub async fn health_check(State(app_context): State<Arc<AppContext>>) -> impl IntoResponse {
    match health::health_check(&app_context.db_pool).await {
        Ok(_) => (StatusCode::OK, "OK"),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "Service Unavailable")
        }
    }
}
