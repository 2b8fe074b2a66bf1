// ============================================================================
// Messages Routes
// ============================================================================
//
// Endpoints:
// - GET  /messages             - List all guestbook messages
// - GET  /messages/:message_id - Fetch a single message by id
// - POST /messages/save        - Save a new message
//
// ============================================================================

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::context::AppContext;
use crate::db;
use crate::error::{AppError, AppResult};

/// GET /messages
/// Returns every stored message in insertion order
pub async fn list_messages(
    State(app_context): State<Arc<AppContext>>,
) -> AppResult<impl IntoResponse> {
    let messages = db::list_messages(&app_context.db_pool)
        .await
        .map_err(AppError::RetrieveMessages)?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "messages": messages,
            "status": "all good",
        })),
    ))
}

/// GET /messages/:message_id
/// Returns a list of zero or one messages. An unknown or malformed id is a
/// success with an empty list, keeping the shape uniform with the list route.
pub async fn get_message(
    State(app_context): State<Arc<AppContext>>,
    Path(message_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let messages = db::find_message_by_id(&app_context.db_pool, &message_id)
        .await
        .map_err(AppError::RetrieveMessages)?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "messages": messages,
            "status": "all good",
        })),
    ))
}

/// Request body for saving a message. Both fields are optional: an absent or
/// null field is persisted as NULL instead of rejecting the request.
#[derive(Debug, Deserialize)]
pub struct SaveMessageRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// POST /messages/save
/// Saves a message and echoes the stored record back
pub async fn save_message(
    State(app_context): State<Arc<AppContext>>,
    Json(request): Json<SaveMessageRequest>,
) -> AppResult<impl IntoResponse> {
    let message = db::insert_message(
        &app_context.db_pool,
        request.name.as_deref(),
        request.message.as_deref(),
    )
    .await
    .map_err(AppError::SaveMessage)?;

    tracing::info!(message_id = %message.id, "Message saved");

    Ok((
        StatusCode::OK,
        Json(json!({
            "message": message,
            "status": "all good",
        })),
    ))
}
