use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Application error type for the data endpoints.
///
/// The public contract flattens every failure kind onto HTTP 400 with a
/// `{error, status}` envelope, where `status` is the human-readable
/// "failed to ..." marker and `error` carries the underlying store error.
/// Not-found is NOT an error: lookups that match nothing return a success
/// envelope with an empty list instead of surfacing here.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("failed to retrieve messages from the database")]
    RetrieveMessages(#[source] sqlx::Error),

    #[error("failed to save the message to the database")]
    SaveMessage(#[source] sqlx::Error),
}

impl AppError {
    /// The underlying store error, serialized into the `error` field
    pub fn source_text(&self) -> String {
        match self {
            AppError::RetrieveMessages(e) | AppError::SaveMessage(e) => e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!(
            error = %self.source_text(),
            status = %self,
            "Request failed"
        );

        let body = json!({
            "error": self.source_text(),
            "status": self.to_string(),
        });

        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
