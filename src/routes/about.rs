// ============================================================================
// About Routes
// ============================================================================
//
// Endpoints:
// - GET /about             - Static About page content as JSON
// - GET /profile-photo.jpg - Profile photo from the public directory
//
// ============================================================================

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use serde_json::json;
use std::path::Path as FsPath;
use std::sync::Arc;

use crate::context::AppContext;

pub const PROFILE_PHOTO_FILE: &str = "profile-photo.jpg";

/// Static content for the About page. Not backed by the store: this route
/// keeps working even when the database is unreachable.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
    /// Relative path; clients prefix it with the server hostname
    pub image_url: &'static str,
}

pub fn about_content() -> AboutContent {
    AboutContent {
        title: "About Us",
        paragraphs: &[
            "This is a small guestbook service: visitors leave a short message \
             with their name, and everyone can read what others wrote.",
            "The back end stores each entry as-is, in the order it arrived. \
             There are no accounts and nothing is ever edited or removed.",
            "Feel free to sign the guestbook and say hello!",
        ],
        image_url: "/profile-photo.jpg",
    }
}

/// GET /about
pub async fn about_page() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "about": about_content(),
            "status": "all good",
        })),
    )
}

/// GET /profile-photo.jpg
/// Serves the photo from the public directory. A missing file is a bare 404,
/// logged server-side.
pub async fn profile_photo(State(app_context): State<Arc<AppContext>>) -> impl IntoResponse {
    let path = FsPath::new(&app_context.config.public_dir).join(PROFILE_PHOTO_FILE);

    match tokio::fs::read(&path).await {
        Ok(bytes) => {
            (StatusCode::OK, [(header::CONTENT_TYPE, "image/jpeg")], bytes).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, path = %path.display(), "Failed to send profile photo");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
