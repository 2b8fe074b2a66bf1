// ============================================================================
// About Page and Static Asset Tests
// ============================================================================
//
// Tests for:
// - GET /about
// - GET /profile-photo.jpg
// - GET /public/<asset>
// - GET /health
//
// ============================================================================

use serde_json::Value;
use serial_test::serial;

mod test_utils;
use test_utils::spawn_app;

#[tokio::test]
#[serial]
async fn test_about_returns_static_content() {
    let app = spawn_app().await;

    let response = reqwest::get(format!("http://{}/about", app.address))
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "all good");
    assert!(body["about"]["title"].is_string());
    assert!(!body["about"]["paragraphs"].as_array().unwrap().is_empty());
    assert!(body["about"]["imageUrl"].as_str().unwrap().starts_with('/'));
}

#[tokio::test]
#[serial]
async fn test_about_unaffected_by_store_failure() {
    let app = spawn_app().await;

    app.db_pool.close().await;

    let response = reqwest::get(format!("http://{}/about", app.address))
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "all good");
}

#[tokio::test]
#[serial]
async fn test_missing_profile_photo_is_bare_404() {
    let app = spawn_app().await;

    let response = reqwest::get(format!("http://{}/profile-photo.jpg", app.address))
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    assert!(response.bytes().await.unwrap().is_empty());
}

#[tokio::test]
#[serial]
async fn test_profile_photo_served_from_public_dir() {
    let app = spawn_app().await;

    let photo_bytes = b"\xff\xd8\xff\xe0 not a real jpeg";
    std::fs::write(app.public_dir.join("profile-photo.jpg"), photo_bytes).unwrap();

    let response = reqwest::get(format!("http://{}/profile-photo.jpg", app.address))
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "image/jpeg"
    );
    assert_eq!(response.bytes().await.unwrap().as_ref(), photo_bytes);
}

#[tokio::test]
#[serial]
async fn test_public_assets_served() {
    let app = spawn_app().await;

    std::fs::write(app.public_dir.join("banner.png"), b"png bytes").unwrap();

    let response = reqwest::get(format!("http://{}/public/banner.png", app.address))
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(response.bytes().await.unwrap().as_ref(), b"png bytes");

    let response = reqwest::get(format!("http://{}/public/missing.png", app.address))
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
#[serial]
async fn test_health_check() {
    let app = spawn_app().await;

    let response = reqwest::get(format!("http://{}/health", app.address))
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    app.db_pool.close().await;

    let response = reqwest::get(format!("http://{}/health", app.address))
        .await
        .unwrap();
    assert_eq!(
        response.status(),
        reqwest::StatusCode::SERVICE_UNAVAILABLE
    );
}
