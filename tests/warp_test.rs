mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn warp_numbers_are_unique() {
    let app = TestApp::new().await;
    app.seed_warp("U1", "100").await;

    let (status, _) = app
        .post(
            "/api/v1/warps",
            json!({ "warp_number": "U1", "quantity": "50" }),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn warp_quantity_must_be_positive() {
    let app = TestApp::new().await;
    let (status, _) = app
        .post(
            "/api/v1/warps",
            json!({ "warp_number": "U2", "quantity": "0" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn warp_status_moves_between_active_and_stopped_until_complete() {
    let app = TestApp::new().await;
    let warp_id = app.seed_warp("U3", "100").await;

    for (target, expected) in [
        ("stopped", StatusCode::OK),
        ("active", StatusCode::OK),
        ("complete", StatusCode::OK),
        // Completed warps never change status again.
        ("active", StatusCode::CONFLICT),
        ("stopped", StatusCode::CONFLICT),
    ] {
        let (status, body) = app
            .put(
                &format!("/api/v1/warps/{warp_id}/status"),
                json!({ "status": target }),
            )
            .await;
        assert_eq!(status, expected, "moving to {target}: {body}");
    }
}

#[tokio::test]
async fn warps_are_listable_and_fetchable() {
    let app = TestApp::new().await;
    let warp_id = app.seed_warp("U4", "75").await;

    let (status, body) = app.get(&format!("/api/v1/warps/{warp_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["warp_number"], "U4");
    assert_eq!(body["status"], "active");

    let (status, body) = app.get("/api/v1/warps").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn health_endpoint_reports_database_state() {
    let app = TestApp::new().await;
    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "up");
    assert_eq!(body["database"], "up");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = TestApp::new().await;
    let (status, body) = app.get("/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "Loomledger API");
    assert!(body["paths"]["/api/v1/warps"].is_object());
}
