mod common;

use axum::http::StatusCode;
use common::{parse_decimal, TestApp};
use rust_decimal_macros::dec;
use serde_json::json;

#[tokio::test]
async fn generating_cuts_beyond_warp_quantity_is_rejected() {
    let app = TestApp::new().await;
    let warp_id = app.seed_warp("V100", "100").await;

    // 40 + 40 + 40 exceeds the 100m warp.
    let (status, body) = app
        .post(
            &format!("/api/v1/warps/{warp_id}/fabric-cuts"),
            json!({ "quantities": ["40", "40", "40"] }),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{body}");
    assert!(body["message"].as_str().unwrap().contains("100"));

    // 40 + 40 + 20 fits exactly.
    let (status, body) = app
        .post(
            &format!("/api/v1/warps/{warp_id}/fabric-cuts"),
            json!({ "quantities": ["40", "40", "20"] }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    let numbers: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["fabric_number"].as_str().unwrap())
        .collect();
    assert_eq!(numbers, vec!["V100-1", "V100-2", "V100-3"]);
}

#[tokio::test]
async fn ceiling_holds_across_multiple_batches() {
    let app = TestApp::new().await;
    let warp_id = app.seed_warp("V101", "100").await;

    app.seed_cuts(warp_id, &["60"]).await;

    // 60 already cut; another 50 would overshoot.
    let (status, _) = app
        .post(
            &format!("/api/v1/warps/{warp_id}/fabric-cuts"),
            json!({ "quantities": ["50"] }),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // 40 lands exactly on the ceiling, and numbering continues at 2.
    let (status, body) = app
        .post(
            &format!("/api/v1/warps/{warp_id}/fabric-cuts"),
            json!({ "quantities": ["40"] }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body[0]["fabric_number"], "V101-2");
}

#[tokio::test]
async fn zero_or_negative_cut_quantities_are_rejected() {
    let app = TestApp::new().await;
    let warp_id = app.seed_warp("V102", "100").await;

    for bad in ["0", "-5"] {
        let (status, _) = app
            .post(
                &format!("/api/v1/warps/{warp_id}/fabric-cuts"),
                json!({ "quantities": [bad] }),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "quantity {bad} accepted");
    }
}

#[tokio::test]
async fn generating_cuts_for_missing_warp_is_not_found() {
    let app = TestApp::new().await;
    let (status, _) = app
        .post(
            &format!("/api/v1/warps/{}/fabric-cuts", uuid::Uuid::new_v4()),
            json!({ "quantities": ["10"] }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn new_cuts_start_at_the_production_site() {
    let app = TestApp::new().await;
    let warp_id = app.seed_warp("V103", "50").await;
    let (_, body) = app
        .post(
            &format!("/api/v1/warps/{warp_id}/fabric-cuts"),
            json!({ "quantities": ["25", "25"] }),
        )
        .await;
    for cut in body.as_array().unwrap() {
        assert_eq!(cut["location"], "Veerapandi");
    }
}

#[tokio::test]
async fn inspection_requires_the_cut_to_be_at_the_inspection_site() {
    let app = TestApp::new().await;
    let warp_id = app.seed_warp("V104", "50").await;
    let cut_ids = app.seed_cuts(warp_id, &["20"]).await;

    let (status, body) = app
        .put(
            &format!("/api/v1/fabric-cuts/{}/inspection", cut_ids[0]),
            json!({
                "inspected_quantity": "20",
                "mistake_quantity": "0",
                "mistakes": [],
                "inspector1": "Inspector A",
                "inspector2": "Inspector B",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT, "{body}");
    assert!(body["message"].as_str().unwrap().contains("Salem"));
}

#[tokio::test]
async fn inspection_computes_actual_quantity_and_clamps_at_zero() {
    let app = TestApp::new().await;
    let warp_id = app.seed_warp("V105", "100").await;
    let cut_ids = app.seed_cuts(warp_id, &["30", "10"]).await;
    app.relocate_to_inspection(&cut_ids).await;

    let (status, body) = app
        .put(
            &format!("/api/v1/fabric-cuts/{}/inspection", cut_ids[0]),
            json!({
                "inspected_quantity": "29.5",
                "mistake_quantity": "2.25",
                "mistakes": [{ "mistake": "selvedge", "quantity": "2.25" }],
                "inspector1": "Inspector A",
                "inspector2": "Inspector B",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(parse_decimal(&body["actual_quantity"]), dec!(27.25));

    // A mistake total above the inspected total clamps to zero rather
    // than going negative.
    let (status, body) = app
        .put(
            &format!("/api/v1/fabric-cuts/{}/inspection", cut_ids[1]),
            json!({
                "inspected_quantity": "5",
                "mistake_quantity": "8",
                "mistakes": [],
                "inspector1": "Inspector A",
                "inspector2": "Inspector B",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(parse_decimal(&body["actual_quantity"]), dec!(0));
}

#[tokio::test]
async fn re_inspection_overwrites_previous_values() {
    let app = TestApp::new().await;
    let warp_id = app.seed_warp("V106", "50").await;
    let cut_ids = app.seed_cuts(warp_id, &["20"]).await;
    app.relocate_to_inspection(&cut_ids).await;

    app.inspect_cut(cut_ids[0], "20", "1").await;

    // The edit path replaces, it never accumulates.
    let (status, body) = app
        .put(
            &format!("/api/v1/fabric-cuts/{}/inspection", cut_ids[0]),
            json!({
                "inspected_quantity": "19",
                "mistake_quantity": "0.5",
                "mistakes": [],
                "inspector1": "Inspector C",
                "inspector2": "Inspector D",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(parse_decimal(&body["inspected_quantity"]), dec!(19));
    assert_eq!(parse_decimal(&body["mistake_quantity"]), dec!(0.5));
    assert_eq!(parse_decimal(&body["actual_quantity"]), dec!(18.5));
    assert_eq!(body["inspector1"], "Inspector C");
}

#[tokio::test]
async fn lookup_by_fabric_number_round_trips() {
    let app = TestApp::new().await;
    let warp_id = app.seed_warp("V107", "50").await;
    let cut_ids = app.seed_cuts(warp_id, &["20", "30"]).await;

    let (status, body) = app.get("/api/v1/fabric-cuts/number/V107-2").await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(common::parse_uuid(&body["id"]), cut_ids[1]);
    assert_eq!(parse_decimal(&body["quantity"]), dec!(30));

    let (status, _) = app.get("/api/v1/fabric-cuts/number/V107-9").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
