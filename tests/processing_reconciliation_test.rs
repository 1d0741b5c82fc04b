mod common;

use axum::http::StatusCode;
use common::{parse_decimal, parse_uuid, TestApp};
use rust_decimal_macros::dec;
use serde_json::json;
use uuid::Uuid;

async fn send_order(app: &TestApp, cut_ids: &[Uuid]) -> (Uuid, serde_json::Value) {
    let (status, body) = app
        .post(
            "/api/v1/processing-orders",
            json!({
                "fabric_cut_ids": cut_ids,
                "processing_center": "Salem Dyeing Works",
                "processes": ["dyeing", "calendering"],
                "vehicle_number": "TN-30-1234",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "send failed: {body}");
    (parse_uuid(&body["id"]), body)
}

#[tokio::test]
async fn partial_deliveries_reconcile_to_completion() {
    let app = TestApp::new().await;
    let warp_id = app.seed_warp("P1", "100").await;
    // Three cuts totaling 30m after inspection.
    let cut_ids = app.seed_inspected_cuts(warp_id, &["10", "12", "8"]).await;
    let (order_id, body) = send_order(&app, &cut_ids).await;
    assert_eq!(body["status"], "sent");
    assert_eq!(parse_decimal(&body["total_quantity"]), dec!(30));
    let order_seq = body["order_form_number"]
        .as_str()
        .unwrap()
        .trim_start_matches('0')
        .to_string();

    // 10 + 25 overshoots the 30m sent.
    let (status, body) = app
        .post(
            &format!("/api/v1/processing-orders/{order_id}/deliveries"),
            json!({
                "delivery_number": "DN-1",
                "received_by": "Store",
                "location": "Salem",
                "cut_quantities": ["10", "25"],
            }),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{body}");

    // 10 + 15 fits and leaves the order partially received.
    let (status, body) = app
        .post(
            &format!("/api/v1/processing-orders/{order_id}/deliveries"),
            json!({
                "delivery_number": "DN-1",
                "received_by": "Store",
                "location": "Salem",
                "cut_quantities": ["10", "15"],
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["status"], "partially_received");
    let numbers: Vec<&str> = body["deliveries"][0]["received_cuts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["fabric_number"].as_str().unwrap())
        .collect();
    assert_eq!(
        numbers,
        vec![
            format!("WR/{order_seq}/01").as_str(),
            format!("WR/{order_seq}/02").as_str()
        ]
    );
    assert_eq!(parse_decimal(&body["summary"]["received_quantity"]), dec!(25));
    assert_eq!(parse_decimal(&body["summary"]["shortage_quantity"]), dec!(5));

    // The final 5m completes the order.
    let (status, body) = app
        .post(
            &format!("/api/v1/processing-orders/{order_id}/deliveries"),
            json!({
                "delivery_number": "DN-2",
                "received_by": "Store",
                "location": "Salem",
                "cut_quantities": ["5"],
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["status"], "completed");
    assert_eq!(
        body["deliveries"][1]["received_cuts"][0]["fabric_number"],
        format!("WR/{order_seq}/03")
    );
    assert_eq!(parse_decimal(&body["summary"]["shortage_quantity"]), dec!(0));
    assert_eq!(body["summary"]["shortage_count"], 0);

    // Completion reflects onto the source cuts.
    let (_, cut) = app.get("/api/v1/fabric-cuts/number/P1-1").await;
    assert_eq!(cut["is_processing_received"], true);
}

#[tokio::test]
async fn delivery_cut_count_cannot_exceed_sent_count() {
    let app = TestApp::new().await;
    let warp_id = app.seed_warp("P2", "100").await;
    let cut_ids = app.seed_inspected_cuts(warp_id, &["10", "10"]).await;
    let (order_id, _) = send_order(&app, &cut_ids).await;

    let (status, body) = app
        .post(
            &format!("/api/v1/processing-orders/{order_id}/deliveries"),
            json!({
                "delivery_number": "DN-1",
                "received_by": "Store",
                "location": "Salem",
                "cut_quantities": ["5", "5", "5"],
            }),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{body}");
}

#[tokio::test]
async fn send_requires_inspection() {
    let app = TestApp::new().await;
    let warp_id = app.seed_warp("P3", "50").await;
    let cut_ids = app.seed_cuts(warp_id, &["50"]).await;

    let (status, body) = app
        .post(
            "/api/v1/processing-orders",
            json!({
                "fabric_cut_ids": cut_ids,
                "processing_center": "Salem Dyeing Works",
                "processes": ["dyeing"],
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT, "{body}");
    assert!(body["message"].as_str().unwrap().contains("inspection"));
}

#[tokio::test]
async fn a_cut_is_claimed_by_at_most_one_order_for_life() {
    let app = TestApp::new().await;
    let warp_id = app.seed_warp("P4", "100").await;
    let cut_ids = app.seed_inspected_cuts(warp_id, &["10", "10"]).await;

    let (_, first) = send_order(&app, &cut_ids[..1]).await;

    // The same cut in a second order names the holder.
    let (status, body) = app
        .post(
            "/api/v1/processing-orders",
            json!({
                "fabric_cut_ids": [cut_ids[0]],
                "processing_center": "Another Center",
                "processes": ["bleaching"],
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT, "{body}");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains(first["order_form_number"].as_str().unwrap()));

    // The usage guard reports the same holder.
    let (status, usage) = app
        .get("/api/v1/fabric-cuts/number/P4-1/processing-usage")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(usage["is_used"], true);
    assert_eq!(usage["order_form_number"], first["order_form_number"]);

    let (_, usage) = app
        .get("/api/v1/fabric-cuts/number/P4-2/processing-usage")
        .await;
    assert_eq!(usage["is_used"], false);
}

#[tokio::test]
async fn concurrent_overlapping_sends_claim_each_cut_exactly_once() {
    let app = TestApp::new().await;
    let warp_id = app.seed_warp("P5", "100").await;
    let cut_ids = app.seed_inspected_cuts(warp_id, &["10", "10", "10"]).await;

    let processing = app.state.services.processing.clone();
    let mut tasks = Vec::new();
    for center in ["Center One", "Center Two"] {
        let processing = processing.clone();
        let cut_ids = cut_ids.clone();
        let center = center.to_string();
        tasks.push(tokio::spawn(async move {
            processing
                .send(loomledger_api::services::processing::SendToProcessingInput {
                    fabric_cut_ids: cut_ids,
                    processing_center: center,
                    processes: vec!["dyeing".to_string()],
                    vehicle_number: None,
                    delivery_date: None,
                })
                .await
                .is_ok()
        }));
    }

    let mut successes = 0;
    for task in tasks {
        if task.await.expect("send task panicked") {
            successes += 1;
        }
    }
    assert_eq!(successes, 1, "exactly one racing send may win");

    // All three cuts point at the single surviving order.
    let (_, orders) = app.get("/api/v1/processing-orders").await;
    assert_eq!(orders.as_array().unwrap().len(), 1);
    for number in ["P5-1", "P5-2", "P5-3"] {
        let (_, usage) = app
            .get(&format!("/api/v1/fabric-cuts/number/{number}/processing-usage"))
            .await;
        assert_eq!(usage["is_used"], true);
    }
}

#[tokio::test]
async fn editing_a_delivery_revalidates_against_the_other_deliveries() {
    let app = TestApp::new().await;
    let warp_id = app.seed_warp("P6", "100").await;
    let cut_ids = app.seed_inspected_cuts(warp_id, &["10", "12", "8"]).await;
    let (order_id, _) = send_order(&app, &cut_ids).await;

    for (number, quantities) in [("DN-1", vec!["10", "12"]), ("DN-2", vec!["6"])] {
        let (status, _) = app
            .post(
                &format!("/api/v1/processing-orders/{order_id}/deliveries"),
                json!({
                    "delivery_number": number,
                    "received_by": "Store",
                    "location": "Salem",
                    "cut_quantities": quantities,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    // Raising the first delivery to 25m would overshoot 30m once the
    // other delivery's 6m is counted.
    let (status, body) = app
        .put(
            &format!("/api/v1/processing-orders/{order_id}/deliveries/0"),
            json!({
                "delivery_number": "DN-1-corrected",
                "received_by": "Store",
                "location": "Salem",
                "cut_quantities": ["13", "12"],
            }),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{body}");

    // Within the ceiling the edit replaces in place and keeps numbers.
    let (status, body) = app
        .put(
            &format!("/api/v1/processing-orders/{order_id}/deliveries/0"),
            json!({
                "delivery_number": "DN-1-corrected",
                "received_by": "Store",
                "location": "Salem",
                "cut_quantities": ["9", "11"],
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    let edited = &body["deliveries"][0];
    assert_eq!(edited["delivery_number"], "DN-1-corrected");
    assert_eq!(parse_decimal(&edited["total_quantity_received"]), dec!(20));
    let seqs: Vec<i64> = edited["received_cuts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["cut_seq"].as_i64().unwrap())
        .collect();
    assert_eq!(seqs, vec![1, 2]);

    // Changing the cut count through an edit is rejected.
    let (status, _) = app
        .put(
            &format!("/api/v1/processing-orders/{order_id}/deliveries/0"),
            json!({
                "delivery_number": "DN-1",
                "received_by": "Store",
                "location": "Salem",
                "cut_quantities": ["20"],
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn deleted_delivery_numbers_are_never_reissued() {
    let app = TestApp::new().await;
    let warp_id = app.seed_warp("P7", "100").await;
    let cut_ids = app.seed_inspected_cuts(warp_id, &["10", "12", "8"]).await;
    let (order_id, body) = send_order(&app, &cut_ids).await;
    let order_seq = body["order_form_number"]
        .as_str()
        .unwrap()
        .trim_start_matches('0')
        .to_string();

    let (_, body) = app
        .post(
            &format!("/api/v1/processing-orders/{order_id}/deliveries"),
            json!({
                "delivery_number": "DN-1",
                "received_by": "Store",
                "location": "Salem",
                "cut_quantities": ["10", "12"],
            }),
        )
        .await;
    assert_eq!(body["status"], "partially_received");

    // Deleting the only delivery drops the order back to sent.
    let (status, body) = app
        .delete(&format!("/api/v1/processing-orders/{order_id}/deliveries/0"))
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["status"], "sent");
    assert_eq!(body["summary"]["received_count"], 0);

    // The cursor never rewinds: the next delivery starts at 03.
    let (status, body) = app
        .post(
            &format!("/api/v1/processing-orders/{order_id}/deliveries"),
            json!({
                "delivery_number": "DN-2",
                "received_by": "Store",
                "location": "Salem",
                "cut_quantities": ["9"],
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(
        body["deliveries"][0]["received_cuts"][0]["fabric_number"],
        format!("WR/{order_seq}/03")
    );
}

#[tokio::test]
async fn order_form_numbers_are_five_digit_sequences() {
    let app = TestApp::new().await;
    let warp_id = app.seed_warp("P8", "100").await;
    let cut_ids = app.seed_inspected_cuts(warp_id, &["10", "10"]).await;

    let (_, first) = send_order(&app, &cut_ids[..1]).await;
    let (_, second) = send_order(&app, &cut_ids[1..]).await;
    assert_eq!(first["order_form_number"], "00001");
    assert_eq!(second["order_form_number"], "00002");
}

#[tokio::test]
async fn mixing_cuts_from_two_source_orders_warns_but_commits() {
    let app = TestApp::new().await;

    let mut cut_ids = Vec::new();
    for (warp_number, order_ref) in [("P10A", "ORD-1"), ("P10B", "ORD-2")] {
        let (status, body) = app
            .post(
                "/api/v1/warps",
                json!({
                    "warp_number": warp_number,
                    "quantity": "50",
                    "order_ref": order_ref,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        let warp_id = parse_uuid(&body["id"]);
        cut_ids.extend(app.seed_inspected_cuts(warp_id, &["10"]).await);
    }

    let (status, body) = app
        .post(
            "/api/v1/processing-orders",
            json!({
                "fabric_cut_ids": cut_ids,
                "processing_center": "Salem Dyeing Works",
                "processes": ["dyeing"],
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["mixed_order_warning"], true);
    assert_eq!(body["status"], "sent");
}

#[tokio::test]
async fn sent_quantity_is_frozen_at_dispatch() {
    let app = TestApp::new().await;
    let warp_id = app.seed_warp("P9", "100").await;
    let cut_ids = app.seed_inspected_cuts(warp_id, &["10"]).await;
    let (order_id, body) = send_order(&app, &cut_ids).await;
    assert_eq!(parse_decimal(&body["total_quantity"]), dec!(10));

    // The snapshot quantity is the inspected quantity at send time.
    assert_eq!(
        parse_decimal(&body["sent_cuts"][0]["quantity"]),
        dec!(10)
    );
    let (_, detail) = app
        .get(&format!("/api/v1/processing-orders/{order_id}"))
        .await;
    assert_eq!(parse_decimal(&detail["total_quantity"]), dec!(10));
}
