mod common;

use axum::http::StatusCode;
use common::{parse_decimal, parse_uuid, TestApp};
use rstest::rstest;
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use uuid::Uuid;

async fn seed_invoiceable_warp(app: &TestApp, warp_number: &str) -> Uuid {
    let warp_id = app.seed_warp(warp_number, "200").await;
    let cut_ids = app.seed_cuts(warp_id, &["60", "40"]).await;
    app.relocate_to_inspection(&cut_ids).await;
    app.inspect_cut(cut_ids[0], "60", "0").await;
    app.inspect_cut(cut_ids[1], "42", "2").await;
    warp_id
}

async fn submit(app: &TestApp, warp_id: Uuid, rate: &str) -> (StatusCode, Value) {
    app.post(
        "/api/v1/wage-invoices",
        json!({ "warp_id": warp_id, "rate_per_meter": rate }),
    )
    .await
}

#[tokio::test]
async fn submission_snapshots_inspected_cuts_and_computes_wages() {
    let app = TestApp::new().await;
    let warp_id = seed_invoiceable_warp(&app, "W1").await;

    let (status, body) = submit(&app, warp_id, "50").await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["status"], "pending");
    assert_eq!(body["invoice_number"], "AT/W1/1");
    // 60 + 42 inspected, 2 mistaken, 100 actual at 50/m.
    assert_eq!(parse_decimal(&body["total_inspected_quantity"]), dec!(102));
    assert_eq!(parse_decimal(&body["total_mistake_quantity"]), dec!(2));
    assert_eq!(parse_decimal(&body["total_actual_quantity"]), dec!(100));
    assert_eq!(parse_decimal(&body["total_wages"]), dec!(5000));
    assert_eq!(body["fabric_cuts"].as_array().unwrap().len(), 2);
    assert_eq!(body["values_updated_during_approval"], false);
}

#[tokio::test]
async fn approval_overwrite_recomputes_wages_and_flags_the_invoice() {
    let app = TestApp::new().await;
    let warp_id = seed_invoiceable_warp(&app, "W2").await;
    let (_, body) = submit(&app, warp_id, "50").await;
    let invoice_id = parse_uuid(&body["id"]);

    let (status, body) = app
        .post(
            &format!("/api/v1/wage-invoices/{invoice_id}/decision"),
            json!({
                "action": "approve",
                "updated_values": { "total_actual_quantity": "95" },
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["status"], "approved");
    assert_eq!(parse_decimal(&body["total_actual_quantity"]), dec!(95));
    assert_eq!(parse_decimal(&body["total_wages"]), dec!(4750));
    assert_eq!(body["values_updated_during_approval"], true);
    assert!(body["approved_at"].is_string());
}

#[tokio::test]
async fn approval_without_changes_keeps_the_flag_clear() {
    let app = TestApp::new().await;
    let warp_id = seed_invoiceable_warp(&app, "W3").await;
    let (_, body) = submit(&app, warp_id, "50").await;
    let invoice_id = parse_uuid(&body["id"]);

    let (status, body) = app
        .post(
            &format!("/api/v1/wage-invoices/{invoice_id}/decision"),
            json!({ "action": "approve" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["values_updated_during_approval"], false);
    assert_eq!(parse_decimal(&body["total_wages"]), dec!(5000));
}

#[tokio::test]
async fn rejection_takes_no_value_changes() {
    let app = TestApp::new().await;
    let warp_id = seed_invoiceable_warp(&app, "W4").await;
    let (_, body) = submit(&app, warp_id, "50").await;
    let invoice_id = parse_uuid(&body["id"]);

    let (status, _) = app
        .post(
            &format!("/api/v1/wage-invoices/{invoice_id}/decision"),
            json!({
                "action": "reject",
                "updated_values": { "total_actual_quantity": "95" },
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app
        .post(
            &format!("/api/v1/wage-invoices/{invoice_id}/decision"),
            json!({ "action": "reject" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["status"], "rejected");
}

/// Every transition outside `pending → approved → payment_done` and
/// `pending → rejected` is rejected.
#[rstest]
#[case::decide_after_approval("approved", "decision", json!({ "action": "approve" }))]
#[case::decide_after_rejection("rejected", "decision", json!({ "action": "reject" }))]
#[case::pay_while_pending("pending", "payment", Value::Null)]
#[case::pay_after_rejection("rejected", "payment", Value::Null)]
#[tokio::test]
async fn illegal_status_transitions_are_conflicts(
    #[case] start_state: &str,
    #[case] operation: &str,
    #[case] payload: Value,
) {
    let app = TestApp::new().await;
    let warp_id = seed_invoiceable_warp(&app, "W5").await;
    let (_, body) = submit(&app, warp_id, "50").await;
    let invoice_id = parse_uuid(&body["id"]);

    // Drive the invoice into the starting state.
    match start_state {
        "pending" => {}
        "approved" => {
            let (status, _) = app
                .post(
                    &format!("/api/v1/wage-invoices/{invoice_id}/decision"),
                    json!({ "action": "approve" }),
                )
                .await;
            assert_eq!(status, StatusCode::OK);
        }
        "rejected" => {
            let (status, _) = app
                .post(
                    &format!("/api/v1/wage-invoices/{invoice_id}/decision"),
                    json!({ "action": "reject" }),
                )
                .await;
            assert_eq!(status, StatusCode::OK);
        }
        other => panic!("unknown start state {other}"),
    }

    let uri = format!("/api/v1/wage-invoices/{invoice_id}/{operation}");
    let (status, body) = if payload.is_null() {
        app.post(&uri, json!({})).await
    } else {
        app.post(&uri, payload).await
    };
    assert_eq!(status, StatusCode::CONFLICT, "{body}");
}

#[tokio::test]
async fn paid_invoices_are_terminal() {
    let app = TestApp::new().await;
    let warp_id = seed_invoiceable_warp(&app, "W6").await;
    let (_, body) = submit(&app, warp_id, "50").await;
    let invoice_id = parse_uuid(&body["id"]);

    app.post(
        &format!("/api/v1/wage-invoices/{invoice_id}/decision"),
        json!({ "action": "approve" }),
    )
    .await;
    let (status, body) = app
        .post(&format!("/api/v1/wage-invoices/{invoice_id}/payment"), json!({}))
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["status"], "payment_done");
    assert!(body["paid_at"].is_string());

    // Neither payment again nor deletion is possible now.
    let (status, _) = app
        .post(&format!("/api/v1/wage-invoices/{invoice_id}/payment"), json!({}))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    let (status, _) = app
        .delete(&format!("/api/v1/wage-invoices/{invoice_id}"))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn cuts_are_locked_until_the_invoice_is_deleted() {
    let app = TestApp::new().await;
    let warp_id = seed_invoiceable_warp(&app, "W7").await;
    let (_, body) = submit(&app, warp_id, "50").await;
    let invoice_id = parse_uuid(&body["id"]);

    // A second submission finds every inspected cut locked.
    let (status, body) = submit(&app, warp_id, "55").await;
    assert_eq!(status, StatusCode::CONFLICT, "{body}");
    assert!(body["message"].as_str().unwrap().contains("AT/W7/1"));

    let (status, _) = app
        .delete(&format!("/api/v1/wage-invoices/{invoice_id}"))
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // Deletion released the cuts; resubmission mints the next number.
    let (status, body) = submit(&app, warp_id, "55").await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["invoice_number"], "AT/W7/2");
}

#[tokio::test]
async fn deleting_a_rejected_invoice_reenables_submission() {
    let app = TestApp::new().await;
    let warp_id = seed_invoiceable_warp(&app, "W8").await;
    let (_, body) = submit(&app, warp_id, "50").await;
    let invoice_id = parse_uuid(&body["id"]);

    app.post(
        &format!("/api/v1/wage-invoices/{invoice_id}/decision"),
        json!({ "action": "reject" }),
    )
    .await;
    let (status, _) = app
        .delete(&format!("/api/v1/wage-invoices/{invoice_id}"))
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = submit(&app, warp_id, "50").await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn submission_requires_inspected_cuts() {
    let app = TestApp::new().await;
    let warp_id = app.seed_warp("W9", "100").await;
    app.seed_cuts(warp_id, &["50"]).await;

    let (status, body) = submit(&app, warp_id, "50").await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
}

#[tokio::test]
async fn invoices_are_listable_by_status() {
    let app = TestApp::new().await;
    let first_warp = seed_invoiceable_warp(&app, "W10").await;
    let second_warp = seed_invoiceable_warp(&app, "W11").await;

    let (_, first) = submit(&app, first_warp, "50").await;
    submit(&app, second_warp, "50").await;

    let invoice_id = parse_uuid(&first["id"]);
    app.post(
        &format!("/api/v1/wage-invoices/{invoice_id}/decision"),
        json!({ "action": "approve" }),
    )
    .await;

    let (status, body) = app.get("/api/v1/wage-invoices?status=pending").await;
    assert_eq!(status, StatusCode::OK);
    let pending = body.as_array().unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0]["invoice_number"], "AT/W11/1");

    let (_, body) = app.get("/api/v1/wage-invoices?status=approved").await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}
