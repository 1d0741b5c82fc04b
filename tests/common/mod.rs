// Not every test binary exercises every helper.
#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use loomledger_api::{config::AppConfig, db, events, AppState};

/// Helper harness for spinning up an application state backed by an
/// in-memory SQLite database.
pub struct TestApp {
    router: Router,
    pub state: AppState,
    _event_task: tokio::task::JoinHandle<()>,
}

impl TestApp {
    /// Construct a new test application with fresh database state.
    pub async fn new() -> Self {
        let mut cfg = AppConfig::new(
            "sqlite::memory:".to_string(),
            "127.0.0.1".to_string(),
            18_080,
            "test".to_string(),
        );
        // A single connection keeps every request on the same in-memory
        // database.
        cfg.db_max_connections = 1;
        cfg.db_min_connections = 1;

        let pool = db::establish_connection_from_app_config(&cfg)
            .await
            .expect("failed to create test database");
        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations in tests");

        let (event_sender, event_rx) = events::channel(256);
        let event_task = tokio::spawn(events::process_events(event_rx));

        let state = AppState::new(Arc::new(pool), cfg, event_sender);
        let router = loomledger_api::app_router(state.clone());

        Self {
            router,
            state,
            _event_task: event_task,
        }
    }

    /// Send a request against the router, returning status and parsed body.
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);

        let body = if let Some(json) = body {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).expect("failed to serialize json request body"))
        } else {
            Body::empty()
        };

        let request = builder.body(body).expect("failed to build request");
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during test request");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("response body was not json")
        };
        (status, value)
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, Some(body)).await
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, None).await
    }

    /// Seed a warp and return its id.
    pub async fn seed_warp(&self, warp_number: &str, quantity: &str) -> Uuid {
        let (status, body) = self
            .post(
                "/api/v1/warps",
                json!({ "warp_number": warp_number, "quantity": quantity }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "seed warp failed: {body}");
        parse_uuid(&body["id"])
    }

    /// Seed fabric cuts on a warp and return their ids in order.
    pub async fn seed_cuts(&self, warp_id: Uuid, quantities: &[&str]) -> Vec<Uuid> {
        let (status, body) = self
            .post(
                &format!("/api/v1/warps/{warp_id}/fabric-cuts"),
                json!({ "quantities": quantities }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "seed cuts failed: {body}");
        body.as_array()
            .expect("cut list")
            .iter()
            .map(|cut| parse_uuid(&cut["id"]))
            .collect()
    }

    /// Move cuts from the production site to the inspection site by
    /// creating and immediately receiving a movement.
    pub async fn relocate_to_inspection(&self, cut_ids: &[Uuid]) {
        let (status, body) = self
            .post(
                "/api/v1/movements",
                json!({
                    "fabric_cut_ids": cut_ids,
                    "from_location": "Veerapandi",
                    "to_location": "Salem",
                    "moved_by": "Mover",
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create movement failed: {body}");
        let movement_id = parse_uuid(&body["id"]);

        let (status, body) = self
            .post(
                &format!("/api/v1/movements/{movement_id}/receive"),
                json!({ "received_by": "Receiver" }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "receive movement failed: {body}");
    }

    /// Record an inspection with no mistakes on one cut.
    pub async fn inspect_cut(&self, cut_id: Uuid, inspected: &str, mistake: &str) {
        let (status, body) = self
            .put(
                &format!("/api/v1/fabric-cuts/{cut_id}/inspection"),
                json!({
                    "inspected_quantity": inspected,
                    "mistake_quantity": mistake,
                    "mistakes": [],
                    "inspector1": "Inspector A",
                    "inspector2": "Inspector B",
                }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "inspection failed: {body}");
    }

    /// Full path from generation to inspected cuts at the dispatch site.
    pub async fn seed_inspected_cuts(
        &self,
        warp_id: Uuid,
        quantities: &[&str],
    ) -> Vec<Uuid> {
        let cut_ids = self.seed_cuts(warp_id, quantities).await;
        self.relocate_to_inspection(&cut_ids).await;
        for (cut_id, quantity) in cut_ids.iter().zip(quantities.iter()) {
            self.inspect_cut(*cut_id, quantity, "0").await;
        }
        cut_ids
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self._event_task.abort();
    }
}

/// Parse a uuid out of a json string value.
pub fn parse_uuid(value: &Value) -> Uuid {
    value
        .as_str()
        .and_then(|s| Uuid::parse_str(s).ok())
        .unwrap_or_else(|| panic!("expected uuid, got {value}"))
}

/// Parse a decimal out of a json value (serialized as a string).
pub fn parse_decimal(value: &Value) -> Decimal {
    match value {
        Value::String(s) => s.parse().unwrap_or_else(|_| panic!("bad decimal {s}")),
        Value::Number(n) => n
            .to_string()
            .parse()
            .unwrap_or_else(|_| panic!("bad decimal {n}")),
        other => panic!("expected decimal, got {other}"),
    }
}
