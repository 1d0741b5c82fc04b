use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{db, AppState};

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    pub timestamp: String,
}

/// Liveness plus a database ping. Degrades to 503 when the store is
/// unreachable, since every ledger operation needs it.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let (status_code, database) = match db::check_connection(&state.db).await {
        Ok(()) => (StatusCode::OK, "up"),
        Err(_) => (StatusCode::SERVICE_UNAVAILABLE, "down"),
    };

    let body = HealthResponse {
        status: if status_code == StatusCode::OK {
            "up".to_string()
        } else {
            "degraded".to_string()
        },
        database: database.to_string(),
        timestamp: Utc::now().to_rfc3339(),
    };

    (status_code, Json(body))
}
