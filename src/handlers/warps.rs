use axum::{
    extract::{Path, State},
    response::Response,
    routing::{get, post, put},
    Json, Router,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::common::{created_response, success_response, validate_input};
use crate::entities::warp::{self, WarpStatus};
use crate::errors::ServiceError;
use crate::handlers::AppState;
use crate::services::warps::CreateWarpInput;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateWarpRequest {
    #[validate(length(min = 1))]
    pub warp_number: String,
    pub quantity: Decimal,
    pub order_ref: Option<String>,
    pub loom_ref: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateWarpStatusRequest {
    pub status: WarpStatus,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WarpResponse {
    pub id: Uuid,
    pub warp_number: String,
    pub quantity: Decimal,
    pub order_ref: Option<String>,
    pub loom_ref: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<warp::Model> for WarpResponse {
    fn from(model: warp::Model) -> Self {
        Self {
            id: model.id,
            warp_number: model.warp_number,
            quantity: model.quantity,
            order_ref: model.order_ref,
            loom_ref: model.loom_ref,
            status: model.status,
            created_at: model.created_at,
        }
    }
}

/// Create a warp
#[utoipa::path(
    post,
    path = "/api/v1/warps",
    request_body = CreateWarpRequest,
    responses(
        (status = 201, description = "Warp created", body = WarpResponse),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Warp number already exists")
    ),
    tag = "Warps"
)]
pub async fn create_warp(
    State(state): State<AppState>,
    Json(payload): Json<CreateWarpRequest>,
) -> Result<Response, ServiceError> {
    validate_input(&payload)?;
    let warp = state
        .services
        .warps
        .create_warp(CreateWarpInput {
            warp_number: payload.warp_number,
            quantity: payload.quantity,
            order_ref: payload.order_ref,
            loom_ref: payload.loom_ref,
        })
        .await?;
    Ok(created_response(WarpResponse::from(warp)))
}

/// List warps
#[utoipa::path(
    get,
    path = "/api/v1/warps",
    responses((status = 200, description = "All warps", body = [WarpResponse])),
    tag = "Warps"
)]
pub async fn list_warps(State(state): State<AppState>) -> Result<Response, ServiceError> {
    let warps = state.services.warps.list_warps().await?;
    let body: Vec<WarpResponse> = warps.into_iter().map(WarpResponse::from).collect();
    Ok(success_response(body))
}

/// Get a warp by id
#[utoipa::path(
    get,
    path = "/api/v1/warps/{id}",
    params(("id" = Uuid, Path, description = "Warp id")),
    responses(
        (status = 200, description = "The warp", body = WarpResponse),
        (status = 404, description = "Warp not found")
    ),
    tag = "Warps"
)]
pub async fn get_warp(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ServiceError> {
    let warp = state.services.warps.get_warp(id).await?;
    Ok(success_response(WarpResponse::from(warp)))
}

/// Update a warp's status
#[utoipa::path(
    put,
    path = "/api/v1/warps/{id}/status",
    params(("id" = Uuid, Path, description = "Warp id")),
    request_body = UpdateWarpStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = WarpResponse),
        (status = 404, description = "Warp not found"),
        (status = 409, description = "Transition not allowed")
    ),
    tag = "Warps"
)]
pub async fn update_warp_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateWarpStatusRequest>,
) -> Result<Response, ServiceError> {
    let warp = state
        .services
        .warps
        .update_status(id, payload.status)
        .await?;
    Ok(success_response(WarpResponse::from(warp)))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/warps", post(create_warp).get(list_warps))
        .route("/warps/{id}", get(get_warp))
        .route("/warps/{id}/status", put(update_warp_status))
}
