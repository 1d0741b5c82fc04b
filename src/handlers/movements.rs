use axum::{
    extract::{Path, Query, State},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::common::{created_response, success_response, validate_input};
use super::fabric_cuts::FabricCutResponse;
use crate::entities::movement::{self, MovementStatus};
use crate::entities::Location;
use crate::errors::ServiceError;
use crate::handlers::AppState;
use crate::services::movements::MovementDetail;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMovementRequest {
    #[validate(length(min = 1))]
    pub fabric_cut_ids: Vec<Uuid>,
    pub from_location: Location,
    pub to_location: Location,
    #[validate(length(min = 1))]
    pub moved_by: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ReceiveMovementRequest {
    #[validate(length(min = 1))]
    pub received_by: String,
}

#[derive(Debug, Deserialize)]
pub struct MovementListParams {
    pub status: Option<MovementStatus>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MovementResponse {
    pub id: Uuid,
    pub movement_order_number: String,
    pub from_location: String,
    pub to_location: String,
    pub moved_by: String,
    pub status: String,
    pub received_by: Option<String>,
    pub received_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub fabric_cuts: Vec<FabricCutResponse>,
}

impl From<MovementDetail> for MovementResponse {
    fn from(detail: MovementDetail) -> Self {
        Self {
            id: detail.movement.id,
            movement_order_number: detail.movement.movement_order_number,
            from_location: detail.movement.from_location,
            to_location: detail.movement.to_location,
            moved_by: detail.movement.moved_by,
            status: detail.movement.status,
            received_by: detail.movement.received_by,
            received_at: detail.movement.received_at,
            created_at: detail.movement.created_at,
            fabric_cuts: detail
                .cuts
                .into_iter()
                .map(FabricCutResponse::from)
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MovementSummaryResponse {
    pub id: Uuid,
    pub movement_order_number: String,
    pub from_location: String,
    pub to_location: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<movement::Model> for MovementSummaryResponse {
    fn from(model: movement::Model) -> Self {
        Self {
            id: model.id,
            movement_order_number: model.movement_order_number,
            from_location: model.from_location,
            to_location: model.to_location,
            status: model.status,
            created_at: model.created_at,
        }
    }
}

/// Create a movement order
#[utoipa::path(
    post,
    path = "/api/v1/movements",
    request_body = CreateMovementRequest,
    responses(
        (status = 201, description = "Movement opened", body = MovementResponse),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "A cut is elsewhere or already in transit")
    ),
    tag = "Movements"
)]
pub async fn create_movement(
    State(state): State<AppState>,
    Json(payload): Json<CreateMovementRequest>,
) -> Result<Response, ServiceError> {
    validate_input(&payload)?;
    let detail = state
        .services
        .movements
        .create_movement(
            payload.fabric_cut_ids,
            payload.from_location,
            payload.to_location,
            payload.moved_by,
        )
        .await?;
    Ok(created_response(MovementResponse::from(detail)))
}

/// Receive a pending movement
#[utoipa::path(
    post,
    path = "/api/v1/movements/{id}/receive",
    params(("id" = Uuid, Path, description = "Movement id")),
    request_body = ReceiveMovementRequest,
    responses(
        (status = 200, description = "Movement received, cuts relocated", body = MovementResponse),
        (status = 404, description = "Movement not found"),
        (status = 409, description = "Movement already received")
    ),
    tag = "Movements"
)]
pub async fn receive_movement(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ReceiveMovementRequest>,
) -> Result<Response, ServiceError> {
    validate_input(&payload)?;
    let detail = state
        .services
        .movements
        .receive(id, payload.received_by)
        .await?;
    Ok(success_response(MovementResponse::from(detail)))
}

/// Get a movement with its cuts
#[utoipa::path(
    get,
    path = "/api/v1/movements/{id}",
    params(("id" = Uuid, Path, description = "Movement id")),
    responses(
        (status = 200, description = "The movement", body = MovementResponse),
        (status = 404, description = "Movement not found")
    ),
    tag = "Movements"
)]
pub async fn get_movement(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ServiceError> {
    let detail = state.services.movements.get_movement(id).await?;
    Ok(success_response(MovementResponse::from(detail)))
}

/// List movements, optionally by status
#[utoipa::path(
    get,
    path = "/api/v1/movements",
    params(("status" = Option<String>, Query, description = "pending or received")),
    responses((status = 200, description = "Movements", body = [MovementSummaryResponse])),
    tag = "Movements"
)]
pub async fn list_movements(
    State(state): State<AppState>,
    Query(params): Query<MovementListParams>,
) -> Result<Response, ServiceError> {
    let movements = state.services.movements.list_movements(params.status).await?;
    let body: Vec<MovementSummaryResponse> = movements
        .into_iter()
        .map(MovementSummaryResponse::from)
        .collect();
    Ok(success_response(body))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/movements", post(create_movement).get(list_movements))
        .route("/movements/{id}", get(get_movement))
        .route("/movements/{id}/receive", post(receive_movement))
}
