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
use crate::entities::fabric_cut;
use crate::errors::ServiceError;
use crate::handlers::AppState;
use crate::services::fabric_cuts::{InspectionMistake, RecordInspectionInput};
use crate::services::processing::FabricCutUsage;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct GenerateFabricCutsRequest {
    #[validate(length(min = 1))]
    pub quantities: Vec<Decimal>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct InspectionMistakeRequest {
    pub mistake: String,
    pub quantity: Decimal,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RecordInspectionRequest {
    pub inspected_quantity: Decimal,
    pub mistake_quantity: Decimal,
    #[serde(default)]
    pub mistakes: Vec<InspectionMistakeRequest>,
    #[validate(length(min = 1))]
    pub inspector1: String,
    #[validate(length(min = 1))]
    pub inspector2: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FabricCutResponse {
    pub id: Uuid,
    pub fabric_number: String,
    pub warp_id: Uuid,
    pub quantity: Decimal,
    pub location: String,
    pub inspected_quantity: Option<Decimal>,
    pub mistake_quantity: Option<Decimal>,
    pub actual_quantity: Option<Decimal>,
    #[schema(value_type = Object)]
    pub mistakes: Option<serde_json::Value>,
    pub inspector1: Option<String>,
    pub inspector2: Option<String>,
    pub inspected_at: Option<DateTime<Utc>>,
    pub processing_order_id: Option<Uuid>,
    pub is_processing_received: bool,
    pub wage_invoice_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<fabric_cut::Model> for FabricCutResponse {
    fn from(model: fabric_cut::Model) -> Self {
        Self {
            id: model.id,
            fabric_number: model.fabric_number,
            warp_id: model.warp_id,
            quantity: model.quantity,
            location: model.location,
            inspected_quantity: model.inspected_quantity,
            mistake_quantity: model.mistake_quantity,
            actual_quantity: model.actual_quantity,
            mistakes: model.mistakes,
            inspector1: model.inspector1,
            inspector2: model.inspector2,
            inspected_at: model.inspected_at,
            processing_order_id: model.processing_order_id,
            is_processing_received: model.is_processing_received,
            wage_invoice_id: model.wage_invoice_id,
            created_at: model.created_at,
        }
    }
}

/// Generate fabric cuts for a warp
#[utoipa::path(
    post,
    path = "/api/v1/warps/{id}/fabric-cuts",
    params(("id" = Uuid, Path, description = "Warp id")),
    request_body = GenerateFabricCutsRequest,
    responses(
        (status = 201, description = "Cuts generated", body = [FabricCutResponse]),
        (status = 404, description = "Warp not found"),
        (status = 422, description = "Warp quantity ceiling exceeded")
    ),
    tag = "Fabric Cuts"
)]
pub async fn generate_fabric_cuts(
    State(state): State<AppState>,
    Path(warp_id): Path<Uuid>,
    Json(payload): Json<GenerateFabricCutsRequest>,
) -> Result<Response, ServiceError> {
    validate_input(&payload)?;
    let cuts = state
        .services
        .fabric_cuts
        .generate_cuts(warp_id, payload.quantities)
        .await?;
    let body: Vec<FabricCutResponse> = cuts.into_iter().map(FabricCutResponse::from).collect();
    Ok(created_response(body))
}

/// List a warp's fabric cuts
#[utoipa::path(
    get,
    path = "/api/v1/warps/{id}/fabric-cuts",
    params(("id" = Uuid, Path, description = "Warp id")),
    responses((status = 200, description = "The warp's cuts", body = [FabricCutResponse])),
    tag = "Fabric Cuts"
)]
pub async fn list_fabric_cuts(
    State(state): State<AppState>,
    Path(warp_id): Path<Uuid>,
) -> Result<Response, ServiceError> {
    let cuts = state
        .services
        .fabric_cuts
        .list_cuts_for_warp(warp_id)
        .await?;
    let body: Vec<FabricCutResponse> = cuts.into_iter().map(FabricCutResponse::from).collect();
    Ok(success_response(body))
}

/// Record a 4-point inspection on a fabric cut
#[utoipa::path(
    put,
    path = "/api/v1/fabric-cuts/{id}/inspection",
    params(("id" = Uuid, Path, description = "Fabric cut id")),
    request_body = RecordInspectionRequest,
    responses(
        (status = 200, description = "Inspection recorded", body = FabricCutResponse),
        (status = 404, description = "Fabric cut not found"),
        (status = 409, description = "Cut not at the inspection site or already claimed")
    ),
    tag = "Fabric Cuts"
)]
pub async fn record_inspection(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<RecordInspectionRequest>,
) -> Result<Response, ServiceError> {
    validate_input(&payload)?;
    let cut = state
        .services
        .fabric_cuts
        .record_inspection(
            id,
            RecordInspectionInput {
                inspected_quantity: payload.inspected_quantity,
                mistake_quantity: payload.mistake_quantity,
                mistakes: payload
                    .mistakes
                    .into_iter()
                    .map(|m| InspectionMistake {
                        mistake: m.mistake,
                        quantity: m.quantity,
                    })
                    .collect(),
                inspector1: payload.inspector1,
                inspector2: payload.inspector2,
            },
        )
        .await?;
    Ok(success_response(FabricCutResponse::from(cut)))
}

/// Look up a fabric cut by fabric number
#[utoipa::path(
    get,
    path = "/api/v1/fabric-cuts/number/{fabric_number}",
    params(("fabric_number" = String, Path, description = "Fabric number, e.g. V42-3")),
    responses(
        (status = 200, description = "The cut", body = FabricCutResponse),
        (status = 404, description = "Fabric cut not found")
    ),
    tag = "Fabric Cuts"
)]
pub async fn lookup_fabric_cut(
    State(state): State<AppState>,
    Path(fabric_number): Path<String>,
) -> Result<Response, ServiceError> {
    let cut = state.services.fabric_cuts.lookup(&fabric_number).await?;
    Ok(success_response(FabricCutResponse::from(cut)))
}

/// Check whether a cut is already held by a processing order
#[utoipa::path(
    get,
    path = "/api/v1/fabric-cuts/number/{fabric_number}/processing-usage",
    params(("fabric_number" = String, Path, description = "Fabric number")),
    responses(
        (status = 200, description = "Usage state", body = FabricCutUsage),
        (status = 404, description = "Fabric cut not found")
    ),
    tag = "Fabric Cuts"
)]
pub async fn check_processing_usage(
    State(state): State<AppState>,
    Path(fabric_number): Path<String>,
) -> Result<Response, ServiceError> {
    let usage = state
        .services
        .processing
        .check_fabric_cut_used(&fabric_number)
        .await?;
    Ok(success_response(usage))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/warps/{id}/fabric-cuts",
            post(generate_fabric_cuts).get(list_fabric_cuts),
        )
        .route("/fabric-cuts/number/{fabric_number}", get(lookup_fabric_cut))
        .route("/fabric-cuts/{id}/inspection", put(record_inspection))
        .route(
            "/fabric-cuts/number/{fabric_number}/processing-usage",
            get(check_processing_usage),
        )
}
