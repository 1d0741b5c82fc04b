use axum::{
    extract::{Path, State},
    response::Response,
    routing::{get, post, put},
    Json, Router,
};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::common::{created_response, success_response, validate_input};
use crate::entities::processing_order;
use crate::errors::ServiceError;
use crate::handlers::AppState;
use crate::services::processing::{
    EditDeliveryInput, ProcessingOrderDetail, ReceiveDeliveryInput, ReconciliationSummary,
    SendToProcessingInput,
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SendToProcessingRequest {
    #[validate(length(min = 1))]
    pub fabric_cut_ids: Vec<Uuid>,
    #[validate(length(min = 1))]
    pub processing_center: String,
    #[validate(length(min = 1))]
    pub processes: Vec<String>,
    pub vehicle_number: Option<String>,
    pub delivery_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ReceiveDeliveryRequest {
    #[validate(length(min = 1))]
    pub delivery_number: String,
    #[validate(length(min = 1))]
    pub received_by: String,
    #[validate(length(min = 1))]
    pub location: String,
    #[validate(length(min = 1))]
    pub cut_quantities: Vec<Decimal>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct EditDeliveryRequest {
    #[validate(length(min = 1))]
    pub delivery_number: String,
    #[validate(length(min = 1))]
    pub received_by: String,
    #[validate(length(min = 1))]
    pub location: String,
    #[validate(length(min = 1))]
    pub cut_quantities: Vec<Decimal>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SentCutResponse {
    pub fabric_cut_id: Uuid,
    pub fabric_number: String,
    pub warp_number: String,
    pub quantity: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReceivedCutResponse {
    pub id: Uuid,
    pub cut_seq: i32,
    pub fabric_number: String,
    pub quantity: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeliveryResponse {
    pub delivery_seq: i32,
    pub delivery_number: String,
    pub received_by: String,
    pub location: String,
    pub cuts_received: i32,
    pub total_quantity_received: Decimal,
    pub received_at: DateTime<Utc>,
    pub received_cuts: Vec<ReceivedCutResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProcessingOrderResponse {
    pub id: Uuid,
    pub order_form_number: String,
    pub processing_center: String,
    pub processes: Vec<String>,
    pub vehicle_number: Option<String>,
    pub delivery_date: Option<NaiveDate>,
    pub total_quantity: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub sent_cuts: Vec<SentCutResponse>,
    pub deliveries: Vec<DeliveryResponse>,
    pub summary: ReconciliationSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mixed_order_warning: Option<bool>,
}

impl ProcessingOrderResponse {
    fn from_detail(detail: ProcessingOrderDetail, mixed_order_warning: Option<bool>) -> Self {
        let processes = detail
            .order
            .processes
            .as_array()
            .map(|values| {
                values
                    .iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default();
        Self {
            id: detail.order.id,
            order_form_number: detail.order.order_form_number,
            processing_center: detail.order.processing_center,
            processes,
            vehicle_number: detail.order.vehicle_number,
            delivery_date: detail.order.delivery_date,
            total_quantity: detail.order.total_quantity,
            status: detail.order.status,
            created_at: detail.order.created_at,
            sent_cuts: detail
                .sent_cuts
                .into_iter()
                .map(|c| SentCutResponse {
                    fabric_cut_id: c.fabric_cut_id,
                    fabric_number: c.fabric_number,
                    warp_number: c.warp_number,
                    quantity: c.quantity,
                })
                .collect(),
            deliveries: detail
                .deliveries
                .into_iter()
                .map(|d| DeliveryResponse {
                    delivery_seq: d.delivery.delivery_seq,
                    delivery_number: d.delivery.delivery_number,
                    received_by: d.delivery.received_by,
                    location: d.delivery.location,
                    cuts_received: d.delivery.cuts_received,
                    total_quantity_received: d.delivery.total_quantity_received,
                    received_at: d.delivery.received_at,
                    received_cuts: d
                        .received_cuts
                        .into_iter()
                        .map(|c| ReceivedCutResponse {
                            id: c.id,
                            cut_seq: c.cut_seq,
                            fabric_number: c.fabric_number,
                            quantity: c.quantity,
                        })
                        .collect(),
                })
                .collect(),
            summary: detail.summary,
            mixed_order_warning,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProcessingOrderSummaryResponse {
    pub id: Uuid,
    pub order_form_number: String,
    pub processing_center: String,
    pub total_quantity: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<processing_order::Model> for ProcessingOrderSummaryResponse {
    fn from(model: processing_order::Model) -> Self {
        Self {
            id: model.id,
            order_form_number: model.order_form_number,
            processing_center: model.processing_center,
            total_quantity: model.total_quantity,
            status: model.status,
            created_at: model.created_at,
        }
    }
}

/// Send fabric cuts to a processing center
#[utoipa::path(
    post,
    path = "/api/v1/processing-orders",
    request_body = SendToProcessingRequest,
    responses(
        (status = 201, description = "Processing order sent", body = ProcessingOrderResponse),
        (status = 404, description = "A cut does not exist"),
        (status = 409, description = "A cut is uninspected or already claimed")
    ),
    tag = "Processing"
)]
pub async fn send_to_processing(
    State(state): State<AppState>,
    Json(payload): Json<SendToProcessingRequest>,
) -> Result<Response, ServiceError> {
    validate_input(&payload)?;
    let outcome = state
        .services
        .processing
        .send(SendToProcessingInput {
            fabric_cut_ids: payload.fabric_cut_ids,
            processing_center: payload.processing_center,
            processes: payload.processes,
            vehicle_number: payload.vehicle_number,
            delivery_date: payload.delivery_date,
        })
        .await?;
    Ok(created_response(ProcessingOrderResponse::from_detail(
        outcome.detail,
        Some(outcome.mixed_order_warning),
    )))
}

/// Receive a delivery back from the processing center
#[utoipa::path(
    post,
    path = "/api/v1/processing-orders/{id}/deliveries",
    params(("id" = Uuid, Path, description = "Processing order id")),
    request_body = ReceiveDeliveryRequest,
    responses(
        (status = 200, description = "Delivery recorded", body = ProcessingOrderResponse),
        (status = 404, description = "Order not found"),
        (status = 422, description = "Quantity or cut-count ceiling exceeded")
    ),
    tag = "Processing"
)]
pub async fn receive_delivery(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ReceiveDeliveryRequest>,
) -> Result<Response, ServiceError> {
    validate_input(&payload)?;
    let detail = state
        .services
        .processing
        .receive_delivery(
            id,
            ReceiveDeliveryInput {
                delivery_number: payload.delivery_number,
                received_by: payload.received_by,
                location: payload.location,
                cut_quantities: payload.cut_quantities,
            },
        )
        .await?;
    Ok(success_response(ProcessingOrderResponse::from_detail(
        detail, None,
    )))
}

/// Edit a past delivery in place
#[utoipa::path(
    put,
    path = "/api/v1/processing-orders/{id}/deliveries/{index}",
    params(
        ("id" = Uuid, Path, description = "Processing order id"),
        ("index" = usize, Path, description = "Position in the delivery history")
    ),
    request_body = EditDeliveryRequest,
    responses(
        (status = 200, description = "Delivery replaced", body = ProcessingOrderResponse),
        (status = 404, description = "Order or delivery not found"),
        (status = 422, description = "Quantity ceiling exceeded")
    ),
    tag = "Processing"
)]
pub async fn edit_delivery(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
    Json(payload): Json<EditDeliveryRequest>,
) -> Result<Response, ServiceError> {
    validate_input(&payload)?;
    let detail = state
        .services
        .processing
        .edit_delivery(
            id,
            index,
            EditDeliveryInput {
                delivery_number: payload.delivery_number,
                received_by: payload.received_by,
                location: payload.location,
                cut_quantities: payload.cut_quantities,
            },
        )
        .await?;
    Ok(success_response(ProcessingOrderResponse::from_detail(
        detail, None,
    )))
}

/// Delete a past delivery and its return cuts
#[utoipa::path(
    delete,
    path = "/api/v1/processing-orders/{id}/deliveries/{index}",
    params(
        ("id" = Uuid, Path, description = "Processing order id"),
        ("index" = usize, Path, description = "Position in the delivery history")
    ),
    responses(
        (status = 200, description = "Delivery removed", body = ProcessingOrderResponse),
        (status = 404, description = "Order or delivery not found")
    ),
    tag = "Processing"
)]
pub async fn delete_delivery(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
) -> Result<Response, ServiceError> {
    let detail = state.services.processing.delete_delivery(id, index).await?;
    Ok(success_response(ProcessingOrderResponse::from_detail(
        detail, None,
    )))
}

/// Get a processing order with its reconciliation summary
#[utoipa::path(
    get,
    path = "/api/v1/processing-orders/{id}",
    params(("id" = Uuid, Path, description = "Processing order id")),
    responses(
        (status = 200, description = "The order", body = ProcessingOrderResponse),
        (status = 404, description = "Order not found")
    ),
    tag = "Processing"
)]
pub async fn get_processing_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ServiceError> {
    let detail = state.services.processing.get_order(id).await?;
    Ok(success_response(ProcessingOrderResponse::from_detail(
        detail, None,
    )))
}

/// List processing orders
#[utoipa::path(
    get,
    path = "/api/v1/processing-orders",
    responses((status = 200, description = "All orders", body = [ProcessingOrderSummaryResponse])),
    tag = "Processing"
)]
pub async fn list_processing_orders(
    State(state): State<AppState>,
) -> Result<Response, ServiceError> {
    let orders = state.services.processing.list_orders().await?;
    let body: Vec<ProcessingOrderSummaryResponse> = orders
        .into_iter()
        .map(ProcessingOrderSummaryResponse::from)
        .collect();
    Ok(success_response(body))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/processing-orders",
            post(send_to_processing).get(list_processing_orders),
        )
        .route("/processing-orders/{id}", get(get_processing_order))
        .route(
            "/processing-orders/{id}/deliveries",
            post(receive_delivery),
        )
        .route(
            "/processing-orders/{id}/deliveries/{index}",
            put(edit_delivery).delete(delete_delivery),
        )
}
