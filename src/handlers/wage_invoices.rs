use axum::{
    extract::{Path, Query, State},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::common::{created_response, no_content_response, success_response, validate_input};
use crate::entities::wage_invoice::{self, InvoiceStatus};
use crate::errors::ServiceError;
use crate::handlers::AppState;
use crate::services::wage_invoices::{
    ApprovalOverrides, InvoiceDecision, WageInvoiceDetail,
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SubmitWageInvoiceRequest {
    pub warp_id: Uuid,
    pub rate_per_meter: Decimal,
}

#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DecisionAction {
    Approve,
    Reject,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DecideWageInvoiceRequest {
    pub action: DecisionAction,
    /// Reviewer-adjusted aggregates; only meaningful with `approve`.
    pub updated_values: Option<UpdatedValuesRequest>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatedValuesRequest {
    pub total_inspected_quantity: Option<Decimal>,
    pub total_mistake_quantity: Option<Decimal>,
    pub total_actual_quantity: Option<Decimal>,
    pub rate_per_meter: Option<Decimal>,
}

#[derive(Debug, Deserialize)]
pub struct InvoiceListParams {
    pub status: Option<InvoiceStatus>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InvoiceCutResponse {
    pub fabric_cut_id: Uuid,
    pub fabric_number: String,
    pub quantity: Decimal,
    pub inspected_quantity: Decimal,
    pub mistake_quantity: Decimal,
    pub actual_quantity: Decimal,
    pub inspector1: Option<String>,
    pub inspector2: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WageInvoiceResponse {
    pub id: Uuid,
    pub invoice_number: String,
    pub warp_id: Uuid,
    pub rate_per_meter: Decimal,
    pub total_inspected_quantity: Decimal,
    pub total_mistake_quantity: Decimal,
    pub total_actual_quantity: Decimal,
    pub total_wages: Decimal,
    pub status: String,
    pub values_updated_during_approval: bool,
    pub approved_at: Option<DateTime<Utc>>,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub fabric_cuts: Vec<InvoiceCutResponse>,
}

impl From<WageInvoiceDetail> for WageInvoiceResponse {
    fn from(detail: WageInvoiceDetail) -> Self {
        Self {
            id: detail.invoice.id,
            invoice_number: detail.invoice.invoice_number,
            warp_id: detail.invoice.warp_id,
            rate_per_meter: detail.invoice.rate_per_meter,
            total_inspected_quantity: detail.invoice.total_inspected_quantity,
            total_mistake_quantity: detail.invoice.total_mistake_quantity,
            total_actual_quantity: detail.invoice.total_actual_quantity,
            total_wages: detail.invoice.total_wages,
            status: detail.invoice.status,
            values_updated_during_approval: detail.invoice.values_updated_during_approval,
            approved_at: detail.invoice.approved_at,
            paid_at: detail.invoice.paid_at,
            created_at: detail.invoice.created_at,
            fabric_cuts: detail
                .cuts
                .into_iter()
                .map(|c| InvoiceCutResponse {
                    fabric_cut_id: c.fabric_cut_id,
                    fabric_number: c.fabric_number,
                    quantity: c.quantity,
                    inspected_quantity: c.inspected_quantity,
                    mistake_quantity: c.mistake_quantity,
                    actual_quantity: c.actual_quantity,
                    inspector1: c.inspector1,
                    inspector2: c.inspector2,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WageInvoiceSummaryResponse {
    pub id: Uuid,
    pub invoice_number: String,
    pub warp_id: Uuid,
    pub total_wages: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<wage_invoice::Model> for WageInvoiceSummaryResponse {
    fn from(model: wage_invoice::Model) -> Self {
        Self {
            id: model.id,
            invoice_number: model.invoice_number,
            warp_id: model.warp_id,
            total_wages: model.total_wages,
            status: model.status,
            created_at: model.created_at,
        }
    }
}

/// Submit a wage invoice for a warp
#[utoipa::path(
    post,
    path = "/api/v1/wage-invoices",
    request_body = SubmitWageInvoiceRequest,
    responses(
        (status = 201, description = "Invoice submitted", body = WageInvoiceResponse),
        (status = 404, description = "Warp not found"),
        (status = 409, description = "Cuts already locked by another invoice")
    ),
    tag = "Wage Invoices"
)]
pub async fn submit_wage_invoice(
    State(state): State<AppState>,
    Json(payload): Json<SubmitWageInvoiceRequest>,
) -> Result<Response, ServiceError> {
    validate_input(&payload)?;
    let detail = state
        .services
        .wage_invoices
        .submit(payload.warp_id, payload.rate_per_meter)
        .await?;
    Ok(created_response(WageInvoiceResponse::from(detail)))
}

/// Approve or reject a pending invoice
#[utoipa::path(
    post,
    path = "/api/v1/wage-invoices/{id}/decision",
    params(("id" = Uuid, Path, description = "Invoice id")),
    request_body = DecideWageInvoiceRequest,
    responses(
        (status = 200, description = "Decision applied", body = WageInvoiceResponse),
        (status = 404, description = "Invoice not found"),
        (status = 409, description = "Invoice is not pending")
    ),
    tag = "Wage Invoices"
)]
pub async fn decide_wage_invoice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<DecideWageInvoiceRequest>,
) -> Result<Response, ServiceError> {
    let decision = match payload.action {
        DecisionAction::Approve => {
            let overrides = payload
                .updated_values
                .map(|v| ApprovalOverrides {
                    total_inspected_quantity: v.total_inspected_quantity,
                    total_mistake_quantity: v.total_mistake_quantity,
                    total_actual_quantity: v.total_actual_quantity,
                    rate_per_meter: v.rate_per_meter,
                })
                .unwrap_or_default();
            InvoiceDecision::Approve(overrides)
        }
        DecisionAction::Reject => {
            if payload.updated_values.is_some() {
                return Err(ServiceError::ValidationError(
                    "rejection takes no value changes".into(),
                ));
            }
            InvoiceDecision::Reject
        }
    };
    let detail = state.services.wage_invoices.decide(id, decision).await?;
    Ok(success_response(WageInvoiceResponse::from(detail)))
}

/// Mark an approved invoice paid
#[utoipa::path(
    post,
    path = "/api/v1/wage-invoices/{id}/payment",
    params(("id" = Uuid, Path, description = "Invoice id")),
    responses(
        (status = 200, description = "Invoice paid", body = WageInvoiceResponse),
        (status = 404, description = "Invoice not found"),
        (status = 409, description = "Invoice is not approved")
    ),
    tag = "Wage Invoices"
)]
pub async fn mark_invoice_paid(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ServiceError> {
    let detail = state.services.wage_invoices.mark_paid(id).await?;
    Ok(success_response(WageInvoiceResponse::from(detail)))
}

/// Delete a pending or rejected invoice, releasing its cuts
#[utoipa::path(
    delete,
    path = "/api/v1/wage-invoices/{id}",
    params(("id" = Uuid, Path, description = "Invoice id")),
    responses(
        (status = 204, description = "Invoice deleted"),
        (status = 404, description = "Invoice not found"),
        (status = 409, description = "Invoice is approved or paid")
    ),
    tag = "Wage Invoices"
)]
pub async fn delete_wage_invoice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ServiceError> {
    state.services.wage_invoices.delete(id).await?;
    Ok(no_content_response())
}

/// Get an invoice with its snapshot
#[utoipa::path(
    get,
    path = "/api/v1/wage-invoices/{id}",
    params(("id" = Uuid, Path, description = "Invoice id")),
    responses(
        (status = 200, description = "The invoice", body = WageInvoiceResponse),
        (status = 404, description = "Invoice not found")
    ),
    tag = "Wage Invoices"
)]
pub async fn get_wage_invoice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ServiceError> {
    let detail = state.services.wage_invoices.get_invoice(id).await?;
    Ok(success_response(WageInvoiceResponse::from(detail)))
}

/// List invoices, optionally by status
#[utoipa::path(
    get,
    path = "/api/v1/wage-invoices",
    params(("status" = Option<String>, Query, description = "pending, approved, rejected or payment_done")),
    responses((status = 200, description = "Invoices", body = [WageInvoiceSummaryResponse])),
    tag = "Wage Invoices"
)]
pub async fn list_wage_invoices(
    State(state): State<AppState>,
    Query(params): Query<InvoiceListParams>,
) -> Result<Response, ServiceError> {
    let invoices = state
        .services
        .wage_invoices
        .list_invoices(params.status)
        .await?;
    let body: Vec<WageInvoiceSummaryResponse> = invoices
        .into_iter()
        .map(WageInvoiceSummaryResponse::from)
        .collect();
    Ok(success_response(body))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/wage-invoices",
            post(submit_wage_invoice).get(list_wage_invoices),
        )
        .route(
            "/wage-invoices/{id}",
            get(get_wage_invoice).delete(delete_wage_invoice),
        )
        .route("/wage-invoices/{id}/decision", post(decide_wage_invoice))
        .route("/wage-invoices/{id}/payment", post(mark_invoice_paid))
}
