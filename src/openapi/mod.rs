use utoipa::OpenApi;

use crate::handlers;

/// Generated OpenAPI document for the ledger's HTTP surface, served as
/// JSON at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Loomledger API",
        version = "0.3.1",
        description = r#"
Transactional core of a textile-mill operations system: warps, fabric
cuts, inter-site movements, processing-center reconciliation, and wage
invoices.

Quantities are meters with exact decimal arithmetic; every mutating
operation runs as a single transaction and conflicting concurrent
operations are rejected with 409 rather than partially applied.
        "#,
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development")
    ),
    tags(
        (name = "Warps", description = "Loom production runs"),
        (name = "Fabric Cuts", description = "Cut generation, inspection and lookup"),
        (name = "Movements", description = "Inter-site transfer orders"),
        (name = "Processing", description = "External processing dispatch and reconciliation"),
        (name = "Wage Invoices", description = "Derived wage documents and approval workflow")
    ),
    paths(
        handlers::warps::create_warp,
        handlers::warps::list_warps,
        handlers::warps::get_warp,
        handlers::warps::update_warp_status,
        handlers::fabric_cuts::generate_fabric_cuts,
        handlers::fabric_cuts::list_fabric_cuts,
        handlers::fabric_cuts::record_inspection,
        handlers::fabric_cuts::lookup_fabric_cut,
        handlers::fabric_cuts::check_processing_usage,
        handlers::movements::create_movement,
        handlers::movements::receive_movement,
        handlers::movements::get_movement,
        handlers::movements::list_movements,
        handlers::processing_orders::send_to_processing,
        handlers::processing_orders::receive_delivery,
        handlers::processing_orders::edit_delivery,
        handlers::processing_orders::delete_delivery,
        handlers::processing_orders::get_processing_order,
        handlers::processing_orders::list_processing_orders,
        handlers::wage_invoices::submit_wage_invoice,
        handlers::wage_invoices::decide_wage_invoice,
        handlers::wage_invoices::mark_invoice_paid,
        handlers::wage_invoices::delete_wage_invoice,
        handlers::wage_invoices::get_wage_invoice,
        handlers::wage_invoices::list_wage_invoices,
    ),
    components(schemas(
        crate::errors::ErrorResponse,
        crate::entities::Location,
        crate::entities::warp::WarpStatus,
        handlers::wage_invoices::DecisionAction,
        handlers::warps::CreateWarpRequest,
        handlers::warps::UpdateWarpStatusRequest,
        handlers::warps::WarpResponse,
        handlers::fabric_cuts::GenerateFabricCutsRequest,
        handlers::fabric_cuts::RecordInspectionRequest,
        handlers::fabric_cuts::InspectionMistakeRequest,
        handlers::fabric_cuts::FabricCutResponse,
        handlers::movements::CreateMovementRequest,
        handlers::movements::ReceiveMovementRequest,
        handlers::movements::MovementResponse,
        handlers::movements::MovementSummaryResponse,
        handlers::processing_orders::SendToProcessingRequest,
        handlers::processing_orders::ReceiveDeliveryRequest,
        handlers::processing_orders::EditDeliveryRequest,
        handlers::processing_orders::SentCutResponse,
        handlers::processing_orders::ReceivedCutResponse,
        handlers::processing_orders::DeliveryResponse,
        handlers::processing_orders::ProcessingOrderResponse,
        handlers::processing_orders::ProcessingOrderSummaryResponse,
        handlers::wage_invoices::SubmitWageInvoiceRequest,
        handlers::wage_invoices::DecideWageInvoiceRequest,
        handlers::wage_invoices::UpdatedValuesRequest,
        handlers::wage_invoices::WageInvoiceResponse,
        handlers::wage_invoices::InvoiceCutResponse,
        handlers::wage_invoices::WageInvoiceSummaryResponse,
        crate::services::processing::ReconciliationSummary,
        crate::services::processing::FabricCutUsage,
    ))
)]
pub struct ApiDoc;
