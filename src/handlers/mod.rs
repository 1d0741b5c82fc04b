pub mod common;
pub mod fabric_cuts;
pub mod movements;
pub mod processing_orders;
pub mod wage_invoices;
pub mod warps;

use std::sync::Arc;

use crate::db::DbPool;
use crate::events::EventSender;

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

/// Services layer that encapsulates business logic used by HTTP handlers
#[derive(Clone)]
pub struct AppServices {
    pub warps: Arc<crate::services::WarpService>,
    pub fabric_cuts: Arc<crate::services::FabricCutService>,
    pub movements: Arc<crate::services::MovementService>,
    pub processing: Arc<crate::services::ProcessingService>,
    pub wage_invoices: Arc<crate::services::WageInvoiceService>,
}

impl AppServices {
    pub fn new(db_pool: Arc<DbPool>, event_sender: EventSender) -> Self {
        Self {
            warps: Arc::new(crate::services::WarpService::new(db_pool.clone())),
            fabric_cuts: Arc::new(crate::services::FabricCutService::new(
                db_pool.clone(),
                event_sender.clone(),
            )),
            movements: Arc::new(crate::services::MovementService::new(
                db_pool.clone(),
                event_sender.clone(),
            )),
            processing: Arc::new(crate::services::ProcessingService::new(
                db_pool.clone(),
                event_sender.clone(),
            )),
            wage_invoices: Arc::new(crate::services::WageInvoiceService::new(
                db_pool,
                event_sender,
            )),
        }
    }
}
