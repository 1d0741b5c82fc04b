// Core services
pub mod fabric_cuts;
pub mod movements;
pub mod processing;
pub mod sequences;
pub mod wage_invoices;
pub mod warps;

pub use fabric_cuts::FabricCutService;
pub use movements::MovementService;
pub use processing::ProcessingService;
pub use sequences::SequenceAllocator;
pub use wage_invoices::WageInvoiceService;
pub use warps::WarpService;
