use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-cut snapshot captured when the invoice was submitted. Later edits
/// to the source cut do not flow into an already-submitted invoice.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "wage_invoice_cuts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub wage_invoice_id: Uuid,
    pub fabric_cut_id: Uuid,
    pub fabric_number: String,
    pub quantity: Decimal,
    pub inspected_quantity: Decimal,
    pub mistake_quantity: Decimal,
    pub actual_quantity: Decimal,
    pub inspector1: Option<String>,
    pub inspector2: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::wage_invoice::Entity",
        from = "Column::WageInvoiceId",
        to = "super::wage_invoice::Column::Id"
    )]
    WageInvoice,
}

impl Related<super::wage_invoice::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WageInvoice.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
