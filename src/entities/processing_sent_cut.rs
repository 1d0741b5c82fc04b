use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Snapshot of one fabric cut at send time. `quantity` is the inspected
/// quantity captured when the order was created and does not follow later
/// edits to the source cut.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "processing_sent_cuts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub processing_order_id: Uuid,
    pub fabric_cut_id: Uuid,
    pub fabric_number: String,
    pub warp_number: String,
    pub quantity: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::processing_order::Entity",
        from = "Column::ProcessingOrderId",
        to = "super::processing_order::Column::Id"
    )]
    ProcessingOrder,
}

impl Related<super::processing_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProcessingOrder.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
