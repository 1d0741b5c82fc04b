use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One receiving event against a processing order. `delivery_seq` orders
/// the history; `delivery_number` is the free-text reference supplied by
/// the external center.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "processing_deliveries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub processing_order_id: Uuid,
    pub delivery_seq: i32,
    pub delivery_number: String,
    pub received_by: String,
    pub location: String,
    pub cuts_received: i32,
    pub total_quantity_received: Decimal,
    pub received_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::processing_order::Entity",
        from = "Column::ProcessingOrderId",
        to = "super::processing_order::Column::Id"
    )]
    ProcessingOrder,
    #[sea_orm(has_many = "super::received_fabric_cut::Entity")]
    ReceivedCuts,
}

impl Related<super::processing_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProcessingOrder.def()
    }
}

impl Related<super::received_fabric_cut::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReceivedCuts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
