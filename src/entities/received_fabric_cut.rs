use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A renumbered cut returned from a processing center. `cut_seq` is the
/// cursor value the fabric number `WR/{orderSeq}/{NN}` was minted from.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "received_fabric_cuts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub processing_order_id: Uuid,
    pub delivery_id: Uuid,
    pub cut_seq: i32,
    pub fabric_number: String,
    pub quantity: Decimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::processing_order::Entity",
        from = "Column::ProcessingOrderId",
        to = "super::processing_order::Column::Id"
    )]
    ProcessingOrder,
    #[sea_orm(
        belongs_to = "super::processing_delivery::Entity",
        from = "Column::DeliveryId",
        to = "super::processing_delivery::Column::Id"
    )]
    Delivery,
}

impl Related<super::processing_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProcessingOrder.def()
    }
}

impl Related<super::processing_delivery::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Delivery.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
