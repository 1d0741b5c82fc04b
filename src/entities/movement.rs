use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;

/// An atomic transfer order for a set of fabric cuts between two sites.
/// Referenced cuts stay at `from_location` until receipt.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "movements")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub movement_order_number: String,
    pub from_location: String,
    pub to_location: String,
    pub moved_by: String,
    pub status: String,
    pub received_by: Option<String>,
    pub received_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::movement_cut::Entity")]
    MovementCuts,
}

impl Related<super::movement_cut::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovementCuts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// `pending → received` is the only transition; there is no cancellation
/// path for an in-transit movement.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum MovementStatus {
    Pending,
    Received,
}
