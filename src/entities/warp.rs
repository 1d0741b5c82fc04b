use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;

/// A production run on a loom. `quantity` is the ceiling the combined
/// meters of all derived fabric cuts must respect.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "warps")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub warp_number: String,
    pub quantity: Decimal,
    pub order_ref: Option<String>,
    pub loom_ref: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::fabric_cut::Entity")]
    FabricCuts,
    #[sea_orm(has_many = "super::wage_invoice::Entity")]
    WageInvoices,
}

impl Related<super::fabric_cut::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FabricCuts.def()
    }
}

impl Related<super::wage_invoice::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WageInvoices.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum WarpStatus {
    Active,
    Stopped,
    Complete,
}
