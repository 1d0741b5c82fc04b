use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A physical piece cut from a warp, numbered `{warpNumber}-{cutIndex}`.
///
/// The claim columns (`processing_order_id`, `wage_invoice_id`) and the
/// `version` counter carry the single-writer-per-cut guarantee: every
/// claim is taken with a conditional update that re-checks both inside
/// the transaction.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "fabric_cuts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub fabric_number: String,
    pub warp_id: Uuid,
    pub quantity: Decimal,
    pub location: String,

    // 4-point inspection; fixed once the cut is claimed downstream.
    pub inspected_quantity: Option<Decimal>,
    pub mistake_quantity: Option<Decimal>,
    pub actual_quantity: Option<Decimal>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub mistakes: Option<Json>,
    pub inspector1: Option<String>,
    pub inspector2: Option<String>,
    pub inspected_at: Option<DateTime<Utc>>,

    pub processing_order_id: Option<Uuid>,
    pub is_processing_received: bool,
    pub wage_invoice_id: Option<Uuid>,

    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::warp::Entity",
        from = "Column::WarpId",
        to = "super::warp::Column::Id"
    )]
    Warp,
}

impl Related<super::warp::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Warp.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Whether a 4-point inspection has been recorded for this cut.
    pub fn has_inspection(&self) -> bool {
        self.inspected_at.is_some()
    }
}
