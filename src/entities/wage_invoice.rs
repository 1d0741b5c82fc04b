use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;

/// Derived wage document for one warp, numbered `AT/{warpNumber}/{seq}`.
/// Aggregates are recomputed by the service on every mutating call;
/// caller-supplied totals are never trusted.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "wage_invoices")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub invoice_number: String,
    pub warp_id: Uuid,
    pub rate_per_meter: Decimal,
    pub total_inspected_quantity: Decimal,
    pub total_mistake_quantity: Decimal,
    pub total_actual_quantity: Decimal,
    pub total_wages: Decimal,
    pub status: String,
    pub values_updated_during_approval: bool,
    pub approved_at: Option<DateTime<Utc>>,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::warp::Entity",
        from = "Column::WarpId",
        to = "super::warp::Column::Id"
    )]
    Warp,
    #[sea_orm(has_many = "super::wage_invoice_cut::Entity")]
    SnapshotCuts,
}

impl Related<super::warp::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Warp.def()
    }
}

impl Related<super::wage_invoice_cut::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SnapshotCuts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// `pending → approved → payment_done`, or `pending → rejected`. The two
/// terminal shapes differ: `payment_done` is final, while `rejected`
/// invoices may still be deleted to free the warp for resubmission.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Pending,
    Approved,
    Rejected,
    PaymentDone,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn invoice_status_string_forms() {
        assert_eq!(InvoiceStatus::PaymentDone.to_string(), "payment_done");
        assert_eq!(
            InvoiceStatus::from_str("payment_done").unwrap(),
            InvoiceStatus::PaymentDone
        );
    }
}
