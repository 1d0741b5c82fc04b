use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;

/// A dispatch of inspected fabric cuts to an external processing center.
///
/// `total_quantity` is frozen at send time and is the ceiling every
/// delivery sequence is reconciled against. `received_cut_cursor` only
/// ever advances; return-cut numbers minted from it are never reissued,
/// even after a delivery is deleted.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "processing_orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub order_form_number: String,
    pub order_form_seq: i64,
    pub processing_center: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub processes: Json,
    pub vehicle_number: Option<String>,
    pub delivery_date: Option<NaiveDate>,
    pub total_quantity: Decimal,
    pub received_cut_cursor: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::processing_sent_cut::Entity")]
    SentCuts,
    #[sea_orm(has_many = "super::processing_delivery::Entity")]
    Deliveries,
    #[sea_orm(has_many = "super::received_fabric_cut::Entity")]
    ReceivedCuts,
}

impl Related<super::processing_sent_cut::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SentCuts.def()
    }
}

impl Related<super::processing_delivery::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Deliveries.def()
    }
}

impl Related<super::received_fabric_cut::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReceivedCuts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Derived from delivery progress: `completed` once every sent cut has a
/// received counterpart, `partially_received` while any delivery exists,
/// `sent` otherwise.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingStatus {
    Sent,
    PartiallyReceived,
    Completed,
}

impl ProcessingStatus {
    pub fn derive(received_cuts: usize, sent_cuts: usize) -> ProcessingStatus {
        if sent_cuts > 0 && received_cuts == sent_cuts {
            ProcessingStatus::Completed
        } else if received_cuts > 0 {
            ProcessingStatus::PartiallyReceived
        } else {
            ProcessingStatus::Sent
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_derivation_follows_delivery_progress() {
        assert_eq!(ProcessingStatus::derive(0, 3), ProcessingStatus::Sent);
        assert_eq!(
            ProcessingStatus::derive(2, 3),
            ProcessingStatus::PartiallyReceived
        );
        assert_eq!(ProcessingStatus::derive(3, 3), ProcessingStatus::Completed);
    }
}
