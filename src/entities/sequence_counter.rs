use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Dedicated counter row per numbering scope. Numbers are allocated by
/// incrementing `value` inside the caller's transaction, never by
/// counting existing rows.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sequence_counters")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub scope_key: String,
    pub value: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
