use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Join row binding one fabric cut to a movement order.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "movement_cuts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub movement_id: Uuid,
    pub fabric_cut_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::movement::Entity",
        from = "Column::MovementId",
        to = "super::movement::Column::Id"
    )]
    Movement,
    #[sea_orm(
        belongs_to = "super::fabric_cut::Entity",
        from = "Column::FabricCutId",
        to = "super::fabric_cut::Column::Id"
    )]
    FabricCut,
}

impl Related<super::movement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Movement.def()
    }
}

impl Related<super::fabric_cut::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FabricCut.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
