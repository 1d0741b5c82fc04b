use std::sync::Arc;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::db::DbPool;
use crate::entities::movement::{self, MovementStatus};
use crate::entities::{fabric_cut, movement_cut, Location};
use crate::errors::ServiceError;
use crate::events::{Event, EventSender};
use crate::services::sequences::{SequenceAllocator, SCOPE_MOVEMENTS};

/// A movement order together with the cuts it carries.
#[derive(Debug, Clone)]
pub struct MovementDetail {
    pub movement: movement::Model,
    pub cuts: Vec<fabric_cut::Model>,
}

/// Records transfers of fabric cuts between mill sites as atomic,
/// receivable units. Cuts stay at the origin until receipt; receipt is
/// the only relocation path outside processing returns.
#[derive(Clone)]
pub struct MovementService {
    db_pool: Arc<DbPool>,
    event_sender: EventSender,
}

impl MovementService {
    pub fn new(db_pool: Arc<DbPool>, event_sender: EventSender) -> Self {
        Self {
            db_pool,
            event_sender,
        }
    }

    /// Opens a `pending` movement for the given cuts. Fails atomically if
    /// any cut is elsewhere or already riding another open movement.
    #[instrument(skip(self))]
    pub async fn create_movement(
        &self,
        fabric_cut_ids: Vec<Uuid>,
        from_location: Location,
        to_location: Location,
        moved_by: String,
    ) -> Result<MovementDetail, ServiceError> {
        if fabric_cut_ids.is_empty() {
            return Err(ServiceError::ValidationError(
                "a movement requires at least one fabric cut".into(),
            ));
        }
        if from_location == to_location {
            return Err(ServiceError::ValidationError(format!(
                "from and to locations must differ, both are {}",
                from_location
            )));
        }
        if moved_by.trim().is_empty() {
            return Err(ServiceError::ValidationError(
                "moved_by must not be empty".into(),
            ));
        }

        let txn = self.db_pool.begin().await?;

        let cuts = fabric_cut::Entity::find()
            .filter(fabric_cut::Column::Id.is_in(fabric_cut_ids.clone()))
            .filter(fabric_cut::Column::IsDeleted.eq(false))
            .all(&txn)
            .await?;
        if cuts.len() != fabric_cut_ids.len() {
            return Err(ServiceError::NotFound(
                "one or more fabric cuts do not exist".into(),
            ));
        }

        let origin = from_location.to_string();
        for cut in &cuts {
            if cut.location != origin {
                return Err(ServiceError::StateConflict(format!(
                    "fabric cut {} is at {}, movement departs from {}",
                    cut.fabric_number, cut.location, origin
                )));
            }
        }

        // A cut may ride at most one open movement at a time.
        let open_claims = movement_cut::Entity::find()
            .filter(movement_cut::Column::FabricCutId.is_in(fabric_cut_ids.clone()))
            .find_also_related(movement::Entity)
            .all(&txn)
            .await?;
        for (claim, linked) in &open_claims {
            if let Some(open) = linked {
                if open.status == MovementStatus::Pending.to_string() {
                    let held = cuts
                        .iter()
                        .find(|c| c.id == claim.fabric_cut_id)
                        .map(|c| c.fabric_number.clone())
                        .unwrap_or_else(|| claim.fabric_cut_id.to_string());
                    return Err(ServiceError::ClaimConflict(format!(
                        "fabric cut {} is already in pending movement {}",
                        held, open.movement_order_number
                    )));
                }
            }
        }

        let seq = SequenceAllocator::next(&txn, SCOPE_MOVEMENTS).await?;
        let movement_model = movement::ActiveModel {
            id: Set(Uuid::new_v4()),
            movement_order_number: Set(SequenceAllocator::format_movement_order(seq)),
            from_location: Set(origin),
            to_location: Set(to_location.to_string()),
            moved_by: Set(moved_by.trim().to_string()),
            status: Set(MovementStatus::Pending.to_string()),
            received_by: Set(None),
            received_at: Set(None),
            created_at: Set(Utc::now()),
        };
        let created = movement_model.insert(&txn).await?;

        for cut in &cuts {
            let link = movement_cut::ActiveModel {
                id: Set(Uuid::new_v4()),
                movement_id: Set(created.id),
                fabric_cut_id: Set(cut.id),
            };
            link.insert(&txn).await?;
        }

        txn.commit().await?;

        info!(
            movement_order_number = %created.movement_order_number,
            cut_count = cuts.len(),
            "movement created"
        );
        self.event_sender.publish(Event::MovementCreated(created.id));
        Ok(MovementDetail {
            movement: created,
            cuts,
        })
    }

    /// Receives a pending movement: every carried cut relocates to the
    /// destination atomically with the status transition. `pending →
    /// received` is terminal.
    #[instrument(skip(self))]
    pub async fn receive(
        &self,
        movement_id: Uuid,
        received_by: String,
    ) -> Result<MovementDetail, ServiceError> {
        if received_by.trim().is_empty() {
            return Err(ServiceError::ValidationError(
                "received_by must not be empty".into(),
            ));
        }

        let txn = self.db_pool.begin().await?;

        let found = movement::Entity::find_by_id(movement_id)
            .one(&txn)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("movement {} not found", movement_id)))?;

        if found.status != MovementStatus::Pending.to_string() {
            return Err(ServiceError::StateConflict(format!(
                "movement {} is {}, receipt requires {}",
                found.movement_order_number,
                found.status,
                MovementStatus::Pending
            )));
        }

        // The status flip doubles as the concurrency guard: a second
        // receiver matches zero rows and aborts.
        let now = Utc::now();
        let result = movement::Entity::update_many()
            .col_expr(
                movement::Column::Status,
                sea_orm::sea_query::Expr::value(MovementStatus::Received.to_string()),
            )
            .col_expr(
                movement::Column::ReceivedBy,
                sea_orm::sea_query::Expr::value(received_by.trim().to_string()),
            )
            .col_expr(
                movement::Column::ReceivedAt,
                sea_orm::sea_query::Expr::value(now),
            )
            .filter(movement::Column::Id.eq(movement_id))
            .filter(movement::Column::Status.eq(MovementStatus::Pending.to_string()))
            .exec(&txn)
            .await?;
        if result.rows_affected != 1 {
            return Err(ServiceError::Conflict(format!(
                "movement {} was received concurrently",
                found.movement_order_number
            )));
        }

        let links = movement_cut::Entity::find()
            .filter(movement_cut::Column::MovementId.eq(movement_id))
            .all(&txn)
            .await?;
        let cut_ids: Vec<Uuid> = links.iter().map(|l| l.fabric_cut_id).collect();

        fabric_cut::Entity::update_many()
            .col_expr(
                fabric_cut::Column::Location,
                sea_orm::sea_query::Expr::value(found.to_location.clone()),
            )
            .col_expr(
                fabric_cut::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(now),
            )
            .filter(fabric_cut::Column::Id.is_in(cut_ids.clone()))
            .exec(&txn)
            .await?;

        let movement = movement::Entity::find_by_id(movement_id)
            .one(&txn)
            .await?
            .ok_or_else(|| {
                ServiceError::InternalError(format!("movement {} vanished mid-transaction", movement_id))
            })?;
        let cuts = fabric_cut::Entity::find()
            .filter(fabric_cut::Column::Id.is_in(cut_ids))
            .all(&txn)
            .await?;

        txn.commit().await?;

        info!(movement_order_number = %movement.movement_order_number, "movement received");
        self.event_sender.publish(Event::MovementReceived(movement_id));
        Ok(MovementDetail { movement, cuts })
    }

    #[instrument(skip(self))]
    pub async fn get_movement(&self, movement_id: Uuid) -> Result<MovementDetail, ServiceError> {
        let db = self.db_pool.as_ref();
        let movement = movement::Entity::find_by_id(movement_id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("movement {} not found", movement_id)))?;

        let links = movement_cut::Entity::find()
            .filter(movement_cut::Column::MovementId.eq(movement_id))
            .all(db)
            .await?;
        let cut_ids: Vec<Uuid> = links.iter().map(|l| l.fabric_cut_id).collect();
        let cuts = fabric_cut::Entity::find()
            .filter(fabric_cut::Column::Id.is_in(cut_ids))
            .all(db)
            .await?;

        Ok(MovementDetail { movement, cuts })
    }

    #[instrument(skip(self))]
    pub async fn list_movements(
        &self,
        status: Option<MovementStatus>,
    ) -> Result<Vec<movement::Model>, ServiceError> {
        let mut query = movement::Entity::find();
        if let Some(status) = status {
            query = query.filter(movement::Column::Status.eq(status.to_string()));
        }
        Ok(query
            .order_by_desc(movement::Column::CreatedAt)
            .all(self.db_pool.as_ref())
            .await?)
    }
}
