use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::db::DbPool;
use crate::entities::{fabric_cut, warp, Location};
use crate::errors::ServiceError;
use crate::events::{Event, EventSender};
use crate::services::sequences::{cut_scope, SequenceAllocator};

/// One recorded defect from a 4-point inspection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectionMistake {
    pub mistake: String,
    pub quantity: Decimal,
}

/// Input for recording (or re-recording) a cut's inspection.
#[derive(Debug, Clone)]
pub struct RecordInspectionInput {
    pub inspected_quantity: Decimal,
    pub mistake_quantity: Decimal,
    pub mistakes: Vec<InspectionMistake>,
    pub inspector1: String,
    pub inspector2: String,
}

/// Owns fabric cut rows: batch generation under the warp-quantity
/// ceiling, 4-point inspection, and fabric-number lookup. Side effects
/// stay confined to the cut rows themselves.
#[derive(Clone)]
pub struct FabricCutService {
    db_pool: Arc<DbPool>,
    event_sender: EventSender,
}

impl FabricCutService {
    pub fn new(db_pool: Arc<DbPool>, event_sender: EventSender) -> Self {
        Self {
            db_pool,
            event_sender,
        }
    }

    /// Generates a batch of cuts for a warp, numbered `{warpNumber}-{n}`
    /// sequentially within the warp.
    ///
    /// The combined meters of all non-deleted cuts must stay within the
    /// warp's ordered quantity; the check runs against the unrounded
    /// running total inside the transaction.
    #[instrument(skip(self))]
    pub async fn generate_cuts(
        &self,
        warp_id: Uuid,
        quantities: Vec<Decimal>,
    ) -> Result<Vec<fabric_cut::Model>, ServiceError> {
        if quantities.is_empty() {
            return Err(ServiceError::ValidationError(
                "at least one cut quantity is required".into(),
            ));
        }
        if let Some(bad) = quantities.iter().find(|q| **q <= Decimal::ZERO) {
            return Err(ServiceError::ValidationError(format!(
                "cut quantities must be positive, got {}",
                bad
            )));
        }

        let txn = self.db_pool.begin().await?;

        let warp = warp::Entity::find_by_id(warp_id)
            .one(&txn)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("warp {} not found", warp_id)))?;

        let existing: Decimal = fabric_cut::Entity::find()
            .filter(fabric_cut::Column::WarpId.eq(warp_id))
            .filter(fabric_cut::Column::IsDeleted.eq(false))
            .all(&txn)
            .await?
            .iter()
            .map(|cut| cut.quantity)
            .sum();

        let requested: Decimal = quantities.iter().copied().sum();
        let attempted = existing + requested;
        if attempted > warp.quantity {
            return Err(ServiceError::CapacityViolation(format!(
                "warp {} holds {}m; {}m already cut plus {}m requested totals {}m",
                warp.warp_number, warp.quantity, existing, requested, attempted
            )));
        }

        let scope = cut_scope(&warp.warp_number);
        let now = Utc::now();
        let mut created = Vec::with_capacity(quantities.len());
        for quantity in quantities {
            let index = SequenceAllocator::next(&txn, &scope).await?;
            let model = fabric_cut::ActiveModel {
                id: Set(Uuid::new_v4()),
                fabric_number: Set(format!("{}-{}", warp.warp_number, index)),
                warp_id: Set(warp_id),
                quantity: Set(quantity),
                location: Set(Location::PRODUCTION.to_string()),
                inspected_quantity: Set(None),
                mistake_quantity: Set(None),
                actual_quantity: Set(None),
                mistakes: Set(None),
                inspector1: Set(None),
                inspector2: Set(None),
                inspected_at: Set(None),
                processing_order_id: Set(None),
                is_processing_received: Set(false),
                wage_invoice_id: Set(None),
                is_deleted: Set(false),
                created_at: Set(now),
                updated_at: Set(None),
                version: Set(1),
            };
            created.push(model.insert(&txn).await?);
        }

        txn.commit().await?;

        info!(warp_number = %warp.warp_number, count = created.len(), "fabric cuts generated");
        self.event_sender.publish(Event::FabricCutsGenerated {
            warp_id,
            cut_count: created.len(),
        });
        Ok(created)
    }

    /// Records a 4-point inspection on a cut that has reached the
    /// inspection site. Re-submission overwrites the previous values (the
    /// edit path); nothing accumulates. Once the cut is claimed by a
    /// processing order or wage invoice the values are frozen, because
    /// downstream snapshots froze them.
    #[instrument(skip(self, input))]
    pub async fn record_inspection(
        &self,
        fabric_cut_id: Uuid,
        input: RecordInspectionInput,
    ) -> Result<fabric_cut::Model, ServiceError> {
        if input.inspected_quantity < Decimal::ZERO {
            return Err(ServiceError::ValidationError(format!(
                "inspected quantity must not be negative, got {}",
                input.inspected_quantity
            )));
        }
        if input.mistake_quantity < Decimal::ZERO {
            return Err(ServiceError::ValidationError(format!(
                "mistake quantity must not be negative, got {}",
                input.mistake_quantity
            )));
        }
        if input.inspector1.trim().is_empty() || input.inspector2.trim().is_empty() {
            return Err(ServiceError::ValidationError(
                "two inspectors are required".into(),
            ));
        }

        let txn = self.db_pool.begin().await?;

        let cut = fabric_cut::Entity::find_by_id(fabric_cut_id)
            .one(&txn)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("fabric cut {} not found", fabric_cut_id))
            })?;
        if cut.is_deleted {
            return Err(ServiceError::NotFound(format!(
                "fabric cut {} not found",
                fabric_cut_id
            )));
        }

        let inspection_site = Location::INSPECTION.to_string();
        if cut.location != inspection_site {
            return Err(ServiceError::StateConflict(format!(
                "fabric cut {} is at {}, inspection requires {}",
                cut.fabric_number, cut.location, inspection_site
            )));
        }
        if let Some(order_id) = cut.processing_order_id {
            return Err(ServiceError::StateConflict(format!(
                "fabric cut {} inspection is frozen by processing order {}",
                cut.fabric_number, order_id
            )));
        }
        if let Some(invoice_id) = cut.wage_invoice_id {
            return Err(ServiceError::StateConflict(format!(
                "fabric cut {} inspection is frozen by wage invoice {}",
                cut.fabric_number, invoice_id
            )));
        }

        let actual = (input.inspected_quantity - input.mistake_quantity).max(Decimal::ZERO);
        let mistakes = serde_json::to_value(&input.mistakes)
            .map_err(|e| ServiceError::InternalError(format!("serializing mistakes: {}", e)))?;

        let version = cut.version;
        let fabric_number = cut.fabric_number.clone();
        let result = fabric_cut::Entity::update_many()
            .col_expr(
                fabric_cut::Column::InspectedQuantity,
                sea_orm::sea_query::Expr::value(input.inspected_quantity),
            )
            .col_expr(
                fabric_cut::Column::MistakeQuantity,
                sea_orm::sea_query::Expr::value(input.mistake_quantity),
            )
            .col_expr(
                fabric_cut::Column::ActualQuantity,
                sea_orm::sea_query::Expr::value(actual),
            )
            .col_expr(
                fabric_cut::Column::Mistakes,
                sea_orm::sea_query::Expr::value(mistakes),
            )
            .col_expr(
                fabric_cut::Column::Inspector1,
                sea_orm::sea_query::Expr::value(input.inspector1.trim().to_string()),
            )
            .col_expr(
                fabric_cut::Column::Inspector2,
                sea_orm::sea_query::Expr::value(input.inspector2.trim().to_string()),
            )
            .col_expr(
                fabric_cut::Column::InspectedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .col_expr(
                fabric_cut::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .col_expr(
                fabric_cut::Column::Version,
                sea_orm::sea_query::Expr::value(version + 1),
            )
            .filter(fabric_cut::Column::Id.eq(fabric_cut_id))
            .filter(fabric_cut::Column::Version.eq(version))
            .exec(&txn)
            .await?;

        if result.rows_affected != 1 {
            return Err(ServiceError::Conflict(format!(
                "fabric cut {} was modified concurrently",
                fabric_number
            )));
        }

        let updated = fabric_cut::Entity::find_by_id(fabric_cut_id)
            .one(&txn)
            .await?
            .ok_or_else(|| {
                ServiceError::InternalError(format!(
                    "fabric cut {} vanished mid-transaction",
                    fabric_cut_id
                ))
            })?;

        txn.commit().await?;

        self.event_sender.publish(Event::InspectionRecorded {
            fabric_cut_id,
            fabric_number,
        });
        Ok(updated)
    }

    /// Looks up a cut by its human-readable fabric number.
    #[instrument(skip(self))]
    pub async fn lookup(&self, fabric_number: &str) -> Result<fabric_cut::Model, ServiceError> {
        fabric_cut::Entity::find()
            .filter(fabric_cut::Column::FabricNumber.eq(fabric_number))
            .filter(fabric_cut::Column::IsDeleted.eq(false))
            .one(self.db_pool.as_ref())
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("fabric cut {} not found", fabric_number))
            })
    }

    #[instrument(skip(self))]
    pub async fn get_cut(&self, fabric_cut_id: Uuid) -> Result<fabric_cut::Model, ServiceError> {
        fabric_cut::Entity::find_by_id(fabric_cut_id)
            .one(self.db_pool.as_ref())
            .await?
            .filter(|cut| !cut.is_deleted)
            .ok_or_else(|| {
                ServiceError::NotFound(format!("fabric cut {} not found", fabric_cut_id))
            })
    }

    #[instrument(skip(self))]
    pub async fn list_cuts_for_warp(
        &self,
        warp_id: Uuid,
    ) -> Result<Vec<fabric_cut::Model>, ServiceError> {
        Ok(fabric_cut::Entity::find()
            .filter(fabric_cut::Column::WarpId.eq(warp_id))
            .filter(fabric_cut::Column::IsDeleted.eq(false))
            .order_by_asc(fabric_cut::Column::CreatedAt)
            .all(self.db_pool.as_ref())
            .await?)
    }
}
