use std::str::FromStr;
use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::db::DbPool;
use crate::entities::warp::{self, WarpStatus};
use crate::errors::ServiceError;

/// Input for creating a warp.
#[derive(Debug, Clone)]
pub struct CreateWarpInput {
    pub warp_number: String,
    pub quantity: Decimal,
    pub order_ref: Option<String>,
    pub loom_ref: Option<String>,
}

/// Manages warps, the parent entity every fabric cut hangs off.
#[derive(Clone)]
pub struct WarpService {
    db_pool: Arc<DbPool>,
}

impl WarpService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    #[instrument(skip(self))]
    pub async fn create_warp(&self, input: CreateWarpInput) -> Result<warp::Model, ServiceError> {
        let number = input.warp_number.trim().to_string();
        if number.is_empty() {
            return Err(ServiceError::ValidationError(
                "warp_number must not be empty".into(),
            ));
        }
        if input.quantity <= Decimal::ZERO {
            return Err(ServiceError::ValidationError(format!(
                "warp quantity must be positive, got {}",
                input.quantity
            )));
        }

        let db = self.db_pool.as_ref();
        let existing = warp::Entity::find()
            .filter(warp::Column::WarpNumber.eq(number.clone()))
            .one(db)
            .await?;
        if existing.is_some() {
            return Err(ServiceError::Conflict(format!(
                "warp number {} already exists",
                number
            )));
        }

        let model = warp::ActiveModel {
            id: Set(Uuid::new_v4()),
            warp_number: Set(number.clone()),
            quantity: Set(input.quantity),
            order_ref: Set(input.order_ref),
            loom_ref: Set(input.loom_ref),
            status: Set(WarpStatus::Active.to_string()),
            created_at: Set(Utc::now()),
            updated_at: Set(None),
        };
        let created = model.insert(db).await?;
        info!(warp_number = %number, "warp created");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn get_warp(&self, warp_id: Uuid) -> Result<warp::Model, ServiceError> {
        warp::Entity::find_by_id(warp_id)
            .one(self.db_pool.as_ref())
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("warp {} not found", warp_id)))
    }

    #[instrument(skip(self))]
    pub async fn list_warps(&self) -> Result<Vec<warp::Model>, ServiceError> {
        Ok(warp::Entity::find()
            .order_by_desc(warp::Column::CreatedAt)
            .all(self.db_pool.as_ref())
            .await?)
    }

    /// Moves a warp through `active ⇄ stopped → complete`. A completed
    /// warp never changes status again.
    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        warp_id: Uuid,
        new_status: WarpStatus,
    ) -> Result<warp::Model, ServiceError> {
        let txn = self.db_pool.begin().await?;

        let current = warp::Entity::find_by_id(warp_id)
            .one(&txn)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("warp {} not found", warp_id)))?;

        let current_status = WarpStatus::from_str(&current.status)
            .map_err(|_| ServiceError::InternalError(format!(
                "warp {} has unknown status '{}'",
                warp_id, current.status
            )))?;

        let allowed = matches!(
            (current_status, new_status),
            (WarpStatus::Active, WarpStatus::Stopped)
                | (WarpStatus::Active, WarpStatus::Complete)
                | (WarpStatus::Stopped, WarpStatus::Active)
                | (WarpStatus::Stopped, WarpStatus::Complete)
        );
        if !allowed {
            return Err(ServiceError::StateConflict(format!(
                "warp {} is {}, cannot move to {}",
                current.warp_number, current_status, new_status
            )));
        }

        let mut active: warp::ActiveModel = current.into();
        active.status = Set(new_status.to_string());
        active.updated_at = Set(Some(Utc::now()));
        let updated = active.update(&txn).await?;

        txn.commit().await?;
        Ok(updated)
    }
}
