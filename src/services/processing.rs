use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseTransaction, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use serde::Serialize;
use tracing::{info, instrument, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::db::DbPool;
use crate::entities::processing_order::{self, ProcessingStatus};
use crate::entities::{
    fabric_cut, processing_delivery, processing_sent_cut, received_fabric_cut, warp,
};
use crate::errors::ServiceError;
use crate::events::{Event, EventSender};
use crate::services::sequences::{SequenceAllocator, SCOPE_ORDER_FORMS};

/// Input for dispatching cuts to a processing center.
#[derive(Debug, Clone)]
pub struct SendToProcessingInput {
    pub fabric_cut_ids: Vec<Uuid>,
    pub processing_center: String,
    pub processes: Vec<String>,
    pub vehicle_number: Option<String>,
    pub delivery_date: Option<NaiveDate>,
}

/// Input for one receiving event against an order.
#[derive(Debug, Clone)]
pub struct ReceiveDeliveryInput {
    pub delivery_number: String,
    pub received_by: String,
    pub location: String,
    pub cut_quantities: Vec<Decimal>,
}

/// Replacement metadata and quantities for an existing delivery. The cut
/// count is fixed; quantities replace the delivery's cuts one-for-one and
/// the fabric numbers are retained.
#[derive(Debug, Clone)]
pub struct EditDeliveryInput {
    pub delivery_number: String,
    pub received_by: String,
    pub location: String,
    pub cut_quantities: Vec<Decimal>,
}

/// Sent/received/shortage balance, in cut count and meters.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReconciliationSummary {
    pub sent_count: usize,
    pub received_count: usize,
    pub shortage_count: usize,
    pub sent_quantity: Decimal,
    pub received_quantity: Decimal,
    pub shortage_quantity: Decimal,
}

/// One delivery with the return cuts it minted.
#[derive(Debug, Clone)]
pub struct DeliveryDetail {
    pub delivery: processing_delivery::Model,
    pub received_cuts: Vec<received_fabric_cut::Model>,
}

/// A processing order with its full reconciliation state.
#[derive(Debug, Clone)]
pub struct ProcessingOrderDetail {
    pub order: processing_order::Model,
    pub sent_cuts: Vec<processing_sent_cut::Model>,
    pub deliveries: Vec<DeliveryDetail>,
    pub summary: ReconciliationSummary,
}

/// Result of a send, carrying the advisory cross-order flag.
#[derive(Debug, Clone)]
pub struct SendOutcome {
    pub detail: ProcessingOrderDetail,
    pub mixed_order_warning: bool,
}

/// Whether a cut has ever been dispatched, and to which order form.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FabricCutUsage {
    pub is_used: bool,
    pub order_form_number: Option<String>,
}

/// Tracks cuts through an external processing center: dispatch, partial
/// returns as renumbered cuts, and edit/delete of individual past
/// deliveries, keeping the sent/received/shortage balance consistent
/// throughout. Return-cut numbers advance through a forward-only cursor
/// per order and are never reissued.
#[derive(Clone)]
pub struct ProcessingService {
    db_pool: Arc<DbPool>,
    event_sender: EventSender,
}

impl ProcessingService {
    pub fn new(db_pool: Arc<DbPool>, event_sender: EventSender) -> Self {
        Self {
            db_pool,
            event_sender,
        }
    }

    /// Dispatches inspected, unclaimed cuts to a processing center. The
    /// sent quantity of each cut is its inspected quantity, frozen at
    /// this moment. A cut belongs to at most one processing order for its
    /// lifetime; the claim is re-validated row by row inside the
    /// transaction, so two racing sends cannot both take the same cut.
    #[instrument(skip(self, input))]
    pub async fn send(&self, input: SendToProcessingInput) -> Result<SendOutcome, ServiceError> {
        if input.fabric_cut_ids.is_empty() {
            return Err(ServiceError::ValidationError(
                "at least one fabric cut is required".into(),
            ));
        }
        if input.processes.is_empty() {
            return Err(ServiceError::ValidationError(
                "at least one process is required".into(),
            ));
        }
        if input.processing_center.trim().is_empty() {
            return Err(ServiceError::ValidationError(
                "processing_center must not be empty".into(),
            ));
        }

        let txn = self.db_pool.begin().await?;

        let cuts = fabric_cut::Entity::find()
            .filter(fabric_cut::Column::Id.is_in(input.fabric_cut_ids.clone()))
            .filter(fabric_cut::Column::IsDeleted.eq(false))
            .all(&txn)
            .await?;
        if cuts.len() != input.fabric_cut_ids.len() {
            return Err(ServiceError::NotFound(
                "one or more fabric cuts do not exist".into(),
            ));
        }

        for cut in &cuts {
            if cut.inspected_at.is_none() || cut.inspected_quantity.is_none() {
                return Err(ServiceError::StateConflict(format!(
                    "fabric cut {} has not completed inspection",
                    cut.fabric_number
                )));
            }
            if let Some(order_id) = cut.processing_order_id {
                let holder = processing_order::Entity::find_by_id(order_id).one(&txn).await?;
                let number = holder
                    .map(|o| o.order_form_number)
                    .unwrap_or_else(|| order_id.to_string());
                return Err(ServiceError::ClaimConflict(format!(
                    "fabric cut {} is already claimed by processing order {}",
                    cut.fabric_number, number
                )));
            }
        }

        let warp_ids: BTreeSet<Uuid> = cuts.iter().map(|c| c.warp_id).collect();
        let warps = warp::Entity::find()
            .filter(warp::Column::Id.is_in(warp_ids.iter().copied().collect::<Vec<_>>()))
            .all(&txn)
            .await?;
        let order_refs: BTreeSet<Option<String>> =
            warps.iter().map(|w| w.order_ref.clone()).collect();
        // Cross-order consistency stays advisory: the send commits, the
        // caller is warned.
        let mixed_order_warning = order_refs.len() > 1;
        if mixed_order_warning {
            warn!("processing send mixes cuts from more than one source order");
        }
        let warp_number_of = |warp_id: Uuid| -> String {
            warps
                .iter()
                .find(|w| w.id == warp_id)
                .map(|w| w.warp_number.clone())
                .unwrap_or_default()
        };

        let total_quantity: Decimal = cuts
            .iter()
            .map(|c| c.inspected_quantity.unwrap_or(Decimal::ZERO))
            .sum();

        let seq = SequenceAllocator::next(&txn, SCOPE_ORDER_FORMS).await?;
        let order_model = processing_order::ActiveModel {
            id: Set(Uuid::new_v4()),
            order_form_number: Set(SequenceAllocator::format_order_form(seq)),
            order_form_seq: Set(seq),
            processing_center: Set(input.processing_center.trim().to_string()),
            processes: Set(serde_json::json!(input.processes)),
            vehicle_number: Set(input.vehicle_number.clone()),
            delivery_date: Set(input.delivery_date),
            total_quantity: Set(total_quantity),
            received_cut_cursor: Set(0),
            status: Set(ProcessingStatus::Sent.to_string()),
            created_at: Set(Utc::now()),
            updated_at: Set(None),
        };
        let order = order_model.insert(&txn).await?;

        for cut in &cuts {
            let sent = processing_sent_cut::ActiveModel {
                id: Set(Uuid::new_v4()),
                processing_order_id: Set(order.id),
                fabric_cut_id: Set(cut.id),
                fabric_number: Set(cut.fabric_number.clone()),
                warp_number: Set(warp_number_of(cut.warp_id)),
                quantity: Set(cut.inspected_quantity.unwrap_or(Decimal::ZERO)),
            };
            sent.insert(&txn).await?;

            // Claim re-validated immediately before commit: the row must
            // still be unclaimed and at the version we read.
            let result = fabric_cut::Entity::update_many()
                .col_expr(
                    fabric_cut::Column::ProcessingOrderId,
                    sea_orm::sea_query::Expr::value(order.id),
                )
                .col_expr(
                    fabric_cut::Column::UpdatedAt,
                    sea_orm::sea_query::Expr::value(Utc::now()),
                )
                .col_expr(
                    fabric_cut::Column::Version,
                    sea_orm::sea_query::Expr::value(cut.version + 1),
                )
                .filter(fabric_cut::Column::Id.eq(cut.id))
                .filter(fabric_cut::Column::Version.eq(cut.version))
                .filter(fabric_cut::Column::ProcessingOrderId.is_null())
                .exec(&txn)
                .await?;
            if result.rows_affected != 1 {
                return Err(ServiceError::Conflict(format!(
                    "fabric cut {} was claimed concurrently",
                    cut.fabric_number
                )));
            }
        }

        txn.commit().await?;

        info!(
            order_form_number = %order.order_form_number,
            cut_count = cuts.len(),
            %total_quantity,
            "processing order sent"
        );
        self.event_sender.publish(Event::ProcessingOrderSent {
            processing_order_id: order.id,
            order_form_number: order.order_form_number.clone(),
        });

        let detail = self.load_detail(order.id).await?;
        Ok(SendOutcome {
            detail,
            mixed_order_warning,
        })
    }

    /// Records one receiving event. Every accepted entry mints the next
    /// fabric number in the order's `WR/{orderSeq}/{NN}` series from the
    /// forward-only cursor; cumulative quantity and cut count must stay
    /// within what was sent, compared exactly, never on rounded values.
    #[instrument(skip(self, input))]
    pub async fn receive_delivery(
        &self,
        order_id: Uuid,
        input: ReceiveDeliveryInput,
    ) -> Result<ProcessingOrderDetail, ServiceError> {
        if input.cut_quantities.is_empty() {
            return Err(ServiceError::ValidationError(
                "a delivery requires at least one cut quantity".into(),
            ));
        }
        if let Some(bad) = input.cut_quantities.iter().find(|q| **q <= Decimal::ZERO) {
            return Err(ServiceError::ValidationError(format!(
                "cut quantities must be positive, got {}",
                bad
            )));
        }
        if input.delivery_number.trim().is_empty() {
            return Err(ServiceError::ValidationError(
                "delivery_number must not be empty".into(),
            ));
        }

        let txn = self.db_pool.begin().await?;

        let order = Self::find_order(&txn, order_id).await?;
        let sent_count = Self::sent_count(&txn, order_id).await?;
        let existing = received_fabric_cut::Entity::find()
            .filter(received_fabric_cut::Column::ProcessingOrderId.eq(order_id))
            .all(&txn)
            .await?;
        let cuts_already = existing.len();
        let already: Decimal = existing.iter().map(|c| c.quantity).sum();

        let incoming_count = input.cut_quantities.len();
        if cuts_already + incoming_count > sent_count {
            return Err(ServiceError::CapacityViolation(format!(
                "order {} sent {} cuts; {} already received plus {} incoming exceeds that",
                order.order_form_number, sent_count, cuts_already, incoming_count
            )));
        }
        let incoming: Decimal = input.cut_quantities.iter().copied().sum();
        if already + incoming > order.total_quantity {
            return Err(ServiceError::CapacityViolation(format!(
                "order {} holds {}m; {}m already received plus {}m incoming totals {}m",
                order.order_form_number,
                order.total_quantity,
                already,
                incoming,
                already + incoming
            )));
        }

        let last_seq = processing_delivery::Entity::find()
            .filter(processing_delivery::Column::ProcessingOrderId.eq(order_id))
            .order_by_desc(processing_delivery::Column::DeliverySeq)
            .one(&txn)
            .await?
            .map(|d| d.delivery_seq)
            .unwrap_or(0);
        let delivery_seq = last_seq + 1;

        let now = Utc::now();
        let delivery_model = processing_delivery::ActiveModel {
            id: Set(Uuid::new_v4()),
            processing_order_id: Set(order_id),
            delivery_seq: Set(delivery_seq),
            delivery_number: Set(input.delivery_number.trim().to_string()),
            received_by: Set(input.received_by.trim().to_string()),
            location: Set(input.location.trim().to_string()),
            cuts_received: Set(incoming_count as i32),
            total_quantity_received: Set(incoming),
            received_at: Set(now),
        };
        let delivery = delivery_model.insert(&txn).await?;

        for (offset, quantity) in input.cut_quantities.iter().enumerate() {
            let cut_seq = order.received_cut_cursor + 1 + offset as i32;
            let received = received_fabric_cut::ActiveModel {
                id: Set(Uuid::new_v4()),
                processing_order_id: Set(order_id),
                delivery_id: Set(delivery.id),
                cut_seq: Set(cut_seq),
                fabric_number: Set(SequenceAllocator::format_received_cut(
                    order.order_form_seq,
                    cut_seq,
                )),
                quantity: Set(*quantity),
                created_at: Set(now),
            };
            received.insert(&txn).await?;
        }

        let status = ProcessingStatus::derive(cuts_already + incoming_count, sent_count);
        // The cursor doubles as the order's optimistic version: a
        // concurrent delivery moved it, so this one aborts.
        let result = processing_order::Entity::update_many()
            .col_expr(
                processing_order::Column::ReceivedCutCursor,
                sea_orm::sea_query::Expr::value(order.received_cut_cursor + incoming_count as i32),
            )
            .col_expr(
                processing_order::Column::Status,
                sea_orm::sea_query::Expr::value(status.to_string()),
            )
            .col_expr(
                processing_order::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(now),
            )
            .filter(processing_order::Column::Id.eq(order_id))
            .filter(processing_order::Column::ReceivedCutCursor.eq(order.received_cut_cursor))
            .exec(&txn)
            .await?;
        if result.rows_affected != 1 {
            return Err(ServiceError::Conflict(format!(
                "order {} received another delivery concurrently",
                order.order_form_number
            )));
        }

        if status == ProcessingStatus::Completed {
            Self::mark_source_cuts_received(&txn, order_id, true).await?;
        }

        txn.commit().await?;

        info!(
            order_form_number = %order.order_form_number,
            delivery_seq,
            cuts = incoming_count,
            quantity = %incoming,
            "processing delivery received"
        );
        self.event_sender.publish(Event::ProcessingDeliveryReceived {
            processing_order_id: order_id,
            delivery_seq,
        });
        self.load_detail(order_id).await
    }

    /// Replaces one past delivery's metadata and cut quantities in place.
    /// The fabric numbers are retained and the cut count is fixed; the
    /// sum ceiling is re-validated against all *other* deliveries.
    /// `delivery_index` is the position in the order's delivery history.
    #[instrument(skip(self, input))]
    pub async fn edit_delivery(
        &self,
        order_id: Uuid,
        delivery_index: usize,
        input: EditDeliveryInput,
    ) -> Result<ProcessingOrderDetail, ServiceError> {
        if let Some(bad) = input.cut_quantities.iter().find(|q| **q <= Decimal::ZERO) {
            return Err(ServiceError::ValidationError(format!(
                "cut quantities must be positive, got {}",
                bad
            )));
        }

        let txn = self.db_pool.begin().await?;

        let order = Self::find_order(&txn, order_id).await?;
        let delivery = Self::find_delivery_by_index(&txn, order_id, delivery_index).await?;

        let own_cuts = received_fabric_cut::Entity::find()
            .filter(received_fabric_cut::Column::DeliveryId.eq(delivery.id))
            .order_by_asc(received_fabric_cut::Column::CutSeq)
            .all(&txn)
            .await?;
        if input.cut_quantities.len() != own_cuts.len() {
            return Err(ServiceError::ValidationError(format!(
                "delivery {} holds {} cuts; edit supplied {} quantities (delete and re-receive to change the count)",
                delivery.delivery_number,
                own_cuts.len(),
                input.cut_quantities.len()
            )));
        }

        // Ceilings recomputed against every delivery except this one.
        let all_received = received_fabric_cut::Entity::find()
            .filter(received_fabric_cut::Column::ProcessingOrderId.eq(order_id))
            .all(&txn)
            .await?;
        let others: Decimal = all_received
            .iter()
            .filter(|c| c.delivery_id != delivery.id)
            .map(|c| c.quantity)
            .sum();
        let new_total: Decimal = input.cut_quantities.iter().copied().sum();
        if others + new_total > order.total_quantity {
            return Err(ServiceError::CapacityViolation(format!(
                "order {} holds {}m; other deliveries received {}m plus edited {}m totals {}m",
                order.order_form_number,
                order.total_quantity,
                others,
                new_total,
                others + new_total
            )));
        }
        let sent_count = Self::sent_count(&txn, order_id).await?;
        let other_count = all_received.len() - own_cuts.len();
        if other_count + input.cut_quantities.len() > sent_count {
            return Err(ServiceError::CapacityViolation(format!(
                "order {} sent {} cuts; edit would take the received count to {}",
                order.order_form_number,
                sent_count,
                other_count + input.cut_quantities.len()
            )));
        }

        for (cut, quantity) in own_cuts.iter().zip(input.cut_quantities.iter()) {
            let mut active: received_fabric_cut::ActiveModel = cut.clone().into();
            active.quantity = Set(*quantity);
            active.update(&txn).await?;
        }

        let delivery_seq = delivery.delivery_seq;
        let mut active: processing_delivery::ActiveModel = delivery.into();
        active.delivery_number = Set(input.delivery_number.trim().to_string());
        active.received_by = Set(input.received_by.trim().to_string());
        active.location = Set(input.location.trim().to_string());
        active.total_quantity_received = Set(new_total);
        active.update(&txn).await?;

        let status = ProcessingStatus::derive(all_received.len(), sent_count);
        let mut order_active: processing_order::ActiveModel = order.into();
        order_active.status = Set(status.to_string());
        order_active.updated_at = Set(Some(Utc::now()));
        order_active.update(&txn).await?;

        txn.commit().await?;

        self.event_sender.publish(Event::ProcessingDeliveryEdited {
            processing_order_id: order_id,
            delivery_seq,
        });
        self.load_detail(order_id).await
    }

    /// Removes one past delivery and the return cuts it minted. The
    /// numbering cursor does not move back, so the deleted numbers are
    /// gone for good; status may fall back as far as `sent`.
    #[instrument(skip(self))]
    pub async fn delete_delivery(
        &self,
        order_id: Uuid,
        delivery_index: usize,
    ) -> Result<ProcessingOrderDetail, ServiceError> {
        let txn = self.db_pool.begin().await?;

        let order = Self::find_order(&txn, order_id).await?;
        let delivery = Self::find_delivery_by_index(&txn, order_id, delivery_index).await?;
        let delivery_seq = delivery.delivery_seq;

        received_fabric_cut::Entity::delete_many()
            .filter(received_fabric_cut::Column::DeliveryId.eq(delivery.id))
            .exec(&txn)
            .await?;
        delivery.delete(&txn).await?;

        let remaining = received_fabric_cut::Entity::find()
            .filter(received_fabric_cut::Column::ProcessingOrderId.eq(order_id))
            .all(&txn)
            .await?;
        let sent_count = Self::sent_count(&txn, order_id).await?;
        let status = ProcessingStatus::derive(remaining.len(), sent_count);

        let order_form_number = order.order_form_number.clone();
        let mut order_active: processing_order::ActiveModel = order.into();
        order_active.status = Set(status.to_string());
        order_active.updated_at = Set(Some(Utc::now()));
        order_active.update(&txn).await?;

        if status != ProcessingStatus::Completed {
            Self::mark_source_cuts_received(&txn, order_id, false).await?;
        }

        txn.commit().await?;

        info!(%order_form_number, delivery_seq, "processing delivery deleted");
        self.event_sender.publish(Event::ProcessingDeliveryDeleted {
            processing_order_id: order_id,
            delivery_seq,
        });
        self.load_detail(order_id).await
    }

    /// Read-only guard for the send path and external scanners.
    #[instrument(skip(self))]
    pub async fn check_fabric_cut_used(
        &self,
        fabric_number: &str,
    ) -> Result<FabricCutUsage, ServiceError> {
        let db = self.db_pool.as_ref();
        let cut = fabric_cut::Entity::find()
            .filter(fabric_cut::Column::FabricNumber.eq(fabric_number))
            .filter(fabric_cut::Column::IsDeleted.eq(false))
            .one(db)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("fabric cut {} not found", fabric_number))
            })?;

        match cut.processing_order_id {
            Some(order_id) => {
                let number = processing_order::Entity::find_by_id(order_id)
                    .one(db)
                    .await?
                    .map(|o| o.order_form_number);
                Ok(FabricCutUsage {
                    is_used: true,
                    order_form_number: number,
                })
            }
            None => Ok(FabricCutUsage {
                is_used: false,
                order_form_number: None,
            }),
        }
    }

    #[instrument(skip(self))]
    pub async fn get_order(&self, order_id: Uuid) -> Result<ProcessingOrderDetail, ServiceError> {
        self.load_detail(order_id).await
    }

    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<processing_order::Model>, ServiceError> {
        Ok(processing_order::Entity::find()
            .order_by_desc(processing_order::Column::CreatedAt)
            .all(self.db_pool.as_ref())
            .await?)
    }

    /// Mirrors order completion onto the source cuts' return flag.
    async fn mark_source_cuts_received(
        txn: &DatabaseTransaction,
        order_id: Uuid,
        received: bool,
    ) -> Result<(), ServiceError> {
        fabric_cut::Entity::update_many()
            .col_expr(
                fabric_cut::Column::IsProcessingReceived,
                sea_orm::sea_query::Expr::value(received),
            )
            .filter(fabric_cut::Column::ProcessingOrderId.eq(order_id))
            .exec(txn)
            .await?;
        Ok(())
    }

    async fn find_order(
        txn: &DatabaseTransaction,
        order_id: Uuid,
    ) -> Result<processing_order::Model, ServiceError> {
        processing_order::Entity::find_by_id(order_id)
            .one(txn)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("processing order {} not found", order_id))
            })
    }

    async fn sent_count(
        txn: &DatabaseTransaction,
        order_id: Uuid,
    ) -> Result<usize, ServiceError> {
        Ok(processing_sent_cut::Entity::find()
            .filter(processing_sent_cut::Column::ProcessingOrderId.eq(order_id))
            .all(txn)
            .await?
            .len())
    }

    async fn find_delivery_by_index(
        txn: &DatabaseTransaction,
        order_id: Uuid,
        delivery_index: usize,
    ) -> Result<processing_delivery::Model, ServiceError> {
        let deliveries = processing_delivery::Entity::find()
            .filter(processing_delivery::Column::ProcessingOrderId.eq(order_id))
            .order_by_asc(processing_delivery::Column::DeliverySeq)
            .all(txn)
            .await?;
        deliveries
            .into_iter()
            .nth(delivery_index)
            .ok_or_else(|| {
                ServiceError::NotFound(format!(
                    "processing order {} has no delivery at index {}",
                    order_id, delivery_index
                ))
            })
    }

    async fn load_detail(&self, order_id: Uuid) -> Result<ProcessingOrderDetail, ServiceError> {
        let db = self.db_pool.as_ref();

        let order = processing_order::Entity::find_by_id(order_id)
            .one(db)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("processing order {} not found", order_id))
            })?;

        let sent_cuts = processing_sent_cut::Entity::find()
            .filter(processing_sent_cut::Column::ProcessingOrderId.eq(order_id))
            .all(db)
            .await?;

        let delivery_rows = processing_delivery::Entity::find()
            .filter(processing_delivery::Column::ProcessingOrderId.eq(order_id))
            .order_by_asc(processing_delivery::Column::DeliverySeq)
            .all(db)
            .await?;

        let received = received_fabric_cut::Entity::find()
            .filter(received_fabric_cut::Column::ProcessingOrderId.eq(order_id))
            .order_by_asc(received_fabric_cut::Column::CutSeq)
            .all(db)
            .await?;

        let deliveries: Vec<DeliveryDetail> = delivery_rows
            .into_iter()
            .map(|delivery| {
                let received_cuts = received
                    .iter()
                    .filter(|c| c.delivery_id == delivery.id)
                    .cloned()
                    .collect();
                DeliveryDetail {
                    delivery,
                    received_cuts,
                }
            })
            .collect();

        let sent_quantity: Decimal = sent_cuts.iter().map(|c| c.quantity).sum();
        let received_quantity: Decimal = received.iter().map(|c| c.quantity).sum();
        let summary = ReconciliationSummary {
            sent_count: sent_cuts.len(),
            received_count: received.len(),
            shortage_count: sent_cuts.len().saturating_sub(received.len()),
            sent_quantity,
            received_quantity,
            shortage_quantity: sent_quantity - received_quantity,
        };

        Ok(ProcessingOrderDetail {
            order,
            sent_cuts,
            deliveries,
            summary,
        })
    }
}
