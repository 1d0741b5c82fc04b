use std::str::FromStr;
use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::db::DbPool;
use crate::entities::wage_invoice::{self, InvoiceStatus};
use crate::entities::{fabric_cut, wage_invoice_cut, warp};
use crate::errors::ServiceError;
use crate::events::{Event, EventSender};
use crate::services::sequences::{invoice_scope, SequenceAllocator};

/// Reviewer-supplied replacement aggregates captured during approval.
/// Any field that differs from the submitted value marks the invoice as
/// adjusted and total wages are recomputed from the final values.
#[derive(Debug, Clone, Default)]
pub struct ApprovalOverrides {
    pub total_inspected_quantity: Option<Decimal>,
    pub total_mistake_quantity: Option<Decimal>,
    pub total_actual_quantity: Option<Decimal>,
    pub rate_per_meter: Option<Decimal>,
}

/// The decision taken on a pending invoice.
#[derive(Debug, Clone)]
pub enum InvoiceDecision {
    Approve(ApprovalOverrides),
    Reject,
}

/// An invoice with its snapshot rows.
#[derive(Debug, Clone)]
pub struct WageInvoiceDetail {
    pub invoice: wage_invoice::Model,
    pub cuts: Vec<wage_invoice_cut::Model>,
}

/// Derives wage invoices from a warp's inspected cuts and drives them
/// through `pending → approved → payment_done` or `pending → rejected`.
/// Aggregates are computed here on every mutating call; caller-supplied
/// totals are never trusted.
#[derive(Clone)]
pub struct WageInvoiceService {
    db_pool: Arc<DbPool>,
    event_sender: EventSender,
}

impl WageInvoiceService {
    pub fn new(db_pool: Arc<DbPool>, event_sender: EventSender) -> Self {
        Self {
            db_pool,
            event_sender,
        }
    }

    /// Submits a wage invoice for a warp, snapshotting every inspected
    /// cut as of this moment and locking those cuts against a second
    /// submission until the invoice is deleted.
    #[instrument(skip(self))]
    pub async fn submit(
        &self,
        warp_id: Uuid,
        rate_per_meter: Decimal,
    ) -> Result<WageInvoiceDetail, ServiceError> {
        if rate_per_meter <= Decimal::ZERO {
            return Err(ServiceError::ValidationError(format!(
                "rate per meter must be positive, got {}",
                rate_per_meter
            )));
        }

        let txn = self.db_pool.begin().await?;

        let warp = warp::Entity::find_by_id(warp_id)
            .one(&txn)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("warp {} not found", warp_id)))?;

        let cuts = fabric_cut::Entity::find()
            .filter(fabric_cut::Column::WarpId.eq(warp_id))
            .filter(fabric_cut::Column::IsDeleted.eq(false))
            .filter(fabric_cut::Column::InspectedAt.is_not_null())
            .order_by_asc(fabric_cut::Column::FabricNumber)
            .all(&txn)
            .await?;
        if cuts.is_empty() {
            return Err(ServiceError::ValidationError(format!(
                "warp {} has no inspected fabric cuts to invoice",
                warp.warp_number
            )));
        }

        for cut in &cuts {
            if let Some(invoice_id) = cut.wage_invoice_id {
                let holder = wage_invoice::Entity::find_by_id(invoice_id).one(&txn).await?;
                let number = holder
                    .map(|i| i.invoice_number)
                    .unwrap_or_else(|| invoice_id.to_string());
                return Err(ServiceError::ClaimConflict(format!(
                    "fabric cut {} is already on wage invoice {}",
                    cut.fabric_number, number
                )));
            }
        }

        let total_inspected: Decimal = cuts
            .iter()
            .map(|c| c.inspected_quantity.unwrap_or(Decimal::ZERO))
            .sum();
        let total_mistake: Decimal = cuts
            .iter()
            .map(|c| c.mistake_quantity.unwrap_or(Decimal::ZERO))
            .sum();
        let total_actual: Decimal = cuts
            .iter()
            .map(|c| c.actual_quantity.unwrap_or(Decimal::ZERO))
            .sum();

        let seq = SequenceAllocator::next(&txn, &invoice_scope(&warp.warp_number)).await?;
        let invoice_model = wage_invoice::ActiveModel {
            id: Set(Uuid::new_v4()),
            invoice_number: Set(SequenceAllocator::format_invoice(&warp.warp_number, seq)),
            warp_id: Set(warp_id),
            rate_per_meter: Set(rate_per_meter),
            total_inspected_quantity: Set(total_inspected),
            total_mistake_quantity: Set(total_mistake),
            total_actual_quantity: Set(total_actual),
            total_wages: Set(total_actual * rate_per_meter),
            status: Set(InvoiceStatus::Pending.to_string()),
            values_updated_during_approval: Set(false),
            approved_at: Set(None),
            paid_at: Set(None),
            created_at: Set(Utc::now()),
            updated_at: Set(None),
        };
        let invoice = invoice_model.insert(&txn).await?;

        for cut in &cuts {
            let snapshot = wage_invoice_cut::ActiveModel {
                id: Set(Uuid::new_v4()),
                wage_invoice_id: Set(invoice.id),
                fabric_cut_id: Set(cut.id),
                fabric_number: Set(cut.fabric_number.clone()),
                quantity: Set(cut.quantity),
                inspected_quantity: Set(cut.inspected_quantity.unwrap_or(Decimal::ZERO)),
                mistake_quantity: Set(cut.mistake_quantity.unwrap_or(Decimal::ZERO)),
                actual_quantity: Set(cut.actual_quantity.unwrap_or(Decimal::ZERO)),
                inspector1: Set(cut.inspector1.clone()),
                inspector2: Set(cut.inspector2.clone()),
            };
            snapshot.insert(&txn).await?;

            // Submission lock, re-validated immediately before commit.
            let result = fabric_cut::Entity::update_many()
                .col_expr(
                    fabric_cut::Column::WageInvoiceId,
                    sea_orm::sea_query::Expr::value(invoice.id),
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
                .filter(fabric_cut::Column::WageInvoiceId.is_null())
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

        info!(invoice_number = %invoice.invoice_number, "wage invoice submitted");
        self.event_sender.publish(Event::InvoiceSubmitted {
            invoice_id: invoice.id,
            warp_id,
        });
        self.load_detail(invoice.id).await
    }

    /// Approves or rejects a pending invoice. Approval may overwrite the
    /// aggregates from the human review step; rejection takes no value
    /// changes.
    #[instrument(skip(self, decision))]
    pub async fn decide(
        &self,
        invoice_id: Uuid,
        decision: InvoiceDecision,
    ) -> Result<WageInvoiceDetail, ServiceError> {
        let txn = self.db_pool.begin().await?;

        let invoice = Self::find_invoice(&txn, invoice_id).await?;
        Self::require_status(&invoice, InvoiceStatus::Pending)?;

        let now = Utc::now();
        let (new_status, updated) = match decision {
            InvoiceDecision::Approve(overrides) => {
                let inspected = overrides
                    .total_inspected_quantity
                    .unwrap_or(invoice.total_inspected_quantity);
                let mistake = overrides
                    .total_mistake_quantity
                    .unwrap_or(invoice.total_mistake_quantity);
                let actual = overrides
                    .total_actual_quantity
                    .unwrap_or(invoice.total_actual_quantity);
                let rate = overrides.rate_per_meter.unwrap_or(invoice.rate_per_meter);
                if inspected < Decimal::ZERO
                    || mistake < Decimal::ZERO
                    || actual < Decimal::ZERO
                    || rate <= Decimal::ZERO
                {
                    return Err(ServiceError::ValidationError(
                        "approval overrides must be non-negative with a positive rate".into(),
                    ));
                }

                let values_changed = inspected != invoice.total_inspected_quantity
                    || mistake != invoice.total_mistake_quantity
                    || actual != invoice.total_actual_quantity
                    || rate != invoice.rate_per_meter;

                let mut active: wage_invoice::ActiveModel = invoice.clone().into();
                active.total_inspected_quantity = Set(inspected);
                active.total_mistake_quantity = Set(mistake);
                active.total_actual_quantity = Set(actual);
                active.rate_per_meter = Set(rate);
                active.total_wages = Set(actual * rate);
                active.values_updated_during_approval = Set(values_changed);
                active.status = Set(InvoiceStatus::Approved.to_string());
                active.approved_at = Set(Some(now));
                active.updated_at = Set(Some(now));
                (InvoiceStatus::Approved, active.update(&txn).await?)
            }
            InvoiceDecision::Reject => {
                let mut active: wage_invoice::ActiveModel = invoice.clone().into();
                active.status = Set(InvoiceStatus::Rejected.to_string());
                active.updated_at = Set(Some(now));
                (InvoiceStatus::Rejected, active.update(&txn).await?)
            }
        };

        txn.commit().await?;

        info!(
            invoice_number = %updated.invoice_number,
            status = %new_status,
            "wage invoice decided"
        );
        self.event_sender.publish(Event::InvoiceStatusChanged {
            invoice_id,
            warp_id: updated.warp_id,
            new_status: new_status.to_string(),
        });
        self.load_detail(invoice_id).await
    }

    /// Marks an approved invoice paid. `payment_done` is terminal.
    #[instrument(skip(self))]
    pub async fn mark_paid(&self, invoice_id: Uuid) -> Result<WageInvoiceDetail, ServiceError> {
        let txn = self.db_pool.begin().await?;

        let invoice = Self::find_invoice(&txn, invoice_id).await?;
        Self::require_status(&invoice, InvoiceStatus::Approved)?;

        let now = Utc::now();
        let warp_id = invoice.warp_id;
        let mut active: wage_invoice::ActiveModel = invoice.into();
        active.status = Set(InvoiceStatus::PaymentDone.to_string());
        active.paid_at = Set(Some(now));
        active.updated_at = Set(Some(now));
        let updated = active.update(&txn).await?;

        txn.commit().await?;

        info!(invoice_number = %updated.invoice_number, "wage invoice paid");
        self.event_sender.publish(Event::InvoiceStatusChanged {
            invoice_id,
            warp_id,
            new_status: InvoiceStatus::PaymentDone.to_string(),
        });
        self.load_detail(invoice_id).await
    }

    /// Deletes a pending or rejected invoice and releases the warp's
    /// cuts from the submission lock so they can be re-submitted.
    #[instrument(skip(self))]
    pub async fn delete(&self, invoice_id: Uuid) -> Result<(), ServiceError> {
        let txn = self.db_pool.begin().await?;

        let invoice = Self::find_invoice(&txn, invoice_id).await?;
        let status = Self::parse_status(&invoice)?;
        if !matches!(status, InvoiceStatus::Pending | InvoiceStatus::Rejected) {
            return Err(ServiceError::StateConflict(format!(
                "invoice {} is {}, deletion requires {} or {}",
                invoice.invoice_number,
                status,
                InvoiceStatus::Pending,
                InvoiceStatus::Rejected
            )));
        }

        fabric_cut::Entity::update_many()
            .col_expr(
                fabric_cut::Column::WageInvoiceId,
                sea_orm::sea_query::Expr::value(Option::<Uuid>::None),
            )
            .col_expr(
                fabric_cut::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .filter(fabric_cut::Column::WageInvoiceId.eq(invoice_id))
            .exec(&txn)
            .await?;

        wage_invoice_cut::Entity::delete_many()
            .filter(wage_invoice_cut::Column::WageInvoiceId.eq(invoice_id))
            .exec(&txn)
            .await?;

        let invoice_number = invoice.invoice_number.clone();
        let warp_id = invoice.warp_id;
        invoice.delete(&txn).await?;

        txn.commit().await?;

        info!(%invoice_number, "wage invoice deleted, cuts released");
        self.event_sender.publish(Event::InvoiceStatusChanged {
            invoice_id,
            warp_id,
            new_status: "deleted".to_string(),
        });
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn get_invoice(&self, invoice_id: Uuid) -> Result<WageInvoiceDetail, ServiceError> {
        self.load_detail(invoice_id).await
    }

    #[instrument(skip(self))]
    pub async fn list_invoices(
        &self,
        status: Option<InvoiceStatus>,
    ) -> Result<Vec<wage_invoice::Model>, ServiceError> {
        let mut query = wage_invoice::Entity::find();
        if let Some(status) = status {
            query = query.filter(wage_invoice::Column::Status.eq(status.to_string()));
        }
        Ok(query
            .order_by_desc(wage_invoice::Column::CreatedAt)
            .all(self.db_pool.as_ref())
            .await?)
    }

    async fn find_invoice<C: sea_orm::ConnectionTrait>(
        conn: &C,
        invoice_id: Uuid,
    ) -> Result<wage_invoice::Model, ServiceError> {
        wage_invoice::Entity::find_by_id(invoice_id)
            .one(conn)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("wage invoice {} not found", invoice_id)))
    }

    fn parse_status(invoice: &wage_invoice::Model) -> Result<InvoiceStatus, ServiceError> {
        InvoiceStatus::from_str(&invoice.status).map_err(|_| {
            ServiceError::InternalError(format!(
                "invoice {} has unknown status '{}'",
                invoice.invoice_number, invoice.status
            ))
        })
    }

    fn require_status(
        invoice: &wage_invoice::Model,
        required: InvoiceStatus,
    ) -> Result<(), ServiceError> {
        let status = Self::parse_status(invoice)?;
        if status != required {
            return Err(ServiceError::StateConflict(format!(
                "invoice {} is {}, operation requires {}",
                invoice.invoice_number, status, required
            )));
        }
        Ok(())
    }

    async fn load_detail(&self, invoice_id: Uuid) -> Result<WageInvoiceDetail, ServiceError> {
        let db = self.db_pool.as_ref();
        let invoice = Self::find_invoice(db, invoice_id).await?;
        let cuts = wage_invoice_cut::Entity::find()
            .filter(wage_invoice_cut::Column::WageInvoiceId.eq(invoice_id))
            .order_by_asc(wage_invoice_cut::Column::FabricNumber)
            .all(db)
            .await?;
        Ok(WageInvoiceDetail { invoice, cuts })
    }
}
