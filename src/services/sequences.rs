use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set,
};

use crate::entities::sequence_counter;
use crate::errors::ServiceError;

/// Gap-free scoped counters backed by the `sequence_counters` table.
///
/// Allocation happens inside the caller's transaction: if the parent
/// entity fails to commit, the increment rolls back with it, so numbers
/// are only ever consumed by entities that exist. Counters are never
/// derived by counting rows.
pub struct SequenceAllocator;

/// Counter scope for processing order forms.
pub const SCOPE_ORDER_FORMS: &str = "processing_order_forms";
/// Counter scope for movement orders.
pub const SCOPE_MOVEMENTS: &str = "movement_orders";

/// Counter scope for the cut indexes of one warp.
pub fn cut_scope(warp_number: &str) -> String {
    format!("fabric_cuts/{}", warp_number)
}

/// Counter scope for the wage invoices of one warp.
pub fn invoice_scope(warp_number: &str) -> String {
    format!("wage_invoices/{}", warp_number)
}

impl SequenceAllocator {
    /// Returns the next integer in `scope_key`.
    ///
    /// The increment is a conditional update re-checked against the value
    /// just read; a concurrent allocator in the same scope loses the race
    /// and surfaces as a conflict, never as a duplicate number.
    pub async fn next<C: ConnectionTrait>(conn: &C, scope_key: &str) -> Result<i64, ServiceError> {
        let current = sequence_counter::Entity::find_by_id(scope_key.to_string())
            .one(conn)
            .await?;

        match current {
            Some(counter) => {
                let next = counter.value + 1;
                let result = sequence_counter::Entity::update_many()
                    .col_expr(
                        sequence_counter::Column::Value,
                        sea_orm::sea_query::Expr::value(next),
                    )
                    .filter(sequence_counter::Column::ScopeKey.eq(scope_key))
                    .filter(sequence_counter::Column::Value.eq(counter.value))
                    .exec(conn)
                    .await?;

                if result.rows_affected != 1 {
                    return Err(ServiceError::Conflict(format!(
                        "sequence scope '{}' was advanced concurrently",
                        scope_key
                    )));
                }
                Ok(next)
            }
            None => {
                // First allocation in this scope. A concurrent first
                // allocation trips the primary key and aborts the caller.
                let row = sequence_counter::ActiveModel {
                    scope_key: Set(scope_key.to_string()),
                    value: Set(1),
                };
                row.insert(conn).await.map_err(|_| {
                    ServiceError::Conflict(format!(
                        "sequence scope '{}' was initialized concurrently",
                        scope_key
                    ))
                })?;
                Ok(1)
            }
        }
    }

    /// Formats a 5-digit order form number, e.g. `00042`.
    pub fn format_order_form(seq: i64) -> String {
        format!("{:05}", seq)
    }

    /// Formats a movement order number, e.g. `MV/00007`.
    pub fn format_movement_order(seq: i64) -> String {
        format!("MV/{:05}", seq)
    }

    /// Formats a wage invoice number, e.g. `AT/V42/3`.
    pub fn format_invoice(warp_number: &str, seq: i64) -> String {
        format!("AT/{}/{}", warp_number, seq)
    }

    /// Formats a renumbered return-cut fabric number, e.g. `WR/17/03`.
    pub fn format_received_cut(order_form_seq: i64, cut_seq: i32) -> String {
        format!("WR/{}/{:02}", order_form_seq, cut_seq)
    }
}
