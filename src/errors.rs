use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::error::DbErr;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by every failing endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// HTTP status category (e.g., "Not Found", "Conflict")
    #[schema(example = "Conflict")]
    pub error: String,
    /// Human-readable error description
    #[schema(example = "Fabric cut V42-3 is already claimed by processing order 00017")]
    pub message: String,
    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// ISO 8601 timestamp when the error occurred
    #[schema(example = "2025-11-09T10:30:00.000Z")]
    pub timestamp: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] DbErr),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    /// A quantity ceiling (warp meters, processing order totals) would be
    /// exceeded. The message carries the ceiling and the attempted total.
    #[error("Capacity exceeded: {0}")]
    CapacityViolation(String),

    /// The fabric cut is already held by another movement, processing order,
    /// or wage invoice. The message identifies the conflicting entity.
    #[error("Claim conflict: {0}")]
    ClaimConflict(String),

    /// The operation is illegal for the entity's current status. The message
    /// names current vs. required status.
    #[error("Invalid state: {0}")]
    StateConflict(String),

    /// Optimistic re-validation inside the transaction detected a concurrent
    /// writer; the transaction was rolled back.
    #[error("Concurrent modification: {0}")]
    Conflict(String),

    #[error("Event error: {0}")]
    EventError(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(err: validator::ValidationErrors) -> Self {
        ServiceError::ValidationError(err.to_string())
    }
}

impl ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::CapacityViolation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::ClaimConflict(_)
            | ServiceError::StateConflict(_)
            | ServiceError::Conflict(_) => StatusCode::CONFLICT,
            ServiceError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ServiceError::DatabaseError(_)
            | ServiceError::EventError(_)
            | ServiceError::InternalError(_)
            | ServiceError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn status_label(&self) -> &'static str {
        match self.status_code() {
            StatusCode::BAD_REQUEST => "Bad Request",
            StatusCode::NOT_FOUND => "Not Found",
            StatusCode::UNPROCESSABLE_ENTITY => "Unprocessable Entity",
            StatusCode::CONFLICT => "Conflict",
            StatusCode::SERVICE_UNAVAILABLE => "Service Unavailable",
            _ => "Internal Server Error",
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Persistence failures must never leak driver detail to callers.
        let message = match &self {
            ServiceError::DatabaseError(err) => {
                tracing::error!(error = %err, "database error");
                "A storage error occurred; no changes were applied".to_string()
            }
            ServiceError::InternalError(msg) => {
                tracing::error!(error = %msg, "internal error");
                "An internal error occurred".to_string()
            }
            ServiceError::Other(err) => {
                tracing::error!(error = %err, "unhandled error");
                "An internal error occurred".to_string()
            }
            other => other.to_string(),
        };

        let body = ErrorResponse {
            error: self.status_label().to_string(),
            message,
            details: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_conflict_maps_to_conflict_status() {
        let err = ServiceError::ClaimConflict("cut V1-1 held by order 00001".into());
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn capacity_violation_maps_to_unprocessable_entity() {
        let err = ServiceError::CapacityViolation("120 > 100".into());
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn database_error_message_is_not_leaked() {
        let err = ServiceError::DatabaseError(DbErr::Custom("secret dsn".into()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
