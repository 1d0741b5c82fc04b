//! Loomledger API Library
//!
//! Transactional core of a textile-mill operations system: warps,
//! fabric cuts, inter-site movements, processing-center reconciliation,
//! and wage invoices.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod events;
pub mod handlers;
pub mod health;
pub mod migrator;
pub mod openapi;
pub mod services;

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use sea_orm::DatabaseConnection;
use utoipa::OpenApi;

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: config::AppConfig,
    pub event_sender: events::EventSender,
    pub services: handlers::AppServices,
}

impl AppState {
    pub fn new(
        db: Arc<DatabaseConnection>,
        config: config::AppConfig,
        event_sender: events::EventSender,
    ) -> Self {
        let services = handlers::AppServices::new(db.clone(), event_sender.clone());
        Self {
            db,
            config,
            event_sender,
            services,
        }
    }
}

/// All `/api/v1` routes.
pub fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(handlers::warps::routes())
        .merge(handlers::fabric_cuts::routes())
        .merge(handlers::movements::routes())
        .merge(handlers::processing_orders::routes())
        .merge(handlers::wage_invoices::routes())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(openapi::ApiDoc::openapi())
}

/// The complete application router: health, OpenAPI document, and the
/// versioned API surface.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "loomledger-api up" }))
        .route("/health", get(health::health_check))
        .route("/api-docs/openapi.json", get(openapi_json))
        .nest("/api/v1", api_v1_routes())
        .with_state(state)
}
