use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use crate::config::AppConfig;
use crate::errors::ServiceError;
use crate::migrator::Migrator;

/// Alias kept so services can accept the connection under a pool-shaped name.
pub type DbPool = DatabaseConnection;

/// Establishes a database connection pool from application configuration.
pub async fn establish_connection_from_app_config(cfg: &AppConfig) -> Result<DbPool, DbErr> {
    let mut options = ConnectOptions::new(cfg.database_url().to_string());
    options
        .max_connections(cfg.db_max_connections)
        .min_connections(cfg.db_min_connections)
        .connect_timeout(Duration::from_secs(cfg.db_connect_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.db_idle_timeout_secs))
        .sqlx_logging(cfg.is_development());

    let pool = Database::connect(options).await?;
    info!("Database connection established");
    Ok(pool)
}

/// Runs all embedded migrations to the latest version.
pub async fn run_migrations(pool: &DbPool) -> Result<(), DbErr> {
    info!("Running database migrations");
    Migrator::up(pool, None).await?;
    info!("Database migrations complete");
    Ok(())
}

/// Cheap connectivity probe used by the health endpoint.
pub async fn check_connection(pool: &DbPool) -> Result<(), ServiceError> {
    pool.ping()
        .await
        .map_err(|e| ServiceError::ServiceUnavailable(format!("database unreachable: {}", e)))
}
