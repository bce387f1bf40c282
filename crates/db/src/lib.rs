//! Data access layer for the EMR backend.
//!
//! One model module and one repository per entity, plus the shared pieces
//! every repository uses: the typed list-query builder ([`query`]) and the
//! field projection utility ([`projection`]).

pub mod models;
pub mod projection;
pub mod query;
pub mod repositories;

use emr_core::error::CoreError;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Convenience alias so callers don't need a direct sqlx dependency for the
/// pool type.
pub type DbPool = PgPool;

/// Errors surfaced by the repository layer.
///
/// Plain CRUD statements fail with [`sqlx::Error`]; list and projection
/// operations can additionally fail parameter validation against an entity's
/// column registry, which surfaces as [`CoreError::Validation`].
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Query(#[from] sqlx::Error),

    #[error(transparent)]
    Domain(#[from] CoreError),
}

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(std::time::Duration::from_secs(5))
        .connect(database_url)
        .await
}

/// Create a pool without establishing a connection.
///
/// Used by tests that exercise request validation and never reach the
/// database.
pub fn create_lazy_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    Ok(PgPoolOptions::new()
        .max_connections(2)
        .connect_lazy(database_url)?)
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
