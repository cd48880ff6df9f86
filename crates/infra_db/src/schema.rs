//! Schema bootstrap
//!
//! Applies the SQL schema from the workspace `migrations/` directory. The
//! statements are idempotent (`IF NOT EXISTS`), so running the bootstrap on
//! every startup is safe.

use sqlx::PgPool;
use tracing::info;

use crate::error::DatabaseError;

/// The initial schema, embedded at compile time.
const INITIAL_SCHEMA: &str = include_str!("../../../migrations/20240101_000001_create_employees.sql");

/// Applies the schema to the given pool.
///
/// # Errors
///
/// Returns `DatabaseError::QueryFailed` if any statement fails to apply
pub async fn bootstrap_schema(pool: &PgPool) -> Result<(), DatabaseError> {
    info!("Applying database schema");
    sqlx::raw_sql(INITIAL_SCHEMA)
        .execute(pool)
        .await
        .map_err(|e| DatabaseError::from(&e))?;
    info!("Database schema ready");
    Ok(())
}
