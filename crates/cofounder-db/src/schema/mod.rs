//! Schema bootstrap
//!
//! Statements are idempotent and run on every start-up.

use sqlx::PgPool;
use tracing::info;

const PROFILES: &str = include_str!("profiles.sql");

/// Create the `profiles` table and its index if they do not exist
///
/// # Errors
/// Returns an error if a statement fails
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(PROFILES).execute(pool).await?;
    info!("Database schema ready");
    Ok(())
}
