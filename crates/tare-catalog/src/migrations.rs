//! Embedded schema migrations.
//!
//! Migration files live in `migrations/sqlite/` at the workspace root and
//! are compiled into the binary, so a kiosk deployment is a single
//! executable plus a database file it can create from scratch.

use sqlx::migrate::Migrator;
use sqlx::SqlitePool;
use tracing::info;

use crate::error::CatalogResult;

/// All known migrations, embedded at compile time.
static MIGRATOR: Migrator = sqlx::migrate!("../../migrations/sqlite");

/// Applies any pending migrations.
///
/// Safe to call on every startup: already-applied migrations are skipped
/// by checksum.
pub async fn run_migrations(pool: &SqlitePool) -> CatalogResult<()> {
    info!("Running catalog migrations");
    MIGRATOR.run(pool).await?;
    info!("Catalog schema is up to date");
    Ok(())
}

/// Reports `(applied, total)` migration counts.
///
/// `applied` is read from sqlx's bookkeeping table and falls back to zero
/// when the table does not exist yet (fresh database before the first run).
pub async fn migration_status(pool: &SqlitePool) -> CatalogResult<(i64, usize)> {
    let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
        .fetch_one(pool)
        .await
        .unwrap_or(0);

    let total = MIGRATOR.iter().len();

    Ok((applied, total))
}

// =============================================================================
// Tests
// =============================================================================
