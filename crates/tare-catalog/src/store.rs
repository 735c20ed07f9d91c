//! Catalog store: connection pool construction and lifecycle.
//!
//! [`CatalogStore`] owns the SQLite pool for one catalog database. The
//! kiosk builds exactly one store at startup and hands out lightweight
//! [`CatalogResolver`] handles; tests build throwaway in-memory stores.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::CatalogResult;
use crate::migrations::run_migrations;
use crate::resolver::CatalogResolver;

// =============================================================================
// Configuration
// =============================================================================

/// Connection settings for a catalog database.
///
/// ## Example
///
/// ```no_run
/// use tare_catalog::{CatalogConfig, CatalogStore};
///
/// # async fn open() -> tare_catalog::CatalogResult<()> {
/// let config = CatalogConfig::new("tare_dev.db").max_connections(8);
/// let store = CatalogStore::new(config).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Path to the SQLite database file.
    pub database_path: PathBuf,

    /// Maximum pooled connections.
    pub max_connections: u32,

    /// Connections kept open even when idle.
    pub min_connections: u32,

    /// How long to wait for a free connection before giving up.
    pub connect_timeout: Duration,

    /// Budget for a single resolution query before it is abandoned.
    pub query_timeout: Duration,

    /// Idle connections above `min_connections` are closed after this.
    pub idle_timeout: Duration,

    /// Apply pending migrations when the store is opened.
    pub run_migrations: bool,
}

impl CatalogConfig {
    /// Configuration for a file-backed catalog with production defaults.
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout: Duration::from_secs(30),
            query_timeout: Duration::from_secs(5),
            idle_timeout: Duration::from_secs(600),
            run_migrations: true,
        }
    }

    /// Configuration for an in-memory catalog, used by tests.
    ///
    /// SQLite gives every `:memory:` connection its own private database,
    /// so the pool is pinned to a single connection that is never reaped.
    pub fn in_memory() -> Self {
        Self {
            database_path: PathBuf::from(":memory:"),
            max_connections: 1,
            min_connections: 1,
            connect_timeout: Duration::from_secs(5),
            query_timeout: Duration::from_secs(5),
            idle_timeout: Duration::from_secs(600),
            run_migrations: true,
        }
    }

    /// Overrides the maximum pool size.
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Overrides the per-query time budget.
    pub fn query_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = timeout;
        self
    }

    /// Disables automatic migrations (for tools that manage schema manually).
    pub fn skip_migrations(mut self) -> Self {
        self.run_migrations = false;
        self
    }
}

// =============================================================================
// Store
// =============================================================================

/// An open catalog database.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    pool: SqlitePool,
    query_timeout: Duration,
}

impl CatalogStore {
    /// Opens (creating if missing) the catalog database described by `config`.
    ///
    /// WAL journaling keeps readers unblocked while the seed tool writes,
    /// and `synchronous = NORMAL` is the matching durability setting.
    pub async fn new(config: CatalogConfig) -> CatalogResult<Self> {
        let url = format!("sqlite://{}?mode=rwc", config.database_path.display());
        debug!(url = %url, "Opening catalog database");

        let options = SqliteConnectOptions::from_str(&url)?
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .foreign_keys(true)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.connect_timeout)
            .idle_timeout(config.idle_timeout)
            .connect_with(options)
            .await?;

        if config.run_migrations {
            run_migrations(&pool).await?;
        }

        info!(
            path = %config.database_path.display(),
            max_connections = config.max_connections,
            "Catalog store ready"
        );

        Ok(Self {
            pool,
            query_timeout: config.query_timeout,
        })
    }

    /// The underlying pool, for migrations and admin queries.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// A resolver handle sharing this store's pool.
    pub fn resolver(&self) -> CatalogResolver {
        CatalogResolver::new(self.pool.clone(), self.query_timeout)
    }

    /// Round-trips a trivial query to prove the database answers.
    pub async fn health_check(&self) -> CatalogResult<()> {
        sqlx::query_scalar::<_, i64>("SELECT 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(())
    }

    /// Closes the pool. Further queries fail with a connection error.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

// =============================================================================
// Tests
// =============================================================================
