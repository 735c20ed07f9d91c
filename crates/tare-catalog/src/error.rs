//! Catalog error types.
//!
//! Every fallible operation in this crate returns [`CatalogResult`]. The
//! variants separate "the store is unreachable" from "the store answered
//! and the answer is a failure", because callers treat the two differently:
//! a session drops back to idle on either, but operators diagnosing a dead
//! kiosk need to know which side of the wire broke.

use thiserror::Error;

/// Convenient alias used throughout the catalog layer.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors produced by catalog storage and resolution.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Could not reach the database at all.
    ///
    /// ## When This Occurs
    /// - The database file's directory is missing or unwritable
    /// - The connection pool has been closed
    /// - SQLite refuses the connection options
    #[error("Catalog connection failed: {0}")]
    ConnectionFailed(String),

    /// Schema migrations could not be applied.
    ///
    /// ## When This Occurs
    /// - A migration file is malformed
    /// - The database was modified by a newer build (checksum mismatch)
    #[error("Catalog migration failed: {0}")]
    MigrationFailed(String),

    /// The database answered with an error we have no tighter category for.
    #[error("Catalog query failed: {0}")]
    QueryFailed(String),

    /// A query ran longer than the configured budget and was abandoned.
    ///
    /// ## When This Occurs
    /// - The database file lives on slow or contended storage
    /// - Another process holds a long write lock
    ///
    /// The connection is released when the query future is dropped, so a
    /// timed-out call never leaks a pool slot.
    #[error("Catalog query timed out after {timeout_ms} ms")]
    Timeout {
        /// Budget that was exceeded, in milliseconds.
        timeout_ms: u64,
    },

    /// A stored row violates the catalog's range rules.
    ///
    /// ## When This Occurs
    /// - A row predates the CHECK constraints and carries a negative price
    ///   or a discount outside `[0, 1)`
    /// - An insert was attempted with values that fail validation
    ///
    /// Rows are re-checked when read, so a bad row is reported instead of
    /// flowing into pricing.
    #[error("Invalid catalog record '{name}': {reason}")]
    InvalidRecord { name: String, reason: String },

    /// An insert collided with an existing primary key.
    #[error("Duplicate catalog entry: {message}")]
    UniqueViolation { message: String },

    /// A class row references a product that does not exist.
    #[error("Catalog reference violation: {message}")]
    ForeignKeyViolation { message: String },

    /// All pooled connections were busy for longer than the acquire timeout.
    #[error("Catalog connection pool exhausted")]
    PoolExhausted,

    /// Anything sqlx reports that has no mapping above.
    #[error("Catalog internal error: {0}")]
    Internal(String),
}

impl From<sqlx::Error> for CatalogError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut => CatalogError::PoolExhausted,
            sqlx::Error::PoolClosed => {
                CatalogError::ConnectionFailed("connection pool is closed".to_string())
            }
            sqlx::Error::Io(io_err) => CatalogError::ConnectionFailed(io_err.to_string()),
            sqlx::Error::Configuration(config_err) => {
                CatalogError::ConnectionFailed(config_err.to_string())
            }
            sqlx::Error::Database(db_err) => {
                let message = db_err.message().to_string();
                if message.contains("UNIQUE constraint failed") {
                    CatalogError::UniqueViolation { message }
                } else if message.contains("FOREIGN KEY constraint failed") {
                    CatalogError::ForeignKeyViolation { message }
                } else {
                    CatalogError::QueryFailed(message)
                }
            }
            other => CatalogError::Internal(other.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for CatalogError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        CatalogError::MigrationFailed(err.to_string())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_errors_map_to_availability_variants() {
        let err: CatalogError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, CatalogError::PoolExhausted));

        let err: CatalogError = sqlx::Error::PoolClosed.into();
        assert!(matches!(err, CatalogError::ConnectionFailed(_)));
    }

    #[test]
    fn test_timeout_message_names_the_budget() {
        let err = CatalogError::Timeout { timeout_ms: 5000 };
        assert_eq!(err.to_string(), "Catalog query timed out after 5000 ms");
    }

    #[test]
    fn test_invalid_record_message_names_the_row() {
        let err = CatalogError::InvalidRecord {
            name: "Apple".to_string(),
            reason: "discount must be between 0 and 1 (got 1.5)".to_string(),
        };
        assert!(err.to_string().contains("Apple"));
        assert!(err.to_string().contains("discount"));
    }
}
