//! Label-to-product resolution.
//!
//! The resolver turns the label set produced by a detection burst into the
//! product rows the kiosk displays. Unknown labels are simply absent from
//! the result; an empty result is a normal answer, not an error.
//!
//! Every query binds its values. Labels come from a detector vocabulary
//! today, but nothing here assumes they are well-behaved strings.

use std::time::Duration;

use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tokio::time::timeout;
use tracing::debug;

use tare_core::validation::{validate_discount, validate_price, validate_product_name};
use tare_core::{LabelSet, ProductRecord};

use crate::error::{CatalogError, CatalogResult};

/// Read/write handle over one catalog pool.
///
/// Cheap to clone; all clones share the same pool.
#[derive(Debug, Clone)]
pub struct CatalogResolver {
    pool: SqlitePool,
    query_timeout: Duration,
}

impl CatalogResolver {
    /// Creates a resolver over an existing pool.
    ///
    /// Usually obtained via [`CatalogStore::resolver`](crate::CatalogStore::resolver),
    /// which fills in the store's configured timeout.
    pub fn new(pool: SqlitePool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    /// Resolves a set of detected labels to catalog products.
    ///
    /// ## Arguments
    /// * `labels` - Distinct class labels from a detection burst
    ///
    /// ## Returns
    /// Matching products, deduplicated (two labels mapping to the same
    /// product yield one row) and ordered by name. Labels with no catalog
    /// entry are skipped; if nothing matches, the vector is empty.
    ///
    /// ## Errors
    /// * [`CatalogError::ConnectionFailed`] / [`CatalogError::PoolExhausted`]
    ///   when the store is unreachable
    /// * [`CatalogError::Timeout`] when the query exceeds the configured budget
    /// * [`CatalogError::InvalidRecord`] when a stored row fails range checks
    ///
    /// The connection is acquired per call and released on every exit path,
    /// including timeout.
    pub async fn resolve(&self, labels: &LabelSet) -> CatalogResult<Vec<ProductRecord>> {
        if labels.is_empty() {
            debug!("No labels to resolve, skipping catalog query");
            return Ok(Vec::new());
        }

        debug!(labels = labels.len(), "Resolving detected labels");

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
            "SELECT DISTINCT p.name, p.image, p.price, p.discount \
             FROM classes c \
             JOIN products p ON p.name = c.product_name \
             WHERE c.class IN (",
        );
        let mut separated = builder.separated(", ");
        for label in labels {
            separated.push_bind(label.as_str());
        }
        separated.push_unseparated(")");
        builder.push(" ORDER BY p.name");

        let timeout_ms = self.query_timeout.as_millis() as u64;
        let fetched = timeout(self.query_timeout, async {
            let mut conn = self.pool.acquire().await?;
            builder
                .build_query_as::<ProductRecord>()
                .fetch_all(&mut *conn)
                .await
        })
        .await;

        let records = match fetched {
            Ok(rows) => rows?,
            Err(_elapsed) => return Err(CatalogError::Timeout { timeout_ms }),
        };

        for record in &records {
            validate_record(record)?;
        }

        debug!(matched = records.len(), "Catalog resolution complete");
        Ok(records)
    }

    /// Inserts a product row.
    ///
    /// Values are validated before touching the database, so a bad seed
    /// entry fails with [`CatalogError::InvalidRecord`] rather than a raw
    /// constraint message.
    pub async fn insert_product(&self, record: &ProductRecord) -> CatalogResult<()> {
        validate_record(record)?;

        sqlx::query("INSERT INTO products (name, image, price, discount) VALUES (?1, ?2, ?3, ?4)")
            .bind(&record.name)
            .bind(record.image.as_slice())
            .bind(record.price)
            .bind(record.discount)
            .execute(&self.pool)
            .await?;

        debug!(name = %record.name, "Inserted catalog product");
        Ok(())
    }

    /// Maps a detector class label to an existing product.
    pub async fn link_class(&self, class: &str, product_name: &str) -> CatalogResult<()> {
        sqlx::query("INSERT INTO classes (class, product_name) VALUES (?1, ?2)")
            .bind(class)
            .bind(product_name)
            .execute(&self.pool)
            .await?;

        debug!(class = %class, product = %product_name, "Linked detector class");
        Ok(())
    }

    /// Removes every product and class mapping.
    ///
    /// Used by the seed tool's `--fresh` mode to rebuild a development
    /// catalog in place.
    pub async fn clear_catalog(&self) -> CatalogResult<()> {
        // Classes first: they reference products.
        sqlx::query("DELETE FROM classes").execute(&self.pool).await?;
        sqlx::query("DELETE FROM products").execute(&self.pool).await?;

        debug!("Cleared catalog");
        Ok(())
    }

    /// Number of products in the catalog.
    pub async fn product_count(&self) -> CatalogResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Number of detector classes mapped to products.
    pub async fn class_count(&self) -> CatalogResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM classes")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

/// Range checks applied to every row crossing the storage boundary,
/// in both directions.
fn validate_record(record: &ProductRecord) -> CatalogResult<()> {
    validate_product_name(&record.name)
        .and_then(|()| validate_price(record.price))
        .and_then(|()| validate_discount(record.discount))
        .map_err(|source| CatalogError::InvalidRecord {
            name: record.name.clone(),
            reason: source.to_string(),
        })
}

// =============================================================================
// Tests
// =============================================================================
