//! # Tare Catalog
//!
//! SQLite-backed product catalog for the Tare smart scale.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                    tare-catalog                      │
//! ├──────────────────────────────────────────────────────┤
//! │  store       Pool construction, config, lifecycle    │
//! │  migrations  Embedded schema, applied on startup     │
//! │  resolver    Labels -> products, admin operations    │
//! │  error       CatalogError taxonomy                   │
//! └──────────────────────────────────────────────────────┘
//!                          │
//!                          ▼
//!               SQLite (WAL, foreign keys)
//! ```
//!
//! The session layer above this crate only ever sees [`CatalogResolver`]
//! and [`CatalogError`]; pool mechanics stay in here.
//!
//! ## Usage
//!
//! ```no_run
//! use tare_catalog::{CatalogConfig, CatalogStore};
//!
//! # async fn open() -> tare_catalog::CatalogResult<()> {
//! let store = CatalogStore::new(CatalogConfig::new("tare_dev.db")).await?;
//! let resolver = store.resolver();
//!
//! let labels = ["apple".to_string()].into_iter().collect();
//! let products = resolver.resolve(&labels).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod migrations;
pub mod resolver;
pub mod store;

pub use error::{CatalogError, CatalogResult};
pub use resolver::CatalogResolver;
pub use store::{CatalogConfig, CatalogStore};
