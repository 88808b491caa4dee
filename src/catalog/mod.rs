//! Catalog stores for searchable logo records
//!
//! This module provides the `CatalogStore` abstraction and its two
//! implementations: an in-memory table and a PostgreSQL (pg_trgm) store.

pub mod memory;
#[cfg(feature = "database")]
pub mod postgres;
pub mod traits;
pub mod trigram;

pub use memory::{CatalogEntry, MemoryCatalog};
#[cfg(feature = "database")]
pub use postgres::PgCatalogStore;
pub use traits::{CatalogError, CatalogMatch, CatalogStore};
