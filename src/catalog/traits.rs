//! Core traits and types for the catalog store abstraction
//!
//! The search service only needs one capability from a store: given a
//! lowercase needle, return eligible rows ranked by similarity. Relational
//! stores, search indexes and in-memory tables can all provide it.

use async_trait::async_trait;

/// A catalog row that matched a needle
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogMatch {
    /// Stable identifier (e.g. "react")
    pub slug: String,
    /// Human-readable name (e.g. "React")
    pub name: String,
    /// Similarity between needle and name, higher is closer
    pub score: Option<f32>,
}

/// The catalog store trait
///
/// Implementations must be Send + Sync for use in async contexts.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Find rows whose lowercased name contains `needle`
    ///
    /// `needle` is already trimmed and lowercased. Returns at most `limit`
    /// rows sorted by score (highest first).
    async fn find_similar(&self, needle: &str, limit: usize)
        -> Result<Vec<CatalogMatch>, CatalogError>;

    /// Short backend name for health reporting
    fn backend_name(&self) -> &'static str;
}

/// Errors that can occur while querying a catalog
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
    #[error("Catalog query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid catalog seed: {0}")]
    InvalidSeed(String),
}

#[cfg(feature = "database")]
impl From<sqlx::Error> for CatalogError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                CatalogError::Unavailable(e.to_string())
            }
            other => CatalogError::QueryFailed(other.to_string()),
        }
    }
}
