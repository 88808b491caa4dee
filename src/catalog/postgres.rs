//! PostgreSQL catalog store
//!
//! Ranks with pg_trgm's `similarity()` in a single statement. Eligibility is
//! literal substring containment (`strpos`), so `%` and `_` typed by the user
//! are not treated as LIKE wildcards.

use async_trait::async_trait;
use sqlx::PgPool;

use super::traits::{CatalogError, CatalogMatch, CatalogStore};

/// Catalog store over a `(logo_slug, logo_name)` table
pub struct PgCatalogStore {
    pool: PgPool,
    query: String,
}

impl PgCatalogStore {
    /// `table` must already be validated as a plain identifier
    pub fn new(pool: PgPool, table: &str) -> Self {
        let query = format!(
            r#"
            SELECT logo_slug, logo_name,
                   similarity(lower(logo_name), lower($1)) AS match_score
            FROM {}
            WHERE strpos(lower(logo_name), lower($1)) > 0
            ORDER BY match_score DESC
            LIMIT $2
            "#,
            table
        );
        Self { pool, query }
    }

    /// Connect using the connection string in `env_var`
    pub async fn connect(env_var: &str, table: &str) -> Result<Self, CatalogError> {
        let url = std::env::var(env_var)
            .map_err(|_| CatalogError::Unavailable(format!("{} is not set", env_var)))?;
        let pool = PgPool::connect(&url).await?;
        tracing::info!(table = %table, "Connected to catalog database");
        Ok(Self::new(pool, table))
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn find_similar(
        &self,
        needle: &str,
        limit: usize,
    ) -> Result<Vec<CatalogMatch>, CatalogError> {
        let rows: Vec<(String, String, Option<f32>)> = sqlx::query_as(&self.query)
            .bind(needle)
            .bind(limit as i64)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(slug, name, score)| CatalogMatch { slug, name, score })
            .collect())
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
