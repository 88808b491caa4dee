//! In-memory catalog store
//!
//! Holds the full catalog in a `Vec` and scans it per query. Suitable for
//! the few thousand brand records the editor ships with, and for tests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::traits::{CatalogError, CatalogMatch, CatalogStore};
use super::trigram;
use crate::config::SimilarityMetric;

/// A searchable catalog record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub logo_slug: String,
    pub logo_name: String,
}

impl CatalogEntry {
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            logo_slug: slug.into(),
            logo_name: name.into(),
        }
    }
}

/// Catalog store backed by an in-memory table
pub struct MemoryCatalog {
    entries: Vec<CatalogEntry>,
    metric: SimilarityMetric,
}

impl MemoryCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self {
            entries,
            metric: SimilarityMetric::default(),
        }
    }

    /// Use a different scoring function
    pub fn with_metric(mut self, metric: SimilarityMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Load entries from a JSON array of `{logo_slug, logo_name}`
    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        let entries: Vec<CatalogEntry> =
            serde_json::from_str(content).map_err(|e| CatalogError::InvalidSeed(e.to_string()))?;
        Ok(Self::new(entries))
    }

    /// Load entries from a JSON seed file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::InvalidSeed(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&content)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn score(&self, needle: &str, name_lower: &str) -> f32 {
        match self.metric {
            SimilarityMetric::Trigram => trigram::similarity(name_lower, needle),
            SimilarityMetric::JaroWinkler => strsim::jaro_winkler(needle, name_lower) as f32,
        }
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalog {
    async fn find_similar(
        &self,
        needle: &str,
        limit: usize,
    ) -> Result<Vec<CatalogMatch>, CatalogError> {
        let mut matches: Vec<CatalogMatch> = self
            .entries
            .iter()
            .filter_map(|entry| {
                let name_lower = entry.logo_name.to_lowercase();
                if !name_lower.contains(needle) {
                    return None;
                }
                Some(CatalogMatch {
                    slug: entry.logo_slug.clone(),
                    name: entry.logo_name.clone(),
                    score: Some(self.score(needle, &name_lower)),
                })
            })
            .collect();

        // Stable sort keeps catalog order among equal scores
        matches.sort_by(|a, b| b.score.unwrap_or(0.0).total_cmp(&a.score.unwrap_or(0.0)));
        matches.truncate(limit);

        Ok(matches)
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> MemoryCatalog {
        MemoryCatalog::new(vec![
            CatalogEntry::new("appsmith", "Appsmith"),
            CatalogEntry::new("apple", "Apple"),
            CatalogEntry::new("react", "React"),
            CatalogEntry::new("reactivex", "ReactiveX"),
            CatalogEntry::new("rust", "Rust"),
        ])
    }

    #[tokio::test]
    async fn test_case_insensitive_containment() {
        let catalog = sample_catalog();
        let matches = catalog.find_similar("reac", 8).await.unwrap();

        let slugs: Vec<&str> = matches.iter().map(|m| m.slug.as_str()).collect();
        assert_eq!(slugs, vec!["react", "reactivex"]);
    }

    #[tokio::test]
    async fn test_ranked_descending() {
        let catalog = sample_catalog();
        let matches = catalog.find_similar("app", 8).await.unwrap();

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].slug, "apple");
        assert_eq!(matches[1].slug, "appsmith");
        assert!(matches[0].score >= matches[1].score);
    }

    #[tokio::test]
    async fn test_limit() {
        let entries = (0..20)
            .map(|i| CatalogEntry::new(format!("logo-{}", i), format!("Logo {}", i)))
            .collect();
        let catalog = MemoryCatalog::new(entries);

        let matches = catalog.find_similar("logo", 8).await.unwrap();
        assert_eq!(matches.len(), 8);
    }

    #[tokio::test]
    async fn test_no_match() {
        let catalog = sample_catalog();
        assert!(catalog.find_similar("zzz", 8).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_jaro_winkler_metric() {
        let catalog = sample_catalog().with_metric(SimilarityMetric::JaroWinkler);
        let matches = catalog.find_similar("react", 8).await.unwrap();

        assert_eq!(matches[0].slug, "react");
        assert!(matches[0].score.unwrap() > 0.99);
    }

    #[test]
    fn test_from_json() {
        let catalog = MemoryCatalog::from_json(
            r#"[{"logo_slug": "rust", "logo_name": "Rust"}, {"logo_slug": "go", "logo_name": "Go"}]"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);

        assert!(matches!(
            MemoryCatalog::from_json("{not json"),
            Err(CatalogError::InvalidSeed(_))
        ));
    }

    #[tokio::test]
    async fn test_shipped_seed() {
        let catalog =
            MemoryCatalog::from_file(concat!(env!("CARGO_MANIFEST_DIR"), "/config/logos.json"))
                .unwrap();
        assert!(!catalog.is_empty());

        let matches = catalog.find_similar("reac", 8).await.unwrap();
        let slugs: Vec<&str> = matches.iter().map(|m| m.slug.as_str()).collect();
        assert_eq!(slugs, vec!["react", "reactivex", "reactquery"]);
    }
}
