//! Logo similarity search service
//!
//! Applies the minimum-length gate and the result cap independently of any
//! client, then delegates matching and ranking to a `CatalogStore`.

use std::sync::Arc;

use crate::catalog::{CatalogError, CatalogStore};
use crate::config::SearchConfig;

use super::types::MatchResult;

/// Errors surfaced by the search service
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Service for ranked logo lookups
#[derive(Clone)]
pub struct LogoSearchService {
    store: Arc<dyn CatalogStore>,
    min_query_len: usize,
    max_results: usize,
}

impl LogoSearchService {
    pub fn new(store: Arc<dyn CatalogStore>, config: &SearchConfig) -> Self {
        Self {
            store,
            min_query_len: config.min_query_len,
            max_results: config.max_results,
        }
    }

    pub fn backend_name(&self) -> &'static str {
        self.store.backend_name()
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Search the catalog for logos similar to `raw_query`
    ///
    /// Queries shorter than the minimum length (after trimming) return an
    /// empty list without touching the store.
    pub async fn search(&self, raw_query: &str) -> Result<Vec<MatchResult>, SearchError> {
        let query = raw_query.trim();
        if query.chars().count() < self.min_query_len {
            return Ok(Vec::new());
        }

        let needle = query.to_lowercase();
        let mut matches = self.store.find_similar(&needle, self.max_results).await?;

        // Order and cap hold whatever the store returns
        matches.sort_by(|a, b| b.score.unwrap_or(0.0).total_cmp(&a.score.unwrap_or(0.0)));
        matches.truncate(self.max_results);

        tracing::debug!(query = %query, results = matches.len(), "Logo search complete");

        Ok(matches.into_iter().map(MatchResult::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogEntry, CatalogMatch, MemoryCatalog};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Store that records calls and returns a fixed (possibly unsorted) list
    struct RecordingStore {
        calls: AtomicUsize,
        rows: Vec<CatalogMatch>,
        fail: bool,
    }

    impl RecordingStore {
        fn with_rows(rows: Vec<CatalogMatch>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                rows,
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                rows: Vec::new(),
                fail: true,
            }
        }
    }

    #[async_trait]
    impl CatalogStore for RecordingStore {
        async fn find_similar(
            &self,
            _needle: &str,
            _limit: usize,
        ) -> Result<Vec<CatalogMatch>, CatalogError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(CatalogError::Unavailable("connection refused".to_string()));
            }
            Ok(self.rows.clone())
        }

        fn backend_name(&self) -> &'static str {
            "recording"
        }
    }

    fn row(slug: &str, score: f32) -> CatalogMatch {
        CatalogMatch {
            slug: slug.to_string(),
            name: slug.to_uppercase(),
            score: Some(score),
        }
    }

    #[tokio::test]
    async fn test_short_query_skips_store() {
        let store = Arc::new(RecordingStore::with_rows(vec![row("ab", 1.0)]));
        let service = LogoSearchService::new(store.clone(), &SearchConfig::default());

        assert!(service.search("ab").await.unwrap().is_empty());
        assert!(service.search("  ab   ").await.unwrap().is_empty());
        assert!(service.search("").await.unwrap().is_empty());
        assert_eq!(store.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_gate_counts_characters_not_bytes() {
        let store = Arc::new(RecordingStore::with_rows(vec![]));
        let service = LogoSearchService::new(store.clone(), &SearchConfig::default());

        // two characters, four bytes
        service.search("éé").await.unwrap();
        assert_eq!(store.calls.load(Ordering::SeqCst), 0);

        service.search("ééé").await.unwrap();
        assert_eq!(store.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_resorts_and_caps() {
        let rows = (0..12).map(|i| row(&format!("logo{}", i), i as f32 / 12.0)).collect();
        let store = Arc::new(RecordingStore::with_rows(rows));
        let service = LogoSearchService::new(store, &SearchConfig::default());

        let results = service.search("logo").await.unwrap();
        assert_eq!(results.len(), 8);
        assert_eq!(results[0].logo_slug, "logo11");
        assert!(results
            .windows(2)
            .all(|w| w[0].match_score >= w[1].match_score));
    }

    #[tokio::test]
    async fn test_store_failure_is_an_error() {
        let store = Arc::new(RecordingStore::failing());
        let service = LogoSearchService::new(store, &SearchConfig::default());

        let err = service.search("react").await.unwrap_err();
        assert!(matches!(err, SearchError::Catalog(CatalogError::Unavailable(_))));
    }

    #[tokio::test]
    async fn test_case_insensitive_against_memory_catalog() {
        let catalog = MemoryCatalog::new(vec![
            CatalogEntry::new("react", "React"),
            CatalogEntry::new("vue", "Vue.js"),
        ]);
        let service = LogoSearchService::new(Arc::new(catalog), &SearchConfig::default());

        let results = service.search("reac").await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].logo_name, "React");

        let results = service.search("  REACT ").await.unwrap();
        assert_eq!(results[0].logo_slug, "react");
    }
}
