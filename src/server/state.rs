//! Shared application state
//!
//! The search service is stateless per request; the store behind it is
//! read-only from the server's point of view.

use std::sync::Arc;

use crate::catalog::CatalogStore;
use crate::config::SearchConfig;
use crate::search::LogoSearchService;

/// Shared application state for the logo endpoints
#[derive(Clone)]
pub struct AppState {
    pub search: LogoSearchService,
}

impl AppState {
    pub fn new(store: Arc<dyn CatalogStore>, config: &SearchConfig) -> Self {
        Self {
            search: LogoSearchService::new(store, config),
        }
    }
}
