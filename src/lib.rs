//! OpenEditor logo search
//!
//! Incremental logo lookup for the OpenEditor markdown editor. A client-side
//! controller turns keystrokes into debounced requests against a similarity
//! search endpoint, and only ever applies the response to the latest request.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  Keystrokes ──► LogoSearchController (debounce, generation gate) │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │  GET /api/logos?q=...
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                 HTTP surface (axum router)                       │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │            LogoSearchService (length gate, cap, ranking)         │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │      CatalogStore: PgCatalogStore (pg_trgm) | MemoryCatalog      │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A selected [`MatchResult`] is handed to the editing host through a plain
//! callback; [`content::InsertableContent`] models what the host inserts.
//!
//! # Usage
//!
//! ```ignore
//! use openeditor::{DebounceConfig, HttpLogoApi, LogoSearchController, ServiceConfig};
//!
//! let config = ServiceConfig::load_or_default("config/openeditor.yaml")?;
//! let api = HttpLogoApi::from_config(&config)?;
//! let mut search = LogoSearchController::new(
//!     Arc::new(api),
//!     DebounceConfig::from_config(&config),
//!     tokio::runtime::Handle::current(),
//!     |logo| println!("selected {}", logo.logo_slug),
//! );
//!
//! search.on_input("reac");
//! // ... 300ms later one request is dispatched
//! let view = search.view();
//! ```

pub mod catalog;
pub mod client;
pub mod config;
pub mod content;
pub mod draft;
pub mod prefs;
pub mod search;

#[cfg(feature = "server")]
pub mod server;

// Re-export main types
pub use catalog::{CatalogEntry, CatalogError, CatalogMatch, CatalogStore, MemoryCatalog};
pub use client::{
    ClientError, DebounceConfig, HttpLogoApi, LogoApi, LogoSearchController, SearchStatus,
    SearchView,
};
pub use config::{CatalogBackend, ConfigError, ServiceConfig, SimilarityMetric};
pub use content::{ContentError, GithubStatsCard, InsertableContent, ShieldsBadge, StatsTheme};
pub use draft::{Draft, DraftError};
pub use prefs::{PreferenceStore, Preferences, PrefsError};
pub use search::{LogoSearchService, MatchResult, SearchError};

#[cfg(feature = "database")]
pub use catalog::PgCatalogStore;
