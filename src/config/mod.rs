//! Service configuration
//!
//! YAML-backed settings for the search service, the catalog backend and
//! the client controller, with environment variable overrides.

pub mod service_config;

pub use service_config::{
    CatalogBackend, CatalogConfig, ClientConfig, ConfigError, SearchConfig, ServerConfig,
    ServiceConfig, SimilarityMetric, DEFAULT_CONFIG_PATH,
};
