//! Configuration parsing for the logo search service
//!
//! Every field carries a serde default so an empty (or missing) YAML file
//! yields a working memory-backed setup.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default configuration path
pub const DEFAULT_CONFIG_PATH: &str = "config/openeditor.yaml";

/// Errors raised while loading or validating configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid value for {field}: {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub server: ServerConfig,
    pub search: SearchConfig,
    pub catalog: CatalogConfig,
    pub client: ClientConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "0.0.0.0:3000".to_string(),
        }
    }
}

/// Server-side search limits
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Queries shorter than this (in characters, after trimming) never reach the store
    pub min_query_len: usize,
    /// Result cap per query
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_len: 3,
            max_results: 8,
        }
    }
}

/// Which catalog store backs the search service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogBackend {
    /// In-memory table seeded from a JSON file
    #[default]
    Memory,
    /// PostgreSQL with the pg_trgm extension
    Postgres,
}

impl CatalogBackend {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Some(Self::Memory),
            "postgres" | "postgresql" => Some(Self::Postgres),
            _ => None,
        }
    }
}

/// Scoring function used by the in-memory catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityMetric {
    /// pg_trgm-compatible trigram similarity
    #[default]
    Trigram,
    /// Jaro-Winkler distance via strsim
    JaroWinkler,
}

/// Catalog store configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub backend: CatalogBackend,
    /// Source table for the postgres backend
    pub table: String,
    /// Name of the environment variable holding the connection string
    pub connection_string_env: String,
    /// JSON seed (`[{logo_slug, logo_name}]`) for the memory backend
    pub seed_file: Option<PathBuf>,
    pub similarity: SimilarityMetric,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            backend: CatalogBackend::Memory,
            table: "shield_io_brand".to_string(),
            connection_string_env: "POSTGRES_URL".to_string(),
            seed_file: None,
            similarity: SimilarityMetric::Trigram,
        }
    }
}

/// Settings for the client-side search controller
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub debounce_ms: u64,
    pub request_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            debounce_ms: 300,
            request_timeout_ms: 5000,
        }
    }
}

impl ClientConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl ServiceConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        // serde_yaml rejects an empty document for a struct
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: ServiceConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise start from defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::info!(path = %path.display(), "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Apply `OPENEDITOR_*` overrides from the process environment
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup("OPENEDITOR_ADDR") {
            self.server.addr = addr;
        }
        if let Some(backend) = lookup("OPENEDITOR_CATALOG") {
            self.catalog.backend =
                CatalogBackend::parse(&backend).ok_or_else(|| ConfigError::Invalid {
                    field: "catalog.backend",
                    message: format!("unknown backend '{}'", backend),
                })?;
        }
        if let Some(seed) = lookup("OPENEDITOR_SEED_FILE") {
            self.catalog.seed_file = Some(PathBuf::from(seed));
        }
        self.validate()
    }

    /// Reject values the service cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.min_query_len == 0 {
            return Err(ConfigError::Invalid {
                field: "search.min_query_len",
                message: "must be at least 1".to_string(),
            });
        }
        if self.search.max_results == 0 {
            return Err(ConfigError::Invalid {
                field: "search.max_results",
                message: "must be at least 1".to_string(),
            });
        }
        if self.catalog.table.is_empty()
            || !self
                .catalog
                .table
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
        {
            return Err(ConfigError::Invalid {
                field: "catalog.table",
                message: format!("'{}' is not a plain table name", self.catalog.table),
            });
        }
        Ok(())
    }
}
