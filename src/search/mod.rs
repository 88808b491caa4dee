//! Similarity search over the logo catalog

pub mod service;
pub mod types;

pub use service::{LogoSearchService, SearchError};
pub use types::MatchResult;
