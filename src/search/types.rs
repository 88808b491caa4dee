//! Wire types shared by the search endpoint and the client controller

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogMatch;

/// One logo candidate returned by the search endpoint
///
/// Field names match the JSON wire format consumed by the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Stable identifier, also the shields.io logo name
    pub logo_slug: String,
    /// Display name
    pub logo_name: String,
    /// Similarity score, conventionally in [0, 1]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_score: Option<f32>,
}

impl MatchResult {
    pub fn new(slug: impl Into<String>, name: impl Into<String>, score: Option<f32>) -> Self {
        Self {
            logo_slug: slug.into(),
            logo_name: name.into(),
            match_score: score,
        }
    }

    /// Score as a whole percentage (0.95 -> 95)
    ///
    /// Returns None for unranked results and for a zero score, which the
    /// editor does not display.
    pub fn match_percent(&self) -> Option<u32> {
        self.match_score
            .filter(|score| *score > 0.0)
            .map(|score| (score * 100.0).round() as u32)
    }
}

impl From<CatalogMatch> for MatchResult {
    fn from(m: CatalogMatch) -> Self {
        Self {
            logo_slug: m.slug,
            logo_name: m.name,
            match_score: m.score,
        }
    }
}
