//! Presentation-facing snapshot of the search controller

use crate::search::MatchResult;

/// What the search surface should display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// Nothing typed
    Idle,
    /// "Type at least 3 characters"
    TooShort,
    /// A request is pending or outstanding
    Searching,
    /// Results available
    Results,
    /// "No logos found" (zero matches, or the request failed)
    NoResults,
}

impl SearchStatus {
    /// Message shown for the non-result states
    pub fn message(&self) -> Option<&'static str> {
        match self {
            SearchStatus::TooShort => Some("Type at least 3 characters"),
            SearchStatus::Searching => Some("Searching..."),
            SearchStatus::NoResults => Some("No logos found"),
            SearchStatus::Idle | SearchStatus::Results => None,
        }
    }
}

/// Owned copy of the controller state at one point in time
#[derive(Debug, Clone, PartialEq)]
pub struct SearchView {
    /// Raw input text, echoed as typed
    pub text: String,
    /// Ranked results in service order
    pub results: Vec<MatchResult>,
    pub loading: bool,
    /// Whether the search surface is open
    pub open: bool,
    pub status: SearchStatus,
}
