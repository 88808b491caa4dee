//! Debounced logo search controller
//!
//! Turns a stream of keystrokes into at most one request per settled query
//! and applies a response only if it belongs to the latest request.
//!
//! ```text
//! Idle ──input < min──► Idle (results cleared, no request)
//!   │
//!   └──input >= min──► Debouncing ──delay──► Dispatched ──► Resolved
//!                          ▲                     │         Failed (empty)
//!                          └──── new input ──────┘         Stale (dropped)
//! ```
//!
//! Every input, selection and reset bumps a generation counter. A dispatched
//! request carries the generation it was scheduled under and its response is
//! dropped unless that generation is still current when it arrives. Requests
//! that were already sent are left to finish; only their result is ignored.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use super::api::{ClientError, LogoApi};
use super::state::{SearchStatus, SearchView};
use crate::config::ServiceConfig;
use crate::search::MatchResult;

/// Timing and limits for the controller
#[derive(Debug, Clone)]
pub struct DebounceConfig {
    /// Quiet period after the last keystroke before a request is sent
    pub delay: Duration,
    /// Minimum trimmed length (characters) that may trigger a request
    pub min_query_len: usize,
    /// Requests outstanding longer than this count as failed
    pub request_timeout: Duration,
    /// Upper bound on displayed results
    pub max_results: usize,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(300),
            min_query_len: 3,
            request_timeout: Duration::from_secs(5),
            max_results: 8,
        }
    }
}

impl DebounceConfig {
    /// Client timings plus the same length gate and cap the server applies
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self {
            delay: config.client.debounce(),
            min_query_len: config.search.min_query_len,
            request_timeout: config.client.request_timeout(),
            max_results: config.search.max_results,
        }
    }
}

/// State written by request tasks
#[derive(Debug, Default)]
struct Shared {
    /// Latest issued token; anything older is stale
    generation: u64,
    results: Vec<MatchResult>,
    loading: bool,
}

fn lock(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

type SelectFn = Box<dyn FnMut(MatchResult) + Send>;

/// Search debouncer for one search surface
pub struct LogoSearchController {
    api: Arc<dyn LogoApi>,
    config: DebounceConfig,
    runtime: Handle,
    shared: Arc<Mutex<Shared>>,
    text: String,
    open: bool,
    timer: Option<JoinHandle<()>>,
    on_select: SelectFn,
}

impl LogoSearchController {
    /// Create a controller that spawns its timer and requests on `runtime`
    pub fn new<F>(
        api: Arc<dyn LogoApi>,
        config: DebounceConfig,
        runtime: Handle,
        on_select: F,
    ) -> Self
    where
        F: FnMut(MatchResult) + Send + 'static,
    {
        Self {
            api,
            config,
            runtime,
            shared: Arc::new(Mutex::new(Shared::default())),
            text: String::new(),
            open: false,
            timer: None,
            on_select: Box::new(on_select),
        }
    }

    /// Record new input text and restart the debounce window
    pub fn on_input(&mut self, raw_text: &str) {
        self.text = raw_text.to_string();
        self.cancel_timer();

        let query = raw_text.trim();
        let generation = {
            let mut shared = lock(&self.shared);
            shared.generation += 1;
            if query.chars().count() < self.config.min_query_len {
                shared.results.clear();
                shared.loading = false;
                return;
            }
            shared.generation
        };

        let api = self.api.clone();
        let shared = self.shared.clone();
        let query = query.to_string();
        // Deadline is fixed at the keystroke, not when the task first runs
        let deadline = tokio::time::Instant::now() + self.config.delay;
        let timeout = self.config.request_timeout;
        let max_results = self.config.max_results;

        self.timer = Some(self.runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            dispatch(api, shared, generation, query, timeout, max_results);
        }));
    }

    /// Hand `selection` to the owner, then clear the input and close
    pub fn select_result(&mut self, selection: MatchResult) {
        tracing::debug!(slug = %selection.logo_slug, "Logo selected");
        (self.on_select)(selection);
        self.reset();
        self.open = false;
    }

    /// Cancel pending work and clear text, results and loading
    pub fn reset(&mut self) {
        self.cancel_timer();
        self.text.clear();
        let mut shared = lock(&self.shared);
        shared.generation += 1;
        shared.results.clear();
        shared.loading = false;
    }

    /// Open the search surface
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close the search surface, keeping text and results
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether a debounce window is still running
    pub fn is_debouncing(&self) -> bool {
        self.timer.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Snapshot of the current state for rendering
    pub fn view(&self) -> SearchView {
        let shared = lock(&self.shared);
        let trimmed_len = self.text.trim().chars().count();

        let status = if trimmed_len == 0 {
            SearchStatus::Idle
        } else if shared.loading || self.is_debouncing() {
            SearchStatus::Searching
        } else if trimmed_len < self.config.min_query_len {
            SearchStatus::TooShort
        } else if shared.results.is_empty() {
            SearchStatus::NoResults
        } else {
            SearchStatus::Results
        };

        SearchView {
            text: self.text.clone(),
            results: shared.results.clone(),
            loading: shared.loading,
            open: self.open,
            status,
        }
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl Drop for LogoSearchController {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}

/// Fire the request for `generation` unless it was superseded meanwhile
fn dispatch(
    api: Arc<dyn LogoApi>,
    shared: Arc<Mutex<Shared>>,
    generation: u64,
    query: String,
    timeout: Duration,
    max_results: usize,
) {
    {
        let mut state = lock(&shared);
        if state.generation != generation {
            return;
        }
        state.loading = true;
    }

    tracing::debug!(query = %query, generation, "Dispatching logo search");

    // Detached: superseding input must not abort a request already on the wire
    tokio::spawn(async move {
        let outcome = match tokio::time::timeout(timeout, api.search(&query)).await {
            Ok(outcome) => outcome,
            Err(_) => Err(ClientError::Timeout),
        };
        apply(&shared, generation, &query, outcome, max_results);
    });
}

fn apply(
    shared: &Mutex<Shared>,
    generation: u64,
    query: &str,
    outcome: Result<Vec<MatchResult>, ClientError>,
    max_results: usize,
) {
    let mut state = lock(shared);
    if state.generation != generation {
        tracing::debug!(query = %query, generation, "Discarding stale logo search response");
        return;
    }

    match outcome {
        Ok(mut results) => {
            results.truncate(max_results);
            state.results = results;
        }
        Err(e) => {
            tracing::warn!(query = %query, error = %e, "Logo search failed, showing no results");
            state.results.clear();
        }
    }
    state.loading = false;
}
