//! Autocomplete for the criterion being typed.
//!
//! Design:
//! - Only the last comma-delimited segment is considered, and only when it
//!   looks like `field:term` with a non-empty term and a known source list.
//! - Candidates are ranked by record count (CountIndex), ties alphabetically,
//!   and capped by `SearchConfig::suggestion_limit`.
//! - The list state is an explicit [`SuggestionState`] owned by the engine and
//!   replaced wholesale on every recompute.
//! - Committing a candidate rewrites the query text and invokes the
//!   `on_commit` callback so the caller can re-run the search.

mod ranking;
mod state;

pub use ranking::{Candidate, Suggestions, compute_suggestions};
pub use state::SuggestionState;

use crate::config::SearchConfig;
use crate::query::commit_criterion;
use songbook_core::{CountIndex, SuggestionSources};
use std::sync::Arc;
use tracing::{debug, trace};

/// Keys the suggestion list reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Down,
    Up,
    Enter,
    Escape,
}

/// What a key or click did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// Not for the suggestion list; the input should handle it normally.
    Ignored,
    /// Consumed by the suggestion list.
    Handled,
    /// A candidate was committed; carries the rewritten query.
    Committed(String),
}

pub struct SuggestionEngine {
    sources: Arc<SuggestionSources>,
    counts: Arc<CountIndex>,
    config: SearchConfig,
    on_commit: Arc<dyn Fn(&str) + Send + Sync>,
    state: SuggestionState,
}

impl SuggestionEngine {
    /// The `on_commit` callback receives the rewritten query after every commit.
    pub fn new(
        sources: Arc<SuggestionSources>,
        counts: Arc<CountIndex>,
        config: SearchConfig,
        on_commit: Arc<dyn Fn(&str) + Send + Sync>,
    ) -> Self {
        Self {
            sources,
            counts,
            config,
            on_commit,
            state: SuggestionState::Hidden,
        }
    }

    pub fn state(&self) -> &SuggestionState {
        &self.state
    }

    /// Candidates for `raw` without touching the current state.
    pub fn compute_suggestions(&self, raw: &str) -> Option<Suggestions> {
        compute_suggestions(
            raw,
            &self.sources,
            &self.counts,
            self.config.suggestion_limit,
        )
    }
}

/// Event handlers.
impl SuggestionEngine {
    /// Text changed: recompute from scratch, selection reset.
    pub fn on_input(&mut self, raw: &str) {
        self.state = SuggestionState::from_suggestions(self.compute_suggestions(raw));
        match self.state.suggestions() {
            Some(suggestions) => trace!(
                field = %suggestions.field,
                term = %suggestions.term,
                candidates = suggestions.len(),
                "suggestions listed"
            ),
            None => trace!("suggestions hidden"),
        }
    }

    /// Keyboard navigation. `query` is rewritten on commit.
    pub fn on_key(&mut self, key: NavKey, query: &mut String) -> EventOutcome {
        if !self.state.is_visible() {
            return EventOutcome::Ignored;
        }

        match key {
            NavKey::Down => {
                self.state = std::mem::take(&mut self.state).select_next();
                EventOutcome::Handled
            }
            NavKey::Up => {
                self.state = std::mem::take(&mut self.state).select_prev();
                EventOutcome::Handled
            }
            NavKey::Enter => match self.state.selected_index() {
                Some(index) => self.commit(index, query),
                None => EventOutcome::Ignored,
            },
            NavKey::Escape => {
                self.hide();
                EventOutcome::Handled
            }
        }
    }

    /// Direct click on the candidate row at `index`.
    pub fn on_candidate_click(&mut self, index: usize, query: &mut String) -> EventOutcome {
        if index >= self.state.candidates().len() {
            return EventOutcome::Ignored;
        }
        self.commit(index, query)
    }

    /// Click anywhere outside the input and the list.
    pub fn on_outside_click(&mut self) {
        self.hide();
    }

    pub fn hide(&mut self) {
        self.state = std::mem::take(&mut self.state).hide();
    }

    fn commit(&mut self, index: usize, query: &mut String) -> EventOutcome {
        let Some(suggestions) = self.state.suggestions() else {
            return EventOutcome::Ignored;
        };
        let Some(candidate) = suggestions.candidates.get(index) else {
            return EventOutcome::Ignored;
        };

        let rewritten = commit_criterion(query, suggestions.field.as_str(), &candidate.value);
        debug!(
            field = %suggestions.field,
            value = %candidate.value,
            query = %rewritten,
            "suggestion committed"
        );
        *query = rewritten;

        self.hide();
        (self.on_commit)(query.as_str());
        EventOutcome::Committed(query.clone())
    }
}
