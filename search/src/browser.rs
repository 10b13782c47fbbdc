//! One browsing session over a loaded catalog.
//!
//! Per keystroke the query flows one way: parse → filter → sort. The
//! suggestion engine consumes the same text independently.

use crate::config::SearchConfig;
use crate::criteria::Criteria;
use crate::filter::filter;
use crate::query::replace_criterion;
use crate::results::SearchResults;
use crate::sort::SortState;
use crate::suggest::{EventOutcome, NavKey, SuggestionEngine, SuggestionState};
use songbook_core::{Catalog, CountIndex, Field, Record, SuggestionSources};
use std::sync::Arc;
use tracing::debug;

pub struct Browser {
    records: Arc<[Record]>,
    query: String,
    sort: SortState,
    suggestions: SuggestionEngine,
}

/// Create operations.
impl Browser {
    pub fn new(catalog: Catalog, config: SearchConfig) -> Self {
        let sources = Arc::new(catalog.suggestion_sources());
        let counts = Arc::new(catalog.count_index());
        Self::with_indexes(catalog.into_records(), sources, counts, config)
    }

    /// Uses externally supplied suggestion sources and counts.
    pub fn with_indexes(
        records: impl Into<Arc<[Record]>>,
        sources: Arc<SuggestionSources>,
        counts: Arc<CountIndex>,
        config: SearchConfig,
    ) -> Self {
        let sort = config.default_sort;
        // Results are recomputed from `query` on demand, nothing to notify.
        let suggestions =
            SuggestionEngine::new(sources, counts, config, Arc::new(|_: &str| {}));
        Self {
            records: records.into(),
            query: String::new(),
            sort,
            suggestions,
        }
    }
}

/// Read operations.
impl Browser {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn suggestions(&self) -> &SuggestionState {
        self.suggestions.state()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Parses the current query, filters, then sorts.
    pub fn results(&self) -> SearchResults<'_> {
        let criteria = Criteria::parse(&self.query);
        let mut records = filter(&self.records, &criteria);
        self.sort.sort(&mut records);
        debug!(
            criteria = criteria.len(),
            shown = records.len(),
            total = self.records.len(),
            "search"
        );
        SearchResults {
            records,
            total: self.records.len(),
        }
    }
}

/// Input events.
impl Browser {
    /// The user edited the query text.
    pub fn set_query(&mut self, raw: impl Into<String>) {
        self.query = raw.into();
        self.suggestions.on_input(&self.query);
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.suggestions.hide();
    }

    /// Header click on a sortable column.
    pub fn toggle_sort(&mut self, key: Field) {
        self.sort.toggle(key);
        self.suggestions.hide();
    }

    /// Click on a value in the result table (an artist, tag or language badge).
    pub fn click_term(&mut self, field: Field, term: &str) {
        self.query = replace_criterion(&self.query, field.as_str(), term);
        self.suggestions.hide();
    }

    pub fn key_down(&mut self, key: NavKey) -> EventOutcome {
        self.suggestions.on_key(key, &mut self.query)
    }

    pub fn click_candidate(&mut self, index: usize) -> EventOutcome {
        self.suggestions.on_candidate_click(index, &mut self.query)
    }

    pub fn click_outside(&mut self) {
        self.suggestions.on_outside_click();
    }
}
