//! Song catalog query engine.
//!
//! Provides criteria parsing, fuzzy filtering, sorting and field autocomplete
//! over an immutable set of [`Record`](songbook_core::Record)s.
//!
//! # Design
//!
//! - Queries are comma-separated `field:term` criteria, combined with AND.
//! - Matching is an ordered-subsequence test (`fuzzy_match`), except
//!   `language`, which is exact.
//! - Every operation is synchronous and total: malformed input narrows or
//!   empties results, it never errors.
//! - [`SuggestionEngine`] owns the only mutable state, an explicit
//!   [`SuggestionState`].
//!
//! # API
//!
//! - `Criteria::parse()`: raw text → field/term mapping
//! - `filter()`: records satisfying all criteria, input order kept
//! - `compare()` / `SortState`: stable ordering by one field
//! - `SuggestionEngine`: candidates and keyboard/click handling
//! - `Browser`: one session wiring the above together

mod browser;
mod config;
mod criteria;
mod filter;
mod fuzzy;
mod query;
mod results;
mod sort;
mod suggest;

pub use browser::Browser;
pub use config::SearchConfig;
pub use criteria::Criteria;
pub use filter::{filter, matches_criteria};
pub use fuzzy::fuzzy_match;
pub use query::{commit_criterion, last_segment, replace_criterion};
pub use results::SearchResults;
pub use sort::{SortState, compare};
pub use suggest::{
    Candidate, EventOutcome, NavKey, SuggestionEngine, SuggestionState, Suggestions,
    compute_suggestions,
};
