//! Precomputed per-field lookups used to rank and source autocomplete candidates.

use crate::types::{Field, Record};
use std::collections::{BTreeSet, HashMap};

/// Value → number of records containing it, for `artist`, `tags` and `language`.
#[derive(Debug, Clone, Default)]
pub struct CountIndex {
    counts: HashMap<Field, HashMap<String, usize>>,
}

impl CountIndex {
    pub fn from_records(records: &[Record]) -> Self {
        let mut index = Self::default();
        for record in records {
            index.increment(Field::Artist, &record.artist);
            for tag in &record.tags {
                index.increment(Field::Tags, tag);
            }
            if let Some(language) = record.language_str() {
                index.increment(Field::Language, language);
            }
        }
        index
    }

    /// Missing fields and values count as zero.
    pub fn count(&self, field: Field, value: &str) -> usize {
        self.counts
            .get(&field)
            .and_then(|values| values.get(value))
            .copied()
            .unwrap_or(0)
    }

    pub fn field(&self, field: Field) -> Option<&HashMap<String, usize>> {
        self.counts.get(&field)
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>, count: usize) {
        self.counts
            .entry(field)
            .or_default()
            .insert(value.into(), count);
    }

    fn increment(&mut self, field: Field, value: &str) {
        *self
            .counts
            .entry(field)
            .or_default()
            .entry(value.to_string())
            .or_insert(0) += 1;
    }
}

/// Distinct known values per field, sorted.
///
/// Only fields present here get autocomplete candidates.
#[derive(Debug, Clone, Default)]
pub struct SuggestionSources {
    values: HashMap<Field, Vec<String>>,
}

impl SuggestionSources {
    pub fn from_records(records: &[Record]) -> Self {
        let mut artists = BTreeSet::new();
        let mut titles = BTreeSet::new();
        let mut tags = BTreeSet::new();
        let mut languages = BTreeSet::new();
        let mut notes = BTreeSet::new();

        for record in records {
            artists.insert(record.artist.clone());
            titles.insert(record.title.clone());
            tags.extend(record.tags.iter().cloned());
            if let Some(language) = record.language_str() {
                languages.insert(language.to_string());
            }
            if let Some(note) = record.note.as_deref().filter(|note| !note.is_empty()) {
                notes.insert(note.to_string());
            }
        }

        let mut sources = Self::default();
        sources.set(Field::Artist, artists);
        sources.set(Field::Title, titles);
        sources.set(Field::Tags, tags);
        sources.set(Field::Language, languages);
        sources.set(Field::Note, notes);
        sources
    }

    pub fn values(&self, field: Field) -> Option<&[String]> {
        self.values.get(&field).map(Vec::as_slice)
    }

    /// Replaces the source list for a field. Values are deduplicated and sorted.
    pub fn set<I, S>(&mut self, field: Field, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let distinct: BTreeSet<String> = values.into_iter().map(Into::into).collect();
        self.values.insert(field, distinct.into_iter().collect());
    }
}
