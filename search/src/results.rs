//! Search results types.

use songbook_core::Record;

/// Filtered and sorted records, borrowed from the session.
pub struct SearchResults<'a> {
    pub(crate) records: Vec<&'a Record>,
    pub(crate) total: usize,
}

impl<'a> SearchResults<'a> {
    pub fn iter(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.records.iter().copied()
    }

    pub fn as_slice(&self) -> &[&'a Record] {
        &self.records
    }

    /// Number of records shown.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records in the whole catalog.
    pub fn total(&self) -> usize {
        self.total
    }

    /// `"<shown> / <total> songs shown"`.
    pub fn summary(&self) -> String {
        format!("{} / {} songs shown", self.len(), self.total)
    }
}
