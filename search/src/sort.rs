//! Result ordering.

use songbook_core::types::SortConfig;
use songbook_core::{Field, Record, ReleaseDate, SortDirection};
use std::cmp::Ordering;

/// Three-way comparison of two records by `key`, adjusted for `direction`.
///
/// `release` compares chronologically; records whose release does not parse
/// always sort after parseable ones, whichever the direction, and compare
/// equal among themselves. Every other key compares its text case-insensitively.
pub fn compare(a: &Record, b: &Record, key: Field, direction: SortDirection) -> Ordering {
    match key {
        Field::Release => compare_release(&a.release, &b.release, direction),
        _ => {
            let a = a.field_text(key).to_lowercase();
            let b = b.field_text(key).to_lowercase();
            direction.apply(a.cmp(&b))
        }
    }
}

fn compare_release(a: &ReleaseDate, b: &ReleaseDate, direction: SortDirection) -> Ordering {
    match (a.date(), b.date()) {
        (Some(a), Some(b)) => direction.apply(a.cmp(&b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Column and direction of the result table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub key: Field,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            key: Field::Release,
            direction: SortDirection::Descending,
        }
    }
}

impl From<SortConfig> for SortState {
    fn from(config: SortConfig) -> Self {
        Self {
            key: config.field,
            direction: config.direction,
        }
    }
}

impl SortState {
    pub fn new(key: Field, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Header click: the current column flips direction, another column starts ascending.
    pub fn toggle(&mut self, key: Field) {
        if self.key == key {
            self.direction = self.direction.reversed();
        } else {
            self.key = key;
            self.direction = SortDirection::Ascending;
        }
    }

    /// Stable in-place sort.
    pub fn sort(&self, records: &mut [&Record]) {
        records.sort_by(|a, b| compare(a, b, self.key, self.direction));
    }
}
