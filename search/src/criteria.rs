//! Raw query text → field/term mapping.

use std::collections::HashMap;

/// Field name → lowercase search term.
///
/// Keys and terms are always trimmed and lowercased, and never empty. Unknown
/// field names are kept; the filter treats them as unsatisfiable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    terms: HashMap<String, String>,
}

impl Criteria {
    /// Parses `field:term` segments separated by commas.
    ///
    /// Segments without a colon, or with an empty side, are dropped. Only the
    /// first colon separates, so terms may contain colons. A repeated field
    /// keeps its last term.
    pub fn parse(raw: &str) -> Self {
        let mut criteria = Self::default();
        for segment in raw.split(',').map(str::trim) {
            if let Some((field, term)) = segment.split_once(':') {
                criteria.insert(field, term);
            }
        }
        criteria
    }

    /// Adds or replaces a criterion. Ignored if either side is blank.
    pub fn insert(&mut self, field: &str, term: &str) {
        let field = field.trim().to_lowercase();
        let term = term.trim().to_lowercase();
        if field.is_empty() || term.is_empty() {
            return;
        }
        self.terms.insert(field, term);
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.terms.get(field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.terms
            .iter()
            .map(|(field, term)| (field.as_str(), term.as_str()))
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
