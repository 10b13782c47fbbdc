use crate::fuzzy::fuzzy_match;
use crate::query::last_segment;
use regex::Regex;
use songbook_core::{CountIndex, Field, SuggestionSources};
use std::ops::Range;
use std::sync::LazyLock;

/// `field:term` at the end of the query; the field is ASCII word characters.
static TYPED_CRITERION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9_]+):\s*([^,]*)$").expect("typed criterion pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub value: String,
    /// Records containing the value; zero when the field has no counts.
    pub count: usize,
}

impl Candidate {
    /// Byte ranges of each non-overlapping, case-insensitive occurrence of
    /// `term` in the value, for highlighting.
    pub fn highlights(&self, term: &str) -> Vec<Range<usize>> {
        let needle: Vec<char> = term.chars().collect();
        if needle.is_empty() {
            return Vec::new();
        }
        let chars: Vec<(usize, char)> = self.value.char_indices().collect();
        let same = |a: char, b: char| a == b || a.to_lowercase().eq(b.to_lowercase());

        let mut ranges = Vec::new();
        let mut i = 0;
        while i + needle.len() <= chars.len() {
            let hit = needle
                .iter()
                .zip(&chars[i..])
                .all(|(&n, &(_, c))| same(n, c));
            if hit {
                let start = chars[i].0;
                let end = chars
                    .get(i + needle.len())
                    .map_or(self.value.len(), |&(offset, _)| offset);
                ranges.push(start..end);
                i += needle.len();
            } else {
                i += 1;
            }
        }
        ranges
    }
}

/// Ranked candidates for the criterion currently being typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestions {
    pub field: Field,
    pub term: String,
    pub candidates: Vec<Candidate>,
}

impl Suggestions {
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Field name and lowercase term typed in the last segment, if it has the
/// `field:term` shape and a non-empty term.
pub(crate) fn typed_criterion(raw: &str) -> Option<(String, String)> {
    let captures = TYPED_CRITERION.captures(last_segment(raw))?;
    let field = captures[1].to_lowercase();
    let term = captures[2].to_lowercase();
    if term.is_empty() {
        return None;
    }
    Some((field, term))
}

/// Candidates for the last typed segment: source values fuzzy-matching the
/// term, most frequent first, ties in ascending value order, at most `limit`.
///
/// `None` when nothing should be shown.
pub fn compute_suggestions(
    raw: &str,
    sources: &SuggestionSources,
    counts: &CountIndex,
    limit: usize,
) -> Option<Suggestions> {
    let (field_name, term) = typed_criterion(raw)?;
    let field = field_name.parse::<Field>().ok()?;
    let source = sources.values(field)?;

    let mut candidates: Vec<Candidate> = source
        .iter()
        .filter(|value| fuzzy_match(&term, value))
        .map(|value| Candidate {
            value: value.clone(),
            count: counts.count(field, value),
        })
        .collect();
    candidates.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));
    candidates.truncate(limit);

    if candidates.is_empty() {
        return None;
    }
    Some(Suggestions {
        field,
        term,
        candidates,
    })
}
