use crate::criteria::Criteria;
use crate::fuzzy::fuzzy_match;
use songbook_core::{Field, Record};

/// Records satisfying every criterion, in input order.
pub fn filter<'a>(records: &'a [Record], criteria: &Criteria) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|record| matches_criteria(record, criteria))
        .collect()
}

/// Logical AND over all criteria. Empty criteria match everything.
pub fn matches_criteria(record: &Record, criteria: &Criteria) -> bool {
    criteria
        .iter()
        .all(|(field, term)| matches_field(record, field, term))
}

fn matches_field(record: &Record, field: &str, term: &str) -> bool {
    // Unknown fields fail closed.
    let Ok(field) = field.parse::<Field>() else {
        return false;
    };

    match field {
        Field::Artist => fuzzy_match(term, &record.artist),
        Field::Title => fuzzy_match(term, &record.title),
        Field::Release => fuzzy_match(term, record.release.as_str()),
        Field::Note => fuzzy_match(term, record.note_or_empty()),
        Field::Tags => record.tags.iter().any(|tag| fuzzy_match(term, tag)),
        Field::Language => record
            .language_str()
            .is_some_and(|language| language.to_lowercase() == term.to_lowercase()),
    }
}
