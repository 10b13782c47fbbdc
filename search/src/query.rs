//! Editing of the raw comma-separated query text.

/// Text after the final comma (or the whole input), trimmed.
pub fn last_segment(raw: &str) -> &str {
    raw.rsplit_once(',')
        .map_or(raw, |(_, tail)| tail)
        .trim()
}

/// Accepting a suggestion: drops every existing `field:` segment, appends
/// `field:value`, and leaves a trailing `", "` ready for the next criterion.
pub fn commit_criterion(raw: &str, field: &str, value: &str) -> String {
    let mut query = with_criterion(raw, field, value);
    query.push_str(", ");
    query
}

/// Clicking a value in the result table: like [`commit_criterion`] but
/// without the trailing separator.
pub fn replace_criterion(raw: &str, field: &str, term: &str) -> String {
    with_criterion(raw, field, term)
}

fn with_criterion(raw: &str, field: &str, term: &str) -> String {
    let prefix = format!("{}:", field.to_lowercase());
    let criterion = format!("{field}:{term}");

    let mut segments: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .filter(|segment| !segment.to_lowercase().starts_with(&prefix))
        .collect();
    segments.push(&criterion);
    segments.join(", ")
}
