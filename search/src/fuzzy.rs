/// Returns true if every character of `pattern` occurs in `text` in the same
/// order, with anything in between. Case-insensitive; an empty pattern always
/// matches.
///
/// Single left-to-right pass over `text`.
pub fn fuzzy_match(pattern: &str, text: &str) -> bool {
    let pattern = pattern.to_lowercase();
    let text = text.to_lowercase();

    let mut remaining = pattern.chars().peekable();
    for c in text.chars() {
        match remaining.peek() {
            None => break,
            Some(&p) if p == c => {
                remaining.next();
            }
            Some(_) => {}
        }
    }
    remaining.peek().is_none()
}
