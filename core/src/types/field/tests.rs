use super::*;

#[test]
fn test_parse_known_fields() {
    for field in Field::ALL {
        assert_eq!(field.as_str().parse::<Field>().unwrap(), field);
    }
}

#[test]
fn test_parse_is_case_insensitive_and_trimmed() {
    assert_eq!(" Artist ".parse::<Field>().unwrap(), Field::Artist);
    assert_eq!("TAGS".parse::<Field>().unwrap(), Field::Tags);
}

#[test]
fn test_parse_unknown_field() {
    let err = "genre".parse::<Field>().unwrap_err();
    assert_eq!(err, FieldParseError("genre".to_string()));
    assert_eq!(err.to_string(), "unknown field: genre");
}

#[test]
fn test_direction_apply_and_reverse() {
    assert_eq!(SortDirection::Ascending.apply(Ordering::Less), Ordering::Less);
    assert_eq!(SortDirection::Descending.apply(Ordering::Less), Ordering::Greater);
    assert_eq!(SortDirection::Descending.apply(Ordering::Equal), Ordering::Equal);
    assert_eq!(SortDirection::Ascending.reversed(), SortDirection::Descending);
    assert_eq!(SortDirection::Descending.reversed(), SortDirection::Ascending);
}
