use super::*;

fn sample() -> Record {
    let mut record = Record::new("Aimer", "Kataomoi", "2012-07-25");
    record.tags = vec!["ballad".to_string(), "jpop".to_string()];
    record
}

#[test]
fn test_field_text() {
    let record = sample();

    assert_eq!(record.field_text(Field::Artist), "Aimer");
    assert_eq!(record.field_text(Field::Release), "2012-07-25");
    assert_eq!(record.field_text(Field::Tags), "ballad,jpop");
    assert_eq!(record.field_text(Field::Note), "");
    assert_eq!(record.field_text(Field::Language), "");
}

#[test]
fn test_normalize_tags() {
    let mut record = sample();
    record.tags = vec![" Rock ".to_string(), "".to_string(), "J-POP".to_string()];

    record.normalize_tags();

    assert_eq!(record.tags, vec!["rock".to_string(), "j-pop".to_string()]);
}

#[test]
fn test_deserialize_minimal_json() {
    let record: Record = serde_json::from_str(
        r#"{"artist": "A", "title": "T", "release": "2020-01-01"}"#,
    )
    .unwrap();

    assert!(record.tags.is_empty());
    assert!(record.language.is_none());
    assert!(record.listen.is_empty());
    assert_eq!(record.note_or_empty(), "");
}

#[test]
fn test_deserialize_language_is_normalized() {
    let record: Record = serde_json::from_str(
        r#"{"artist": "A", "title": "T", "release": "2020", "language": "JA"}"#,
    )
    .unwrap();
    assert_eq!(record.language_str(), Some("ja"));
}

#[test]
fn test_deserialize_blank_language_is_absent() {
    for language in [r#""""#, r#""  ""#, "null"] {
        let json = format!(
            r#"{{"artist": "A", "title": "T", "release": "2020", "language": {language}}}"#
        );
        let record: Record = serde_json::from_str(&json).unwrap();
        assert!(record.language.is_none(), "{language}");
    }
}

#[test]
fn test_deserialize_invalid_language_is_dropped() {
    let record: Record = serde_json::from_str(
        r#"{"artist": "A", "title": "T", "release": "2020", "language": "en us"}"#,
    )
    .unwrap();

    assert!(record.language.is_none());
    assert_eq!(record.title, "T");
}
