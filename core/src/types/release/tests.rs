use super::*;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_full_date() {
    assert_eq!(ReleaseDate::new("2024-03-15").date(), Some(ymd(2024, 3, 15)));
}

#[test]
fn test_partial_dates() {
    assert_eq!(ReleaseDate::new("2019-07").date(), Some(ymd(2019, 7, 1)));
    assert_eq!(ReleaseDate::new("2001").date(), Some(ymd(2001, 1, 1)));
}

#[test]
fn test_unparseable_dates() {
    assert_eq!(ReleaseDate::new("").date(), None);
    assert_eq!(ReleaseDate::new("unknown").date(), None);
    assert_eq!(ReleaseDate::new("2024-13-01").date(), None);
    assert_eq!(ReleaseDate::new("24").date(), None);
}

#[test]
fn test_raw_text_is_preserved() {
    let release = ReleaseDate::new(" 2024-03-15");
    assert_eq!(release.as_str(), " 2024-03-15");
    assert_eq!(release.to_string(), " 2024-03-15");
}

#[test]
fn test_age_on() {
    let age = ReleaseDate::new("2024-01-01").age_on(ymd(2025, 1, 1)).unwrap();
    assert_eq!(age.days, 366);
    assert_eq!(age.describe(), "366 days ago\n(1.00 years ago)");
}

#[test]
fn test_age_of_unparseable_date() {
    assert!(ReleaseDate::new("soon").age_on(ymd(2025, 1, 1)).is_none());
}

#[test]
fn test_deserialize_string_or_bare_year() {
    let text: ReleaseDate = serde_json::from_str(r#""2020-02-02""#).unwrap();
    let year: ReleaseDate = serde_json::from_str("1999").unwrap();

    assert_eq!(text.as_str(), "2020-02-02");
    assert_eq!(year.as_str(), "1999");
    assert_eq!(year.date(), Some(ymd(1999, 1, 1)));
}
