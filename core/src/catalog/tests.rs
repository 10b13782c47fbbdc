use super::*;
use crate::types::{Field, ListenLink};
use std::path::PathBuf;
use tempfile::TempDir;

mod common {
    use super::*;

    pub(super) fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    pub(super) fn make_record(artist: &str, title: &str, tags: &[&str], language: &str) -> Record {
        let mut record = Record::new(artist, title, "2020-01-01");
        record.tags = tags.iter().map(|t| t.to_string()).collect();
        if !language.is_empty() {
            record.language = Some(language.try_into().unwrap());
        }
        record
    }
}

mod load_dir {
    use super::common::write_file;
    use super::*;

    #[test]
    fn test_artist_comes_from_file_stem() {
        let dir = TempDir::new().unwrap();
        write_file(
            &dir,
            "Aimer.yml",
            "- title: Kataomoi\n  release: 2012-07-25\n  tags: [Ballad, jpop]\n  language: ja\n",
        );

        let catalog = Catalog::load_dir(dir.path()).unwrap();

        assert_eq!(catalog.len(), 1);
        let record = &catalog.records()[0];
        assert_eq!(record.artist, "Aimer");
        assert_eq!(record.title, "Kataomoi");
        assert_eq!(record.release.as_str(), "2012-07-25");
        assert_eq!(record.tags, vec!["ballad".to_string(), "jpop".to_string()]);
        assert_eq!(record.language_str(), Some("ja"));
    }

    #[test]
    fn test_song_may_override_artist() {
        let dir = TempDir::new().unwrap();
        write_file(
            &dir,
            "Various.yaml",
            "- artist: Guest\n  title: Feature\n  release: \"2021-05-01\"\n",
        );

        let catalog = Catalog::load_dir(dir.path()).unwrap();

        assert_eq!(catalog.records()[0].artist, "Guest");
    }

    #[test]
    fn test_files_are_loaded_in_name_order_and_others_skipped() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "b.yml", "- title: B1\n  release: 2020-01-01\n");
        write_file(&dir, "a.yaml", "- title: A1\n  release: 2020-01-01\n");
        write_file(&dir, "readme.md", "not songs");

        let catalog = Catalog::load_dir(dir.path()).unwrap();

        let titles: Vec<&str> = catalog.records().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["A1", "B1"]);
    }

    #[test]
    fn test_bare_year_release() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "Old.yml", "- title: Classic\n  release: 1975\n");

        let catalog = Catalog::load_dir(dir.path()).unwrap();

        assert_eq!(catalog.records()[0].release.as_str(), "1975");
    }

    #[test]
    fn test_empty_file_yields_no_songs() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "Empty.yml", "");

        let catalog = Catalog::load_dir(dir.path()).unwrap();

        assert!(catalog.is_empty());
    }

    #[test]
    fn test_listen_links_are_parsed() {
        let dir = TempDir::new().unwrap();
        write_file(
            &dir,
            "Band.yml",
            "- title: Song\n  release: 2020-01-01\n  listen:\n    - ORG: https://example.com/o\n    - RX(Slowed): https://example.com/r\n",
        );

        let catalog = Catalog::load_dir(dir.path()).unwrap();

        assert_eq!(
            catalog.records()[0].listen,
            vec![
                ListenLink::new("ORG", "https://example.com/o"),
                ListenLink::new("RX(Slowed)", "https://example.com/r"),
            ]
        );
    }

    #[test]
    fn test_blank_and_regional_languages_load() {
        let dir = TempDir::new().unwrap();
        write_file(
            &dir,
            "Band.yml",
            "- title: Blank\n  release: 2020-01-01\n  language: \"\"\n- title: Empty\n  release: 2020-01-01\n  language:\n- title: Regional\n  release: 2020-01-01\n  language: pt-BR\n",
        );

        let catalog = Catalog::load_dir(dir.path()).unwrap();

        let languages: Vec<Option<&str>> =
            catalog.records().iter().map(|r| r.language_str()).collect();
        assert_eq!(languages, vec![None, None, Some("pt-br")]);
    }

    #[test]
    fn test_malformed_yaml_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "Broken.yml", "- title: [unclosed\n");

        let err = Catalog::load_dir(dir.path()).unwrap_err();

        match err {
            CatalogError::Yaml { path: err_path, .. } => assert_eq!(err_path, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_title_is_error() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "Band.yml", "- release: 2020-01-01\n");

        let err = Catalog::load_dir(dir.path()).unwrap_err();

        assert!(matches!(err, CatalogError::Yaml { .. }));
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");

        let err = Catalog::load_dir(&missing).unwrap_err();

        assert!(matches!(err, CatalogError::Io { .. }));
    }
}

mod json {
    use super::common::{make_record, write_file};
    use super::*;

    #[test]
    fn test_export_then_load_json() {
        let dir = TempDir::new().unwrap();
        let catalog = Catalog::from_records(vec![
            make_record("A", "One", &["rock"], "en"),
            make_record("B", "Two", &[], ""),
        ]);

        let path = write_file(&dir, "search.json", &catalog.to_json().unwrap());
        let loaded = Catalog::load_json(&path).unwrap();

        assert_eq!(loaded.records(), catalog.records());
    }

    #[test]
    fn test_odd_languages_do_not_abort_loading() {
        let catalog = Catalog::from_json_str(
            r#"[
                {"artist": "a", "title": "Blank", "release": "2020-01-01", "language": ""},
                {"artist": "a", "title": "Regional", "release": "2020-01-01", "language": "pt-BR"},
                {"artist": "a", "title": "Garbled", "release": "2020-01-01", "language": "en us!"}
            ]"#,
        )
        .unwrap();

        let languages: Vec<Option<&str>> =
            catalog.records().iter().map(|r| r.language_str()).collect();
        assert_eq!(languages, vec![None, Some("pt-br"), None]);
        assert_eq!(catalog.count_index().count(Field::Language, "pt-br"), 1);
    }

    #[test]
    fn test_invalid_json() {
        let err = Catalog::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }
}

mod indexes {
    use super::common::make_record;
    use super::*;

    fn sample() -> Catalog {
        Catalog::from_records(vec![
            make_record("alice", "One", &["rock", "pop"], "en"),
            make_record("alice", "Two", &["rock"], "ja"),
            make_record("bob", "Three", &["Jazz"], "en"),
        ])
    }

    #[test]
    fn test_count_index() {
        let counts = sample().count_index();

        assert_eq!(counts.count(Field::Artist, "alice"), 2);
        assert_eq!(counts.count(Field::Tags, "rock"), 2);
        assert_eq!(counts.count(Field::Tags, "jazz"), 1);
        assert_eq!(counts.count(Field::Language, "en"), 2);
        assert_eq!(counts.count(Field::Artist, "carol"), 0);
        assert_eq!(counts.count(Field::Title, "One"), 0);
        assert!(counts.field(Field::Title).is_none());
    }

    #[test]
    fn test_suggestion_sources_are_distinct_and_sorted() {
        let sources = sample().suggestion_sources();

        assert_eq!(
            sources.values(Field::Artist).unwrap(),
            &["alice".to_string(), "bob".to_string()]
        );
        assert_eq!(
            sources.values(Field::Tags).unwrap(),
            &["jazz".to_string(), "pop".to_string(), "rock".to_string()]
        );
        assert_eq!(sources.values(Field::Note).unwrap().len(), 0);
        assert!(sources.values(Field::Release).is_none());
    }

    #[test]
    fn test_sources_set_dedupes() {
        let mut sources = SuggestionSources::default();
        sources.set(Field::Artist, ["bob", "alice", "bob"]);

        assert_eq!(
            sources.values(Field::Artist).unwrap(),
            &["alice".to_string(), "bob".to_string()]
        );
    }

    #[test]
    fn test_nationality_counts() {
        let mut records = vec![
            make_record("A", "1", &[], ""),
            make_record("A", "2", &[], ""),
            make_record("B", "3", &[], ""),
            make_record("C", "4", &[], ""),
        ];
        records[0].nationality = Some("JP".to_string());
        records[1].nationality = Some("jp".to_string());
        records[2].nationality = Some("us".to_string());

        let counts = Catalog::from_records(records).nationality_counts();

        assert_eq!(counts, vec![("jp".to_string(), 2), ("us".to_string(), 1)]);
    }
}
