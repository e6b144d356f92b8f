//! Integration tests for the on-disk parsha library.

use std::fs;

use parsha_cli::library::{LibraryError, METADATA_FILE, ParshaLibrary};
use parsha_filter::{BookmarkMode, CommentFilters, verses_with_visible_comments};
use parsha_model::{TextSource, VerseCoordinate, extract_all};
use tempfile::tempdir;

const PARSHA_JSON: &str = r#"{
    "book": 1,
    "parsha": 2,
    "chapters": [
        {"chapter": 10, "verses": [{"verse": 1}]},
        {"chapter": 9, "verses": [
            {"verse": 2, "comments": {"rashi": [{"comment": "a", "format": "plain"}]}},
            {"verse": 1, "comments": {"me": [{"comment": "b", "format": "plain", "is_starred_by_me": true}]}}
        ]}
    ]
}"#;

#[test]
fn loads_parsha_and_metadata() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("2.json"), PARSHA_JSON).unwrap();
    fs::write(
        dir.path().join(METADATA_FILE),
        r#"{"text_sources": ["fg", "onk"]}"#,
    )
    .unwrap();
    let library = ParshaLibrary::new(dir.path());

    let parsha = library.load_parsha(2).unwrap();
    assert_eq!(
        extract_all(&parsha),
        vec![
            VerseCoordinate::new(9, 1),
            VerseCoordinate::new(9, 2),
            VerseCoordinate::new(10, 1),
        ]
    );

    let metadata = library.load_metadata().unwrap();
    assert_eq!(metadata.text_sources[1], TextSource::from("onk"));

    let mine = CommentFilters::all_enabled(["rashi", "me"]).with_mode(BookmarkMode::My);
    assert_eq!(
        verses_with_visible_comments(&parsha, &mine),
        vec![VerseCoordinate::new(9, 1)]
    );
}

#[test]
fn parsha_file_name_uses_index() {
    let library = ParshaLibrary::new("/data");
    assert!(library.parsha_json(17).ends_with("17.json"));
}

#[test]
fn missing_and_malformed_files_are_reported() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("1.json"), "{").unwrap();
    let library = ParshaLibrary::new(dir.path());

    assert!(matches!(library.load_parsha(5), Err(LibraryError::Read { .. })));
    assert!(matches!(library.load_parsha(1), Err(LibraryError::Parse { .. })));
}
