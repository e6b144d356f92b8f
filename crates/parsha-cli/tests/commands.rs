//! Integration tests for the command implementations.

use std::fs;
use std::path::Path;

use clap::Parser;
use parsha_cli::cli::{Cli, Command};
use parsha_cli::commands::{run_comments, run_coords, run_path, run_sources};
use parsha_cli::library::{METADATA_FILE, ParshaLibrary};
use parsha_cli::summary::sources_table;
use parsha_model::{TextSource, VerseCoordinate};
use parsha_settings::{FileSlot, KeyValueSlot, STORAGE_KEY, TextSourcesConfig};
use tempfile::tempdir;

const PARSHA_JSON: &str = r#"{
    "book": 1,
    "parsha": 3,
    "chapters": [
        {"chapter": 10, "verses": [
            {"verse": 1, "comments": {"rashi": [{"comment": "a", "format": "plain"}]}}
        ]},
        {"chapter": 2, "verses": [
            {"verse": 9, "comments": {"me": [{"comment": "b", "format": "plain", "is_starred_by_me": true}]}},
            {"verse": 10}
        ]}
    ]
}"#;

fn write_library(dir: &Path) -> ParshaLibrary {
    fs::write(dir.join("3.json"), PARSHA_JSON).unwrap();
    fs::write(dir.join(METADATA_FILE), r#"{"text_sources": ["fg", "onk"]}"#).unwrap();
    ParshaLibrary::new(dir)
}

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("parsha").chain(args.iter().copied()))
        .expect("arguments parse")
}

fn sources(library: &ParshaLibrary, args: &[&str]) -> TextSourcesConfig {
    match parse(args).command {
        Command::Sources(sources_args) => run_sources(library, &sources_args).unwrap(),
        _ => panic!("expected sources command"),
    }
}

fn comments(library: &ParshaLibrary, args: &[&str]) -> Vec<String> {
    match parse(args).command {
        Command::Comments(comments_args) => run_comments(library, &comments_args)
            .unwrap()
            .iter()
            .map(VerseCoordinate::encode)
            .collect(),
        _ => panic!("expected comments command"),
    }
}

fn path(args: &[&str]) -> String {
    match parse(args).command {
        Command::Path(command) => run_path(&command),
        _ => panic!("expected path command"),
    }
}

#[test]
fn coords_are_sorted_numerically() {
    let dir = tempdir().unwrap();
    let library = write_library(dir.path());

    let encoded: Vec<String> = run_coords(&library, 3)
        .unwrap()
        .iter()
        .map(VerseCoordinate::encode)
        .collect();
    assert_eq!(encoded, ["2:9", "2:10", "10:1"]);
}

#[test]
fn coords_for_missing_parsha_fail() {
    let dir = tempdir().unwrap();
    let library = write_library(dir.path());

    let error = run_coords(&library, 4).unwrap_err();
    assert!(format!("{error:#}").contains("loading parsha 4"));
}

#[test]
fn comments_show_every_commenter_by_default() {
    let dir = tempdir().unwrap();
    let library = write_library(dir.path());

    assert_eq!(comments(&library, &["comments", "3"]), ["2:9", "10:1"]);
}

#[test]
fn comments_restricted_to_named_commenters() {
    let dir = tempdir().unwrap();
    let library = write_library(dir.path());

    assert_eq!(
        comments(&library, &["comments", "3", "--commenter", "rashi"]),
        ["10:1"]
    );
    assert!(comments(&library, &["comments", "3", "--commenter", "nobody"]).is_empty());
}

#[test]
fn comments_mine_keeps_starred_only() {
    let dir = tempdir().unwrap();
    let library = write_library(dir.path());

    assert_eq!(comments(&library, &["comments", "3", "--mine"]), ["2:9"]);
}

#[test]
fn sources_initialize_act_and_persist() {
    let data = tempdir().unwrap();
    let settings = tempdir().unwrap();
    let library = write_library(data.path());
    let settings_dir = settings.path().to_str().unwrap();

    let shown = sources(&library, &["sources", "--settings-dir", settings_dir, "show"]);
    assert_eq!(shown.main.as_str(), "fg");
    assert_eq!(shown.is_enabled("onk"), Some(true));

    let toggled = sources(
        &library,
        &["sources", "--settings-dir", settings_dir, "toggle", "onk"],
    );
    assert_eq!(toggled.is_enabled("onk"), Some(false));

    let dump = FileSlot::new(settings.path())
        .get(STORAGE_KEY)
        .unwrap()
        .expect("settings saved");
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&dump).unwrap(),
        serde_json::json!({"main": "fg", "enabledInDetails": {"fg": true, "onk": false}})
    );

    let main = sources(
        &library,
        &["sources", "--settings-dir", settings_dir, "set-main", "onk"],
    );
    assert_eq!(main.main.as_str(), "onk");
    assert_eq!(main.is_enabled("onk"), Some(false));

    let enabled = sources(
        &library,
        &["sources", "--settings-dir", settings_dir, "enable", "onk"],
    );
    assert_eq!(enabled.is_enabled("onk"), Some(true));
    assert_eq!(enabled.main.as_str(), "onk");
}

#[test]
fn sources_blank_key_is_rejected() {
    let data = tempdir().unwrap();
    let settings = tempdir().unwrap();
    let library = write_library(data.path());

    let Command::Sources(args) = parse(&[
        "sources",
        "--settings-dir",
        settings.path().to_str().unwrap(),
        "enable",
        " ",
    ])
    .command
    else {
        panic!("expected sources command");
    };
    assert!(run_sources(&library, &args).is_err());
}

#[test]
fn sources_unwritable_settings_keep_io_cause() {
    let data = tempdir().unwrap();
    let library = write_library(data.path());
    let blocker = data.path().join("not-a-dir");
    fs::write(&blocker, "x").unwrap();

    let Command::Sources(args) = parse(&[
        "sources",
        "--settings-dir",
        blocker.to_str().unwrap(),
        "show",
    ])
    .command
    else {
        panic!("expected sources command");
    };
    let error = run_sources(&library, &args).unwrap_err();

    let message = format!("{error:#}");
    assert!(message.starts_with("initializing settings: "));
    assert!(message.contains("failed to create directory"));
    assert!(error.chain().any(|cause| cause.is::<std::io::Error>()));
}

#[test]
fn sources_table_marks_main() {
    let mut config = TextSourcesConfig::default();
    config.reconcile(&[TextSource::from("fg"), TextSource::from("onk")]);
    config.toggle(&TextSource::from("onk"));

    let rendered = sources_table(&config).to_string();
    assert!(rendered.contains("fg"));
    assert!(rendered.contains("onk"));
    assert!(rendered.contains("no"));
}

#[test]
fn path_builds_parsha_and_verse_paths() {
    assert_eq!(path(&["path", "parsha", "3"]), "/parsha/3");
    assert_eq!(
        path(&["path", "parsha", "3", "--verse", "12:4"]),
        "/parsha/3#12:4"
    );
    assert_eq!(path(&["path", "signup", "tok"]), "/signup/tok");
}

#[test]
fn path_rejects_malformed_verse() {
    for verse in ["1:x", "1:", "a:b", "1:2:3"] {
        let result = Cli::try_parse_from(["parsha", "path", "parsha", "3", "--verse", verse]);
        let error = match result {
            Ok(_) => panic!("verse {verse:?} should be rejected"),
            Err(error) => error,
        };
        assert_eq!(error.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(error.to_string().contains("invalid verse coordinate"));
    }
}
