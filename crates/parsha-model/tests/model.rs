//! Tests for the backend payload shapes.

use parsha_model::{CommentFormat, Metadata, ParshaData, TextSource, VerseCoordinate};

const PARSHA_JSON: &str = r#"{
    "book": 1,
    "parsha": 3,
    "chapters": [
        {
            "chapter": 12,
            "verses": [
                {
                    "verse": 1,
                    "text": {"fg": "first", "onk": "targum"},
                    "comments": {
                        "rashi": [
                            {"anchor_phrase": "lech lecha", "comment": "for your benefit", "format": "plain"}
                        ],
                        "me": [
                            {"anchor_phrase": null, "comment": "*note*", "format": "markdown", "is_starred_by_me": true}
                        ]
                    }
                },
                {"verse": 2}
            ]
        }
    ]
}"#;

#[test]
fn parsha_payload_deserializes() {
    let parsha: ParshaData = serde_json::from_str(PARSHA_JSON).expect("parse parsha");
    assert_eq!(parsha.parsha, 3);

    let verse = parsha
        .verse(&VerseCoordinate::new(12, 1))
        .expect("verse 12:1");
    assert_eq!(verse.text_in("onk"), Some("targum"));
    assert_eq!(verse.comment_count(), 2);
    assert_eq!(verse.comments["me"][0].format, CommentFormat::Markdown);
    assert_eq!(verse.comments["me"][0].is_starred_by_me, Some(true));
    assert_eq!(verse.comments["rashi"][0].is_starred_by_me, None);

    let empty = parsha
        .verse(&VerseCoordinate::new(12, 2))
        .expect("verse 12:2");
    assert!(empty.comments.is_empty());
    assert!(empty.text.is_empty());
}

#[test]
fn metadata_ignores_unknown_fields() {
    let metadata: Metadata =
        serde_json::from_str(r#"{"text_sources": ["fg", "onk"], "parsha_count": 54}"#)
            .expect("parse metadata");
    assert_eq!(
        metadata.text_sources,
        vec![TextSource::from("fg"), TextSource::from("onk")]
    );
}

#[test]
fn coordinate_serializes_as_object() {
    let json = serde_json::to_string(&VerseCoordinate::new(3, 4)).expect("serialize");
    assert_eq!(json, r#"{"chapter":3,"verse":4}"#);
}
