//! Payloads delivered by the backend: parsha text, comments and metadata.
//!
//! Maps are `BTreeMap`s, so iteration over commenters is ordered by key.
//! Nothing in this workspace depends on that order for correctness.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::coords::VerseCoordinate;
use crate::ids::TextSource;

/// Markup used by a comment body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentFormat {
    #[default]
    Plain,
    Markdown,
    Html,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentData {
    /// Phrase of the verse the comment is attached to, if any.
    #[serde(default)]
    pub anchor_phrase: Option<String>,
    pub comment: String,
    #[serde(default)]
    pub format: CommentFormat,
    /// Only present for authenticated viewers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_starred_by_me: Option<bool>,
}

impl CommentData {
    pub fn plain(comment: impl Into<String>) -> Self {
        Self {
            anchor_phrase: None,
            comment: comment.into(),
            format: CommentFormat::Plain,
            is_starred_by_me: None,
        }
    }

    #[must_use]
    pub fn starred(mut self, starred: bool) -> Self {
        self.is_starred_by_me = Some(starred);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseData {
    pub verse: u32,
    /// Verse text keyed by text source.
    #[serde(default)]
    pub text: BTreeMap<TextSource, String>,
    /// Comments keyed by commenter.
    #[serde(default)]
    pub comments: BTreeMap<String, Vec<CommentData>>,
}

impl VerseData {
    pub fn new(verse: u32) -> Self {
        Self {
            verse,
            text: BTreeMap::new(),
            comments: BTreeMap::new(),
        }
    }

    pub fn text_in(&self, source: &str) -> Option<&str> {
        self.text.get(source).map(String::as_str)
    }

    pub fn comment_count(&self) -> usize {
        self.comments.values().map(Vec::len).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterData {
    pub chapter: u32,
    pub verses: Vec<VerseData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParshaData {
    pub book: u32,
    pub parsha: u32,
    pub chapters: Vec<ChapterData>,
}

impl ParshaData {
    pub fn verse(&self, coord: &VerseCoordinate) -> Option<&VerseData> {
        self.chapters
            .iter()
            .filter(|chapter| chapter.chapter == coord.chapter)
            .flat_map(|chapter| chapter.verses.iter())
            .find(|verse| verse.verse == coord.verse)
    }

    /// All verses paired with their coordinate, in input order.
    pub fn verses(&self) -> impl Iterator<Item = (VerseCoordinate, &VerseData)> {
        self.chapters.iter().flat_map(|chapter| {
            chapter
                .verses
                .iter()
                .map(move |verse| (VerseCoordinate::new(chapter.chapter, verse.verse), verse))
        })
    }
}

/// Application-wide metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Text sources currently offered by the backend, in display order.
    pub text_sources: Vec<TextSource>,
}
