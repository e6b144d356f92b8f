use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Which comments pass the bookmark filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookmarkMode {
    /// Every comment.
    #[default]
    All,
    /// Only comments starred by the viewer.
    My,
}

/// Filter settings applied to every comment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommentFilters {
    pub by_bookmark_mode: BookmarkMode,
    /// Per-commenter visibility. A commenter absent from the map is hidden.
    pub by_source: BTreeMap<String, bool>,
}

impl CommentFilters {
    /// `All` mode with every given commenter shown.
    pub fn all_enabled<I, S>(commenters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            by_bookmark_mode: BookmarkMode::All,
            by_source: commenters
                .into_iter()
                .map(|commenter| (commenter.into(), true))
                .collect(),
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: BookmarkMode) -> Self {
        self.by_bookmark_mode = mode;
        self
    }

    /// Whether the commenter is shown; absent resolves to `false`.
    pub fn shows_source(&self, commenter: &str) -> bool {
        self.by_source.get(commenter).copied().unwrap_or(false)
    }

    /// Flip one commenter and return the new value.
    pub fn toggle_source(&mut self, commenter: &str) -> bool {
        let shown = !self.shows_source(commenter);
        self.by_source.insert(commenter.to_string(), shown);
        shown
    }
}
