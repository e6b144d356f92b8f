use parsha_model::{CommentData, ParshaData, VerseCoordinate, VerseData};

use crate::filters::{BookmarkMode, CommentFilters};

/// Whether a single comment by `commenter` is visible under `filters`.
///
/// In `My` mode a comment must be explicitly starred (`Some(true)`); an
/// unknown star state is rejected. The commenter must be explicitly shown.
pub fn passes_filters(comment: &CommentData, commenter: &str, filters: &CommentFilters) -> bool {
    if filters.by_bookmark_mode == BookmarkMode::My && comment.is_starred_by_me != Some(true) {
        return false;
    }
    filters.shows_source(commenter)
}

/// Whether any comment under the verse is visible. Stops at the first match.
pub fn any_passes(verse: &VerseData, filters: &CommentFilters) -> bool {
    visible_comments(verse, filters).next().is_some()
}

/// Visible comments of a verse, paired with their commenter.
pub fn visible_comments<'a>(
    verse: &'a VerseData,
    filters: &'a CommentFilters,
) -> impl Iterator<Item = (&'a str, &'a CommentData)> + 'a {
    verse
        .comments
        .iter()
        .flat_map(|(commenter, comments)| {
            comments
                .iter()
                .map(move |comment| (commenter.as_str(), comment))
        })
        .filter(move |(commenter, comment)| passes_filters(comment, commenter, filters))
}

/// Sorted coordinates of the verses that have at least one visible comment.
pub fn verses_with_visible_comments(
    parsha: &ParshaData,
    filters: &CommentFilters,
) -> Vec<VerseCoordinate> {
    let mut coords: Vec<VerseCoordinate> = parsha
        .verses()
        .filter(|(_, verse)| any_passes(verse, filters))
        .map(|(coord, _)| coord)
        .collect();
    coords.sort();
    coords
}
