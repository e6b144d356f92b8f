//! Comment filtering.
//!
//! Visibility of a comment is decided by [`CommentFilters`]: the bookmark mode
//! (all comments, or only the ones the viewer starred) and a per-commenter
//! toggle. Commenters missing from the toggle map are hidden.

mod filters;
mod predicate;

pub use filters::{BookmarkMode, CommentFilters};
pub use predicate::{any_passes, passes_filters, verses_with_visible_comments, visible_comments};
