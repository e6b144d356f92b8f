//! Data model for the parsha reader.
//!
//! - [`coords`] - verse coordinates, their string form and ordering
//! - [`data`] - parsha, verse, comment and metadata payloads
//! - [`location`] - the verse addressed by the location fragment
//! - [`paths`] - path builders and route patterns

pub mod coords;
pub mod data;
pub mod error;
pub mod ids;
pub mod location;
pub mod paths;

pub use coords::{VerseCoordinate, contains, extract_all};
pub use data::{ChapterData, CommentData, CommentFormat, Metadata, ParshaData, VerseData};
pub use error::{ModelError, Result};
pub use ids::TextSource;
pub use location::{Location, Navigation};
pub use paths::{Route, parsha_path, range, signup_path, verse_path};
