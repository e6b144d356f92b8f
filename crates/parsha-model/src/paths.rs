//! Path builders and the route patterns they feed.
//!
//! Builders only interpolate; they do not validate their arguments. This is
//! what lets `parsha_path(":parshaIndex")` produce the route pattern itself.

use std::fmt::Display;

use crate::coords::VerseCoordinate;

pub fn parsha_path(parsha: impl Display) -> String {
    format!("/parsha/{parsha}")
}

pub fn signup_path(signup_token: impl Display) -> String {
    format!("/signup/{signup_token}")
}

/// Parsha page with the verse addressed in the fragment.
pub fn verse_path(parsha: impl Display, coord: &VerseCoordinate) -> String {
    format!("{}#{}", parsha_path(parsha), coord.encode())
}

/// Half-open integer range `[start, end)`, empty when `end <= start`.
pub fn range(start: i64, end: i64) -> Vec<i64> {
    (start..end).collect()
}

/// Known application routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Title,
    Parsha,
    Signup,
    Login,
    NotFound,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Title,
        Route::Parsha,
        Route::Signup,
        Route::Login,
        Route::NotFound,
    ];

    pub fn pattern(&self) -> String {
        match self {
            Route::Title => "/".to_string(),
            Route::Parsha => parsha_path(":parshaIndex"),
            Route::Signup => signup_path(":token"),
            Route::Login => "/login".to_string(),
            Route::NotFound => "404".to_string(),
        }
    }
}
