//! Verse coordinates: the `(chapter, verse)` address space of a parsha.
//!
//! Coordinates have a canonical string form, `"<chapter>:<verse>"`, which is
//! also what appears in the URL fragment when a verse is addressed. Decoding
//! is strict: anything that is not exactly digits, a colon and digits yields
//! `None` rather than a partial parse.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::data::ParshaData;
use crate::error::ModelError;

/// ASCII digits only; `\d` would also accept non-ASCII Unicode digits.
static VERSE_COORDS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+):([0-9]+)$").expect("Invalid verse coordinate regex")
});

/// Address of a single verse.
///
/// Ordered by chapter, then verse, both compared as integers (so `2:99`
/// sorts before `10:1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerseCoordinate {
    pub chapter: u32,
    pub verse: u32,
}

impl VerseCoordinate {
    pub const fn new(chapter: u32, verse: u32) -> Self {
        Self { chapter, verse }
    }

    /// Canonical `"<chapter>:<verse>"` form.
    pub fn encode(&self) -> String {
        self.to_string()
    }

    /// Parse the canonical form.
    ///
    /// Returns `None` for empty input, extra delimiters, signs, whitespace,
    /// non-digit content, or numbers that do not fit in a `u32`.
    pub fn decode(s: &str) -> Option<Self> {
        let caps = VERSE_COORDS_REGEX.captures(s)?;
        let chapter = caps[1].parse().ok()?;
        let verse = caps[2].parse().ok()?;
        Some(Self { chapter, verse })
    }
}

impl Ord for VerseCoordinate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.chapter
            .cmp(&other.chapter)
            .then_with(|| self.verse.cmp(&other.verse))
    }
}

impl PartialOrd for VerseCoordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for VerseCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chapter, self.verse)
    }
}

impl FromStr for VerseCoordinate {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s).ok_or_else(|| ModelError::InvalidVerseCoordinate(s.to_string()))
    }
}

/// Every verse coordinate in the parsha, flattened and sorted.
///
/// The result does not depend on the order chapters or verses appear in
/// the input.
pub fn extract_all(parsha: &ParshaData) -> Vec<VerseCoordinate> {
    let mut coords: Vec<VerseCoordinate> = parsha
        .chapters
        .iter()
        .flat_map(|chapter| {
            chapter
                .verses
                .iter()
                .map(move |verse| VerseCoordinate::new(chapter.chapter, verse.verse))
        })
        .collect();
    coords.sort();
    coords
}

/// Membership by exact chapter and verse match. The list need not be sorted.
pub fn contains(coord: &VerseCoordinate, list: &[VerseCoordinate]) -> bool {
    list.iter().any(|candidate| candidate == coord)
}
