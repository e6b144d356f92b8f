//! The addressed verse lives in the location fragment (`...#12:3`).
//!
//! Changing the fragment is modelled as a full location replacement, not an
//! in-page state patch: the view is expected to reload and jump to the verse.

use crate::coords::VerseCoordinate;

/// A location href split at its first `#`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    base: String,
    fragment: Option<String>,
}

/// Navigation requested by a location change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Replace the whole location with `href`.
    Replace { href: String },
}

impl Location {
    pub fn parse(href: &str) -> Self {
        match href.split_once('#') {
            Some((base, fragment)) => Self {
                base: base.to_string(),
                fragment: Some(fragment.to_string()),
            },
            None => Self {
                base: href.to_string(),
                fragment: None,
            },
        }
    }

    pub fn href(&self) -> String {
        match &self.fragment {
            Some(fragment) if !fragment.is_empty() => format!("{}#{}", self.base, fragment),
            _ => self.base.clone(),
        }
    }

    /// Fragment without the leading `#`; empty when absent.
    pub fn hash(&self) -> &str {
        self.fragment.as_deref().unwrap_or("")
    }

    /// Coordinate addressed by the fragment, if it decodes.
    pub fn verse_coords(&self) -> Option<VerseCoordinate> {
        VerseCoordinate::decode(self.hash())
    }

    /// Set the fragment and return the resulting full navigation.
    ///
    /// An empty `hash` clears the fragment. A leading `#` is accepted.
    pub fn set_hash(&mut self, hash: &str) -> Navigation {
        let hash = hash.strip_prefix('#').unwrap_or(hash);
        self.fragment = if hash.is_empty() {
            None
        } else {
            Some(hash.to_string())
        };
        Navigation::Replace { href: self.href() }
    }

    pub fn navigate_to_verse(&mut self, coord: &VerseCoordinate) -> Navigation {
        self.set_hash(&coord.encode())
    }
}
