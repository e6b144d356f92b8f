#![deny(unsafe_code)]

use std::fmt;

use crate::ModelError;

/// Opaque key naming a text source (a translation, a commentary, ...).
///
/// The same key space is used for commenter identities in comment maps.
/// Deserialization is transparent and unvalidated so persisted data loads
/// as-is; [`TextSource::new`] is the validating constructor.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct TextSource(String);

impl TextSource {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidTextSource(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TextSource {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::borrow::Borrow<str> for TextSource {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TextSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_and_rejects_blank() {
        assert_eq!(TextSource::new("  onk ").unwrap().as_str(), "onk");
        assert!(matches!(
            TextSource::new("   "),
            Err(ModelError::InvalidTextSource(_))
        ));
    }

    #[test]
    fn borrows_as_str_for_map_lookups() {
        let mut map = std::collections::BTreeMap::new();
        map.insert(TextSource::from("fg"), true);
        assert_eq!(map.get("fg"), Some(&true));
    }
}
