//! Canonical RFID tag identifiers.
//!
//! Readers emit tag ids with inconsistent casing, separators and line noise.
//! Every tag is normalized into a [`TagId`] before it is looked up, so the
//! backend only ever sees uppercase ASCII alphanumerics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A sanitized tag identifier.
///
/// Always uppercase ASCII letters and digits. The empty tag means the raw
/// input carried no usable characters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct TagId(String);

impl TagId {
    /// Sanitizes a raw reader line into a tag.
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        let cleaned = raw
            .trim()
            .chars()
            .flat_map(char::to_uppercase)
            .filter(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
            .collect();
        Self(cleaned)
    }

    /// Returns the tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if sanitization left nothing behind.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Sanitizes an optional raw string. `None` yields the empty tag.
#[must_use]
pub fn sanitize(raw: Option<&str>) -> TagId {
    raw.map(TagId::from_raw).unwrap_or_default()
}

impl From<String> for TagId {
    fn from(raw: String) -> Self {
        Self::from_raw(&raw)
    }
}

impl From<&str> for TagId {
    fn from(raw: &str) -> Self {
        Self::from_raw(raw)
    }
}

impl From<TagId> for String {
    fn from(tag: TagId) -> Self {
        tag.0
    }
}

impl AsRef<str> for TagId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
