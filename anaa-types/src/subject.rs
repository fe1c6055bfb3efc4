//! Subjects are the registered people (faculty) a tag can belong to.
//!
//! The backend owns these records. The reader fetches one per scan, uses it
//! to address the status and scan-log calls, then drops it.

use crate::{Error, TagId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Backend identifier of a subject.
///
/// The directory service returns ids as JSON numbers, but some deployments
/// return them as strings. The original JSON type and the string contents are
/// preserved so the id is echoed back exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubjectId {
    Number(i64),
    Text(String),
}

impl SubjectId {
    /// Extracts a usable id from a JSON value.
    ///
    /// Zero, empty strings, null, booleans, fractional numbers, arrays and
    /// objects are all rejected.
    #[must_use]
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => {
                let id = n.as_i64().or_else(|| {
                    n.as_f64()
                        .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                        .map(|f| f as i64)
                })?;
                (id != 0).then_some(Self::Number(id))
            }
            Value::String(s) => (!s.is_empty()).then(|| Self::Text(s.clone())),
            _ => None,
        }
    }
}

impl From<i64> for SubjectId {
    fn from(id: i64) -> Self {
        Self::Number(id)
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// A registered subject as returned by the tag lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectRecord {
    pub id: SubjectId,
    pub first_name: String,
    pub last_name: String,
    pub department: String,
    pub email: String,
    /// The tag that resolved to this subject.
    pub tag: TagId,
}

impl SubjectRecord {
    /// "First Last", as shown in log lines.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Presence status tracked by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubjectStatus {
    Active,
    Busy,
    Offline,
}

impl SubjectStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Busy => "Busy",
            Self::Offline => "Offline",
        }
    }
}

impl fmt::Display for SubjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubjectStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(Self::Active),
            "Busy" => Ok(Self::Busy),
            "Offline" => Ok(Self::Offline),
            other => Err(Error::InvalidStatus(other.to_string())),
        }
    }
}
