//! Parsing of the tag lookup response.
//!
//! The directory service has shipped two body shapes for
//! `GET /faculty/rfid/{tag}`:
//!
//! ```json
//! {"faculty": {"id": 7, "first_name": "Jo", ...}}
//! {"id": 7, "first_name": "Jo", ...}
//! ```
//!
//! [`LookupBody::parse`] decides which one it got before any field is read.
//! A body whose `faculty` key exists but is not an object is rejected rather
//! than falling back to the outer object.

use crate::error::{BackendError, BackendResult};
use anaa_types::{SubjectId, SubjectRecord, TagId};
use serde_json::{Map, Value};

/// Key the record is nested under in the wrapped shape.
pub const WRAPPER_KEY: &str = "faculty";

/// Fields checked for the subject id, in order. The first usable one wins,
/// so `id` takes precedence when both are present.
pub const ID_FIELDS: [&str; 2] = ["id", "faculty_id"];

/// Outcome of a tag lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Registered(SubjectRecord),
    Unregistered,
}

/// Shape of a 200 lookup body.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupBody {
    /// Record nested under [`WRAPPER_KEY`].
    Wrapped(Map<String, Value>),
    /// The body is the record itself.
    Bare(Map<String, Value>),
    Unparseable(String),
}

impl LookupBody {
    pub fn parse(bytes: &[u8]) -> Self {
        let value: Value = match serde_json::from_slice(bytes) {
            Ok(value) => value,
            Err(e) => return LookupBody::Unparseable(e.to_string()),
        };

        let Value::Object(mut outer) = value else {
            return LookupBody::Unparseable("body is not a JSON object".to_string());
        };

        match outer.remove(WRAPPER_KEY) {
            Some(Value::Object(record)) => LookupBody::Wrapped(record),
            Some(other) => LookupBody::Unparseable(format!(
                "`{WRAPPER_KEY}` is not an object: {other}"
            )),
            None => LookupBody::Bare(outer),
        }
    }

    /// Builds the subject record for `tag`.
    pub fn into_subject(self, tag: &TagId) -> BackendResult<SubjectRecord> {
        let record = match self {
            LookupBody::Wrapped(record) | LookupBody::Bare(record) => record,
            LookupBody::Unparseable(reason) => return Err(BackendError::Parse(reason)),
        };

        let id = subject_id(&record).ok_or(BackendError::MissingSubjectId)?;

        Ok(SubjectRecord {
            id,
            first_name: text_field(&record, "first_name"),
            last_name: text_field(&record, "last_name"),
            department: text_field(&record, "department"),
            email: text_field(&record, "email"),
            tag: tag.clone(),
        })
    }
}

fn subject_id(record: &Map<String, Value>) -> Option<SubjectId> {
    ID_FIELDS
        .iter()
        .find_map(|field| record.get(*field).and_then(SubjectId::from_json))
}

fn text_field(record: &Map<String, Value>, key: &str) -> String {
    record
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
