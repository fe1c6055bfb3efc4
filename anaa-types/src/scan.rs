//! Payloads submitted to the backend after a tag is resolved.

use crate::{SubjectId, SubjectStatus, TagId};
use serde::{Deserialize, Serialize};

/// The `type` of a scan event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanKind {
    /// A tag with no matching subject.
    NotRegistered,
    /// A registered subject was seen by the UHF reader.
    UhfScan,
}

/// Body of `POST /rfid/scan`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faculty_id: Option<SubjectId>,
    pub tag: TagId,
    #[serde(rename = "type")]
    pub kind: ScanKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ScanEvent {
    /// Notification for a tag the directory does not know.
    #[must_use]
    pub fn not_registered(tag: TagId) -> Self {
        let message = format!("Unregistered RFID: {tag}");
        Self {
            faculty_id: None,
            tag,
            kind: ScanKind::NotRegistered,
            message: Some(message),
        }
    }

    /// Attendance log entry for a registered subject.
    #[must_use]
    pub fn uhf_scan(faculty_id: SubjectId, tag: TagId) -> Self {
        Self {
            faculty_id: Some(faculty_id),
            tag,
            kind: ScanKind::UhfScan,
            message: None,
        }
    }
}

/// Body of `PATCH /faculty/{id}/status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: SubjectStatus,
}

impl StatusUpdate {
    #[must_use]
    pub const fn new(status: SubjectStatus) -> Self {
        Self { status }
    }
}
