//! Core type definitions for the ANAA UHF reader.
//!
//! This crate defines the values that flow through the scan pipeline:
//! - Canonical tag identifiers and the sanitizer that produces them
//! - Subject (faculty) identifiers, records and statuses owned by the backend
//! - Scan events and status updates submitted to the backend
//!
//! Nothing here performs I/O. The HTTP client lives in `anaa-backend` and the
//! serial loop in `anaa-reader`.

mod scan;
mod subject;
mod tag;

pub use scan::{ScanEvent, ScanKind, StatusUpdate};
pub use subject::{SubjectId, SubjectRecord, SubjectStatus};
pub use tag::{TagId, sanitize};

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid subject status: {0}")]
    InvalidStatus(String),
}
