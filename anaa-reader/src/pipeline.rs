//! Tag processing: sanitize, resolve, dispatch.
//!
//! Nothing in here returns an error to the caller. Every failure is logged
//! where it happens and folded into the returned [`ScanOutcome`].

use anaa_backend::{BackendClient, BackendError, Resolution};
use anaa_types::{SubjectRecord, SubjectStatus, TagId};
use tracing::{error, info, warn};

use crate::success;

/// What happened to one scanned line.
#[derive(Debug)]
pub enum ScanOutcome {
    /// Nothing left after sanitization; no network calls were made.
    Skipped,
    /// The tag is not registered. `reported` is whether the backend accepted
    /// the notification.
    Unregistered { tag: TagId, reported: bool },
    /// The tag belongs to `subject`.
    Registered {
        subject: SubjectRecord,
        status_updated: bool,
        scan_logged: bool,
    },
    /// The lookup failed; nothing was dispatched.
    Abandoned { tag: TagId, reason: BackendError },
}

impl ScanOutcome {
    /// Number of dispatch calls that succeeded.
    pub fn delivered(&self) -> usize {
        match self {
            ScanOutcome::Unregistered { reported, .. } => usize::from(*reported),
            ScanOutcome::Registered {
                status_updated,
                scan_logged,
                ..
            } => usize::from(*status_updated) + usize::from(*scan_logged),
            ScanOutcome::Skipped | ScanOutcome::Abandoned { .. } => 0,
        }
    }
}

/// Runs one raw line through the whole pipeline.
pub async fn process_line(client: &BackendClient, raw: &str) -> ScanOutcome {
    let tag = TagId::from_raw(raw);
    if tag.is_empty() {
        warn!("Empty/invalid tag after sanitization: {:?}", raw);
        return ScanOutcome::Skipped;
    }

    info!("Processing RFID tag: {}", tag);

    match client.lookup(&tag).await {
        Ok(Resolution::Unregistered) => {
            warn!("RFID not registered: {}", tag);
            let reported = notify_unregistered(client, &tag).await;
            ScanOutcome::Unregistered { tag, reported }
        }
        Ok(Resolution::Registered(subject)) => {
            info!(
                "✓ REGISTERED: {} ({}) - ID: {}",
                subject.display_name(),
                subject.department,
                subject.id
            );
            let (status_updated, scan_logged) = activate_registered(client, &subject).await;
            ScanOutcome::Registered {
                subject,
                status_updated,
                scan_logged,
            }
        }
        Err(reason) => {
            log_resolution_failure(&tag, &reason);
            ScanOutcome::Abandoned { tag, reason }
        }
    }
}

/// Reports an unregistered tag. Returns whether the backend accepted it.
pub async fn notify_unregistered(client: &BackendClient, tag: &TagId) -> bool {
    info!("Posting unregistered tag: {}", tag);

    match client.report_unregistered(tag).await {
        Ok(()) => {
            success!("Unregistered tag recorded: {}", tag);
            true
        }
        Err(BackendError::Status(code)) => {
            error!("Failed to record unregistered tag {}: {}", tag, code);
            false
        }
        Err(BackendError::Timeout) => {
            error!("Timeout posting unregistered tag: {}", tag);
            false
        }
        Err(BackendError::Unreachable(_)) => {
            error!("Connection error - Cannot reach backend");
            false
        }
        Err(e) => {
            error!("Network error posting unregistered tag {}: {}", tag, e);
            false
        }
    }
}

/// Marks a subject present and logs the scan.
///
/// The two calls are independent: a failed status update does not skip the
/// scan log. Returns `(status_updated, scan_logged)`.
pub async fn activate_registered(client: &BackendClient, subject: &SubjectRecord) -> (bool, bool) {
    let id = &subject.id;

    let status_updated = match client.set_status(id, SubjectStatus::Active).await {
        Ok(()) => {
            success!(
                "Status updated to Active: {} (ID: {})",
                subject.display_name(),
                id
            );
            true
        }
        Err(BackendError::Status(code)) => {
            error!("Status update failed for ID={}: {}", id, code);
            false
        }
        Err(e) => {
            error!("Error updating status for ID={}: {}", id, e);
            false
        }
    };

    let scan_logged = match client.record_scan(id, &subject.tag).await {
        Ok(()) => {
            success!("Scan logged for faculty_id={}", id);
            true
        }
        Err(BackendError::Status(code)) => {
            warn!("Failed to log scan: {}", code);
            false
        }
        Err(e) => {
            warn!("Error recording scan: {}", e);
            false
        }
    };

    (status_updated, scan_logged)
}

fn log_resolution_failure(tag: &TagId, reason: &BackendError) {
    match reason {
        BackendError::Timeout => error!("Timeout checking tag: {}", tag),
        BackendError::Unreachable(_) => error!("Cannot connect to backend server"),
        BackendError::Status(code) => error!("Backend error {} for tag {}", code, tag),
        BackendError::MissingSubjectId => error!("Faculty ID not found in response"),
        BackendError::Parse(e) => error!("Error parsing faculty data for tag {}: {}", tag, e),
        e => error!("Network error checking tag {}: {}", tag, e),
    }
}
