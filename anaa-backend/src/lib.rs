//! HTTP client for the ANAA attendance backend.
//!
//! The reader talks to three endpoints:
//! - `GET /faculty/rfid/{tag}` to resolve a tag to a subject
//! - `PATCH /faculty/{id}/status` to mark a subject present
//! - `POST /rfid/scan` to log registered and unregistered scans
//!
//! Transport failures are classified into [`BackendError`] variants so the
//! caller can match on timeouts, unreachable hosts and bad statuses without
//! inspecting `reqwest` errors.

mod client;
mod config;
mod error;
pub mod lookup;

pub use client::BackendClient;
pub use config::BackendConfig;
pub use error::{BackendError, BackendResult};
pub use lookup::{LookupBody, Resolution};
