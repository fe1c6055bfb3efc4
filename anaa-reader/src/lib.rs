//! Serial UHF RFID reader for the ANAA attendance system.
//!
//! Reads tag lines from a serial-attached reader and forwards each one to
//! the backend:
//!
//! 1. **Read**: [`serial`] yields trimmed lines, treating timeouts as empty
//! 2. **Sanitize**: the line becomes an uppercase alphanumeric tag
//! 3. **Resolve**: the backend says whether the tag is registered
//! 4. **Dispatch**: unregistered tags are reported; registered subjects are
//!    marked `Active` and the scan is logged
//!
//! [`runner::ReaderContext`] drives this one line at a time until the
//! process is interrupted.

pub mod logging;
pub mod pipeline;
pub mod runner;
pub mod serial;

pub use pipeline::{ScanOutcome, process_line};
pub use runner::{ReaderConfig, ReaderContext, RunSummary};
pub use serial::{LineReader, LineSource, SerialConfig, open_serial};
