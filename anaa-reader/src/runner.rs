//! The polling loop.

use std::future::Future;
use std::time::Duration;

use anaa_backend::BackendClient;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::logging;
use crate::pipeline::{self, ScanOutcome};
use crate::scan;
use crate::serial::LineSource;

/// Loop pacing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderConfig {
    /// Pause after every read that did not fail.
    pub poll_interval_ms: u64,
    /// Pause after a serial read error before reading again.
    pub read_error_backoff_ms: u64,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 100,
            read_error_backoff_ms: 500,
        }
    }
}

impl ReaderConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn read_error_backoff(&self) -> Duration {
        Duration::from_millis(self.read_error_backoff_ms)
    }
}

/// Totals reported at shutdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub scans: u64,
}

/// Everything the loop owns for the life of the process.
pub struct ReaderContext<S> {
    source: S,
    client: BackendClient,
    config: ReaderConfig,
    scan_count: u64,
}

impl<S: LineSource> ReaderContext<S> {
    pub fn new(source: S, client: BackendClient, config: ReaderConfig) -> Self {
        Self {
            source,
            client,
            config,
            scan_count: 0,
        }
    }

    /// Non-empty lines read so far.
    pub fn scan_count(&self) -> u64 {
        self.scan_count
    }

    /// Reads one line and processes it if there was one.
    ///
    /// Returns `None` when the read timed out, was blank, or failed.
    pub async fn poll_once(&mut self) -> Option<ScanOutcome> {
        let line = match self.source.read_line().await {
            Ok(line) => line,
            Err(e) => {
                error!("Serial read error: {}", e);
                tokio::time::sleep(self.config.read_error_backoff()).await;
                return None;
            }
        };

        let outcome = match line {
            Some(line) if !line.is_empty() => {
                self.scan_count += 1;
                scan!("Tag #{} detected: {}", self.scan_count, line);
                let outcome = pipeline::process_line(&self.client, &line).await;
                logging::separator();
                Some(outcome)
            }
            _ => None,
        };

        tokio::time::sleep(self.config.poll_interval()).await;
        outcome
    }

    /// Polls until `shutdown` resolves, then releases the source.
    ///
    /// A scan in flight when `shutdown` fires is dropped.
    pub async fn run<F>(mut self, shutdown: F) -> RunSummary
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                biased;
                () = &mut shutdown => break,
                outcome = self.poll_once() => {
                    if let Some(outcome) = outcome {
                        debug!("Scan #{} finished: {:?}", self.scan_count, outcome);
                    }
                }
            }
        }

        info!("Stopping UHF reader...");
        info!("Total scans processed: {}", self.scan_count);

        match self.source.close().await {
            Ok(()) => info!("Serial port closed"),
            Err(e) => debug!("Ignoring error while closing serial port: {}", e),
        }

        RunSummary {
            scans: self.scan_count,
        }
    }
}
