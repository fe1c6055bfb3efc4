//! Shared test helpers for reader tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use anaa_backend::{BackendClient, BackendConfig};
use anaa_reader::LineSource;
use async_trait::async_trait;
use tokio::sync::oneshot;
use tracing::subscriber::DefaultGuard;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use wiremock::MockServer;

/// Backend client pointed at a mock server with a short timeout.
pub fn client_for(server: &MockServer) -> BackendClient {
    client_for_url(server.uri())
}

pub fn client_for_url(base_url: String) -> BackendClient {
    BackendClient::new(BackendConfig {
        base_url,
        request_timeout_ms: 300,
    })
    .unwrap()
}

/// Returns a base URL nothing is listening on.
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

/// Number of requests the mock server has seen.
pub async fn request_count(server: &MockServer) -> usize {
    server.received_requests().await.map_or(0, |r| r.len())
}

/// Counts ERROR events seen by the thread-local subscriber.
#[derive(Clone, Default)]
pub struct ErrorCounter(Arc<AtomicUsize>);

impl ErrorCounter {
    /// Installs a counting subscriber until the guard is dropped.
    pub fn install() -> (Self, DefaultGuard) {
        let counter = Self::default();
        let subscriber = tracing_subscriber::registry().with(counter.clone());
        let guard = tracing::subscriber::set_default(subscriber);
        (counter, guard)
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for ErrorCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::ERROR {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// A line source that replays a fixed script.
///
/// Once the script is exhausted it fires `drained` (if set) and then reads
/// as a perpetual timeout.
pub struct ScriptedSource {
    script: VecDeque<io::Result<Option<String>>>,
    drained: Option<oneshot::Sender<()>>,
    closed: Arc<AtomicBool>,
    fail_close: bool,
}

impl ScriptedSource {
    pub fn new(script: Vec<io::Result<Option<String>>>) -> Self {
        Self {
            script: script.into(),
            drained: None,
            closed: Arc::new(AtomicBool::new(false)),
            fail_close: false,
        }
    }

    /// Lines only, no errors or timeouts.
    pub fn lines(lines: &[&str]) -> Self {
        Self::new(lines.iter().map(|l| Ok(Some(l.to_string()))).collect())
    }

    /// Returns a receiver that completes when the script runs out.
    pub fn on_drained(&mut self) -> oneshot::Receiver<()> {
        let (tx, rx) = oneshot::channel();
        self.drained = Some(tx);
        rx
    }

    /// Flag set once `close` has been called.
    pub fn closed_flag(&self) -> Arc<AtomicBool> {
        self.closed.clone()
    }

    pub fn failing_close(mut self) -> Self {
        self.fail_close = true;
        self
    }
}

#[async_trait]
impl LineSource for ScriptedSource {
    async fn read_line(&mut self) -> io::Result<Option<String>> {
        match self.script.pop_front() {
            Some(item) => item,
            None => {
                if let Some(tx) = self.drained.take() {
                    let _ = tx.send(());
                }
                tokio::task::yield_now().await;
                Ok(None)
            }
        }
    }

    async fn close(&mut self) -> io::Result<()> {
        self.closed.store(true, Ordering::SeqCst);
        if self.fail_close {
            Err(io::Error::other("device already gone"))
        } else {
            Ok(())
        }
    }
}
