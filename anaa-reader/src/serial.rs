//! Serial input adapter.
//!
//! The UHF reader writes one tag per line. [`LineReader`] turns any byte
//! stream into a sequence of trimmed text lines where a read timeout is an
//! empty result, not an error.

use std::io;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio_serial::{SerialPortBuilderExt, SerialStream};
use tracing::debug;

/// Serial device settings, fixed for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerialConfig {
    /// Device path (e.g. `/dev/ttyACM0`).
    pub path: String,
    pub baud_rate: u32,
    /// How long a single read waits for a complete line.
    pub read_timeout_ms: u64,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            path: "/dev/ttyACM0".to_string(),
            baud_rate: 115_200,
            read_timeout_ms: 1_000,
        }
    }
}

impl SerialConfig {
    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }
}

/// A source of raw scan lines.
#[async_trait]
pub trait LineSource: Send {
    /// Reads the next line.
    ///
    /// `Ok(None)` means nothing arrived within the read timeout, or the line
    /// was blank. `Err` is a device-level failure; callers may retry.
    async fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Releases the underlying device.
    async fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Line splitter over an async byte stream.
///
/// Bytes received before a timeout are kept and completed by the next read.
/// End of stream is an `UnexpectedEof` error, once any trailing partial line
/// has been returned.
#[derive(Debug)]
pub struct LineReader<R> {
    reader: Option<BufReader<R>>,
    pending: Vec<u8>,
    read_timeout: Duration,
}

impl<R: AsyncRead + Unpin + Send> LineReader<R> {
    pub fn new(inner: R, read_timeout: Duration) -> Self {
        Self {
            reader: Some(BufReader::new(inner)),
            pending: Vec::new(),
            read_timeout,
        }
    }

    /// Returns true until [`LineSource::close`] has released the stream.
    pub fn is_open(&self) -> bool {
        self.reader.is_some()
    }

    fn take_line(&mut self) -> Option<String> {
        let line = decode_discarding_invalid(&self.pending);
        self.pending.clear();
        let line = line.trim();
        (!line.is_empty()).then(|| line.to_string())
    }
}

#[async_trait]
impl<R: AsyncRead + Unpin + Send> LineSource for LineReader<R> {
    async fn read_line(&mut self) -> io::Result<Option<String>> {
        let Some(reader) = self.reader.as_mut() else {
            return Err(io::Error::new(io::ErrorKind::NotConnected, "serial port closed"));
        };

        let read = reader.read_until(b'\n', &mut self.pending);
        match tokio::time::timeout(self.read_timeout, read).await {
            Err(_elapsed) => Ok(None),
            Ok(Err(e)) => Err(e),
            Ok(Ok(0)) if self.pending.is_empty() => Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "serial device returned no data",
            )),
            Ok(Ok(_)) => Ok(self.take_line()),
        }
    }

    async fn close(&mut self) -> io::Result<()> {
        // Dropping the stream releases the device.
        self.reader.take();
        self.pending.clear();
        Ok(())
    }
}

/// Reader over an open serial device.
pub type SerialLineSource = LineReader<SerialStream>;

/// Opens the configured serial device.
pub fn open_serial(config: &SerialConfig) -> Result<SerialLineSource, tokio_serial::Error> {
    let stream = tokio_serial::new(&config.path, config.baud_rate)
        .timeout(config.read_timeout())
        .open_native_async()?;
    debug!("Opened {} at {} baud", config.path, config.baud_rate);
    Ok(LineReader::new(stream, config.read_timeout()))
}

/// Decodes UTF-8, dropping invalid byte sequences instead of replacing them.
pub fn decode_discarding_invalid(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}
