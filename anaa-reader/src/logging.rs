//! Console log output.
//!
//! Lines look like `[2026-10-16 08:15:02] [SCAN] Tag #3 detected: E2003412`.
//! Besides the usual levels there are two info-level labels, `SCAN` and
//! `SUCCESS`, selected by event target. Use the [`scan!`](crate::scan) and
//! [`success!`](crate::success) macros to emit them.

use std::fmt;

use chrono::Local;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Target for tag detection events.
pub const SCAN_TARGET: &str = "anaa_reader::scan";
/// Target for confirmed backend writes.
pub const SUCCESS_TARGET: &str = "anaa_reader::success";

const RULE_WIDTH: usize = 60;

/// Logs a tag detection under the `SCAN` label.
#[macro_export]
macro_rules! scan {
    ($($arg:tt)+) => {
        ::tracing::info!(target: $crate::logging::SCAN_TARGET, $($arg)+)
    };
}

/// Logs a confirmed backend write under the `SUCCESS` label.
#[macro_export]
macro_rules! success {
    ($($arg:tt)+) => {
        ::tracing::info!(target: $crate::logging::SUCCESS_TARGET, $($arg)+)
    };
}

/// Label printed for an event.
pub fn level_label(level: &Level, target: &str) -> &'static str {
    if *level != Level::INFO {
        return level.as_str();
    }
    match target {
        SCAN_TARGET => "SCAN",
        SUCCESS_TARGET => "SUCCESS",
        _ => "INFO",
    }
}

/// `[timestamp] [LABEL] message` formatter.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleFormat;

impl<S, N> FormatEvent<S, N> for ConsoleFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        write!(
            writer,
            "[{}] [{}] ",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            level_label(meta.level(), meta.target())
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Installs the global subscriber. `RUST_LOG` wins over `verbose`.
pub fn init(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(ConsoleFormat)
        .init();
}

/// A horizontal rule of `ch`.
pub fn rule(ch: char) -> String {
    std::iter::repeat_n(ch, RULE_WIDTH).collect()
}

/// Startup banner.
pub fn banner() {
    tracing::info!("{}", rule('='));
    tracing::info!("ANAA System - UHF RFID Reader Started");
    tracing::info!("{}", rule('='));
    tracing::info!("Waiting for RFID scans...");
    tracing::info!("Press Ctrl+C to stop");
}

/// Separator printed after each processed scan.
pub fn separator() {
    println!("{}\n", rule('-'));
}
