//! Destinations for failure diagnostics.
//!
//! The propagation macros write exactly one line per detected failure to a
//! caller-supplied [`DiagnosticSink`]. The sink is only borrowed; opening,
//! flushing and closing it stay with the caller.
//!
//! | Sink | Destination |
//! |------|-------------|
//! | any [`std::io::Write`] | the writer, one `\n`-terminated line |
//! | [`TracingSink`] | a `tracing` event at a configured level |
//! | [`MemorySink`] | an in-memory list of lines |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;

/// Severity of events emitted by [`TracingSink`], lowercase in config files.
///
/// Ordered from most verbose to most severe.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Most verbose.
    Trace,
    /// Development detail.
    Debug,
    /// Normal operation.
    #[default]
    Info,
    /// Potential problems.
    Warn,
    /// Failures.
    Error,
}

impl LogLevel {
    /// Equivalent `tracing` level.
    pub const fn as_tracing_level(self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }

    /// Lowercase name, as written in config files.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        level.as_tracing_level()
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receiver of one-line failure diagnostics.
pub trait DiagnosticSink {
    /// Record one diagnostic line (without trailing newline).
    fn report(&mut self, line: fmt::Arguments<'_>);
}

/// Writers get the line plus a newline. Write errors are logged and dropped.
impl<W: io::Write + ?Sized> DiagnosticSink for W {
    fn report(&mut self, line: fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self, "{line}") {
            tracing::warn!(error = %e, "failed to write diagnostic line");
        }
    }
}

/// Forwards diagnostics to `tracing` under the `errcodes` target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TracingSink {
    level: LogLevel,
}

impl TracingSink {
    /// Sink emitting events at `level`.
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Level of the emitted events.
    pub const fn level(&self) -> LogLevel {
        self.level
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new(LogLevel::Error)
    }
}

impl DiagnosticSink for TracingSink {
    fn report(&mut self, line: fmt::Arguments<'_>) {
        match self.level {
            LogLevel::Trace => tracing::trace!(target: "errcodes", "{line}"),
            LogLevel::Debug => tracing::debug!(target: "errcodes", "{line}"),
            LogLevel::Info => tracing::info!(target: "errcodes", "{line}"),
            LogLevel::Warn => tracing::warn!(target: "errcodes", "{line}"),
            LogLevel::Error => tracing::error!(target: "errcodes", "{line}"),
        }
    }
}

/// Collects diagnostics in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    /// Empty sink.
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Recorded lines, oldest first.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of recorded lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Take the recorded lines, leaving the sink empty.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl DiagnosticSink for MemorySink {
    fn report(&mut self, line: fmt::Arguments<'_>) {
        self.lines.push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writer_sink_appends_newline() {
        let mut out: Vec<u8> = Vec::new();
        out.report(format_args!("first {}", 1));
        out.report(format_args!("second"));
        assert_eq!(String::from_utf8(out).unwrap(), "first 1\nsecond\n");
    }

    #[test]
    fn memory_sink_records_lines() {
        let mut sink = MemorySink::new();
        assert!(sink.is_empty());
        sink.report(format_args!("code {}", -1));
        assert_eq!(sink.len(), 1);
        assert_eq!(sink.lines(), ["code -1"]);
        assert_eq!(sink.take(), vec!["code -1".to_string()]);
        assert!(sink.is_empty());
    }

    #[test]
    fn log_level_maps_to_tracing() {
        assert_eq!(LogLevel::default(), LogLevel::Info);
        assert_eq!(LogLevel::Warn.as_tracing_level(), tracing::Level::WARN);
        assert_eq!(tracing::Level::from(LogLevel::Trace), tracing::Level::TRACE);
        assert_eq!(LogLevel::Error.to_string(), "error");
    }

    #[test]
    fn log_level_orders_by_severity() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert_eq!(LogLevel::Warn.max(LogLevel::Error), LogLevel::Error);
    }

    #[test]
    fn tracing_sink_without_subscriber_is_silent() {
        let mut sink = TracingSink::new(LogLevel::Warn);
        sink.report(format_args!("nobody listens"));
        assert_eq!(sink.level(), LogLevel::Warn);
        assert_eq!(TracingSink::default().level(), LogLevel::Error);
    }

    struct BrokenWriter;

    impl io::Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writer_errors_are_swallowed() {
        let mut sink = BrokenWriter;
        sink.report(format_args!("lost"));
    }
}
