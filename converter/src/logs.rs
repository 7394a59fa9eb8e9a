//! Progress log on the error stream.
//!
//! Standard output carries the CSV, so every log line goes to stderr.
//! `--quiet` raises the threshold to errors only.

use once_cell::sync::Lazy;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

/// Log level, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A single log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// Nesting depth, for per-record lines
    pub indent: u8,
}

impl LogEntry {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Info, message: message.into(), indent: 0 }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Success, message: message.into(), indent: 0 }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Warning, message: message.into(), indent: 0 }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Error, message: message.into(), indent: 0 }
    }

    pub fn with_indent(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }

    /// Rendered line, without trailing newline.
    pub fn render(&self) -> String {
        let prefix = match self.level {
            LogLevel::Info => "   ",
            LogLevel::Success => "   ✓",
            LogLevel::Warning => "   ⚠️",
            LogLevel::Error => "   ❌",
        };
        let indent = "   ".repeat(self.indent as usize);
        format!("{}{} {}", indent, prefix, self.message)
    }
}

/// Global log sink
pub static LOG_SINK: Lazy<LogSink> = Lazy::new(LogSink::new);

/// Writes log entries to stderr, honoring the quiet switch
pub struct LogSink {
    quiet: AtomicBool,
}

impl LogSink {
    pub fn new() -> Self {
        Self { quiet: AtomicBool::new(false) }
    }

    pub fn set_quiet(&self, quiet: bool) {
        self.quiet.store(quiet, Ordering::Relaxed);
    }

    /// Whether `level` passes the current threshold.
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= LogLevel::Error || !self.quiet.load(Ordering::Relaxed)
    }

    pub fn log(&self, entry: LogEntry) {
        if !self.enabled(entry.level) {
            return;
        }
        // stderr write failures are ignored
        let _ = writeln!(std::io::stderr().lock(), "{}", entry.render());
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenient logging functions
pub fn log_info(msg: impl Into<String>) {
    LOG_SINK.log(LogEntry::info(msg));
}

pub fn log_success(msg: impl Into<String>) {
    LOG_SINK.log(LogEntry::success(msg));
}

pub fn log_warning(msg: impl Into<String>) {
    LOG_SINK.log(LogEntry::warning(msg));
}

pub fn log_error(msg: impl Into<String>) {
    LOG_SINK.log(LogEntry::error(msg));
}

pub fn log_info_indent(msg: impl Into<String>, indent: u8) {
    LOG_SINK.log(LogEntry::info(msg).with_indent(indent));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_keeps_errors_only() {
        let sink = LogSink::new();
        assert!(sink.enabled(LogLevel::Info));

        sink.set_quiet(true);
        assert!(!sink.enabled(LogLevel::Info));
        assert!(!sink.enabled(LogLevel::Warning));
        assert!(sink.enabled(LogLevel::Error));
    }

    #[test]
    fn test_render_indent() {
        let line = LogEntry::info("Botev (dmr)").with_indent(1).render();
        assert_eq!(line, "       Botev (dmr)");

        let line = LogEntry::success("Wrote 3 rows").render();
        assert!(line.contains("✓ Wrote 3 rows"));
    }
}
