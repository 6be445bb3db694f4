//! Frontend-agnostic log capture for game UIs.
//!
//! A terminal UI owns the screen, so `tracing` output cannot go to stderr
//! while a game is running. [`tracing::UiTracingLayer`] collects events into
//! a [`tracing::LogBuffer`] that the frontend drains into its own log pane.

pub mod tracing;

use serde::{Deserialize, Serialize};

/// Maximum log lines kept in memory.
pub const MAX_LOG_LINES: usize = 2000;
/// Trim to this many when the cap is exceeded.
pub const LOG_TRIM_TO: usize = 1200;

/// A single log line captured from tracing.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LogLine {
    pub time: String,
    pub level: LogLevel,
    pub message: String,
}

/// Log severity level (mirrors tracing levels).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Short fixed-width label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO ",
            Self::Warn => "WARN ",
            Self::Error => "ERROR",
        }
    }
}

/// Append `lines` to `logs`, trimming the oldest entries once the cap is hit.
pub fn append_capped(logs: &mut Vec<LogLine>, lines: Vec<LogLine>) {
    logs.extend(lines);
    if logs.len() > MAX_LOG_LINES {
        let trim_to = logs.len() - LOG_TRIM_TO;
        logs.drain(..trim_to);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(n: usize) -> LogLine {
        LogLine {
            time: "00:00:00".into(),
            level: LogLevel::Info,
            message: n.to_string(),
        }
    }

    #[test]
    fn labels_are_fixed_width() {
        for level in [
            LogLevel::Trace,
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Warn,
            LogLevel::Error,
        ] {
            assert_eq!(level.label().len(), 5);
        }
    }

    #[test]
    fn append_capped_keeps_newest() {
        let mut logs = Vec::new();
        append_capped(&mut logs, (0..MAX_LOG_LINES + 1).map(line).collect());
        assert_eq!(logs.len(), LOG_TRIM_TO);
        assert_eq!(logs.last().unwrap().message, MAX_LOG_LINES.to_string());
    }
}
