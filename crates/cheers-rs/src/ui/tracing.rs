//! Tracing subscriber layer that captures log events into a [`LogBuffer`].
//!
//! The buffer has its own mutex, separate from any game state, so a log
//! call never waits on the render loop.

use std::sync::{Arc, Mutex};

use chrono::Local;
use tracing::Subscriber;
use tracing_subscriber::layer::Layer;
use tracing_subscriber::registry::LookupSpan;

use super::{LOG_TRIM_TO, LogLevel, LogLine, MAX_LOG_LINES, append_capped};

/// A shared buffer of pending log lines.
///
/// The tracing layer pushes into this buffer; the frontend drains it once
/// per frame.
#[derive(Clone)]
pub struct LogBuffer(Arc<Mutex<Vec<LogLine>>>);

impl LogBuffer {
    fn new() -> Self {
        Self(Arc::new(Mutex::new(Vec::with_capacity(128))))
    }

    /// Drain all pending log lines from the buffer, returning them.
    pub fn drain(&self) -> Vec<LogLine> {
        let mut buf = self.0.lock().unwrap_or_else(|e| e.into_inner());
        std::mem::take(&mut *buf)
    }

    /// Drain pending log lines into `logs`, respecting the trim limits.
    /// Returns the number of lines moved.
    pub fn flush_into(&self, logs: &mut Vec<LogLine>) -> usize {
        let lines = self.drain();
        let moved = lines.len();
        if moved > 0 {
            append_capped(logs, lines);
        }
        moved
    }
}

/// A [`tracing_subscriber::Layer`] that captures log events into
/// a [`LogBuffer`].
pub struct UiTracingLayer {
    buffer: LogBuffer,
}

impl UiTracingLayer {
    /// Create a new tracing layer and its associated [`LogBuffer`].
    pub fn new() -> (Self, LogBuffer) {
        let buffer = LogBuffer::new();
        (
            Self {
                buffer: buffer.clone(),
            },
            buffer,
        )
    }
}

impl<S: Subscriber + for<'a> LookupSpan<'a>> Layer<S> for UiTracingLayer {
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let level = match *event.metadata().level() {
            tracing::Level::TRACE => LogLevel::Trace,
            tracing::Level::DEBUG => LogLevel::Debug,
            tracing::Level::INFO => LogLevel::Info,
            tracing::Level::WARN => LogLevel::Warn,
            tracing::Level::ERROR => LogLevel::Error,
        };

        let line = LogLine {
            time: Local::now().format("%H:%M:%S").to_string(),
            level,
            message: visitor.into_message(),
        };

        if let Ok(mut buf) = self.buffer.0.lock() {
            buf.push(line);
            // Cap the buffer in case the frontend stops draining.
            if buf.len() > MAX_LOG_LINES {
                let trim_to = buf.len() - LOG_TRIM_TO;
                buf.drain(..trim_to);
            }
        }
    }
}

/// Extracts the message and extra fields from a tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: Vec<(String, String)>,
}

impl MessageVisitor {
    /// `message {k=v, ...}`, or just the fields when there is no message.
    fn into_message(self) -> String {
        if self.fields.is_empty() {
            return self.message;
        }
        let extras: Vec<String> = self
            .fields
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect();
        if self.message.is_empty() {
            extras.join(" ")
        } else {
            format!("{} {{{}}}", self.message, extras.join(", "))
        }
    }
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        let raw = format!("{value:?}");
        if field.name() == "message" {
            self.message = raw
                .strip_prefix('"')
                .and_then(|r| r.strip_suffix('"'))
                .map(str::to_string)
                .unwrap_or(raw);
        } else {
            self.fields.push((field.name().to_string(), raw));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields
                .push((field.name().to_string(), value.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::layer::SubscriberExt;

    #[test]
    fn captures_message_and_fields() {
        let (layer, buffer) = UiTracingLayer::new();
        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(players = 3, "game session started");
            tracing::warn!("cannot start game");
        });

        let lines = buffer.drain();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].level, LogLevel::Info);
        assert_eq!(lines[0].message, "game session started {players=3}");
        assert_eq!(lines[1].level, LogLevel::Warn);
        assert_eq!(lines[1].message, "cannot start game");
        assert!(buffer.drain().is_empty());
    }

    #[test]
    fn flush_into_moves_lines() {
        let (layer, buffer) = UiTracingLayer::new();
        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(prompt = "Race", "drew prompt");
        });

        let mut logs = Vec::new();
        assert_eq!(buffer.flush_into(&mut logs), 1);
        assert_eq!(logs[0].message, "drew prompt {prompt=Race}");
        assert_eq!(buffer.flush_into(&mut logs), 0);
        assert_eq!(logs.len(), 1);
    }
}
