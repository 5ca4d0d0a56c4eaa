//! Warning sinks for fallback diagnostics.
//!
//! Builders never fail on bad input; they substitute a default and report
//! the substitution to a [`WarningSink`]. The default sink forwards to the
//! `log` facade so binaries decide where warnings end up.

use std::sync::Mutex;

/// Receives human-readable fallback warnings.
pub trait WarningSink {
    /// Report one warning.
    fn warn(&self, message: &str);
}

/// Forwards warnings to `log::warn!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl WarningSink for LogSink {
    fn warn(&self, message: &str) {
        log::warn!("{}", message);
    }
}

/// Keeps every warning in memory for later inspection.
#[derive(Debug, Default)]
pub struct RecordingSink {
    messages: Mutex<Vec<String>>,
}

impl RecordingSink {
    /// Create an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Warnings recorded so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }

    /// Take the recorded warnings, leaving the sink empty.
    pub fn take(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|mut m| std::mem::take(&mut *m))
            .unwrap_or_default()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.messages.lock().map(|m| m.is_empty()).unwrap_or(true)
    }
}

impl WarningSink for RecordingSink {
    fn warn(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}

impl<F: Fn(&str)> WarningSink for F {
    fn warn(&self, message: &str) {
        self(message)
    }
}
