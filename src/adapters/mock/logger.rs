//! Recording logger for testing.

use std::sync::{Arc, Mutex};

use crate::error::{DiscoveryError, ErrorCategory};
use crate::traits::Logger;

/// One recorded `Logger::error` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub tag: String,
    pub message: String,
    /// `Display` of the logged error
    pub error: String,
    pub category: ErrorCategory,
    pub retryable: bool,
}

/// [`Logger`] that keeps every entry for later assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().unwrap().clone()
    }

    /// Recorded messages, in call order.
    pub fn messages(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .map(|entry| entry.message.clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }
}

impl Logger for RecordingLogger {
    fn error(&self, tag: &str, message: &str, error: &DiscoveryError) {
        self.entries.lock().unwrap().push(LogEntry {
            tag: tag.to_string(),
            message: message.to_string(),
            error: error.to_string(),
            category: error.category(),
            retryable: error.is_retryable(),
        });
    }
}
