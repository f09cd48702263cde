//! Log sinks used by observing handlers.
//!
//! Handlers decide *what* to log and at which [`Severity`]; a [`LogSink`]
//! decides where the record goes. [`TracingSink`] forwards to `tracing`,
//! [`MemorySink`] keeps records in memory.

use std::sync::Mutex;

use serde::Serialize;

/// Severity of a log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Noteworthy event, forwarded as a warning.
    High,
    /// Routine event, forwarded as info.
    Low,
}

/// A single structured log record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    pub severity: Severity,
    pub message: String,
}

/// Destination for log records.
pub trait LogSink: Send + Sync {
    fn log(&self, severity: Severity, message: &str);
}

/// Forwards records to the `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&self, severity: Severity, message: &str) {
        match severity {
            Severity::High => tracing::warn!(target: "mailroom::spy", "{}", message),
            Severity::Low => tracing::info!(target: "mailroom::spy", "{}", message),
        }
    }
}

/// Collects records in memory, in emission order.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<LogRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all records captured so far.
    pub fn records(&self) -> Vec<LogRecord> {
        match self.records.lock() {
            Ok(records) => records.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Number of records with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.records()
            .iter()
            .filter(|r| r.severity == severity)
            .count()
    }
}

impl LogSink for MemorySink {
    fn log(&self, severity: Severity, message: &str) {
        let record = LogRecord {
            severity,
            message: message.to_string(),
        };
        match self.records.lock() {
            Ok(mut records) => records.push(record),
            Err(poisoned) => poisoned.into_inner().push(record),
        }
    }
}
