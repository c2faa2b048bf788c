use bevy::log::{error, info, warn};
use std::fmt;
use std::sync::Mutex;

/// A named value attached to a log message.
#[derive(Debug, Clone, PartialEq)]
pub struct LogField {
    pub name: &'static str,
    pub value: String,
}

impl LogField {
    pub fn new(name: &'static str, value: impl fmt::Display) -> Self {
        Self {
            name,
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

/// Where the force model reports what happened. Hosts decide how it is shown.
pub trait Diagnostics {
    fn info(&self, message: &str, fields: &[LogField]);
    fn warn(&self, message: &str, fields: &[LogField]);
    fn error(&self, message: &str, fields: &[LogField]);
}

fn render_fields(fields: &[LogField]) -> String {
    fields
        .iter()
        .map(|f| format!("{}={}", f.name, f.value))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Forwards diagnostics to Bevy's log macros.
#[derive(Debug, Default, Clone, Copy)]
pub struct BevyLog;

impl Diagnostics for BevyLog {
    fn info(&self, message: &str, fields: &[LogField]) {
        info!(fields = %render_fields(fields), "{}", message);
    }

    fn warn(&self, message: &str, fields: &[LogField]) {
        warn!(fields = %render_fields(fields), "{}", message);
    }

    fn error(&self, message: &str, fields: &[LogField]) {
        error!(fields = %render_fields(fields), "{}", message);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
    pub fields: Vec<LogField>,
}

impl LogRecord {
    /// Value of the field called `name`, if the record carries one
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }
}

/// Keeps every record in memory so it can be inspected later.
#[derive(Debug, Default)]
pub struct RecordingLog {
    records: Mutex<Vec<LogRecord>>,
}

impl RecordingLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, level: LogLevel, message: &str, fields: &[LogField]) {
        let record = LogRecord {
            level,
            message: message.to_string(),
            fields: fields.to_vec(),
        };
        // A poisoned lock only means another thread panicked mid-push
        match self.records.lock() {
            Ok(mut records) => records.push(record),
            Err(poisoned) => poisoned.into_inner().push(record),
        }
    }

    pub fn records(&self) -> Vec<LogRecord> {
        match self.records.lock() {
            Ok(records) => records.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn count(&self, level: LogLevel) -> usize {
        self.records()
            .iter()
            .filter(|r| r.level == level)
            .count()
    }

    pub fn clear(&self) {
        match self.records.lock() {
            Ok(mut records) => records.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }
}

impl Diagnostics for RecordingLog {
    fn info(&self, message: &str, fields: &[LogField]) {
        self.push(LogLevel::Info, message, fields);
    }

    fn warn(&self, message: &str, fields: &[LogField]) {
        self.push(LogLevel::Warn, message, fields);
    }

    fn error(&self, message: &str, fields: &[LogField]) {
        self.push(LogLevel::Error, message, fields);
    }
}
