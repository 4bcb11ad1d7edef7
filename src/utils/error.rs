//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while parsing a single build-time readout line
///
/// Every variant carries the raw readout so a skipped line can be reported
/// verbatim, plus the component that failed when there is one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Readout has no duration field: {readout:?}")]
    MissingDurationField { readout: String },

    #[error("Duration {component:?} is not in milliseconds: {readout:?}")]
    NotMillisecondUnit { readout: String, component: String },

    #[error("Duration {component:?} is not a valid number: {readout:?}")]
    UnparsableDuration { readout: String, component: String },

    #[error("Readout has no source location field: {readout:?}")]
    MissingLocationField { readout: String },

    #[error("Location {component:?} has no line number: {readout:?}")]
    MissingLineNumber { readout: String, component: String },

    #[error("Line number {component:?} is not a valid integer: {readout:?}")]
    InvalidLineNumber { readout: String, component: String },
}

impl ParseError {
    /// The raw readout line that failed to parse
    pub fn readout(&self) -> &str {
        match self {
            ParseError::MissingDurationField { readout }
            | ParseError::NotMillisecondUnit { readout, .. }
            | ParseError::UnparsableDuration { readout, .. }
            | ParseError::MissingLocationField { readout }
            | ParseError::MissingLineNumber { readout, .. }
            | ParseError::InvalidLineNumber { readout, .. } => readout,
        }
    }

    /// The offending component, if the failure is tied to one field
    pub fn component(&self) -> Option<&str> {
        match self {
            ParseError::MissingDurationField { .. } | ParseError::MissingLocationField { .. } => {
                None
            }
            ParseError::NotMillisecondUnit { component, .. }
            | ParseError::UnparsableDuration { component, .. }
            | ParseError::MissingLineNumber { component, .. }
            | ParseError::InvalidLineNumber { component, .. } => Some(component),
        }
    }
}

/// Errors that can occur while loading a whole build-time log
/// A stored record (e.g. read back from a report) that breaks record invariants
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("Duration {0} is not a finite, non-negative number of seconds")]
    InvalidDuration(f64),

    #[error("Record has an empty path")]
    EmptyPath,
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8 text", path.display())]
    InvalidEncoding { path: PathBuf },
}

/// Errors that can occur while parsing sort keys from text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortKeyError {
    #[error("Unknown sort key: {0} (expected duration, path, function or line)")]
    UnknownKey(String),

    #[error("Unknown sort direction: {0} (expected asc or desc)")]
    UnknownDirection(String),
}

/// Errors that can occur during histogram generation
#[derive(Error, Debug)]
pub enum HistogramError {
    #[error("No records to chart")]
    EmptyRecords,
}

/// Errors that can occur while revealing a location in an editor
#[derive(Error, Debug)]
pub enum RevealError {
    #[error("No row {row} in a view of {len} records")]
    NoSuchRow { row: usize, len: usize },

    #[error("Editor command template is empty")]
    EmptyCommand,

    #[error("Failed to launch editor {program}: {source}")]
    LaunchFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Editor {program} exited with {status}")]
    EditorFailed { program: String, status: String },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_accessors() {
        let err = ParseError::InvalidLineNumber {
            readout: "1ms\ta.swift:x".to_string(),
            component: "x".to_string(),
        };
        assert_eq!(err.readout(), "1ms\ta.swift:x");
        assert_eq!(err.component(), Some("x"));

        let err = ParseError::MissingLocationField {
            readout: "1ms".to_string(),
        };
        assert_eq!(err.component(), None);
    }

    #[test]
    fn test_parse_error_message_mentions_component() {
        let err = ParseError::NotMillisecondUnit {
            readout: "12s\tx".to_string(),
            component: "12s".to_string(),
        };
        assert!(err.to_string().contains("\"12s\""));
    }
}
