//! The build-time record produced for each parsed readout.

use crate::utils::config::NO_FUNCTION_NAME;
use crate::utils::error::RecordError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One parsed per-function compile time measurement
///
/// Records are immutable once built: fields are only reachable through
/// accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredRecord")]
pub struct BuildTimeRecord {
    /// Compile duration in seconds (finite, >= 0)
    duration_seconds: f64,

    /// Source file path exactly as it appeared in the log
    path: String,

    /// Function signature, or the no-name sentinel
    function_name: String,

    /// Line of the function declaration
    line_number: u32,
}

impl BuildTimeRecord {
    /// Create a record from already-validated parts
    ///
    /// **Public** - used by the readout parser and by tests
    ///
    /// An empty (or blank) `function_name` is replaced by the
    /// `*** NO FUNCTION NAME ***` sentinel. A duration of `-0.0` is stored
    /// as `0.0`.
    pub fn new(
        duration_seconds: f64,
        path: impl Into<String>,
        function_name: impl Into<String>,
        line_number: u32,
    ) -> Self {
        debug_assert!(duration_seconds.is_finite() && duration_seconds >= 0.0);

        let function_name = function_name.into();
        let function_name = if function_name.trim().is_empty() {
            NO_FUNCTION_NAME.to_string()
        } else {
            function_name
        };

        Self {
            // -0.0 would sort before 0.0 under total_cmp
            duration_seconds: duration_seconds + 0.0,
            path: path.into(),
            function_name,
            line_number,
        }
    }

    pub fn duration_seconds(&self) -> f64 {
        self.duration_seconds
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn function_name(&self) -> &str {
        &self.function_name
    }

    pub fn line_number(&self) -> u32 {
        self.line_number
    }

    /// True if the readout carried no function name
    pub fn has_function_name(&self) -> bool {
        self.function_name != NO_FUNCTION_NAME
    }
}

/// Serialized form of a record, checked before it becomes a `BuildTimeRecord`
#[derive(Deserialize)]
struct StoredRecord {
    duration_seconds: f64,
    path: String,
    function_name: String,
    line_number: u32,
}

impl TryFrom<StoredRecord> for BuildTimeRecord {
    type Error = RecordError;

    fn try_from(stored: StoredRecord) -> Result<Self, Self::Error> {
        if !stored.duration_seconds.is_finite() || stored.duration_seconds < 0.0 {
            return Err(RecordError::InvalidDuration(stored.duration_seconds));
        }

        if stored.path.is_empty() {
            return Err(RecordError::EmptyPath);
        }

        Ok(Self::new(
            stored.duration_seconds,
            stored.path,
            stored.function_name,
            stored.line_number,
        ))
    }
}

impl fmt::Display for BuildTimeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}s {}:{} {}",
            self.duration_seconds, self.path, self.line_number, self.function_name
        )
    }
}
