//! Whole-file loading for build-time logs.
//!
//! A log is parsed line by line. A malformed line is logged and skipped;
//! it never aborts the load of the rest of the file.

use super::readout::parse_readout;
use super::record::BuildTimeRecord;
use crate::utils::error::{LoadError, ParseError};
use log::{debug, info, warn};
use std::path::Path;

/// A line that failed to parse and was left out of the collection
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedLine {
    /// 1-based line number within the log
    pub line_number: usize,

    /// Why the line was rejected (carries the raw readout)
    pub error: ParseError,
}

impl SkippedLine {
    pub fn readout(&self) -> &str {
        self.error.readout()
    }
}

/// Result of loading one build-time log
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Every successfully parsed record, in file order
    pub records: Vec<BuildTimeRecord>,

    /// Every rejected line, in file order
    pub skipped: Vec<SkippedLine>,
}

impl LoadReport {
    /// Number of non-blank lines that were looked at
    pub fn lines_read(&self) -> usize {
        self.records.len() + self.skipped.len()
    }

    pub fn has_skipped(&self) -> bool {
        !self.skipped.is_empty()
    }
}

/// Parse the full text of a build-time log
///
/// **Public** - main entry point for in-memory logs
///
/// Lines may end in `\n`, `\r\n` or `\r`. Blank lines are ignored.
pub fn parse_log(text: &str) -> LoadReport {
    let mut report = LoadReport::default();

    for (index, line) in split_lines(text) {
        if line.trim().is_empty() {
            continue;
        }

        match parse_readout(line) {
            Ok(record) => report.records.push(record),
            Err(error) => {
                warn!("Skipping line {}: {}", index + 1, error);
                report.skipped.push(SkippedLine {
                    line_number: index + 1,
                    error,
                });
            }
        }
    }

    debug!(
        "Parsed {} records, skipped {} lines",
        report.records.len(),
        report.skipped.len()
    );

    report
}

/// Read and parse a build-time log from disk
///
/// **Public** - used by commands to load the user's log
///
/// # Errors
/// * `LoadError::ReadFailed` - File missing, unreadable, etc.
/// * `LoadError::InvalidEncoding` - File is not UTF-8
///
/// On error no partial collection is produced.
pub fn load_log_file(path: impl AsRef<Path>) -> Result<LoadReport, LoadError> {
    let path = path.as_ref();

    info!("Loading build-time log: {}", path.display());

    let bytes = std::fs::read(path).map_err(|source| LoadError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;

    let text = String::from_utf8(bytes).map_err(|_| LoadError::InvalidEncoding {
        path: path.to_path_buf(),
    })?;

    Ok(parse_log(&text))
}

/// Split text on any newline variant, keeping physical line numbers
///
/// **Private** - internal helper for parse_log
fn split_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    // `lines()` handles \n and \r\n; a bare \r still separates lines
    text.lines()
        .flat_map(|line| line.split('\r'))
        .enumerate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_all_newline_variants() {
        let lines: Vec<&str> = split_lines("a\nb\r\nc\rd").map(|(_, l)| l).collect();
        assert_eq!(lines, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_parse_log_skips_blank_lines() {
        let report = parse_log("\n1ms\t/a.swift:1:1\tf()\n\n   \n");
        assert_eq!(report.records.len(), 1);
        assert!(!report.has_skipped());
        assert_eq!(report.lines_read(), 1);
    }

    #[test]
    fn test_parse_log_records_line_numbers_of_bad_lines() {
        let report = parse_log("1ms\t/a.swift:1:1\tf()\nbogus\n2ms\t/b.swift:2:1\tg()");
        assert_eq!(report.records.len(), 2);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].line_number, 2);
        assert_eq!(report.skipped[0].readout(), "bogus");
    }
}
