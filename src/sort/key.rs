//! Sort keys and their textual form.
//!
//! A sort order is written as a comma separated list of `key[:asc|:desc]`
//! entries, highest priority first, e.g. `duration:desc,path`.

use crate::utils::error::SortKeyError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A record field that can be sorted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Duration,
    Path,
    FunctionName,
    LineNumber,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Duration,
        SortKey::Path,
        SortKey::FunctionName,
        SortKey::LineNumber,
    ];

    /// Canonical name used in sort order strings
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Duration => "duration",
            SortKey::Path => "path",
            SortKey::FunctionName => "function",
            SortKey::LineNumber => "line",
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = SortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "duration" | "time" | "build_time" | "buildtime" => Ok(Self::Duration),
            "path" | "file" => Ok(Self::Path),
            "function" | "function_name" | "functionname" | "name" => Ok(Self::FunctionName),
            "line" | "line_number" | "linenumber" => Ok(Self::LineNumber),
            other => Err(SortKeyError::UnknownKey(other.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sort key paired with its direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortDescriptor {
    pub key: SortKey,
    pub ascending: bool,
}

impl SortDescriptor {
    pub fn new(key: SortKey, ascending: bool) -> Self {
        Self { key, ascending }
    }

    pub fn ascending(key: SortKey) -> Self {
        Self::new(key, true)
    }

    pub fn descending(key: SortKey) -> Self {
        Self::new(key, false)
    }
}

impl std::str::FromStr for SortDescriptor {
    type Err = SortKeyError;

    /// Parse `key`, `key:asc` or `key:desc`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, direction) = match s.split_once(':') {
            Some((key, direction)) => (key, Some(direction)),
            None => (s, None),
        };

        let key: SortKey = key.parse()?;
        let ascending = match direction.map(|d| d.trim().to_lowercase()) {
            None => true,
            Some(d) => match d.as_str() {
                "asc" | "ascending" => true,
                "desc" | "descending" => false,
                _ => return Err(SortKeyError::UnknownDirection(d)),
            },
        };

        Ok(Self { key, ascending })
    }
}

impl fmt::Display for SortDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = if self.ascending { "asc" } else { "desc" };
        write!(f, "{}:{}", self.key, direction)
    }
}

/// Parse a comma separated sort order
///
/// **Public** - used by the CLI to read `--sort`
///
/// An empty or blank string yields an empty order (no reordering).
pub fn parse_sort_order(s: &str) -> Result<Vec<SortDescriptor>, SortKeyError> {
    s.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::parse)
        .collect()
}

/// Render a sort order back to its textual form
pub fn format_sort_order(order: &[SortDescriptor]) -> String {
    order
        .iter()
        .map(SortDescriptor::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_aliases() {
        assert_eq!("Duration".parse::<SortKey>().unwrap(), SortKey::Duration);
        assert_eq!("file".parse::<SortKey>().unwrap(), SortKey::Path);
        assert_eq!("functionName".parse::<SortKey>().unwrap(), SortKey::FunctionName);
        assert_eq!("lineNumber".parse::<SortKey>().unwrap(), SortKey::LineNumber);
        assert!("column".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_every_key_parses_from_its_name() {
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_descriptor_parsing() {
        assert_eq!(
            "duration:desc".parse::<SortDescriptor>().unwrap(),
            SortDescriptor::descending(SortKey::Duration)
        );
        assert_eq!(
            "path".parse::<SortDescriptor>().unwrap(),
            SortDescriptor::ascending(SortKey::Path)
        );
        assert_eq!(
            "line:sideways".parse::<SortDescriptor>(),
            Err(SortKeyError::UnknownDirection("sideways".to_string()))
        );
    }

    #[test]
    fn test_sort_order_text_form() {
        let order = parse_sort_order("duration:desc, path ,line:asc").unwrap();
        assert_eq!(order.len(), 3);
        assert_eq!(format_sort_order(&order), "duration:desc,path:asc,line:asc");
        assert!(parse_sort_order("  ").unwrap().is_empty());
    }
}
