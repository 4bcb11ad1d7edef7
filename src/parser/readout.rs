//! Parser for single build-time readout lines.
//!
//! Xcode prints one readout per function when built with
//! `-Xfrontend -debug-time-function-bodies`:
//!
//! ```text
//! 97.5ms	/path/to/File.swift:17:14	private func makeEntry(_ value: Int) -> Entry
//! ```
//!
//! Fields are tab separated. The location field is `path:line[:col...]` and
//! every field after it belongs to the function name.

use super::record::BuildTimeRecord;
use crate::utils::config::{
    DURATION_SUFFIX, FIELD_DELIMITER, LOCATION_SEPARATOR, MILLIS_PER_SECOND,
};
use crate::utils::error::ParseError;

/// Parse one raw readout into a build-time record
///
/// **Public** - main entry point for parsing
///
/// # Arguments
/// * `readout` - One line of the build-time log, without its line terminator
///
/// # Returns
/// The parsed record, with the duration converted to seconds
///
/// # Errors
/// * `ParseError::MissingDurationField` - Line has no first field
/// * `ParseError::NotMillisecondUnit` - Duration does not end in `ms`
/// * `ParseError::UnparsableDuration` - Duration is not a finite, non-negative number
/// * `ParseError::MissingLocationField` - No `path:line` field (or empty path)
/// * `ParseError::MissingLineNumber` - Location has no `:`
/// * `ParseError::InvalidLineNumber` - Line number is not an integer
pub fn parse_readout(readout: &str) -> Result<BuildTimeRecord, ParseError> {
    let mut fields = readout.split(FIELD_DELIMITER);

    let duration_field = fields
        .next()
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .ok_or_else(|| ParseError::MissingDurationField {
            readout: readout.to_string(),
        })?;
    let duration_seconds = parse_duration(readout, duration_field)?;

    let location_field = fields
        .next()
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .ok_or_else(|| ParseError::MissingLocationField {
            readout: readout.to_string(),
        })?;
    let (path, line_number) = parse_location(readout, location_field)?;

    let function_name = fields.collect::<Vec<_>>().join(" ");

    Ok(BuildTimeRecord::new(
        duration_seconds,
        path,
        function_name,
        line_number,
    ))
}

/// Parse a `<number>ms` token into seconds
///
/// **Private** - internal helper for parse_readout
fn parse_duration(readout: &str, field: &str) -> Result<f64, ParseError> {
    let millis = field
        .strip_suffix(DURATION_SUFFIX)
        .ok_or_else(|| ParseError::NotMillisecondUnit {
            readout: readout.to_string(),
            component: field.to_string(),
        })?;

    let unparsable = || ParseError::UnparsableDuration {
        readout: readout.to_string(),
        component: field.to_string(),
    };

    let millis: f64 = millis.parse().map_err(|_| unparsable())?;

    // f64 parsing accepts "inf" and "NaN"; durations must be real and non-negative
    if !millis.is_finite() || millis < 0.0 {
        return Err(unparsable());
    }

    Ok(millis / MILLIS_PER_SECOND)
}

/// Parse a `path:line[:col...]` token
///
/// **Private** - internal helper for parse_readout
fn parse_location<'a>(readout: &str, field: &'a str) -> Result<(&'a str, u32), ParseError> {
    let mut parts = field.split(LOCATION_SEPARATOR);

    // split always yields at least one part
    let path = parts.next().unwrap_or_default();
    let line = parts.next().ok_or_else(|| ParseError::MissingLineNumber {
        readout: readout.to_string(),
        component: field.to_string(),
    })?;

    if path.is_empty() {
        return Err(ParseError::MissingLocationField {
            readout: readout.to_string(),
        });
    }

    let line_number = line
        .parse::<u32>()
        .map_err(|_| ParseError::InvalidLineNumber {
            readout: readout.to_string(),
            component: line.to_string(),
        })?;

    Ok((path, line_number))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::config::NO_FUNCTION_NAME;

    #[test]
    fn test_parse_canonical_readout() {
        let record = parse_readout("97.5ms\t/a/b/File.swift:17:14\tsome function").unwrap();

        assert!((record.duration_seconds() - 0.0975).abs() < 1e-12);
        assert_eq!(record.path(), "/a/b/File.swift");
        assert_eq!(record.line_number(), 17);
        assert_eq!(record.function_name(), "some function");
    }

    #[test]
    fn test_parse_duration_units() {
        assert_eq!(parse_duration("", "1500ms").unwrap(), 1.5);
        assert_eq!(parse_duration("", "0ms").unwrap(), 0.0);
        assert!(matches!(
            parse_duration("", "1.5s"),
            Err(ParseError::NotMillisecondUnit { .. })
        ));
        assert!(matches!(
            parse_duration("", "ms"),
            Err(ParseError::UnparsableDuration { .. })
        ));
        assert!(matches!(
            parse_duration("", "-3ms"),
            Err(ParseError::UnparsableDuration { .. })
        ));
        assert!(matches!(
            parse_duration("", "infms"),
            Err(ParseError::UnparsableDuration { .. })
        ));
    }

    #[test]
    fn test_negative_zero_readout_is_plain_zero() {
        let record = parse_readout("-0ms\t/z.swift:1:1\tz()").unwrap();
        assert_eq!(record.duration_seconds(), 0.0);
        assert!(record.duration_seconds().is_sign_positive());
    }

    #[test]
    fn test_parse_location_without_column() {
        let (path, line) = parse_location("", "/x/y.swift:42").unwrap();
        assert_eq!(path, "/x/y.swift");
        assert_eq!(line, 42);
    }

    #[test]
    fn test_parse_location_empty_path() {
        assert!(matches!(
            parse_location("", ":42:1"),
            Err(ParseError::MissingLocationField { .. })
        ));
    }

    #[test]
    fn test_missing_function_field_uses_sentinel() {
        let record = parse_readout("1.0ms\t/a.swift:1:1").unwrap();
        assert_eq!(record.function_name(), NO_FUNCTION_NAME);
    }
}
