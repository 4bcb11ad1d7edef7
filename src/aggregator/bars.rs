//! Bar heights for histogram renderers.

use crate::parser::BuildTimeRecord;

/// Longest duration in a set of records, in seconds
///
/// **Public** - used by histogram renderers for axis labels
pub fn longest_duration<'a, I>(records: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a BuildTimeRecord>,
{
    records
        .into_iter()
        .map(BuildTimeRecord::duration_seconds)
        .max_by(f64::total_cmp)
}

/// Height of each record's bar as a fraction of the longest duration
///
/// **Public** - the histogram part of the display contract
///
/// # Returns
/// One fraction in `[0, 1]` per record, in input order. When the longest
/// duration is zero every bar is full height.
pub fn bar_fractions(records: &[BuildTimeRecord]) -> Vec<f64> {
    let longest = longest_duration(records).unwrap_or(0.0);

    records
        .iter()
        .map(|record| bar_fraction(record.duration_seconds(), longest))
        .collect()
}

/// Fraction for a single duration against a known maximum
///
/// **Public** - for renderers that iterate records themselves
pub fn bar_fraction(duration_seconds: f64, longest: f64) -> f64 {
    if longest > 0.0 {
        duration_seconds / longest
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_fractions() {
        let records = vec![
            BuildTimeRecord::new(1.0, "/a.swift", "a", 1),
            BuildTimeRecord::new(4.0, "/b.swift", "b", 2),
            BuildTimeRecord::new(2.0, "/c.swift", "c", 3),
        ];
        assert_eq!(bar_fractions(&records), vec![0.25, 1.0, 0.5]);
    }

    #[test]
    fn test_bar_fractions_all_zero() {
        let records = vec![
            BuildTimeRecord::new(0.0, "/a.swift", "a", 1),
            BuildTimeRecord::new(0.0, "/b.swift", "b", 2),
        ];
        assert_eq!(bar_fractions(&records), vec![1.0, 1.0]);
    }

    #[test]
    fn test_bar_fractions_empty() {
        assert!(bar_fractions(&[]).is_empty());
        assert_eq!(longest_duration(&Vec::<BuildTimeRecord>::new()), None);
    }
}
