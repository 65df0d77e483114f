//! Interval validation, feature filtering and overlap merging

use crate::error::{RegionError, RegionResult};
use crate::types::Interval;

/// Reject any interval whose start lies after its stop.
pub fn validate_intervals(intervals: &[Interval]) -> RegionResult<()> {
    match intervals.iter().find(|interval| interval.start > interval.stop) {
        Some(bad) => Err(RegionError::MalformedInterval {
            feature_type: bad.feature_type.clone(),
            start: bad.start,
            stop: bad.stop,
        }),
        None => Ok(()),
    }
}

/// Keep only intervals whose feature type is in `feature_types`.
/// An empty allow-list keeps everything.
pub fn filter_feature_types<S: AsRef<str>>(
    intervals: &[Interval],
    feature_types: &[S],
) -> Vec<Interval> {
    if feature_types.is_empty() {
        return intervals.to_vec();
    }

    intervals
        .iter()
        .filter(|interval| {
            feature_types
                .iter()
                .any(|allowed| allowed.as_ref() == interval.feature_type)
        })
        .cloned()
        .collect()
}

pub fn sort_intervals(intervals: &[Interval]) -> Vec<Interval> {
    let mut sorted = intervals.to_vec();
    sorted.sort_by_key(|interval| interval.start);
    sorted
}

/// Merge overlapping or abutting intervals of a start-sorted list.
///
/// An interval starting at or before `previous.stop + 1` is folded into the
/// previous one, which keeps its feature type and takes the larger stop.
pub fn merge_overlapping(sorted: &[Interval]) -> Vec<Interval> {
    let mut merged: Vec<Interval> = Vec::with_capacity(sorted.len());

    for interval in sorted {
        match merged.last_mut() {
            Some(previous) if interval.start <= previous.stop.saturating_add(1) => {
                if interval.stop > previous.stop {
                    previous.stop = interval.stop;
                }
            }
            _ => merged.push(interval.clone()),
        }
    }

    merged
}

/// Validate, sort and merge raw intervals.
pub fn normalize(intervals: &[Interval]) -> RegionResult<Vec<Interval>> {
    validate_intervals(intervals)?;
    let merged = merge_overlapping(&sort_intervals(intervals));
    log::debug!(
        "Normalized {} intervals into {} merged regions",
        intervals.len(),
        merged.len()
    );
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_overlapping_and_adjacent() {
        let raw = vec![
            Interval::new("exon", 50, 60),
            Interval::new("exon", 10, 20),
            Interval::new("exon", 15, 30),
            Interval::new("exon", 31, 35),
            Interval::new("exon", 37, 40),
        ];
        let merged = normalize(&raw).unwrap();
        let bounds: Vec<_> = merged.iter().map(|i| (i.start, i.stop)).collect();
        assert_eq!(bounds, vec![(10, 35), (37, 40), (50, 60)]);
    }

    #[test]
    fn test_contained_interval_keeps_larger_stop() {
        let raw = vec![Interval::new("CDS", 100, 500), Interval::new("UTR", 200, 300)];
        let merged = normalize(&raw).unwrap();
        assert_eq!(merged, vec![Interval::new("CDS", 100, 500)]);
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_interval_rejected() {
        let raw = vec![Interval::new("CDS", 10, 20), Interval::new("CDS", 40, 30)];
        let err = normalize(&raw).unwrap_err();
        assert_eq!(
            err,
            RegionError::MalformedInterval {
                feature_type: "CDS".to_string(),
                start: 40,
                stop: 30,
            }
        );
    }

    #[test]
    fn test_merge_at_end_of_coordinate_range() {
        let raw = vec![
            Interval::new("CDS", 10, i64::MAX),
            Interval::new("CDS", i64::MAX, i64::MAX),
        ];
        assert_eq!(normalize(&raw).unwrap(), vec![Interval::new("CDS", 10, i64::MAX)]);
    }

    #[test]
    fn test_single_base_interval_is_valid() {
        assert!(validate_intervals(&[Interval::new("SNV", 7, 7)]).is_ok());
    }

    #[test]
    fn test_filter_feature_types() {
        let raw = vec![
            Interval::new("CDS", 10, 20),
            Interval::new("UTR", 30, 40),
            Interval::new("exon", 50, 60),
        ];
        let kept = filter_feature_types(&raw, &["CDS", "exon"]);
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|i| i.feature_type != "UTR"));

        let none: [&str; 0] = [];
        assert_eq!(filter_feature_types(&raw, &none).len(), 3);
    }
}
