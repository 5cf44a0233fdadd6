//! Floor-aligned time binning with gap-filling
//!
//! Buckets a buffered event stream into fixed-width, contiguous time bins
//! over a trailing window. Bins with no contributing events are kept at 0.0
//! so the output series is always contiguous. Timestamps are integer epoch
//! milliseconds throughout; flooring uses euclidean division so pre-epoch
//! timestamps still align toward negative infinity.

use crate::{Result, StreamError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Anything timestamped and numeric can flow through the resampler
pub trait Timestamped {
    /// Milliseconds since the Unix epoch
    fn timestamp_ms(&self) -> i64;

    /// The numeric contribution of this record to its bin
    fn value(&self) -> f64;
}

/// One fixed-width aggregation bucket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeBin {
    /// Bin start, floored to a multiple of the bin width
    pub start_ms: i64,
    /// Sum of the values of all events falling inside the bin
    pub total: f64,
}

/// Floor a timestamp to the start of its bin
pub fn floor_to_bin(ts_ms: i64, bin_width_ms: i64) -> i64 {
    ts_ms.div_euclid(bin_width_ms) * bin_width_ms
}

/// Bucket `events` into contiguous, gap-filled bins over a trailing window.
///
/// The window ends at `floor(now_ms / bin_width_ms) * bin_width_ms` and spans
/// `window_ms` backwards, rounded down to a whole number of bins. Each event
/// contributes its value to exactly one bin (sum aggregation); events whose
/// bin falls outside the window are ignored. Bins are returned in ascending
/// `start_ms` order, `window_ms / bin_width_ms + 1` of them.
///
/// Empty input yields an empty vector; callers must handle that downstream.
pub fn aggregate_bins<T: Timestamped>(
    events: &[T],
    now_ms: i64,
    bin_width_ms: i64,
    window_ms: i64,
) -> Result<Vec<TimeBin>> {
    if bin_width_ms <= 0 {
        return Err(StreamError::InvalidInput(
            "Bin width must be positive".to_string(),
        ));
    }
    if window_ms < 0 {
        return Err(StreamError::InvalidInput(
            "Window duration must be non-negative".to_string(),
        ));
    }

    if events.is_empty() {
        return Ok(Vec::new());
    }

    let end_bin = floor_to_bin(now_ms, bin_width_ms);
    // A window that is not a whole multiple of the bin width rounds down
    let bin_count = window_ms / bin_width_ms;
    let start_bin = end_bin - bin_count * bin_width_ms;

    let mut totals: HashMap<i64, f64> = HashMap::new();
    for event in events {
        let bin = floor_to_bin(event.timestamp_ms(), bin_width_ms);
        if bin < start_bin || bin > end_bin {
            continue;
        }
        *totals.entry(bin).or_insert(0.0) += event.value();
    }

    let mut bins = Vec::with_capacity(bin_count as usize + 1);
    let mut start_ms = start_bin;
    while start_ms <= end_bin {
        bins.push(TimeBin {
            start_ms,
            total: totals.get(&start_ms).copied().unwrap_or(0.0),
        });
        start_ms += bin_width_ms;
    }

    Ok(bins)
}

/// Sum the values of events inside the trailing `span_ms` ending at `now_ms`
pub fn trailing_sum<'a, T, I>(events: I, now_ms: i64, span_ms: i64) -> f64
where
    T: Timestamped + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let cutoff = now_ms - span_ms;
    events
        .into_iter()
        .filter(|e| e.timestamp_ms() > cutoff)
        .map(|e| e.value())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Point {
        ts_ms: i64,
        value: f64,
    }

    impl Timestamped for Point {
        fn timestamp_ms(&self) -> i64 {
            self.ts_ms
        }

        fn value(&self) -> f64 {
            self.value
        }
    }

    fn points(raw: &[(i64, f64)]) -> Vec<Point> {
        raw.iter()
            .map(|&(secs, value)| Point {
                ts_ms: secs * 1000,
                value,
            })
            .collect()
    }

    #[test]
    fn test_floor_alignment() {
        assert_eq!(floor_to_bin(0, 10_000), 0);
        assert_eq!(floor_to_bin(9_999, 10_000), 0);
        assert_eq!(floor_to_bin(10_000, 10_000), 10_000);
        assert_eq!(floor_to_bin(25_000, 10_000), 20_000);
        // Pre-epoch timestamps floor toward negative infinity
        assert_eq!(floor_to_bin(-1, 10_000), -10_000);
    }

    #[test]
    fn test_empty_input_gives_empty_series() {
        let events: Vec<Point> = Vec::new();
        let bins = aggregate_bins(&events, 60_000, 10_000, 60_000).unwrap();
        assert!(bins.is_empty());
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let events = points(&[(0, 1.0)]);
        assert!(aggregate_bins(&events, 0, 0, 60_000).is_err());
        assert!(aggregate_bins(&events, 0, -10, 60_000).is_err());
        assert!(aggregate_bins(&events, 0, 10_000, -1).is_err());
    }

    #[test]
    fn test_gap_filled_minute_window() {
        // Events at t = 0, 5, 15, 25 seconds; now = 60s, 10s bins, 60s window
        let events = points(&[(0, 10.0), (5, 10.0), (15, 20.0), (25, 5.0)]);
        let bins = aggregate_bins(&events, 60_000, 10_000, 60_000).unwrap();

        let starts: Vec<i64> = bins.iter().map(|b| b.start_ms).collect();
        assert_eq!(starts, vec![0, 10_000, 20_000, 30_000, 40_000, 50_000, 60_000]);

        let totals: Vec<f64> = bins.iter().map(|b| b.total).collect();
        assert_eq!(totals, vec![20.0, 20.0, 5.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_bin_count_and_contiguity() {
        let events = points(&[(123, 1.0)]);
        let bins = aggregate_bins(&events, 600_000, 10_000, 600_000).unwrap();

        // window / width + 1 bins, strictly ascending at a fixed stride
        assert_eq!(bins.len(), 61);
        for pair in bins.windows(2) {
            assert_eq!(pair[1].start_ms - pair[0].start_ms, 10_000);
        }
    }

    #[test]
    fn test_each_event_lands_in_exactly_one_bin() {
        let events = points(&[(1, 3.0), (11, 4.0), (19, 5.0), (21, 6.0), (59, 7.0)]);
        let bins = aggregate_bins(&events, 60_000, 10_000, 60_000).unwrap();

        let total: f64 = bins.iter().map(|b| b.total).sum();
        assert_eq!(total, 25.0);
    }

    #[test]
    fn test_events_outside_window_are_dropped() {
        // now = 120s with a 60s window: t=0 is stale, t=130 is ahead of end_bin
        let events = points(&[(0, 100.0), (90, 2.0), (130, 50.0)]);
        let bins = aggregate_bins(&events, 120_000, 10_000, 60_000).unwrap();

        let total: f64 = bins.iter().map(|b| b.total).sum();
        assert_eq!(total, 2.0);
        assert_eq!(bins.first().unwrap().start_ms, 60_000);
        assert_eq!(bins.last().unwrap().start_ms, 120_000);
    }

    #[test]
    fn test_non_multiple_window_rounds_down() {
        // 65s window at 10s bins -> 6 whole bins behind the end bin
        let events = points(&[(10, 1.0)]);
        let bins = aggregate_bins(&events, 60_000, 10_000, 65_000).unwrap();
        assert_eq!(bins.len(), 7);
        assert_eq!(bins.first().unwrap().start_ms, 0);
    }

    #[test]
    fn test_trailing_sum_cutoff() {
        let events = points(&[(0, 10.0), (30, 20.0), (55, 5.0)]);
        assert_eq!(trailing_sum(&events, 60_000, 60_000), 25.0);
        assert_eq!(trailing_sum(&events, 60_000, 10_000), 5.0);
        assert_eq!(trailing_sum(&events, 60_000, 0), 0.0);
    }
}
