//! Short-horizon trend forecasting over binned series
//!
//! A deliberately simple, interpretable extrapolation: take the trailing
//! bins, estimate a linear trend from the difference between the means of
//! their first and second halves, and project the trend-adjusted per-bin
//! rate forward over a horizon equal to the trailing window length. All
//! degenerate inputs produce 0.0, never an error.

use crate::bins::TimeBin;
use serde::{Deserialize, Serialize};

/// A forecast issued at a point in time, kept for later accuracy checks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastRecord {
    /// When the forecast was issued, epoch milliseconds
    pub issued_at_ms: i64,
    /// How far ahead the forecast projects
    pub horizon_ms: i64,
    /// Projected total over the horizon
    pub predicted_value: f64,
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Project the total over the next `trend_bins` bins from a binned series.
///
/// Guard order matters and is part of the contract:
/// 1. fewer than `trend_bins` bins -> 0.0 (insufficient history);
/// 2. trailing `trend_bins` bins summing to zero -> 0.0 (idle stream);
/// 3. otherwise `max(0, baseline + trend/2) * trend_bins`, where baseline is
///    the trailing mean and trend is mean(second half) - mean(first half),
///    zeroed when the first half's mean is not positive.
///
/// The halves are each `trend_bins / 2` bins from the head and tail of the
/// trailing window; with an odd `trend_bins` the middle bin contributes to
/// the baseline only.
pub fn forecast_next_window(bins: &[TimeBin], trend_bins: usize) -> f64 {
    if bins.len() < trend_bins {
        return 0.0;
    }

    let recent: Vec<f64> = bins[bins.len() - trend_bins..]
        .iter()
        .map(|b| b.total)
        .collect();
    if recent.iter().sum::<f64>() == 0.0 {
        return 0.0;
    }

    let baseline = mean(&recent);

    let half = trend_bins / 2;
    let first_half = mean(&recent[..half]);
    let second_half = mean(&recent[recent.len() - half..]);
    let trend = if first_half > 0.0 {
        second_half - first_half
    } else {
        0.0
    };

    let per_bin = (baseline + trend / 2.0).max(0.0);
    per_bin * trend_bins as f64
}
