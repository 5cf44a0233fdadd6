//! Forecast accuracy evaluation
//!
//! Point-in-time comparison of a previously issued forecast against the
//! realized aggregate over the same span. The caller decides cadence; this
//! module only computes the relative error.

use crate::forecast::ForecastRecord;
use serde::{Deserialize, Serialize};

/// A single forecast-vs-realized comparison, derived on demand
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccuracySample {
    pub predicted_value: f64,
    pub realized_value: f64,
    /// `|predicted - realized| / realized * 100`, 0.0 when realized is zero
    pub relative_error_pct: f64,
}

/// Relative error as a percentage, with a zero-denominator guard.
///
/// A realized value of zero (or below) yields 0.0 by definition rather than
/// an error: an idle stream has nothing to be wrong about.
pub fn relative_error_pct(predicted: f64, realized: f64) -> f64 {
    if realized > 0.0 {
        (predicted - realized).abs() / realized * 100.0
    } else {
        0.0
    }
}

/// Compare a forecast record against the realized aggregate over its span
pub fn evaluate(record: &ForecastRecord, realized_value: f64) -> AccuracySample {
    AccuracySample {
        predicted_value: record.predicted_value,
        realized_value,
        relative_error_pct: relative_error_pct(record.predicted_value, realized_value),
    }
}
