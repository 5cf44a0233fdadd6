//! Pipeline configuration
//!
//! All knobs the host dashboard exposes, as plain scalars. Durations are
//! integer milliseconds to match the aggregation layer's arithmetic. The
//! defaults reproduce the observed dashboard settings: a 1000-event buffer,
//! 10 s bins over a 10 minute window, a 6-bin (60 s) trend window, a 30 s
//! forecast gate, and the last 20 forecasts retained.

use crate::error::{PipelineError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Maximum number of raw events retained
    pub buffer_capacity: usize,
    /// Width of one aggregation bin
    pub bin_width_ms: i64,
    /// Trailing window covered by the binned series
    pub window_ms: i64,
    /// Number of trailing bins the forecaster looks at; the forecast horizon
    /// is `trend_bins * bin_width_ms`
    pub trend_bins: usize,
    /// Minimum wall-clock spacing between issued forecasts
    pub min_forecast_interval_ms: i64,
    /// Number of past forecasts retained for accuracy checks
    pub forecast_history_len: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: 1000,
            bin_width_ms: 10_000,
            window_ms: 600_000,
            trend_bins: 6,
            min_forecast_interval_ms: 30_000,
            forecast_history_len: 20,
        }
    }
}

impl PipelineConfig {
    /// Validate the configuration before a session is built from it
    pub fn validate(&self) -> Result<()> {
        if self.buffer_capacity == 0 {
            return Err(PipelineError::InvalidConfig(
                "Buffer capacity must be at least 1".to_string(),
            ));
        }
        if self.bin_width_ms <= 0 {
            return Err(PipelineError::InvalidConfig(
                "Bin width must be positive".to_string(),
            ));
        }
        if self.window_ms < 0 {
            return Err(PipelineError::InvalidConfig(
                "Window duration must be non-negative".to_string(),
            ));
        }
        if self.trend_bins == 0 {
            return Err(PipelineError::InvalidConfig(
                "Trend window must cover at least one bin".to_string(),
            ));
        }
        if self.min_forecast_interval_ms < 0 {
            return Err(PipelineError::InvalidConfig(
                "Forecast interval must be non-negative".to_string(),
            ));
        }
        if self.forecast_history_len == 0 {
            return Err(PipelineError::InvalidConfig(
                "Forecast history must hold at least one record".to_string(),
            ));
        }
        Ok(())
    }

    /// The span a forecast projects over, tied to the trend window
    pub fn horizon_ms(&self) -> i64 {
        self.trend_bins as i64 * self.bin_width_ms
    }
}
