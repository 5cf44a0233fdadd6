//! Session context for the forecast pipeline
//!
//! One `ForecastSession` per dashboard. It owns the mutable state a refresh
//! cycle touches and nothing else owns it: the event buffer, the forecast
//! history, the pause flag, and the last-forecast gate. The session is
//! single-writer by construction; a concurrent host must wrap it in one
//! mutex or own it from one task.

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::summary::{sales_summary, SalesSummary};
use sales_sim::SalesEvent;
use stream_agg::{
    accuracy, aggregate_bins, forecast_next_window, trailing_sum, AccuracySample, BoundedBuffer,
    ForecastRecord, TimeBin,
};

/// Explicit, resettable state for one live forecast dashboard
#[derive(Debug, Clone)]
pub struct ForecastSession {
    config: PipelineConfig,
    events: BoundedBuffer<SalesEvent>,
    forecasts: BoundedBuffer<ForecastRecord>,
    last_forecast_ms: Option<i64>,
    paused: bool,
}

impl ForecastSession {
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;

        let events = BoundedBuffer::new(config.buffer_capacity)?;
        let forecasts = BoundedBuffer::new(config.forecast_history_len)?;

        Ok(Self {
            config,
            events,
            forecasts,
            last_forecast_ms: None,
            paused: false,
        })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Stop ingesting and forecasting; retained data keeps serving reads
    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Drop all buffered events and forecast history, keeping the
    /// configuration and pause state
    pub fn reset(&mut self) {
        self.events.clear();
        self.forecasts.clear();
        self.last_forecast_ms = None;
    }

    /// Append a batch of events. A paused session ignores the batch.
    pub fn ingest(&mut self, batch: Vec<SalesEvent>) {
        if self.paused {
            return;
        }
        self.events.extend(batch);
    }

    /// Number of events currently retained
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// The binned series over the trailing window, for charting
    pub fn bins(&self, now_ms: i64) -> Result<Vec<TimeBin>> {
        let bins = aggregate_bins(
            &self.events.snapshot(),
            now_ms,
            self.config.bin_width_ms,
            self.config.window_ms,
        )?;
        Ok(bins)
    }

    /// Issue a forecast if the minimum interval has elapsed.
    ///
    /// Returns `None` while paused or gated. A session that has never
    /// forecast is not gated. The issued record is appended to the bounded
    /// history (oldest dropped past the configured length), even when the
    /// prediction is the degenerate 0.0.
    pub fn maybe_forecast(&mut self, now_ms: i64) -> Result<Option<ForecastRecord>> {
        if self.paused {
            return Ok(None);
        }
        if let Some(last_ms) = self.last_forecast_ms {
            if now_ms - last_ms < self.config.min_forecast_interval_ms {
                return Ok(None);
            }
        }

        let bins = self.bins(now_ms)?;
        let predicted_value = forecast_next_window(&bins, self.config.trend_bins);

        let record = ForecastRecord {
            issued_at_ms: now_ms,
            horizon_ms: self.config.horizon_ms(),
            predicted_value,
        };
        self.forecasts.push(record);
        self.last_forecast_ms = Some(now_ms);

        Ok(Some(record))
    }

    /// The most recently issued forecast, if any
    pub fn latest_forecast(&self) -> Option<ForecastRecord> {
        self.forecasts.back().copied()
    }

    /// All retained forecasts, oldest first
    pub fn forecast_history(&self) -> Vec<ForecastRecord> {
        self.forecasts.snapshot()
    }

    /// Compare the newest forecast whose horizon has elapsed against the
    /// realized total over that horizon. `None` until such a forecast exists.
    pub fn accuracy(&self, now_ms: i64) -> Option<AccuracySample> {
        let record = self
            .forecasts
            .iter()
            .rev()
            .find(|r| now_ms >= r.issued_at_ms + r.horizon_ms)?;

        let realized = trailing_sum(self.events.iter(), now_ms, record.horizon_ms);
        Some(accuracy::evaluate(record, realized))
    }

    /// The most recent `n` events, oldest first, for tabular display
    pub fn recent_events(&self, n: usize) -> Vec<SalesEvent> {
        self.events.latest(n).cloned().collect()
    }

    /// Headline sales metrics over the retained events
    pub fn sales_summary(&self, now_ms: i64) -> SalesSummary {
        sales_summary(&self.events.snapshot(), now_ms)
    }
}
