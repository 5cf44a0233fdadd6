//! # Stream Agg
//!
//! Aggregation primitives for unbounded event streams with bounded memory.
//! This crate provides the data structures and pure functions shared by the
//! live dashboards: bounded FIFO retention, floor-aligned time binning with
//! gap-filling, trend-adjusted short-horizon forecasting, and forecast
//! accuracy evaluation.

use thiserror::Error;

pub mod accuracy;
pub mod bins;
pub mod buffer;
pub mod forecast;

// Re-export commonly used types
pub use crate::accuracy::{evaluate, relative_error_pct, AccuracySample};
pub use crate::bins::{aggregate_bins, floor_to_bin, trailing_sum, TimeBin, Timestamped};
pub use crate::buffer::BoundedBuffer;
pub use crate::forecast::{forecast_next_window, ForecastRecord};

/// Errors that can occur when constructing aggregation primitives
#[derive(Error, Debug)]
pub enum StreamError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for stream aggregation operations
pub type Result<T> = std::result::Result<T, StreamError>;
