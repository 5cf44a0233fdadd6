//! # Forecast Live
//!
//! The pipeline layer behind the live sales-forecast dashboard. One
//! [`ForecastSession`] owns everything a refresh cycle touches: the bounded
//! event buffer, the forecast history, the pause flag, and the
//! minimum-interval forecast gate. Each cycle runs ingestion, aggregation,
//! forecasting, and accuracy lookup as a single synchronous pass; the
//! display layer only reads the outputs.
//!
//! ## Features
//!
//! - Explicit session context, no process-wide state; `reset` restores a
//!   fresh session with the same configuration
//! - Fixed-width, gap-filled time bins over a trailing window (via
//!   [`stream_agg`])
//! - Trend-adjusted short-horizon forecasts, issued at most once per
//!   configured interval and kept in a bounded history
//! - Relative-error accuracy once a forecast's horizon has elapsed
//! - Headline dashboard metrics (revenue, AOV, conversion rate, top
//!   category; activity current/peak/low)
//!
//! ## Quick Start
//!
//! ```
//! use chrono::Utc;
//! use forecast_live::{ForecastSession, PipelineConfig};
//! use sales_sim::SalesGenerator;
//!
//! # fn main() -> Result<(), forecast_live::PipelineError> {
//! let mut session = ForecastSession::new(PipelineConfig::default())?;
//! let mut generator = SalesGenerator::with_seed(30_000.0, 42)?;
//!
//! // One refresh cycle
//! let now = Utc::now();
//! session.ingest(generator.generate_batch(now));
//! let now_ms = now.timestamp_millis();
//!
//! if let Some(record) = session.maybe_forecast(now_ms)? {
//!     println!("predicted next minute: ${:.2}", record.predicted_value);
//! }
//! let bins = session.bins(now_ms)?; // chart series
//! assert!(!bins.is_empty());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod session;
pub mod summary;

// Re-export commonly used types
pub use crate::config::PipelineConfig;
pub use crate::error::{PipelineError, Result};
pub use crate::session::ForecastSession;
pub use crate::summary::{activity_summary, sales_summary, ActivitySummary, SalesSummary};
