//! # Sales Sim
//!
//! `sales_sim` produces the synthetic event streams behind the live
//! dashboards: simulated e-commerce orders (weighted product categories,
//! time-of-day demand curve, optional holiday doubling) and a noisy
//! user-activity signal (sine trend, Gaussian noise, random spikes).
//!
//! Generators own a seedable RNG and take the current time as an argument,
//! so tests control both randomness and the clock. The emitted types
//! implement [`stream_agg::Timestamped`] and can flow straight into the
//! aggregation pipeline.
//!
//! ## Usage Example
//!
//! ```
//! use chrono::Utc;
//! use sales_sim::SalesGenerator;
//!
//! let mut generator = SalesGenerator::with_seed(30_000.0, 7)?;
//! let batch = generator.generate_batch(Utc::now());
//! assert!(!batch.is_empty() && batch.len() <= 4);
//! # Ok::<(), sales_sim::SimError>(())
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use stream_agg::Timestamped;
use thiserror::Error;

mod activity;
mod catalog;
mod sales;

pub use activity::ActivityGenerator;
pub use catalog::ProductCategory;
pub use sales::SalesGenerator;

/// Errors that can occur when configuring event generators
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for simulation operations
pub type Result<T> = std::result::Result<T, SimError>;

/// A single simulated e-commerce order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesEvent {
    /// When the order was placed
    pub timestamp: DateTime<Utc>,
    /// Synthetic order identifier, shaped `ord_#####`
    pub order_id: String,
    /// Product category the order belongs to
    pub category: ProductCategory,
    /// Order value in dollars, rounded to cents
    pub price: f64,
    /// Simulated concurrent site traffic, visitors per minute
    pub traffic_per_min: u32,
}

impl Timestamped for SalesEvent {
    fn timestamp_ms(&self) -> i64 {
        self.timestamp.timestamp_millis()
    }

    fn value(&self) -> f64 {
        self.price
    }
}

impl fmt::Display for SalesEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {:<13} | ${:<8.2} | Traffic: {}/min",
            self.order_id, self.category, self.price, self.traffic_per_min
        )
    }
}

/// One sample of the simulated user-activity signal
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ActivitySample {
    pub timestamp: DateTime<Utc>,
    /// Activity level, events per second
    pub value: f64,
}

impl Timestamped for ActivitySample {
    fn timestamp_ms(&self) -> i64 {
        self.timestamp.timestamp_millis()
    }

    fn value(&self) -> f64 {
        self.value
    }
}

pub(crate) fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
