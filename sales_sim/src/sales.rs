//! Simulated e-commerce order feed
//!
//! Each call produces a small batch of orders (1 to 4, weighted toward 1).
//! Demand follows a time-of-day curve peaking at 2 PM, doubled in holiday
//! mode. Prices come from the category's range; a synthetic concurrent
//! traffic figure is attached for conversion-rate metrics downstream.

use crate::catalog::ProductCategory;
use crate::{round_to_cents, Result, SalesEvent, SimError};
use chrono::{DateTime, Utc};
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

const SECONDS_PER_HOUR: f64 = 3600.0;
/// Assumed average order value used to convert a revenue target into a rate
const ASSUMED_AOV: f64 = 100.0;
/// Orders per batch and their weights
const ORDER_COUNTS: [usize; 4] = [1, 2, 3, 4];
const ORDER_COUNT_WEIGHTS: [f64; 4] = [0.6, 0.25, 0.1, 0.05];

/// Generator of simulated sales events
#[derive(Debug, Clone)]
pub struct SalesGenerator {
    base_hourly_revenue: f64,
    holiday_mode: bool,
    order_count_dist: WeightedIndex<f64>,
    category_dist: WeightedIndex<f64>,
    rng: StdRng,
}

impl SalesGenerator {
    /// Create a generator targeting `base_hourly_revenue` dollars per hour
    pub fn new(base_hourly_revenue: f64) -> Result<Self> {
        Self::from_rng(base_hourly_revenue, StdRng::from_entropy())
    }

    /// Create a deterministic generator for reproducible runs and tests
    pub fn with_seed(base_hourly_revenue: f64, seed: u64) -> Result<Self> {
        Self::from_rng(base_hourly_revenue, StdRng::seed_from_u64(seed))
    }

    fn from_rng(base_hourly_revenue: f64, rng: StdRng) -> Result<Self> {
        if !base_hourly_revenue.is_finite() || base_hourly_revenue <= 0.0 {
            return Err(SimError::InvalidParameter(
                "Hourly revenue target must be positive".to_string(),
            ));
        }

        let order_count_dist = WeightedIndex::new(ORDER_COUNT_WEIGHTS)
            .map_err(|e| SimError::InvalidParameter(format!("Order count weights: {}", e)))?;
        let category_weights: Vec<f64> =
            ProductCategory::ALL.iter().map(|c| c.weight()).collect();
        let category_dist = WeightedIndex::new(category_weights)
            .map_err(|e| SimError::InvalidParameter(format!("Category weights: {}", e)))?;

        Ok(Self {
            base_hourly_revenue,
            holiday_mode: false,
            order_count_dist,
            category_dist,
            rng,
        })
    }

    /// Toggle holiday mode (doubles the demand curve)
    pub fn set_holiday_mode(&mut self, enabled: bool) {
        self.holiday_mode = enabled;
    }

    pub fn holiday_mode(&self) -> bool {
        self.holiday_mode
    }

    pub fn base_hourly_revenue(&self) -> f64 {
        self.base_hourly_revenue
    }

    /// Sinusoidal time-of-day demand multiplier in `[0.7, 1.3]`, doubled in
    /// holiday mode
    pub fn peak_factor(now: DateTime<Utc>, holiday_mode: bool) -> f64 {
        let hour = (now.timestamp().div_euclid(3600) % 24) as f64;
        let mut factor = 1.0 + 0.3 * ((hour - 14.0) * PI / 12.0).sin();
        if holiday_mode {
            factor *= 2.0;
        }
        factor
    }

    /// Expected order arrivals per second at `now`
    pub fn events_per_sec(&self, now: DateTime<Utc>) -> f64 {
        let base = self.base_hourly_revenue / SECONDS_PER_HOUR / ASSUMED_AOV;
        base * Self::peak_factor(now, self.holiday_mode)
    }

    /// Produce the orders arriving at `now`: 1 to 4 events, weighted toward 1
    pub fn generate_batch(&mut self, now: DateTime<Utc>) -> Vec<SalesEvent> {
        let events_per_sec = self.events_per_sec(now);
        let num_orders = ORDER_COUNTS[self.order_count_dist.sample(&mut self.rng)];

        let mut events = Vec::with_capacity(num_orders);
        for _ in 0..num_orders {
            let category = ProductCategory::ALL[self.category_dist.sample(&mut self.rng)];
            let (min_price, max_price) = category.price_range();
            let price = round_to_cents(self.rng.gen_range(min_price..max_price));

            // Concurrent traffic, jittered around the hourly arrival rate
            let jitter = self.rng.gen_range(0.8..1.2);
            let traffic = ((events_per_sec * SECONDS_PER_HOUR * jitter) as u32).max(50);

            events.push(SalesEvent {
                timestamp: now,
                order_id: format!("ord_{}", self.rng.gen_range(10_000..=99_999)),
                category,
                price,
                traffic_per_min: traffic,
            });
        }
        events
    }
}
