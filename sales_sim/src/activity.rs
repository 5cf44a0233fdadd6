//! Simulated user-activity signal
//!
//! A slow sine trend over a rising baseline, Gaussian noise, and occasional
//! upward spikes. One sample per call; the caller supplies the clock.

use crate::{round_to_cents, ActivitySample, Result, SimError};
use chrono::{DateTime, Utc};
use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Normal;

/// Generator of simulated user-activity samples
#[derive(Debug, Clone)]
pub struct ActivityGenerator {
    base: f64,
    trend_speed: f64,
    spike_prob: f64,
    noise: Normal<f64>,
    rng: StdRng,
}

impl ActivityGenerator {
    pub const DEFAULT_BASE: f64 = 50.0;
    pub const DEFAULT_TREND_SPEED: f64 = 0.02;
    pub const DEFAULT_NOISE_LEVEL: f64 = 5.0;
    pub const DEFAULT_SPIKE_PROB: f64 = 0.02;

    /// Create a generator.
    ///
    /// `noise_level` is the standard deviation of the Gaussian term (0 is
    /// valid and disables noise); `spike_prob` is the per-sample probability
    /// of an upward spike and must lie in `[0, 1]`.
    pub fn new(base: f64, trend_speed: f64, noise_level: f64, spike_prob: f64) -> Result<Self> {
        Self::from_rng(base, trend_speed, noise_level, spike_prob, StdRng::from_entropy())
    }

    /// Create a deterministic generator for reproducible runs and tests
    pub fn with_seed(
        base: f64,
        trend_speed: f64,
        noise_level: f64,
        spike_prob: f64,
        seed: u64,
    ) -> Result<Self> {
        Self::from_rng(
            base,
            trend_speed,
            noise_level,
            spike_prob,
            StdRng::seed_from_u64(seed),
        )
    }

    fn from_rng(
        base: f64,
        trend_speed: f64,
        noise_level: f64,
        spike_prob: f64,
        rng: StdRng,
    ) -> Result<Self> {
        if !noise_level.is_finite() || noise_level < 0.0 {
            return Err(SimError::InvalidParameter(
                "Noise level must be non-negative".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&spike_prob) {
            return Err(SimError::InvalidParameter(
                "Spike probability must lie in [0, 1]".to_string(),
            ));
        }

        let noise = Normal::new(0.0, noise_level)
            .map_err(|e| SimError::InvalidParameter(format!("Noise distribution: {}", e)))?;

        Ok(Self {
            base,
            trend_speed,
            spike_prob,
            noise,
            rng,
        })
    }

    /// Produce the activity sample for `now`
    pub fn next_sample(&mut self, now: DateTime<Utc>) -> ActivitySample {
        let t_secs = now.timestamp_millis() as f64 / 1000.0;
        let trend = self.base + 10.0 * (t_secs * self.trend_speed).sin() + 0.01 * t_secs;
        let mut value = trend + self.noise.sample(&mut self.rng);

        if self.rng.gen::<f64>() < self.spike_prob {
            value += self.rng.gen_range(20.0..50.0);
        }

        ActivitySample {
            timestamp: now,
            value: round_to_cents(value),
        }
    }
}
