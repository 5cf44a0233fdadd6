//! Headline metrics for the dashboard header rows
//!
//! Pure functions over an event slice plus the current time. The trailing
//! minute drives the rate metrics; totals and the top category cover
//! everything still retained in the buffer.

use sales_sim::{ActivitySample, ProductCategory, SalesEvent};
use statrs::statistics::Statistics;
use std::collections::HashMap;
use std::fmt;
use stream_agg::Timestamped;

/// Span the rate metrics (revenue, orders, conversion) are computed over
const RATE_SPAN_MS: i64 = 60_000;

/// Headline sales metrics
#[derive(Debug, Clone, PartialEq)]
pub struct SalesSummary {
    /// Revenue over the trailing minute
    pub revenue_last_min: f64,
    /// Order count over the trailing minute
    pub orders_last_min: usize,
    /// Average order value over the trailing minute, 0 with no orders
    pub avg_order_value: f64,
    /// Orders per mean concurrent traffic over the trailing minute, as a
    /// percentage; 0 with no traffic
    pub conversion_rate_pct: f64,
    /// Revenue over all retained events
    pub total_revenue: f64,
    /// Modal category over all retained events
    pub top_category: Option<ProductCategory>,
}

impl fmt::Display for SalesSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Key Metrics (last 60 sec):")?;
        writeln!(f, "  Revenue:    ${:.0}", self.revenue_last_min)?;
        writeln!(f, "  Orders:     {}", self.orders_last_min)?;
        writeln!(f, "  AOV:        ${:.1}", self.avg_order_value)?;
        writeln!(f, "  Conv. Rate: {:.1}%", self.conversion_rate_pct)?;
        match &self.top_category {
            Some(category) => writeln!(f, "  Top Category: {}", category),
            None => writeln!(f, "  Top Category: N/A"),
        }
    }
}

/// Compute the sales header metrics from the retained events
pub fn sales_summary(events: &[SalesEvent], now_ms: i64) -> SalesSummary {
    let cutoff = now_ms - RATE_SPAN_MS;
    let recent: Vec<&SalesEvent> = events
        .iter()
        .filter(|e| e.timestamp_ms() > cutoff)
        .collect();

    let revenue_last_min: f64 = recent.iter().map(|e| e.price).sum();
    let orders_last_min = recent.len();
    let avg_order_value = if orders_last_min > 0 {
        revenue_last_min / orders_last_min as f64
    } else {
        0.0
    };

    let conversion_rate_pct = if recent.is_empty() {
        0.0
    } else {
        let avg_traffic = recent
            .iter()
            .map(|e| e.traffic_per_min as f64)
            .mean();
        if avg_traffic > 0.0 {
            orders_last_min as f64 / avg_traffic * 100.0
        } else {
            0.0
        }
    };

    SalesSummary {
        revenue_last_min,
        orders_last_min,
        avg_order_value,
        conversion_rate_pct,
        total_revenue: events.iter().map(|e| e.price).sum(),
        top_category: top_category(events),
    }
}

/// Modal category over the events; ties resolve to the later catalog entry
fn top_category(events: &[SalesEvent]) -> Option<ProductCategory> {
    if events.is_empty() {
        return None;
    }

    let mut counts: HashMap<ProductCategory, usize> = HashMap::new();
    for event in events {
        *counts.entry(event.category).or_insert(0) += 1;
    }

    ProductCategory::ALL
        .into_iter()
        .filter(|c| counts.contains_key(c))
        .max_by_key(|c| counts[c])
}

/// Headline activity metrics: latest, highest and lowest retained sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivitySummary {
    pub current: f64,
    pub peak: f64,
    pub low: f64,
}

impl fmt::Display for ActivitySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Current: {:.1} | Peak: {:.1} | Low: {:.1}",
            self.current, self.peak, self.low
        )
    }
}

/// Compute the activity header metrics; `None` for an empty slice
pub fn activity_summary(samples: &[ActivitySample]) -> Option<ActivitySummary> {
    let current = samples.last()?.value;
    let peak = samples.iter().map(|s| s.value).fold(f64::MIN, f64::max);
    let low = samples.iter().map(|s| s.value).fold(f64::MAX, f64::min);

    Some(ActivitySummary { current, peak, low })
}
