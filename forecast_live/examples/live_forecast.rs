//! Console rendition of the live forecast dashboard's refresh loop.
//!
//! Runs on a simulated clock (one 3 s tick per iteration) so the whole
//! session plays out instantly: ingest a batch, try to issue a forecast,
//! and print whatever a display layer would chart.

use chrono::{Duration, TimeZone, Utc};
use forecast_live::{ForecastSession, PipelineConfig};
use sales_sim::SalesGenerator;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = PipelineConfig::default();
    println!("{}\n", serde_json::to_string_pretty(&config)?);

    let mut session = ForecastSession::new(config)?;
    let mut generator = SalesGenerator::with_seed(30_000.0, 42)?;
    generator.set_holiday_mode(true);

    let mut now = Utc.with_ymd_and_hms(2024, 11, 29, 14, 0, 0).unwrap();

    for tick in 0..100 {
        session.ingest(generator.generate_batch(now));
        let now_ms = now.timestamp_millis();

        if let Some(record) = session.maybe_forecast(now_ms)? {
            println!(
                "[tick {:3}] forecast next {}s: ${:.2}",
                tick,
                record.horizon_ms / 1000,
                record.predicted_value
            );
        }

        if let Some(sample) = session.accuracy(now_ms) {
            println!(
                "           predicted ${:.2} vs actual ${:.2} -> error {:.1}%",
                sample.predicted_value, sample.realized_value, sample.relative_error_pct
            );
        }

        now = now + Duration::seconds(3);
    }

    let now_ms = now.timestamp_millis();
    println!("\n{}", session.sales_summary(now_ms));

    println!("Recent orders:");
    for event in session.recent_events(10) {
        println!("  {}", event);
    }

    let bins = session.bins(now_ms)?;
    let tail: Vec<String> = bins
        .iter()
        .rev()
        .take(6)
        .rev()
        .map(|b| format!("{:.0}", b.total))
        .collect();
    println!("Last six 10s bins: [{}]", tail.join(", "));

    Ok(())
}
