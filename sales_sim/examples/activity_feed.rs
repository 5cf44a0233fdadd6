//! Streams the simulated user-activity signal to stdout.

use chrono::Utc;
use sales_sim::ActivityGenerator;
use std::thread;
use std::time::Duration;

fn main() -> Result<(), sales_sim::SimError> {
    let mut generator = ActivityGenerator::new(
        ActivityGenerator::DEFAULT_BASE,
        ActivityGenerator::DEFAULT_TREND_SPEED,
        ActivityGenerator::DEFAULT_NOISE_LEVEL,
        ActivityGenerator::DEFAULT_SPIKE_PROB,
    )?;

    for _ in 0..15 {
        let sample = generator.next_sample(Utc::now());
        println!(
            "{} | activity {:6.2} events/sec",
            sample.timestamp.format("%H:%M:%S"),
            sample.value
        );
        thread::sleep(Duration::from_secs(1));
    }

    Ok(())
}
