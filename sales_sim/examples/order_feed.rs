//! Prints a few batches of simulated orders, the way the sales dashboard
//! would ingest them.

use chrono::Utc;
use sales_sim::SalesGenerator;
use std::thread;
use std::time::Duration;

fn main() -> Result<(), sales_sim::SimError> {
    println!("Simulating live sales events (mid-size store, ~$30K/hour)...\n");

    let mut generator = SalesGenerator::new(30_000.0)?;

    for batch_no in 1..=10 {
        let now = Utc::now();
        let batch = generator.generate_batch(now);
        let revenue: f64 = batch.iter().map(|e| e.price).sum();

        println!(
            "Batch {:2} | {} order(s) | Revenue: ${:.2}",
            batch_no,
            batch.len(),
            revenue
        );
        for event in &batch {
            println!("   -> {}", event);
        }

        thread::sleep(Duration::from_secs(2));
    }

    Ok(())
}
