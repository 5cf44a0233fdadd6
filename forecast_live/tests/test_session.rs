use assert_approx_eq::assert_approx_eq;
use chrono::{TimeZone, Utc};
use forecast_live::{ForecastSession, PipelineConfig};
use pretty_assertions::assert_eq;
use sales_sim::{ProductCategory, SalesEvent};

const T0_MS: i64 = 1_700_000_000_000; // some fixed epoch millisecond

fn order(offset_secs: i64, price: f64) -> SalesEvent {
    SalesEvent {
        timestamp: Utc.timestamp_millis_opt(T0_MS + offset_secs * 1000).unwrap(),
        order_id: format!("ord_{:05}", offset_secs),
        category: ProductCategory::Apparel,
        price,
        traffic_per_min: 100,
    }
}

fn test_config() -> PipelineConfig {
    PipelineConfig {
        buffer_capacity: 100,
        bin_width_ms: 10_000,
        window_ms: 60_000,
        trend_bins: 6,
        min_forecast_interval_ms: 30_000,
        forecast_history_len: 3,
    }
}

fn now_ms(offset_secs: i64) -> i64 {
    T0_MS + offset_secs * 1000
}

#[test]
fn test_buffer_capacity_is_enforced() {
    let mut session = ForecastSession::new(test_config()).unwrap();

    let batch: Vec<SalesEvent> = (0..150).map(|i| order(i, 1.0)).collect();
    session.ingest(batch);

    assert_eq!(session.event_count(), 100);
    // The oldest 50 were evicted
    let recent = session.recent_events(100);
    assert_eq!(recent.first().unwrap().order_id, "ord_00050");
    assert_eq!(recent.last().unwrap().order_id, "ord_00149");
}

#[test]
fn test_bins_are_gap_filled_over_the_window() {
    let mut session = ForecastSession::new(test_config()).unwrap();
    session.ingest(vec![order(5, 10.0), order(35, 20.0)]);

    let bins = session.bins(now_ms(60)).unwrap();
    assert_eq!(bins.len(), 7);

    let totals: Vec<f64> = bins.iter().map(|b| b.total).collect();
    assert_eq!(totals, vec![10.0, 0.0, 0.0, 20.0, 0.0, 0.0, 0.0]);
}

#[test]
fn test_forecast_gate_blocks_until_interval_elapses() {
    let mut session = ForecastSession::new(test_config()).unwrap();
    session.ingest((0..60).map(|i| order(i, 10.0)).collect());

    // First call is never gated
    let first = session.maybe_forecast(now_ms(60)).unwrap();
    assert!(first.is_some());

    // 10s later: still inside the 30s interval
    assert!(session.maybe_forecast(now_ms(70)).unwrap().is_none());

    // 30s later: gate reopens
    let second = session.maybe_forecast(now_ms(90)).unwrap();
    assert!(second.is_some());
    assert_eq!(session.forecast_history().len(), 2);
}

#[test]
fn test_forecast_history_is_bounded() {
    let mut session = ForecastSession::new(test_config()).unwrap();

    for i in 0..5 {
        let record = session.maybe_forecast(now_ms(i * 30)).unwrap();
        assert!(record.is_some());
    }

    // history_len is 3: only the last three survive
    let history = session.forecast_history();
    assert_eq!(history.len(), 3);
    assert_eq!(history.first().unwrap().issued_at_ms, now_ms(60));
    assert_eq!(history.last().unwrap().issued_at_ms, now_ms(120));
}

#[test]
fn test_steady_stream_forecast_value() {
    let mut session = ForecastSession::new(test_config()).unwrap();
    // One $10 order per second for the whole window: $100 per 10s bin
    session.ingest((0..60).map(|i| order(i, 10.0)).collect());

    let record = session.maybe_forecast(now_ms(60)).unwrap().unwrap();
    assert_eq!(record.horizon_ms, 60_000);

    // Trailing six bins hold [100, 100, 100, 100, 100, 0] (the end bin at
    // t=60 is still empty): baseline 83.33, halves 100 and 66.67, trend
    // -33.33, per-bin 66.67 -> 400 total
    assert_approx_eq!(record.predicted_value, 400.0, 1e-6);
}

#[test]
fn test_empty_session_forecasts_zero() {
    let mut session = ForecastSession::new(test_config()).unwrap();

    let record = session.maybe_forecast(now_ms(60)).unwrap().unwrap();
    assert_eq!(record.predicted_value, 0.0);
    assert!(session.bins(now_ms(60)).unwrap().is_empty());
}

#[test]
fn test_accuracy_waits_for_the_horizon() {
    let mut session = ForecastSession::new(test_config()).unwrap();
    session.ingest((0..60).map(|i| order(i, 10.0)).collect());

    let record = session.maybe_forecast(now_ms(60)).unwrap().unwrap();

    // Horizon not elapsed yet
    assert!(session.accuracy(now_ms(90)).is_none());

    // Fill the forecasted minute with $5/s = $300 realized (the trailing-sum
    // cutoff is exclusive, so the minute is (60, 120])
    session.ingest((61..=120).map(|i| order(i, 5.0)).collect());

    let sample = session.accuracy(now_ms(120)).unwrap();
    assert_approx_eq!(sample.realized_value, 300.0, 1e-9);
    assert_approx_eq!(sample.predicted_value, record.predicted_value, 1e-9);
    assert_approx_eq!(
        sample.relative_error_pct,
        (record.predicted_value - 300.0).abs() / 300.0 * 100.0,
        1e-9
    );
}

#[test]
fn test_accuracy_guards_zero_realized() {
    let mut session = ForecastSession::new(test_config()).unwrap();

    session.maybe_forecast(now_ms(0)).unwrap();
    // Horizon elapsed, but nothing was realized
    let sample = session.accuracy(now_ms(120)).unwrap();
    assert_eq!(sample.realized_value, 0.0);
    assert_eq!(sample.relative_error_pct, 0.0);
}

#[test]
fn test_pause_blocks_writes_but_not_reads() {
    let mut session = ForecastSession::new(test_config()).unwrap();
    session.ingest(vec![order(5, 10.0)]);

    session.pause();
    assert!(session.is_paused());

    session.ingest(vec![order(6, 99.0)]);
    assert_eq!(session.event_count(), 1);
    assert!(session.maybe_forecast(now_ms(60)).unwrap().is_none());

    // Retained data still renders
    assert_eq!(session.bins(now_ms(60)).unwrap().len(), 7);
    assert_eq!(session.recent_events(10).len(), 1);

    session.resume();
    session.ingest(vec![order(7, 3.0)]);
    assert_eq!(session.event_count(), 2);
}

#[test]
fn test_reset_clears_state_but_keeps_config() {
    let mut session = ForecastSession::new(test_config()).unwrap();
    session.ingest(vec![order(1, 10.0), order(2, 20.0)]);
    session.maybe_forecast(now_ms(60)).unwrap();

    session.reset();

    assert_eq!(session.event_count(), 0);
    assert!(session.forecast_history().is_empty());
    assert!(session.latest_forecast().is_none());
    assert_eq!(session.config(), &test_config());

    // The forecast gate reopened with the state
    assert!(session.maybe_forecast(now_ms(61)).unwrap().is_some());
}

#[test]
fn test_recent_events_returns_the_tail_in_order() {
    let mut session = ForecastSession::new(test_config()).unwrap();
    session.ingest((0..20).map(|i| order(i, 1.0)).collect());

    let recent = session.recent_events(5);
    let ids: Vec<&str> = recent.iter().map(|e| e.order_id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["ord_00015", "ord_00016", "ord_00017", "ord_00018", "ord_00019"]
    );
}
