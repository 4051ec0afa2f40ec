/// Integration tests for the poll-cycle lifecycle.
///
/// These tests drive the full pipeline the daemon runs each cycle, with the
/// fetch step substituted by inline feed payloads:
/// 1. Feed body parsing into typed records
/// 2. Snapshot construction and alert dedup across successive cycles
/// 3. Storm classification and the one-shot alarm across successive cycles
/// 4. Degraded cycles (transport and parse failures) leaving state intact
///
/// No network access required; run with: cargo test --test cycle_lifecycle

use envmon_service::alert::ledger::AlertLedger;
use envmon_service::alert::storm::StormAlarm;
use envmon_service::config::MonitorConfig;
use envmon_service::daemon::{process_seismic, process_weather};
use envmon_service::ingest::{open_meteo, usgs};
use envmon_service::model::{FeedError, StormCondition};

// ---------------------------------------------------------------------------
// Test Payloads
// ---------------------------------------------------------------------------

/// One major Kermadec quake plus a Californian microquake, feed-ordered by
/// recency so the major event is NOT first in feed order.
const QUAKE_FEED_BODY: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "id": "ci40474920",
      "properties": { "mag": 1.5, "place": "14km SW of Searles Valley, CA", "time": 1714567500000 }
    },
    {
      "type": "Feature",
      "id": "us7000major",
      "properties": { "mag": 6.8, "place": "Kermadec Islands region", "time": 1714567200000 }
    }
  ]
}"#;

const STORM_FORECAST_BODY: &str = r#"{
  "current": { "weather_code": 95 },
  "hourly": { "weather_code": [95, 96, 0, 0, 0, 0] }
}"#;

const CALM_FORECAST_BODY: &str = r#"{
  "current": { "weather_code": 1 },
  "hourly": { "weather_code": [1, 0, 0, 2, 1, 0] }
}"#;

fn test_config() -> MonitorConfig {
    MonitorConfig {
        min_magnitude: 0.0,
        alert_threshold: 6.0,
        ..MonitorConfig::default()
    }
}

// ---------------------------------------------------------------------------
// 1. Feed Parsing Into the Cycle
// ---------------------------------------------------------------------------

#[test]
fn test_parsed_feed_flows_into_a_ranked_snapshot() {
    let config = test_config();
    let mut ledger = AlertLedger::new(config.ledger_capacity);

    let cycle = process_seismic(&config, &mut ledger, usgs::parse_feed(QUAKE_FEED_BODY));

    assert_eq!(cycle.snapshot.len(), 2);
    assert_eq!(
        cycle.snapshot[0].id, "us7000major",
        "strongest quake must rank first regardless of feed order"
    );
    assert!(cycle.feed_error.is_none());
}

#[test]
fn test_magnitude_filter_applies_before_display() {
    let config = MonitorConfig {
        min_magnitude: 4.0,
        alert_threshold: 4.0,
        ..MonitorConfig::default()
    };
    let mut ledger = AlertLedger::new(config.ledger_capacity);

    let cycle = process_seismic(&config, &mut ledger, usgs::parse_feed(QUAKE_FEED_BODY));

    assert_eq!(cycle.snapshot.len(), 1, "microquake is filtered out");
    assert_eq!(cycle.snapshot[0].id, "us7000major");
}

// ---------------------------------------------------------------------------
// 2. Alert Dedup Across Cycles
// ---------------------------------------------------------------------------

#[test]
fn test_major_quake_alerts_once_across_repeated_cycles() {
    let config = test_config();
    let mut ledger = AlertLedger::new(config.ledger_capacity);

    // The hourly feed replays the same events on every poll.
    let first = process_seismic(&config, &mut ledger, usgs::parse_feed(QUAKE_FEED_BODY));
    assert_eq!(first.new_alerts, vec!["us7000major".to_string()]);

    for _ in 0..3 {
        let next = process_seismic(&config, &mut ledger, usgs::parse_feed(QUAKE_FEED_BODY));
        assert!(
            next.new_alerts.is_empty(),
            "an already-alerted id must stay silent while in the ledger"
        );
        assert_eq!(next.snapshot.len(), 2, "display is unaffected by dedup");
    }
}

#[test]
fn test_test_mode_alerts_on_every_distinct_event() {
    let mut config = test_config();
    config.alert_threshold = 0.0; // the CLI `test` flag

    let mut ledger = AlertLedger::new(config.ledger_capacity);
    let cycle = process_seismic(&config, &mut ledger, usgs::parse_feed(QUAKE_FEED_BODY));

    assert_eq!(cycle.new_alerts.len(), 2, "threshold 0 alerts on everything");
}

// ---------------------------------------------------------------------------
// 3. Storm Lifecycle Across Cycles
// ---------------------------------------------------------------------------

#[test]
fn test_storm_alarm_fires_once_per_excursion() {
    let mut alarm = StormAlarm::new();

    // Calm → storm: fires.
    let calm = process_weather(&mut alarm, open_meteo::parse_forecast(CALM_FORECAST_BODY));
    assert_eq!(calm.condition, StormCondition::Clear);
    assert!(!calm.alarm_fired);

    let storm = process_weather(&mut alarm, open_meteo::parse_forecast(STORM_FORECAST_BODY));
    assert_eq!(storm.condition, StormCondition::Warning);
    assert!(storm.alarm_fired, "entering a warning must ring the bell");

    // Storm persists: silent.
    let sustained = process_weather(&mut alarm, open_meteo::parse_forecast(STORM_FORECAST_BODY));
    assert!(!sustained.alarm_fired);

    // Storm clears, then returns: fires again.
    process_weather(&mut alarm, open_meteo::parse_forecast(CALM_FORECAST_BODY));
    let returned = process_weather(&mut alarm, open_meteo::parse_forecast(STORM_FORECAST_BODY));
    assert!(returned.alarm_fired, "a fresh excursion re-fires the one-shot");
}

// ---------------------------------------------------------------------------
// 4. Degraded Cycles
// ---------------------------------------------------------------------------

#[test]
fn test_transport_failure_degrades_without_touching_state() {
    let config = test_config();
    let mut ledger = AlertLedger::new(config.ledger_capacity);
    let mut alarm = StormAlarm::new();

    // A healthy cycle first, to populate state.
    process_seismic(&config, &mut ledger, usgs::parse_feed(QUAKE_FEED_BODY));
    process_weather(&mut alarm, open_meteo::parse_forecast(STORM_FORECAST_BODY));
    assert_eq!(ledger.len(), 1);
    assert!(alarm.is_active());

    // Both feeds fail.
    let seismic = process_seismic(
        &config,
        &mut ledger,
        Err(FeedError::Transport("connect timeout".to_string())),
    );
    let weather = process_weather(
        &mut alarm,
        Err(FeedError::Transport("connect timeout".to_string())),
    );

    assert!(seismic.snapshot.is_empty());
    assert!(seismic.new_alerts.is_empty());
    assert_eq!(ledger.len(), 1, "ledger survives the outage untouched");

    assert_eq!(weather.condition, StormCondition::Clear);
    assert!(!weather.alarm_fired);

    // Recovery: the same quake is still deduped; the storm fires anew.
    let recovered_seismic =
        process_seismic(&config, &mut ledger, usgs::parse_feed(QUAKE_FEED_BODY));
    assert!(recovered_seismic.new_alerts.is_empty());

    let recovered_weather =
        process_weather(&mut alarm, open_meteo::parse_forecast(STORM_FORECAST_BODY));
    assert!(
        recovered_weather.alarm_fired,
        "the outage re-armed the one-shot, so the ongoing storm fires again"
    );
}

#[test]
fn test_malformed_bodies_degrade_like_transport_failures() {
    let config = test_config();
    let mut ledger = AlertLedger::new(config.ledger_capacity);
    let mut alarm = StormAlarm::new();

    let seismic = process_seismic(&config, &mut ledger, usgs::parse_feed("<html>503</html>"));
    assert!(seismic.snapshot.is_empty());
    assert!(seismic.feed_error.is_some());
    assert!(ledger.is_empty());

    let weather = process_weather(&mut alarm, open_meteo::parse_forecast("<html>503</html>"));
    assert_eq!(weather.condition, StormCondition::Clear);
    assert!(weather.feed_error.is_some());
}
