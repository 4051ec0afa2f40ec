/// Core daemon implementation for the environmental monitor.
///
/// This module implements the main loop that:
/// 1. Polls the USGS earthquake feed and builds the ranked snapshot
/// 2. Runs alert dedup over the snapshot
/// 3. Polls the Open-Meteo forecast for the monitored location
/// 4. Classifies storm proximity and drives the one-shot alarm
/// 5. Renders the refreshed console view and sleeps out the interval
///
/// The processing stages are pure functions of (config, state, fetch
/// result), so a failed fetch is just another input: either feed degrades
/// to an empty/zeroed state for the cycle and the loop continues. Nothing
/// in a cycle can take the process down.

use chrono::{DateTime, Utc};

use crate::alert::ledger::AlertLedger;
use crate::alert::storm::{self, StormAlarm};
use crate::analysis::seismic;
use crate::config::MonitorConfig;
use crate::ingest::{open_meteo, usgs};
use crate::model::{EarthquakeEvent, FeedError, StormCondition, WeatherStatus};
use crate::render;

// ---------------------------------------------------------------------------
// Cycle state and view model
// ---------------------------------------------------------------------------

/// The only mutable state that survives between cycles. Owned by the
/// daemon, passed into the processing stages by reference; no globals.
pub struct MonitorState {
    pub ledger: AlertLedger,
    pub storm: StormAlarm,
}

impl MonitorState {
    pub fn new(config: &MonitorConfig) -> Self {
        Self {
            ledger: AlertLedger::new(config.ledger_capacity),
            storm: StormAlarm::new(),
        }
    }
}

/// Seismic half of one cycle's output.
pub struct SeismicCycle {
    /// Filtered, ranked, bounded quake list for display.
    pub snapshot: Vec<EarthquakeEvent>,
    /// Ids that crossed the alert threshold for the first time this cycle.
    pub new_alerts: Vec<String>,
    /// Set when the feed degraded and the snapshot is empty because of it.
    pub feed_error: Option<String>,
}

/// Weather half of one cycle's output.
pub struct WeatherCycle {
    pub status: WeatherStatus,
    pub condition: StormCondition,
    /// True on the cycle the storm one-shot alarm fires.
    pub alarm_fired: bool,
    pub feed_error: Option<String>,
}

/// Everything the renderer needs for one refresh. Built once per cycle,
/// read once, discarded.
pub struct CycleView {
    pub seismic: SeismicCycle,
    pub weather: WeatherCycle,
    pub rendered_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Pure cycle stages
// ---------------------------------------------------------------------------

/// Builds the cycle's seismic state from a fetch result.
///
/// On success: filter, rank, and bound the events, then run every retained
/// quake at or above the alert threshold through the ledger, collecting the
/// ids that alert for the first time.
///
/// On failure: empty snapshot, ledger untouched.
pub fn process_seismic(
    config: &MonitorConfig,
    ledger: &mut AlertLedger,
    fetched: Result<Vec<EarthquakeEvent>, FeedError>,
) -> SeismicCycle {
    let (events, feed_error) = match fetched {
        Ok(events) => (events, None),
        Err(e) => (Vec::new(), Some(e.to_string())),
    };

    let snapshot = seismic::build_snapshot(events, config.min_magnitude, config.max_events);

    let mut new_alerts = Vec::new();
    for event in &snapshot {
        if event.magnitude >= config.alert_threshold && ledger.should_alert(&event.id) {
            ledger.record(&event.id);
            new_alerts.push(event.id.clone());
        }
    }

    SeismicCycle {
        snapshot,
        new_alerts,
        feed_error,
    }
}

/// Builds the cycle's weather state from a fetch result.
///
/// On failure the status zero-fills, which classifies as `Clear`; the
/// alarm latch sees that `Clear` like any other, so a degraded feed
/// re-arms the one-shot rather than holding a stale warning.
pub fn process_weather(
    alarm: &mut StormAlarm,
    fetched: Result<WeatherStatus, FeedError>,
) -> WeatherCycle {
    let (status, feed_error) = match fetched {
        Ok(status) => (status, None),
        Err(e) => (WeatherStatus::default(), Some(e.to_string())),
    };

    let condition = storm::classify(&status);
    let alarm_fired = alarm.observe(condition);

    WeatherCycle {
        status,
        condition,
        alarm_fired,
        feed_error,
    }
}

// ---------------------------------------------------------------------------
// Daemon
// ---------------------------------------------------------------------------

pub struct Daemon {
    config: MonitorConfig,
    state: MonitorState,
    client: reqwest::blocking::Client,
}

impl Daemon {
    pub fn new(config: MonitorConfig) -> Self {
        let state = MonitorState::new(&config);
        Self {
            config,
            state,
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Runs one full fetch → process cycle and returns the view to render.
    ///
    /// The two feeds are fetched sequentially; each one's processing stage
    /// runs before the next fetch starts.
    pub fn poll_once(&mut self) -> CycleView {
        let seismic_fetch = usgs::fetch_latest(&self.client);
        let seismic = process_seismic(&self.config, &mut self.state.ledger, seismic_fetch);

        let weather_fetch =
            open_meteo::fetch_forecast(&self.client, self.config.latitude, self.config.longitude);
        let weather = process_weather(&mut self.state.storm, weather_fetch);

        CycleView {
            seismic,
            weather,
            rendered_at: Utc::now(),
        }
    }

    /// Main loop; runs until the process is killed.
    pub fn run(&mut self) {
        loop {
            let start = Utc::now();

            let view = self.poll_once();
            render::render(&view, &self.config);

            // Sleep whatever remains of the interval after fetch time.
            let elapsed = (Utc::now() - start).num_seconds();
            let sleep_seconds = self.config.poll_interval_seconds as i64 - elapsed;
            if sleep_seconds > 0 {
                std::thread::sleep(std::time::Duration::from_secs(sleep_seconds as u64));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
