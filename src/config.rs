/// Runtime configuration for the environmental monitor.
///
/// Three layers, later wins:
///   1. built-in defaults (Guisborough, UK; 2-minute poll; M6+ alerts)
///   2. optional `monitor.toml` in the working directory
///   3. command-line flags
///
/// The file is optional because the CLI-only mode must keep working; a
/// malformed file is reported and ignored rather than aborting startup.

use serde::Deserialize;
use std::fs;

use crate::model::{LEDGER_CAPACITY, MAJOR_QUAKE_THRESHOLD, MAX_EVENTS};

/// Expected in the current working directory (project root when running
/// via `cargo run`).
pub const CONFIG_PATH: &str = "monitor.toml";

// ---------------------------------------------------------------------------
// Resolved configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Quakes below this magnitude are dropped from the snapshot.
    pub min_magnitude: f64,
    /// Quakes at or above this magnitude ring the bell (once per id).
    pub alert_threshold: f64,
    /// Monitored coordinates for the lightning feed.
    pub latitude: f64,
    pub longitude: f64,
    /// Seconds between poll cycles.
    pub poll_interval_seconds: u64,
    /// Snapshot capacity.
    pub max_events: usize,
    /// Alert dedup window size.
    pub ledger_capacity: usize,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            min_magnitude: 0.0,
            alert_threshold: MAJOR_QUAKE_THRESHOLD,
            latitude: 54.53,
            longitude: -1.05,
            poll_interval_seconds: 120,
            max_events: MAX_EVENTS,
            ledger_capacity: LEDGER_CAPACITY,
        }
    }
}

// ---------------------------------------------------------------------------
// Raw TOML structures (every field optional)
// ---------------------------------------------------------------------------

#[derive(Deserialize, Default)]
struct RawConfig {
    #[serde(default)]
    monitor: RawMonitorSection,
    #[serde(default)]
    location: RawLocationSection,
}

#[derive(Deserialize, Default)]
struct RawMonitorSection {
    poll_interval_seconds: Option<u64>,
    min_magnitude: Option<f64>,
}

#[derive(Deserialize, Default)]
struct RawLocationSection {
    latitude: Option<f64>,
    longitude: Option<f64>,
}

// ---------------------------------------------------------------------------
// Loading and overlay
// ---------------------------------------------------------------------------

impl MonitorConfig {
    /// Defaults overlaid with `monitor.toml`, if present.
    pub fn load() -> Self {
        Self::from_file(CONFIG_PATH)
    }

    pub fn from_file(path: &str) -> Self {
        let mut config = Self::default();
        if let Ok(contents) = fs::read_to_string(path) {
            if let Err(e) = config.apply_toml(&contents) {
                eprintln!("Ignoring malformed {}: {}", path, e);
            }
        }
        config
    }

    fn apply_toml(&mut self, contents: &str) -> Result<(), toml::de::Error> {
        let raw: RawConfig = toml::from_str(contents)?;
        if let Some(interval) = raw.monitor.poll_interval_seconds {
            self.poll_interval_seconds = interval;
        }
        if let Some(magnitude) = raw.monitor.min_magnitude {
            self.set_min_magnitude(magnitude);
        }
        if let Some(latitude) = raw.location.latitude {
            self.latitude = latitude;
        }
        if let Some(longitude) = raw.location.longitude {
            self.longitude = longitude;
        }
        Ok(())
    }

    /// Applies command-line flags on top of whatever is already resolved.
    ///
    /// - `-q <float>` — minimum magnitude filter, clamped to >= 0; the alert
    ///   threshold follows it.
    /// - `-l <lat> <lon>` — monitoring coordinates.
    /// - `test` — alert on everything, for verifying the bell path.
    ///
    /// Unknown arguments (including `-q`/`-l` missing their values) are
    /// reported and skipped; processing continues with the rest.
    pub fn apply_cli_args(&mut self, args: &[String]) {
        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "-q" if i + 1 < args.len() => {
                    let magnitude = args[i + 1].parse::<f64>().unwrap_or(0.0);
                    self.set_min_magnitude(magnitude);
                    i += 2;
                }
                "-l" if i + 2 < args.len() => {
                    self.latitude = args[i + 1].parse::<f64>().unwrap_or(0.0);
                    self.longitude = args[i + 2].parse::<f64>().unwrap_or(0.0);
                    i += 3;
                }
                "test" => {
                    self.alert_threshold = 0.0;
                    i += 1;
                }
                other => {
                    println!("Unknown argument: {}", other);
                    i += 1;
                }
            }
        }
    }

    /// The filter and the alert threshold move together: raising the filter
    /// means the operator only cares about quakes that large at all.
    fn set_min_magnitude(&mut self, magnitude: f64) {
        let clamped = if magnitude < 0.0 { 0.0 } else { magnitude };
        self.min_magnitude = clamped;
        self.alert_threshold = clamped;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
