/// Shared data types for the environmental monitoring service.
///
/// Everything here is a plain value type produced once per poll cycle and
/// replaced wholesale on the next one. Nothing in this module performs I/O;
/// the ingest layer builds these from feed responses and the processing
/// layer transforms them.

use std::fmt;

// ---------------------------------------------------------------------------
// Feed constants
// ---------------------------------------------------------------------------

/// WMO weather codes that indicate thunderstorm activity:
/// 95 = slight/moderate, 96 = with slight hail, 99 = with heavy hail.
pub const STORM_CODES: [i32; 3] = [95, 96, 99];

/// Number of hourly forecast slots requested from the weather feed.
/// Index 0 is the current hour; 1..=5 are the next five hours.
pub const FORECAST_HOURS: usize = 6;

/// Default alert threshold: quakes at or above this magnitude ring the bell.
pub const MAJOR_QUAKE_THRESHOLD: f64 = 6.0;

/// Render severity boundary between Moderate and Minor.
pub const MODERATE_QUAKE_THRESHOLD: f64 = 4.0;

/// Maximum number of earthquakes retained in one snapshot.
pub const MAX_EVENTS: usize = 200;

/// Maximum number of already-alerted event ids remembered for dedup.
pub const LEDGER_CAPACITY: usize = 50;

// ---------------------------------------------------------------------------
// Seismic types
// ---------------------------------------------------------------------------

/// A single earthquake record from the USGS feed.
///
/// The feed marks some fields nullable; the parser substitutes defaults
/// (magnitude 0.0, empty strings) so a partial record still renders.
#[derive(Debug, Clone, PartialEq)]
pub struct EarthquakeEvent {
    pub magnitude: f64,
    /// Human-readable location, e.g. "12 km NNE of Ridgecrest, CA".
    pub place: String,
    /// Feed-unique event identifier, used for alert deduplication.
    pub id: String,
    /// Event time in epoch milliseconds.
    pub time_ms: i64,
}

// ---------------------------------------------------------------------------
// Weather types
// ---------------------------------------------------------------------------

/// Current and near-future weather codes for the monitored location.
///
/// Replaced wholly each cycle. A failed or malformed fetch degrades to
/// `WeatherStatus::default()` (all zeros = clear sky codes).
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherStatus {
    /// WMO weather code for right now.
    pub current_code: i32,
    /// Hourly WMO codes; index 0 is the current hour.
    pub hourly_codes: [i32; FORECAST_HOURS],
}

impl Default for WeatherStatus {
    fn default() -> Self {
        Self {
            current_code: 0,
            hourly_codes: [0; FORECAST_HOURS],
        }
    }
}

/// Storm classification for one cycle, derived from `WeatherStatus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StormCondition {
    /// Thunderstorm code active right now.
    Warning,
    /// Thunderstorm code present in the next five forecast hours.
    Watch,
    Clear,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failure modes for one feed fetch. Neither variant is fatal: the daemon
/// degrades the affected feed to an empty/zeroed state for the cycle and
/// keeps polling.
#[derive(Debug)]
pub enum FeedError {
    /// Network or HTTP-level failure (connect error, non-2xx status).
    Transport(String),
    /// Body received but not decodable into the expected shape.
    Parse(String),
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedError::Transport(msg) => write!(f, "transport failure: {}", msg),
            FeedError::Parse(msg) => write!(f, "parse failure: {}", msg),
        }
    }
}

impl std::error::Error for FeedError {}
