/// envmon_service: console environmental monitor for global seismic
/// activity and local lightning proximity.
///
/// # Module structure
///
/// ```text
/// envmon_service
/// ├── model     — shared data types (EarthquakeEvent, WeatherStatus, FeedError, …)
/// ├── config    — defaults + monitor.toml overlay + CLI flags
/// ├── daemon    — main loop (poll cycle, alert dedup, storm alarm, sleep)
/// ├── ingest
/// │   ├── usgs       — USGS earthquake GeoJSON feed: URL + JSON parsing
/// │   ├── open_meteo — Open-Meteo forecast API: URL construction + parsing
/// │   └── fixtures (test only) — representative API response payloads
/// ├── alert
/// │   ├── ledger — bounded FIFO set of already-alerted quake ids
/// │   └── storm  — thunderstorm classification + one-shot alarm latch
/// ├── analysis
/// │   └── seismic — snapshot ranking/bounding + display severity
/// └── render    — terminal view (clear screen, severity colors, bells)
/// ```

/// Public modules
pub mod alert;
pub mod analysis;
pub mod config;
pub mod daemon;
pub mod ingest;
pub mod model;
pub mod render;
