/// Feed clients for the environmental monitoring service.
///
/// Submodules:
/// - `usgs`       — USGS earthquake GeoJSON summary feed: URL + JSON parsing.
/// - `open_meteo` — Open-Meteo forecast API: URL construction + JSON parsing.
/// - `fixtures` (test only) — representative API response payloads.
///
/// Each client keeps its parse function pure (`&str -> Result<_, FeedError>`)
/// so the processing pipeline can be tested without network I/O.

pub mod fixtures;
pub mod open_meteo;
pub mod usgs;
