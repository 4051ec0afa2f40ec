/// Open-Meteo forecast API client.
///
/// Retrieves the current WMO weather code plus a six-hour hourly code
/// forecast for the monitored location, used for thunderstorm proximity
/// classification.
///
/// API documentation: https://open-meteo.com/en/docs
/// Base URL: https://api.open-meteo.com/v1/forecast

use serde::Deserialize;

use crate::model::{FeedError, WeatherStatus, FORECAST_HOURS};

const OPEN_METEO_BASE: &str = "https://api.open-meteo.com/v1/forecast";

// ---------------------------------------------------------------------------
// Serde structures
// ---------------------------------------------------------------------------

// Every section is optional: a degraded upstream response should zero-fill
// rather than fail the cycle.

#[derive(Deserialize)]
struct ForecastResponse {
    current: Option<CurrentConditions>,
    hourly: Option<HourlyForecast>,
}

#[derive(Deserialize)]
struct CurrentConditions {
    weather_code: Option<i32>,
}

#[derive(Deserialize)]
struct HourlyForecast {
    weather_code: Option<Vec<i32>>,
}

// ---------------------------------------------------------------------------
// URL construction
// ---------------------------------------------------------------------------

/// Builds the forecast URL for the given coordinates.
///
/// Requests the current weather code and exactly `FORECAST_HOURS` hourly
/// codes; the first hourly slot is the current hour.
pub fn build_forecast_url(latitude: f64, longitude: f64) -> String {
    format!(
        "{}?latitude={:.2}&longitude={:.2}&current=weather_code&hourly=weather_code&forecast_hours={}",
        OPEN_METEO_BASE, latitude, longitude, FORECAST_HOURS
    )
}

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

/// Parses an Open-Meteo forecast response body into a `WeatherStatus`.
///
/// Missing `current` or `hourly` sections, a missing code field, or an
/// hourly array shorter than `FORECAST_HOURS` all degrade to zero-filled
/// slots. Extra hourly entries beyond the window are ignored.
///
/// # Errors
/// - `FeedError::Parse` — body is not valid JSON for the envelope at all.
pub fn parse_forecast(json: &str) -> Result<WeatherStatus, FeedError> {
    let response: ForecastResponse = serde_json::from_str(json)
        .map_err(|e| FeedError::Parse(format!("forecast deserialization failed: {}", e)))?;

    let current_code = response
        .current
        .and_then(|c| c.weather_code)
        .unwrap_or(0);

    let mut hourly_codes = [0; FORECAST_HOURS];
    if let Some(codes) = response.hourly.and_then(|h| h.weather_code) {
        for (slot, code) in hourly_codes.iter_mut().zip(codes) {
            *slot = code;
        }
    }

    Ok(WeatherStatus {
        current_code,
        hourly_codes,
    })
}

// ---------------------------------------------------------------------------
// Fetching
// ---------------------------------------------------------------------------

/// Fetches and parses the forecast for the given coordinates.
///
/// # Errors
/// - `FeedError::Transport` — connection failure or non-2xx status.
/// - `FeedError::Parse` — body received but not decodable.
pub fn fetch_forecast(
    client: &reqwest::blocking::Client,
    latitude: f64,
    longitude: f64,
) -> Result<WeatherStatus, FeedError> {
    let url = build_forecast_url(latitude, longitude);

    let response = client
        .get(&url)
        .header("Accept", "application/json")
        .send()
        .map_err(|e| FeedError::Transport(format!("Open-Meteo request failed: {}", e)))?;

    if !response.status().is_success() {
        return Err(FeedError::Transport(format!(
            "Open-Meteo returned {}",
            response.status()
        )));
    }

    let body = response
        .text()
        .map_err(|e| FeedError::Transport(format!("Open-Meteo body read failed: {}", e)))?;

    parse_forecast(&body)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
