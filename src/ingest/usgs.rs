/// USGS earthquake feed client.
///
/// Handles fetching and JSON parsing for the USGS real-time GeoJSON summary
/// feed:
///   https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_hour.geojson
///
/// The feed is a GeoJSON FeatureCollection; one feature per earthquake. See
/// `fixtures.rs` for annotated examples of the response structure.

use serde::Deserialize;

use crate::model::{EarthquakeEvent, FeedError};

// ---------------------------------------------------------------------------
// Serde structures for GeoJSON deserialization
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct FeedDocument {
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    // Feed-unique event id, e.g. "us7000kufc". Carried on the feature
    // itself, not inside properties.
    id: Option<String>,
    properties: FeatureProperties,
}

#[derive(Deserialize)]
struct FeatureProperties {
    // USGS marks magnitude nullable for events still being reviewed.
    mag: Option<f64>,
    place: Option<String>,
    // Event time in epoch milliseconds.
    time: Option<i64>,
}

// ---------------------------------------------------------------------------
// Endpoint
// ---------------------------------------------------------------------------

/// All earthquakes from the past hour, worldwide.
pub const QUAKE_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_hour.geojson";

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

/// Parses a USGS GeoJSON summary response body into a flat list of
/// `EarthquakeEvent`s, one per feature, in feed order.
///
/// Nullable fields take defaults rather than dropping the record: a missing
/// magnitude becomes 0.0 (so it only survives a zero filter), missing place
/// and id become empty strings. An empty `features` array is a quiet hour,
/// not an error.
///
/// # Errors
/// - `FeedError::Parse` — malformed JSON or unexpected envelope structure.
pub fn parse_feed(json: &str) -> Result<Vec<EarthquakeEvent>, FeedError> {
    let document: FeedDocument = serde_json::from_str(json)
        .map_err(|e| FeedError::Parse(format!("GeoJSON deserialization failed: {}", e)))?;

    let events = document
        .features
        .into_iter()
        .map(|feature| EarthquakeEvent {
            magnitude: feature.properties.mag.unwrap_or(0.0),
            place: feature.properties.place.unwrap_or_default(),
            id: feature.id.unwrap_or_default(),
            time_ms: feature.properties.time.unwrap_or(0),
        })
        .collect();

    Ok(events)
}

// ---------------------------------------------------------------------------
// Fetching
// ---------------------------------------------------------------------------

/// Fetches and parses the past hour of earthquakes.
///
/// # Errors
/// - `FeedError::Transport` — connection failure or non-2xx status.
/// - `FeedError::Parse` — body received but not decodable.
pub fn fetch_latest(client: &reqwest::blocking::Client) -> Result<Vec<EarthquakeEvent>, FeedError> {
    let response = client
        .get(QUAKE_FEED_URL)
        .header("Accept", "application/json")
        .send()
        .map_err(|e| FeedError::Transport(format!("USGS request failed: {}", e)))?;

    if !response.status().is_success() {
        return Err(FeedError::Transport(format!(
            "USGS feed returned {}",
            response.status()
        )));
    }

    let body = response
        .text()
        .map_err(|e| FeedError::Transport(format!("USGS body read failed: {}", e)))?;

    parse_feed(&body)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::fixtures::*;

    // --- Parsing: happy path ------------------------------------------------

    #[test]
    fn test_parse_quiet_hour_fixture_fields() {
        let events = parse_feed(fixture_quake_feed_json())
            .expect("valid fixture should parse without error");
        assert_eq!(events.len(), 3, "fixture carries three features");

        let ridgecrest = events
            .iter()
            .find(|e| e.id == "ci40474920")
            .expect("should find the Ridgecrest event");
        assert!(
            (ridgecrest.magnitude - 1.54).abs() < 0.001,
            "magnitude should be 1.54, got {}",
            ridgecrest.magnitude
        );
        assert_eq!(ridgecrest.place, "14km SW of Searles Valley, CA");
        assert_eq!(ridgecrest.time_ms, 1_714_567_200_000);
    }

    #[test]
    fn test_parse_preserves_feed_order() {
        let events = parse_feed(fixture_quake_feed_json()).expect("should parse");
        let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["us7000mabc", "ci40474920", "ak024bbdefgh"]);
    }

    // --- Parsing: defaults for nullable fields -------------------------------

    #[test]
    fn test_parse_null_magnitude_defaults_to_zero() {
        let events = parse_feed(fixture_quake_null_fields_json())
            .expect("nullable fields should not fail the parse");
        let event = events.first().expect("should have one event");
        assert_eq!(event.magnitude, 0.0, "null mag should default to 0.0");
    }

    #[test]
    fn test_parse_missing_place_and_id_default_to_empty() {
        let events = parse_feed(fixture_quake_null_fields_json()).expect("should parse");
        let event = events.first().expect("should have one event");
        assert_eq!(event.place, "");
        assert_eq!(event.id, "");
    }

    // --- Parsing: error and edge cases --------------------------------------

    #[test]
    fn test_parse_empty_features_is_a_quiet_hour() {
        let json = r#"{ "type": "FeatureCollection", "features": [] }"#;
        let events = parse_feed(json).expect("empty features array is valid");
        assert!(events.is_empty());
    }

    #[test]
    fn test_parse_malformed_json_returns_parse_error() {
        let result = parse_feed("{ this is not valid json }}}");
        assert!(
            matches!(result, Err(FeedError::Parse(_))),
            "malformed JSON should return Parse, got {:?}",
            result
        );
    }

    #[test]
    fn test_parse_empty_string_returns_parse_error() {
        let result = parse_feed("");
        assert!(matches!(result, Err(FeedError::Parse(_))));
    }

    #[test]
    fn test_parse_missing_features_field_returns_parse_error() {
        let json = r#"{ "type": "FeatureCollection" }"#;
        let result = parse_feed(json);
        assert!(
            matches!(result, Err(FeedError::Parse(_))),
            "envelope without features should return Parse, got {:?}",
            result
        );
    }
}
