/// Test fixtures: representative JSON payloads from both monitored feeds.
///
/// These fixtures are structurally complete but truncated to the minimum
/// needed to exercise the parsers.
///
/// USGS GeoJSON summary response shape:
///   response.features[]
///     .id                 — feed-unique event id (string)
///     .properties.mag     — magnitude (float, NULLABLE during review)
///     .properties.place   — human-readable location (string, nullable)
///     .properties.time    — event time, epoch MILLISECONDS
///
/// Open-Meteo forecast response shape:
///   response.current.weather_code    — WMO code for right now (int)
///   response.hourly.weather_code[]   — hourly WMO codes; entry 0 is the
///                                      current hour
///
/// Note: USGS nulls out `mag` for events still under review, so parsers
/// must tolerate null fields without dropping the record.

/// Three quakes from a quiet hour, feed-ordered by recency (not magnitude):
/// a moderate Kermadec event, a microquake near Ridgecrest, and a small
/// Alaska event. Exercises multi-feature parsing and feed-order retention.
#[cfg(test)]
pub(crate) fn fixture_quake_feed_json() -> &'static str {
    r#"{
      "type": "FeatureCollection",
      "metadata": {
        "generated": 1714567800000,
        "url": "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_hour.geojson",
        "title": "USGS All Earthquakes, Past Hour",
        "count": 3
      },
      "features": [
        {
          "type": "Feature",
          "id": "us7000mabc",
          "properties": {
            "mag": 5.1,
            "place": "Kermadec Islands region",
            "time": 1714567500000,
            "updated": 1714567650000,
            "tsunami": 0,
            "type": "earthquake"
          },
          "geometry": { "type": "Point", "coordinates": [-177.8, -29.7, 35.0] }
        },
        {
          "type": "Feature",
          "id": "ci40474920",
          "properties": {
            "mag": 1.54,
            "place": "14km SW of Searles Valley, CA",
            "time": 1714567200000,
            "updated": 1714567380000,
            "tsunami": 0,
            "type": "earthquake"
          },
          "geometry": { "type": "Point", "coordinates": [-117.5, 35.7, 8.2] }
        },
        {
          "type": "Feature",
          "id": "ak024bbdefgh",
          "properties": {
            "mag": 2.3,
            "place": "42 km ENE of Susitna North, Alaska",
            "time": 1714566900000,
            "updated": 1714567100000,
            "tsunami": 0,
            "type": "earthquake"
          },
          "geometry": { "type": "Point", "coordinates": [-149.1, 62.2, 20.0] }
        }
      ]
    }"#
}

/// Single feature with every optional field null or absent: `mag` is null
/// (event under review), `place` is null, the feature `id` is missing.
/// Parsers must default rather than drop the record.
#[cfg(test)]
pub(crate) fn fixture_quake_null_fields_json() -> &'static str {
    r#"{
      "type": "FeatureCollection",
      "features": [
        {
          "type": "Feature",
          "properties": {
            "mag": null,
            "place": null,
            "time": 1714567200000,
            "type": "earthquake"
          },
          "geometry": { "type": "Point", "coordinates": [0.0, 0.0, 10.0] }
        }
      ]
    }"#
}

/// Active thunderstorm: code 95 now, hail codes in the next two hours,
/// clearing after. Classifies as Warning.
#[cfg(test)]
pub(crate) fn fixture_forecast_storm_json() -> &'static str {
    r#"{
      "latitude": 54.5,
      "longitude": -1.0,
      "timezone": "GMT",
      "current": {
        "time": "2024-05-01T12:00",
        "interval": 900,
        "weather_code": 95
      },
      "hourly": {
        "time": ["2024-05-01T12:00", "2024-05-01T13:00", "2024-05-01T14:00",
                 "2024-05-01T15:00", "2024-05-01T16:00", "2024-05-01T17:00"],
        "weather_code": [95, 96, 61, 3, 0, 0]
      }
    }"#
}

/// Benign conditions: partly cloudy now, nothing stormy in the window.
/// Classifies as Clear.
#[cfg(test)]
pub(crate) fn fixture_forecast_clear_json() -> &'static str {
    r#"{
      "latitude": 54.5,
      "longitude": -1.0,
      "timezone": "GMT",
      "current": {
        "time": "2024-05-01T12:00",
        "interval": 900,
        "weather_code": 2
      },
      "hourly": {
        "time": ["2024-05-01T12:00", "2024-05-01T13:00", "2024-05-01T14:00",
                 "2024-05-01T15:00", "2024-05-01T16:00", "2024-05-01T17:00"],
        "weather_code": [2, 1, 0, 0, 1, 3]
      }
    }"#
}

/// Storm codes only in the forecast tail, current hour calm. Classifies as
/// Watch: thunderstorms possible within the monitoring window.
#[cfg(test)]
pub(crate) fn fixture_forecast_watch_json() -> &'static str {
    r#"{
      "latitude": 54.5,
      "longitude": -1.0,
      "timezone": "GMT",
      "current": {
        "time": "2024-05-01T12:00",
        "interval": 900,
        "weather_code": 3
      },
      "hourly": {
        "time": ["2024-05-01T12:00", "2024-05-01T13:00", "2024-05-01T14:00",
                 "2024-05-01T15:00", "2024-05-01T16:00", "2024-05-01T17:00"],
        "weather_code": [3, 0, 0, 95, 99, 0]
      }
    }"#
}
