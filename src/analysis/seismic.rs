/// Seismic snapshot construction.
///
/// `build_snapshot` takes the flat list of `EarthquakeEvent`s produced by
/// the ingest layer and applies the display pipeline: magnitude filter,
/// descending sort, capacity cap. The sort runs before the cap so a strong
/// quake late in feed order is never dropped in favor of weaker ones that
/// happened to arrive earlier.
///
/// Alert bookkeeping is not done here; this is a pure transform. The daemon
/// runs the ledger over the finished snapshot.

use std::cmp::Ordering;

use crate::model::{EarthquakeEvent, MAJOR_QUAKE_THRESHOLD, MODERATE_QUAKE_THRESHOLD};

// ---------------------------------------------------------------------------
// Snapshot construction
// ---------------------------------------------------------------------------

/// Filters, ranks, and bounds one cycle's earthquake records.
///
/// - Keeps a record iff `magnitude >= min_magnitude`.
/// - Sorts descending by magnitude; the sort is stable, so equal magnitudes
///   keep their feed-relative order.
/// - Truncates to `max_events` after sorting.
pub fn build_snapshot(
    events: Vec<EarthquakeEvent>,
    min_magnitude: f64,
    max_events: usize,
) -> Vec<EarthquakeEvent> {
    let mut snapshot: Vec<EarthquakeEvent> = events
        .into_iter()
        .filter(|e| e.magnitude >= min_magnitude)
        .collect();

    snapshot.sort_by(|a, b| {
        b.magnitude
            .partial_cmp(&a.magnitude)
            .unwrap_or(Ordering::Equal)
    });

    snapshot.truncate(max_events);
    snapshot
}

// ---------------------------------------------------------------------------
// Severity classification
// ---------------------------------------------------------------------------

/// Display severity for a single quake, used by the renderer to pick a
/// color: Major = red, Moderate = yellow, Minor = green.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuakeSeverity {
    Major,
    Moderate,
    Minor,
}

impl QuakeSeverity {
    pub fn from_magnitude(magnitude: f64) -> Self {
        if magnitude >= MAJOR_QUAKE_THRESHOLD {
            QuakeSeverity::Major
        } else if magnitude >= MODERATE_QUAKE_THRESHOLD {
            QuakeSeverity::Moderate
        } else {
            QuakeSeverity::Minor
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
