/// Thunderstorm classification and the one-shot audible alarm.
///
/// `classify` is a pure function of the cycle's `WeatherStatus`; the only
/// state that survives between cycles is the `StormAlarm` latch, which
/// decides whether entering a warning rings the bell.

use crate::model::{StormCondition, WeatherStatus, STORM_CODES};

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Classifies the cycle's weather into Warning / Watch / Clear.
///
/// - `Warning` — a thunderstorm code is active right now.
/// - `Watch` — no storm now, but a storm code appears in forecast hours
///   1..=5. Hour 0 is the current hour and is deliberately excluded; it is
///   already covered by the current-code check.
/// - `Clear` — neither.
pub fn classify(status: &WeatherStatus) -> StormCondition {
    if is_storm_code(status.current_code) {
        return StormCondition::Warning;
    }
    if status.hourly_codes[1..].iter().copied().any(is_storm_code) {
        return StormCondition::Watch;
    }
    StormCondition::Clear
}

fn is_storm_code(code: i32) -> bool {
    STORM_CODES.contains(&code)
}

// ---------------------------------------------------------------------------
// One-shot alarm latch
// ---------------------------------------------------------------------------

/// Latch that fires exactly once per excursion into `Warning`.
///
/// Staying in `Warning` across consecutive cycles stays silent; dropping to
/// `Watch` or `Clear` re-arms the latch so the next warning fires again.
/// `Watch` itself never fires.
#[derive(Debug, Default)]
pub struct StormAlarm {
    was_active: bool,
}

impl StormAlarm {
    pub fn new() -> Self {
        Self { was_active: false }
    }

    /// Feeds one cycle's classification into the latch. Returns true iff
    /// the audible alert should fire this cycle.
    pub fn observe(&mut self, condition: StormCondition) -> bool {
        match condition {
            StormCondition::Warning => {
                let fire = !self.was_active;
                self.was_active = true;
                fire
            }
            StormCondition::Watch | StormCondition::Clear => {
                self.was_active = false;
                false
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.was_active
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
