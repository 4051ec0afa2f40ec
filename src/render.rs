/// Terminal view renderer.
///
/// Produces one full-screen refresh per cycle: clear screen, seismic table
/// colored by severity, lightning status block, and the bell characters for
/// any alerts fired this cycle. The renderer only reads the `CycleView`; it
/// owns no state and makes no decisions beyond formatting.

use std::io::{self, Write};

use chrono::{DateTime, Utc};
use owo_colors::OwoColorize;

use crate::analysis::seismic::QuakeSeverity;
use crate::config::MonitorConfig;
use crate::daemon::CycleView;
use crate::model::StormCondition;

// Cursor home + erase-below: the classic full-refresh sequence.
const CLEAR_SCREEN: &str = "\x1b[H\x1b[J";
const BELL: &str = "\x07";

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

pub fn render(view: &CycleView, config: &MonitorConfig) {
    print!("{}", CLEAR_SCREEN);

    // --- Seismic section ---
    println!(
        "{}",
        format!(
            "--- GLOBAL SEISMIC MONITOR (Min Mag: {:.1}) ---",
            config.min_magnitude
        )
        .cyan()
    );
    println!(
        "Last Updated: {}",
        view.rendered_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    if let Some(reason) = &view.seismic.feed_error {
        println!("{}", format!("Seismic feed degraded: {}", reason).yellow());
    }
    println!();

    for event in &view.seismic.snapshot {
        let tag = format!(
            "[  M {:.1}  ]{:<10}",
            event.magnitude,
            format_time_ago(event.time_ms, view.rendered_at)
        );
        match QuakeSeverity::from_magnitude(event.magnitude) {
            QuakeSeverity::Major => print!("{}", tag.red()),
            QuakeSeverity::Moderate => print!("{}", tag.yellow()),
            QuakeSeverity::Minor => print!("{}", tag.green()),
        }
        println!(" {}", event.place);
    }

    // One bell per quake alerting for the first time.
    for _ in &view.seismic.new_alerts {
        print!("{}", BELL);
    }

    // --- Lightning section ---
    println!();
    println!("{}", "--- LIGHTNING PROXIMITY WARNING ---".cyan());
    println!(
        "Monitoring Location: {:.2}, {:.2}",
        config.latitude, config.longitude
    );
    if let Some(reason) = &view.weather.feed_error {
        println!("{}", format!("Weather feed degraded: {}", reason).yellow());
    }
    println!();

    match view.weather.condition {
        StormCondition::Warning => {
            println!(
                "{}",
                "!!! SEVERE THUNDERSTORM WARNING IN EFFECT !!!".red()
            );
            println!("> Isolate antenna and sensitive equipment immediately.");
        }
        StormCondition::Watch => {
            println!("{}", "--- THUNDERSTORM WATCH ---".yellow());
            println!("> Thunderstorms possible within the next 6 hours. Monitor conditions.");
        }
        StormCondition::Clear => {
            println!("{}", "STATUS: All clear.".green());
        }
    }

    if view.weather.alarm_fired {
        print!("{}", BELL);
    }

    io::stdout().flush().ok();
}

// ---------------------------------------------------------------------------
// Formatting helpers
// ---------------------------------------------------------------------------

/// Relative age of an event for the snapshot table: seconds below a minute,
/// whole minutes above. Clock skew can put a feed timestamp slightly in the
/// future; that clamps to "0s ago".
fn format_time_ago(event_time_ms: i64, now: DateTime<Utc>) -> String {
    let seconds = (now.timestamp() - event_time_ms / 1000).max(0);
    if seconds < 60 {
        format!("{}s ago", seconds)
    } else {
        format!("{}m ago", seconds / 60)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
