//! Environmental Monitor - Main Daemon
//!
//! A unified console service that continuously:
//! 1. Polls the USGS feed for global earthquakes from the past hour
//! 2. Filters and ranks them, alerting once per new major event
//! 3. Polls Open-Meteo for local thunderstorm proximity
//! 4. Renders a refreshed terminal view with severity coloring
//!
//! Usage:
//!   cargo run --release                       # Defaults / monitor.toml
//!   cargo run --release -- -q 4.5             # Only show and alert on M4.5+
//!   cargo run --release -- -l 40.69 -89.59    # Monitor a different location
//!   cargo run --release -- test               # Alert on everything (bell check)
//!
//! Configuration:
//!   monitor.toml in the working directory, overridden by the flags above.

use envmon_service::config::MonitorConfig;
use envmon_service::daemon::Daemon;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut config = MonitorConfig::load();
    config.apply_cli_args(&args[1..]);

    println!("--- Starting Environmental Monitor ---");
    println!(
        "Seismic Filter: M{:.1}+ (Alerts >= {:.1})",
        config.min_magnitude, config.alert_threshold
    );
    println!(
        "Lightning Location: {:.2}, {:.2}",
        config.latitude, config.longitude
    );
    println!("Poll interval: {} seconds\n", config.poll_interval_seconds);

    let mut daemon = Daemon::new(config);
    daemon.run();
}
