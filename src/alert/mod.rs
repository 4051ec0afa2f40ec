/// Alerting for the environmental monitoring service.
///
/// Submodules:
/// - `ledger` — bounded FIFO set of already-alerted earthquake ids.
/// - `storm`  — thunderstorm classification and the one-shot alarm latch.

pub mod ledger;
pub mod storm;
