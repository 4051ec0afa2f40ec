/// Rolling record of earthquake ids that have already triggered an alert.
///
/// The ledger guarantees at-most-one alert per distinct event id for as long
/// as the id stays in the window. Capacity is fixed; when full, the oldest
/// id is evicted in insertion order (FIFO), not the least severe one. An id
/// evicted long enough ago can in principle alert again — acceptable, since
/// the upstream feed only covers the past hour.
///
/// Membership checks must be O(1) because the daemon runs one per retained
/// quake per cycle, so the ledger pairs a `HashSet` for lookups with a
/// `VecDeque` carrying eviction order.

use std::collections::{HashSet, VecDeque};

pub struct AlertLedger {
    capacity: usize,
    order: VecDeque<String>,
    seen: HashSet<String>,
}

impl AlertLedger {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            order: VecDeque::with_capacity(capacity),
            seen: HashSet::with_capacity(capacity),
        }
    }

    /// True iff `id` has not been alerted within the current window.
    pub fn should_alert(&self, id: &str) -> bool {
        !self.seen.contains(id)
    }

    /// Marks `id` as alerted. Re-recording a present id is a no-op: no
    /// duplicate entries, no change to eviction order.
    pub fn record(&mut self, id: &str) {
        if self.seen.contains(id) {
            return;
        }
        if self.order.len() == self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.seen.remove(&oldest);
            }
        }
        self.order.push_back(id.to_string());
        self.seen.insert(id.to_string());
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
