//! # Sliding window store
//!
//! FIFO of events bounded by age rather than count. Events are appended at
//! the tail in arrival order and evicted from the head once they fall out of
//! the horizon, so each event is touched by exactly one eviction and memory
//! stays proportional to `horizon × arrival rate`.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::buckets::BucketTable;
use crate::domain::Event;
use crate::histogram::Snapshot;

/// Default window horizon
pub const DEFAULT_HORIZON: Duration = Duration::from_secs(10);

#[derive(Debug)]
pub struct SlidingWindow {
    horizon: Duration,
    events: VecDeque<Event>,
}

impl SlidingWindow {
    #[must_use]
    pub fn new(horizon: Duration) -> Self {
        Self { horizon, events: VecDeque::new() }
    }

    #[must_use]
    pub fn horizon(&self) -> Duration {
        self.horizon
    }

    /// Append an event. Arrival times must not go backwards.
    pub fn push(&mut self, event: Event) {
        debug_assert!(
            self.events.back().map_or(true, |last| last.arrival <= event.arrival),
            "events must be pushed in arrival order"
        );
        self.events.push_back(event);
    }

    /// Drop every head event older than `now - horizon`; returns how many went.
    ///
    /// An event exactly `horizon` old is kept.
    pub fn evict(&mut self, now: Instant) -> usize {
        let mut evicted = 0;
        while let Some(front) = self.events.front() {
            if now.saturating_duration_since(front.arrival) <= self.horizon {
                break;
            }
            self.events.pop_front();
            evicted += 1;
        }
        evicted
    }

    /// Tally the current contents per direction and bucket.
    #[must_use]
    pub fn counts(&self, table: &BucketTable) -> Snapshot {
        Snapshot::tally(&self.events, table.len())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    /// Arrival time of the oldest event still in the window
    #[must_use]
    pub fn oldest(&self) -> Option<Instant> {
        self.events.front().map(|e| e.arrival)
    }
}

impl Default for SlidingWindow {
    fn default() -> Self {
        Self::new(DEFAULT_HORIZON)
    }
}
