//! Per-bucket, per-direction counts of the current window

use crate::domain::{Direction, Event};

/// Point-in-time histogram, recomputed for every frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    reads: Vec<u64>,
    writes: Vec<u64>,
}

impl Snapshot {
    #[must_use]
    pub fn empty(buckets: usize) -> Self {
        Self { reads: vec![0; buckets], writes: vec![0; buckets] }
    }

    /// Count events in a single pass.
    pub fn tally<'a>(events: impl IntoIterator<Item = &'a Event>, buckets: usize) -> Self {
        let mut snapshot = Self::empty(buckets);
        for event in events {
            snapshot.record(event.direction, event.bucket);
        }
        snapshot
    }

    /// Add one request. Indices past the last bucket fold into it.
    pub fn record(&mut self, direction: Direction, bucket: usize) {
        let counts = self.counts_mut(direction);
        if let Some(last) = counts.len().checked_sub(1) {
            counts[bucket.min(last)] += 1;
        }
    }

    #[must_use]
    pub fn count(&self, direction: Direction, bucket: usize) -> u64 {
        self.counts(direction).get(bucket).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn counts(&self, direction: Direction) -> &[u64] {
        match direction {
            Direction::Read => &self.reads,
            Direction::Write => &self.writes,
        }
    }

    fn counts_mut(&mut self, direction: Direction) -> &mut Vec<u64> {
        match direction {
            Direction::Read => &mut self.reads,
            Direction::Write => &mut self.writes,
        }
    }

    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.reads.len()
    }

    /// Sum over every bucket and both directions
    #[must_use]
    pub fn total(&self) -> u64 {
        self.reads.iter().chain(&self.writes).sum()
    }

    /// Largest single count across both directions
    #[must_use]
    pub fn max_count(&self) -> u64 {
        self.reads.iter().chain(&self.writes).copied().max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_tally() {
        let now = Instant::now();
        let events = [
            Event::new(now, Direction::Read, 0),
            Event::new(now, Direction::Read, 0),
            Event::new(now, Direction::Write, 2),
            Event::new(now, Direction::Read, 3),
        ];
        let snapshot = Snapshot::tally(&events, 4);

        assert_eq!(snapshot.counts(Direction::Read), &[2, 0, 0, 1]);
        assert_eq!(snapshot.counts(Direction::Write), &[0, 0, 1, 0]);
        assert_eq!(snapshot.total(), 4);
        assert_eq!(snapshot.max_count(), 2);
        assert_eq!(snapshot.bucket_count(), 4);
    }

    #[test]
    fn test_empty() {
        let snapshot = Snapshot::empty(11);
        assert_eq!(snapshot.total(), 0);
        assert_eq!(snapshot.max_count(), 0);
        assert_eq!(snapshot.count(Direction::Write, 99), 0);
    }

    #[test]
    fn test_out_of_range_bucket_folds_into_last() {
        let mut snapshot = Snapshot::empty(3);
        snapshot.record(Direction::Write, 7);
        assert_eq!(snapshot.count(Direction::Write, 2), 1);
        assert_eq!(snapshot.total(), 1);
    }
}
