//! Event types flowing from the parser into the sliding window

use std::fmt;
use std::time::Instant;

/// Direction of a block I/O request as reported in biosnoop's `T` column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Read,
    Write,
}

impl Direction {
    /// Map a trace column marker (`"R"` / `"W"`) to a direction.
    #[must_use]
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "R" => Some(Direction::Read),
            "W" => Some(Direction::Write),
            _ => None,
        }
    }

    #[must_use]
    pub fn marker(self) -> char {
        match self {
            Direction::Read => 'R',
            Direction::Write => 'W',
        }
    }

    /// Fill character used for this direction's histogram bar
    #[must_use]
    pub fn bar_fill(self) -> char {
        match self {
            Direction::Read => '=',
            Direction::Write => '#',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.marker())
    }
}

/// One classified I/O request.
///
/// `arrival` is the local monotonic time the line was read, not the
/// producer's timestamp column: window eviction compares against our own
/// clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub arrival: Instant,
    pub direction: Direction,
    pub bucket: usize,
}

impl Event {
    #[must_use]
    pub fn new(arrival: Instant, direction: Direction, bucket: usize) -> Self {
        Self { arrival, direction, bucket }
    }
}
