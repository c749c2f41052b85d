//! # biosnoop line parser
//!
//! Turns one line of biosnoop output into an [`Event`]:
//!
//! ```text
//! TIME(s)     COMM           PID     DISK      T SECTOR     BYTES  LAT(ms)
//! 0.000000    systemd-journa 456     nvme0n1   W 2036704120 4096   7.87
//! ```
//!
//! The direction column is found by scanning rather than by fixed position:
//! biosnoop variants insert extra columns (queue time, etc.), so the first
//! `R`/`W` field followed by two purely numeric fields (sector, bytes) wins.
//! The producer's `TIME(s)` column is ignored; events are stamped with the
//! caller's arrival time.

use std::time::Instant;

use crate::buckets::BucketTable;
use crate::domain::{Direction, Event, ParseError};

/// Fewer fields than this can never be a biosnoop row.
pub const MIN_FIELDS: usize = 6;

/// First field that may hold the direction marker (after TIME COMM PID DISK)
const SCAN_START: usize = 4;

/// Column labels of the header row at fields 4, 5 and 6
const HEADER_MARKERS: [&str; 3] = ["T", "SECTOR", "BYTES"];

/// Fields pulled out of a data row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IoRecord {
    pub direction: Direction,
    pub sector: u64,
    pub bytes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedLine {
    Record(IoRecord),
    Header,
}

/// Parse a raw line (trailing newline allowed).
pub fn parse_line(raw: &str) -> Result<ParsedLine, ParseError> {
    let fields: Vec<&str> = raw.split_whitespace().collect();

    if fields.len() < MIN_FIELDS {
        return Err(ParseError::TooShort { fields: fields.len(), line: clean(raw) });
    }

    if is_header(&fields) {
        return Ok(ParsedLine::Header);
    }

    find_record(&fields)
        .map(ParsedLine::Record)
        .ok_or_else(|| ParseError::DirectionColumnNotFound { line: clean(raw) })
}

/// Parse a line and classify it into an event stamped with `now`.
///
/// Returns `Ok(None)` for the header row.
pub fn parse_event(
    raw: &str,
    now: Instant,
    table: &BucketTable,
) -> Result<Option<Event>, ParseError> {
    Ok(match parse_line(raw)? {
        ParsedLine::Header => None,
        ParsedLine::Record(record) => {
            Some(Event::new(now, record.direction, table.classify(record.bytes)))
        }
    })
}

fn is_header(fields: &[&str]) -> bool {
    fields
        .get(SCAN_START..SCAN_START + HEADER_MARKERS.len())
        .is_some_and(|cols| cols == HEADER_MARKERS)
}

/// Left-to-right search for `(R|W, digits, digits)`.
fn find_record(fields: &[&str]) -> Option<IoRecord> {
    fields.windows(3).skip(SCAN_START).find_map(|triple| {
        let direction = Direction::from_marker(triple[0])?;
        if !is_numeric(triple[1]) || !is_numeric(triple[2]) {
            return None;
        }
        Some(IoRecord {
            direction,
            sector: parse_saturating(triple[1]),
            bytes: parse_saturating(triple[2]),
        })
    })
}

fn is_numeric(field: &str) -> bool {
    !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit())
}

/// Digit strings too long for u64 saturate (and classify as overflow).
fn parse_saturating(digits: &str) -> u64 {
    digits.parse().unwrap_or(u64::MAX)
}

fn clean(raw: &str) -> String {
    raw.trim_end_matches(['\n', '\r']).to_string()
}
