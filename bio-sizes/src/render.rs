//! # In-place terminal histogram
//!
//! Each frame is two lines per bucket:
//!
//! ```text
//!   <4k R     120 ========================
//!       W      37 #######
//!  <16k R       0
//!       W     402 ################################################################
//! ```
//!
//! Every line is cleared to end-of-line before it is written, and after the
//! last one the cursor moves back up by the frame height, so the next frame
//! overwrites this one instead of scrolling.

// Bar lengths are bounded by the terminal width, which fits in u16
#![allow(clippy::cast_possible_truncation)]

use std::io::{self, Write};

use crossterm::{
    cursor::{MoveToNextLine, MoveUp},
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};

use crate::buckets::BucketTable;
use crate::domain::Direction;
use crate::histogram::Snapshot;

/// Columns reserved for `label dir count ` in front of each bar
pub const LABEL_WIDTH: u16 = 20;

/// Width used when the terminal cannot be queried (output is not a tty)
pub const FALLBACK_WIDTH: u16 = 80;

const SPINNER: [char; 4] = ['\\', '|', '/', '-'];

/// Source of the current terminal dimensions as `(columns, rows)`
pub trait TerminalSize {
    fn size(&self) -> io::Result<(u16, u16)>;
}

/// Queries the controlling terminal through crossterm
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermTerminal;

impl TerminalSize for CrosstermTerminal {
    fn size(&self) -> io::Result<(u16, u16)> {
        crossterm::terminal::size()
    }
}

/// A pinned width, for `--width` and tests
#[derive(Debug, Clone, Copy)]
pub struct FixedWidth(pub u16);

impl TerminalSize for FixedWidth {
    fn size(&self) -> io::Result<(u16, u16)> {
        Ok((self.0, 0))
    }
}

impl<T: TerminalSize + ?Sized> TerminalSize for Box<T> {
    fn size(&self) -> io::Result<(u16, u16)> {
        (**self).size()
    }
}

/// Columns left for bars after the label column
#[must_use]
pub fn available_width(terminal_width: u16) -> u64 {
    u64::from(terminal_width.saturating_sub(LABEL_WIDTH))
}

/// Divisor for bar lengths: the largest count, but never below the
/// available width, so bars stay within it and an all-zero snapshot never
/// divides by zero.
#[must_use]
pub fn scale(snapshot: &Snapshot, available: u64) -> u64 {
    snapshot.max_count().max(available)
}

/// `floor(count * available / scale)`
#[must_use]
pub fn bar_len(count: u64, available: u64, scale: u64) -> usize {
    if scale == 0 {
        return 0;
    }
    let len = u128::from(count) * u128::from(available) / u128::from(scale);
    usize::from(u16::try_from(len).unwrap_or(u16::MAX))
}

#[derive(Debug)]
pub struct Renderer {
    table: BucketTable,
    spinner: bool,
    frames: u64,
    /// Height of the frame the cursor currently sits on top of
    lines_on_screen: u16,
}

impl Renderer {
    #[must_use]
    pub fn new(table: BucketTable, spinner: bool) -> Self {
        Self { table, spinner, frames: 0, lines_on_screen: 0 }
    }

    /// Frame contents without control sequences
    #[must_use]
    pub fn frame_lines(&self, snapshot: &Snapshot, terminal_width: u16) -> Vec<String> {
        let available = available_width(terminal_width);
        let scale = scale(snapshot, available);

        let mut lines = Vec::with_capacity(self.table.len() * 2);
        for (bucket, label) in self.table.labels().enumerate() {
            for (direction, label) in [(Direction::Read, label), (Direction::Write, "")] {
                let count = snapshot.count(direction, bucket);
                let bar = direction.bar_fill().to_string().repeat(bar_len(count, available, scale));
                lines.push(format!("{label:>5} {direction} {count:>7} {bar}"));
            }
        }
        lines
    }

    /// Draw a frame and leave the cursor on its first line.
    pub fn render<W: Write>(
        &mut self,
        out: &mut W,
        snapshot: &Snapshot,
        terminal_width: u16,
    ) -> io::Result<()> {
        let lines = self.frame_lines(snapshot, terminal_width);
        for line in &lines {
            queue!(out, Clear(ClearType::UntilNewLine), Print(line), Print('\n'))?;
        }

        let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        if height > 0 {
            queue!(out, MoveUp(height))?;
        }
        self.lines_on_screen = height;
        self.frames += 1;

        if self.spinner {
            let tick = SPINNER[(self.frames % SPINNER.len() as u64) as usize];
            queue!(out, Print(tick), Print('\r'))?;
        }
        out.flush()
    }

    /// Move the cursor below the last frame so later output does not land on it.
    pub fn park<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if self.lines_on_screen > 0 {
            queue!(out, MoveToNextLine(self.lines_on_screen))?;
            self.lines_on_screen = 0;
        }
        out.flush()
    }

    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buckets::IO_SIZE_BUCKETS;

    fn snapshot_with(reads: &[(usize, u64)], writes: &[(usize, u64)]) -> Snapshot {
        let mut snapshot = Snapshot::empty(IO_SIZE_BUCKETS.len());
        for &(bucket, n) in reads {
            for _ in 0..n {
                snapshot.record(Direction::Read, bucket);
            }
        }
        for &(bucket, n) in writes {
            for _ in 0..n {
                snapshot.record(Direction::Write, bucket);
            }
        }
        snapshot
    }

    #[test]
    fn test_bar_len() {
        assert_eq!(bar_len(0, 80, 80), 0);
        assert_eq!(bar_len(5, 80, 80), 5);
        assert_eq!(bar_len(200, 80, 200), 80);
        assert_eq!(bar_len(99, 80, 200), 39);
        assert_eq!(bar_len(7, 0, 0), 0);
        assert_eq!(bar_len(u64::MAX, 80, u64::MAX), 80);
    }

    #[test]
    fn test_scale_is_floored_at_available_width() {
        let snapshot = snapshot_with(&[(0, 3)], &[]);
        assert_eq!(scale(&snapshot, 60), 60);
        let snapshot = snapshot_with(&[(0, 300)], &[(1, 20)]);
        assert_eq!(scale(&snapshot, 60), 300);
        assert_eq!(scale(&Snapshot::empty(4), 0), 0);
    }

    #[test]
    fn test_available_width() {
        assert_eq!(available_width(100), 80);
        assert_eq!(available_width(20), 0);
        assert_eq!(available_width(5), 0);
    }

    #[test]
    fn test_frame_layout() {
        let renderer = Renderer::new(IO_SIZE_BUCKETS, false);
        let snapshot = snapshot_with(&[(0, 160)], &[(1, 40)]);
        let lines = renderer.frame_lines(&snapshot, 100);

        assert_eq!(lines.len(), IO_SIZE_BUCKETS.len() * 2);
        assert_eq!(lines[0], format!("  <4k R     160 {}", "=".repeat(80)));
        assert_eq!(lines[1], "      W       0 ");
        assert_eq!(lines[2], " <16k R       0 ");
        assert_eq!(lines[3], format!("      W      40 {}", "#".repeat(20)));
        assert!(lines[20].starts_with("  ... R"));
    }

    #[test]
    fn test_max_bar_fills_available_width_on_tie() {
        let renderer = Renderer::new(IO_SIZE_BUCKETS, false);
        let snapshot = snapshot_with(&[(4, 500)], &[(4, 500)]);
        let lines = renderer.frame_lines(&snapshot, 120);
        assert!(lines[8].ends_with(&"=".repeat(100)));
        assert!(lines[9].ends_with(&"#".repeat(100)));
    }

    #[test]
    fn test_narrow_terminal_draws_no_bars() {
        let renderer = Renderer::new(IO_SIZE_BUCKETS, false);
        let snapshot = snapshot_with(&[(0, 10)], &[]);
        let lines = renderer.frame_lines(&snapshot, 10);
        assert_eq!(lines[0], "  <4k R      10 ");
    }

    #[test]
    fn test_render_redraws_in_place() {
        let mut renderer = Renderer::new(IO_SIZE_BUCKETS, false);
        let mut out = Vec::new();
        renderer.render(&mut out, &snapshot_with(&[(0, 1)], &[]), 80).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("\x1b[K").count(), 22);
        assert_eq!(text.matches('\n').count(), 22);
        assert!(text.ends_with("\x1b[22A"));
        assert_eq!(renderer.frames(), 1);
    }

    #[test]
    fn test_spinner_and_park() {
        let mut renderer = Renderer::new(IO_SIZE_BUCKETS, true);
        let snapshot = Snapshot::empty(IO_SIZE_BUCKETS.len());
        let mut out = Vec::new();
        renderer.render(&mut out, &snapshot, 80).unwrap();
        renderer.render(&mut out, &snapshot, 80).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\x1b[22A|\r"));
        assert!(text.ends_with("\x1b[22A/\r"));

        let mut out = Vec::new();
        renderer.park(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\x1b[22E");

        // parking twice does not move further
        let mut out = Vec::new();
        renderer.park(&mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_fixed_width_terminal() {
        assert_eq!(FixedWidth(132).size().unwrap().0, 132);
        let boxed: Box<dyn TerminalSize> = Box::new(FixedWidth(40));
        assert_eq!(boxed.size().unwrap().0, 40);
    }
}
