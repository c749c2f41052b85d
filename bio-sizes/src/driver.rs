//! # Driver loop
//!
//! Reads trace lines one at a time and pushes them through
//! parser → window → snapshot → renderer:
//!
//! ```text
//! Reading ─┬─ header ──────────────────────────────▶ Reading
//!          ├─ record ─▶ push ─▶ evict ─▶ (render?) ─▶ Reading
//!          ├─ malformed ─▶ Exited(error)
//!          └─ end of stream ─▶ final frame ─▶ Exited(ok)
//! ```
//!
//! Rendering is throttled by `render_interval` so redraw cost does not grow
//! with the input rate. Nothing is read ahead: the loop blocks on the next
//! line and is paced entirely by the producer.

use log::{debug, warn};
use std::io::{BufRead, Write};
use std::time::Instant;

use crate::buckets::BucketTable;
use crate::clock::Clock;
use crate::config::Config;
use crate::domain::DriverError;
use crate::parser::parse_event;
use crate::render::{Renderer, TerminalSize, FALLBACK_WIDTH};
use crate::window::SlidingWindow;

/// What a single input line did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Recorded { rendered: bool },
    HeaderSkipped,
}

/// Counters reported at end of stream
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub lines: u64,
    pub events: u64,
    pub headers: u64,
    pub frames: u64,
    pub window_len: usize,
}

pub struct Driver<C, T> {
    config: Config,
    table: BucketTable,
    clock: C,
    terminal: T,
    window: SlidingWindow,
    renderer: Renderer,
    last_render: Option<Instant>,
    width_fallback_logged: bool,
    summary: RunSummary,
}

impl<C: Clock, T: TerminalSize> Driver<C, T> {
    #[must_use]
    pub fn new(config: Config, table: BucketTable, clock: C, terminal: T) -> Self {
        Self {
            window: SlidingWindow::new(config.window),
            renderer: Renderer::new(table, config.spinner),
            config,
            table,
            clock,
            terminal,
            last_render: None,
            width_fallback_logged: false,
            summary: RunSummary::default(),
        }
    }

    /// Consume `input` until end of stream.
    ///
    /// On a malformed line the cursor is parked below the last frame before
    /// the error is returned, so the caller's diagnostic lands on a clean line.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        out: &mut W,
    ) -> Result<RunSummary, DriverError> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            if let Err(e) = self.feed(&line, out) {
                // the parse error matters more than a failed cursor move
                let _ = self.renderer.park(out);
                return Err(e);
            }
        }

        self.finish(out)?;
        Ok(self.summary())
    }

    /// Handle one raw line.
    pub fn feed<W: Write>(&mut self, line: &str, out: &mut W) -> Result<LineOutcome, DriverError> {
        self.summary.lines += 1;
        let now = self.clock.now();

        let Some(event) = parse_event(line, now, &self.table)? else {
            self.summary.headers += 1;
            debug!("skipping header row at line {}", self.summary.lines);
            return Ok(LineOutcome::HeaderSkipped);
        };

        self.window.push(event);
        self.window.evict(now);
        self.summary.events += 1;

        let rendered = self.render_due(now);
        if rendered {
            self.draw(out, now)?;
        }
        Ok(LineOutcome::Recorded { rendered })
    }

    /// Draw the window as of now and leave the cursor below it.
    pub fn finish<W: Write>(&mut self, out: &mut W) -> Result<(), DriverError> {
        let now = self.clock.now();
        self.window.evict(now);
        self.draw(out, now)?;
        self.renderer.park(out)?;
        Ok(())
    }

    fn render_due(&self, now: Instant) -> bool {
        self.last_render
            .map_or(true, |last| now.saturating_duration_since(last) >= self.config.render_interval)
    }

    fn draw<W: Write>(&mut self, out: &mut W, now: Instant) -> Result<(), DriverError> {
        let snapshot = self.window.counts(&self.table);
        let width = self.terminal_width();
        self.renderer.render(out, &snapshot, width)?;
        self.last_render = Some(now);
        self.summary.frames += 1;
        Ok(())
    }

    fn terminal_width(&mut self) -> u16 {
        match self.terminal.size() {
            Ok((cols, _)) => cols,
            Err(e) => {
                if !self.width_fallback_logged {
                    warn!("terminal size unavailable ({e}), using {FALLBACK_WIDTH} columns");
                    self.width_fallback_logged = true;
                }
                FALLBACK_WIDTH
            }
        }
    }

    #[must_use]
    pub fn window(&self) -> &SlidingWindow {
        &self.window
    }

    #[must_use]
    pub fn summary(&self) -> RunSummary {
        RunSummary { window_len: self.window.len(), ..self.summary }
    }
}
