//! # bio-sizes - Live Block I/O Size Histogram
//!
//! bio-sizes reads the line-oriented output of biosnoop (bcc / bpftrace) from
//! a pipe and keeps a live, in-place terminal histogram of request sizes, split
//! into reads and writes, over the last few seconds of activity.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────┐
//! │  biosnoop (external) │  one I/O per line on stdout
//! └──────────┬───────────┘
//!            │ pipe
//!            ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    bio-sizes (This Crate)                    │
//! │                                                              │
//! │  ┌──────────┐   ┌──────────┐   ┌───────────┐   ┌──────────┐  │
//! │  │  Parser  │──▶│  Window  │──▶│ Snapshot  │──▶│ Renderer │  │
//! │  │ (line)   │   │ (FIFO)   │   │ (counts)  │   │ (ANSI)   │  │
//! │  └──────────┘   └──────────┘   └───────────┘   └──────────┘  │
//! │       │              ▲                               ▲       │
//! │       ▼              │ evict(now)                    │       │
//! │  ┌──────────┐   ┌──────────┐                         │       │
//! │  │ Buckets  │   │  Clock   │───── throttle ──────────┘       │
//! │  └──────────┘   └──────────┘                                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - [`buckets`]: fixed ascending size table and the size → bucket classifier
//! - [`parser`]: tolerant biosnoop line parser
//! - [`window`]: time-bounded FIFO of events with head-only eviction
//! - [`histogram`]: per-bucket read/write counts of the window
//! - [`render`]: proportional bars redrawn in place with cursor movement
//! - [`driver`]: the read → parse → evict → (throttled) render loop
//! - [`clock`]: injectable monotonic clock
//! - [`cli`], [`config`]: command-line flags and the validated run config
//! - [`domain`]: shared types and errors
//!
//! ## Typical Usage
//!
//! ```bash
//! sudo biosnoop | bio-sizes
//! sudo python3 -u biosnoop.py | bio-sizes --window 30 --interval 1
//! ```

pub mod buckets;
pub mod cli;
pub mod clock;
pub mod config;
pub mod domain;
pub mod driver;
pub mod histogram;
pub mod parser;
pub mod render;
pub mod window;
