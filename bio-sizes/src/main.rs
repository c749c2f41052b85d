//! # bio-sizes - Main Entry Point
//!
//! Wires CLI flags, logging and exit codes around [`bio_sizes::driver::Driver`].
//! Input must be piped; stdout receives the frames, stderr everything else.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::io::{self, BufWriter, IsTerminal};

use bio_sizes::buckets::IO_SIZE_BUCKETS;
use bio_sizes::cli::Args;
use bio_sizes::clock::MonotonicClock;
use bio_sizes::domain::UsageError;
use bio_sizes::driver::Driver;
use bio_sizes::render::{CrosstermTerminal, FixedWidth, TerminalSize};

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;
const EXIT_USAGE: i32 = 2;

fn main() {
    env_logger::init();
    std::process::exit(match run() {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            exit_code_for(&e)
        }
    });
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<UsageError>().is_some() {
        EXIT_USAGE
    } else {
        EXIT_ERROR
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let config = args.to_config()?;

    if io::stdin().is_terminal() {
        return Err(UsageError::InteractiveInput.into());
    }

    if !args.quiet {
        eprintln!("bio-sizes v{}", env!("CARGO_PKG_VERSION"));
        eprintln!(
            "window: {:.1}s, refresh: {:.1}s",
            config.window.as_secs_f64(),
            config.render_interval.as_secs_f64()
        );
    }
    info!("starting with {config:?}");

    let terminal: Box<dyn TerminalSize> = match config.width {
        Some(cols) => Box::new(FixedWidth(cols)),
        None => Box::new(CrosstermTerminal),
    };

    let mut driver = Driver::new(config, IO_SIZE_BUCKETS, MonotonicClock, terminal);
    let mut out = BufWriter::new(io::stdout().lock());
    let summary = driver.run(io::stdin().lock(), &mut out).context("reading trace input")?;

    info!("end of stream: {summary:?}");
    if !args.quiet {
        eprintln!(
            "end of stream: {} lines, {} events, {} headers skipped, {} frames, {} in window",
            summary.lines, summary.events, summary.headers, summary.frames, summary.window_len
        );
    }

    Ok(())
}
