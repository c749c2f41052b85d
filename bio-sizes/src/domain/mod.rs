//! Domain model for bio-sizes
//!
//! Core types shared by the parser, the window store and the renderer,
//! plus the structured errors they report.

pub mod errors;
pub mod types;

pub use types::{Direction, Event};

pub use errors::{DriverError, ParseError, UsageError};
