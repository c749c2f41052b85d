//! Run configuration, fixed at startup

use std::time::Duration;

use crate::window::DEFAULT_HORIZON;

/// Default minimum spacing between redraws
pub const DEFAULT_RENDER_INTERVAL: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Events older than this are evicted
    pub window: Duration,
    /// Minimum wall-clock time between frames
    pub render_interval: Duration,
    /// Print a rotating tick after each frame
    pub spinner: bool,
    /// Pinned terminal width; `None` queries the terminal per frame
    pub width: Option<u16>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: DEFAULT_HORIZON,
            render_interval: DEFAULT_RENDER_INTERVAL,
            spinner: true,
            width: None,
        }
    }
}
