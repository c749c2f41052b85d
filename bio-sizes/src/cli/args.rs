//! CLI argument definitions

use clap::Parser;
use std::time::Duration;

use crate::config::Config;
use crate::domain::UsageError;

#[derive(Parser, Debug)]
#[command(
    name = "bio-sizes",
    version,
    about = "Live histogram of block I/O request sizes from biosnoop output",
    after_help = "\
EXAMPLES:
    sudo biosnoop | bio-sizes                       10s window, redraw every 0.5s
    sudo python3 -u biosnoop.py | bio-sizes -w 30   30s window
    bio-sizes --width 100 < captured-trace.txt      Replay a saved trace"
)]
pub struct Args {
    /// Sliding window length in seconds
    #[arg(short, long, value_name = "SECS", default_value_t = 10.0)]
    pub window: f64,

    /// Minimum seconds between redraws
    #[arg(short, long, value_name = "SECS", default_value_t = 0.5)]
    pub interval: f64,

    /// Use a fixed terminal width instead of querying the terminal
    #[arg(long, value_name = "COLS")]
    pub width: Option<u16>,

    /// Don't print the activity spinner after each frame
    #[arg(long)]
    pub no_spinner: bool,

    /// Suppress the startup banner and end-of-stream summary
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Validate flag values into a [`Config`].
    pub fn to_config(&self) -> Result<Config, UsageError> {
        if self.width == Some(0) {
            return Err(UsageError::ZeroWidth);
        }
        Ok(Config {
            window: positive_secs("window", self.window)?,
            render_interval: positive_secs("interval", self.interval)?,
            spinner: !self.no_spinner,
            width: self.width,
        })
    }
}

fn positive_secs(flag: &'static str, value: f64) -> Result<Duration, UsageError> {
    if value > 0.0 {
        Duration::try_from_secs_f64(value).map_err(|_| UsageError::InvalidDuration { flag, value })
    } else {
        Err(UsageError::InvalidDuration { flag, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_config_default() {
        let args = Args::parse_from(["bio-sizes"]);
        assert_eq!(args.to_config().unwrap(), Config::default());
    }

    #[test]
    fn test_flags() {
        let args = Args::parse_from([
            "bio-sizes", "--window", "2.5", "-i", "1", "--width", "120", "--no-spinner",
        ]);
        let config = args.to_config().unwrap();
        assert_eq!(config.window, Duration::from_millis(2500));
        assert_eq!(config.render_interval, Duration::from_secs(1));
        assert_eq!(config.width, Some(120));
        assert!(!config.spinner);
    }

    #[test]
    fn test_rejects_non_positive_durations() {
        let args = Args::parse_from(["bio-sizes", "--window", "0"]);
        assert_eq!(
            args.to_config(),
            Err(UsageError::InvalidDuration { flag: "window", value: 0.0 })
        );

        let args = Args::parse_from(["bio-sizes", "--interval=-1"]);
        assert!(matches!(
            args.to_config(),
            Err(UsageError::InvalidDuration { flag: "interval", .. })
        ));

        let args = Args::parse_from(["bio-sizes", "--window", "inf"]);
        assert!(args.to_config().is_err());
    }

    #[test]
    fn test_rejects_zero_width() {
        let args = Args::parse_from(["bio-sizes", "--width", "0"]);
        assert_eq!(args.to_config(), Err(UsageError::ZeroWidth));
    }
}
