// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "snowfall")]
#[command(about = "Rotating tower in falling snow", long_about = None)]
pub struct Cli {
    /// JSON scene config; built-in defaults are used when omitted
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the snow particle count
    #[arg(short, long, value_name = "N")]
    pub particles: Option<usize>,

    /// Seed for particle placement and recycling
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Hide the control panel
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,

    /// Run this many frames without a window, then exit
    #[arg(long, value_name = "FRAMES")]
    pub headless: Option<u64>,

    /// Seconds per frame for headless runs
    #[arg(long, value_name = "SECONDS", default_value_t = 1.0 / 60.0)]
    pub fixed_delta: f32,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["snowfall"]);
        assert!(cli.config.is_none());
        assert!(!cli.no_ui);
        assert_eq!(cli.headless, None);
        assert_eq!(cli.verbose, 0);
        assert!((cli.fixed_delta - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_headless_run() {
        let cli = Cli::parse_from([
            "snowfall",
            "--headless",
            "120",
            "--particles",
            "500",
            "--seed",
            "9",
            "-vv",
        ]);
        assert_eq!(cli.headless, Some(120));
        assert_eq!(cli.particles, Some(500));
        assert_eq!(cli.seed, Some(9));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_command_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
