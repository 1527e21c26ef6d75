//! Startup configuration
//!
//! Defaults live in constants. The command line (or the matching `TOE_*`
//! environment variables) may override the startup simulation, the RNG
//! seed and the window size.

use std::fmt;
use std::str::FromStr;

use clap::Parser;

use crate::registry::VisualizationId;

pub const DEFAULT_TITLE: &str = "Theory of Everything Fun and Wild Simulations";
pub const DEFAULT_WIDTH: u32 = 1280;
pub const DEFAULT_HEIGHT: u32 = 800;
pub const DEFAULT_BACKGROUND: [f32; 3] = [0.05, 0.05, 0.08];

/// Theory of Everything simulations: a menu of small physics plots and thought experiments
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "toe_sim", version, about)]
pub struct Args {
    /// Simulation shown at startup (1-40)
    #[arg(env = "TOE_SIMULATION")]
    pub simulation: Option<u32>,

    /// Fixed seed for the random draws
    #[arg(long, env = "TOE_SEED")]
    pub seed: Option<u64>,

    /// Window size as WIDTHxHEIGHT
    #[arg(long, env = "TOE_WINDOW")]
    pub window: Option<WindowSize>,
}

/// Inner window size in physical pixels, both sides non-zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl FromStr for WindowSize {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (w, h) = raw
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {raw:?}"))?;
        let side = |s: &str| match s.trim().parse::<u32>() {
            Ok(0) => Err("window sides must be non-zero".to_owned()),
            Ok(n) => Ok(n),
            Err(e) => Err(format!("bad window side {s:?}: {e}")),
        };
        Ok(Self {
            width: side(w)?,
            height: side(h)?,
        })
    }
}

impl fmt::Display for WindowSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub background: [f32; 3],
    /// Simulation selected at startup
    pub initial: VisualizationId,
    /// Fixed seed for reproducible draws; entropy-seeded when `None`
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            background: DEFAULT_BACKGROUND,
            initial: VisualizationId(1),
            seed: None,
        }
    }
}

impl AppConfig {
    /// Parse the process arguments and environment on top of the defaults.
    /// Exits with a usage message on bad input, like any clap binary.
    pub fn from_cli() -> Self {
        Self::default().with_args(&Args::parse())
    }

    pub fn with_args(mut self, args: &Args) -> Self {
        if let Some(id) = args.simulation {
            log::info!("Starting on simulation {id}");
            self.initial = VisualizationId(id);
        }
        if let Some(seed) = args.seed {
            log::info!("Random draws seeded with {seed}");
            self.seed = Some(seed);
        }
        if let Some(size) = args.window {
            log::info!("Window size {size}");
            self.width = size.width;
            self.height = size.height;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("toe_sim").chain(argv.iter().copied()))
    }

    #[test]
    fn defaults_without_arguments() {
        let config = AppConfig::default().with_args(&parse(&[]).unwrap());
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.initial, VisualizationId(1));
    }

    #[test]
    fn arguments_override_defaults() {
        let args = parse(&["14", "--seed", "42", "--window", "1024x768"]).unwrap();
        let config = AppConfig::default().with_args(&args);
        assert_eq!(config.initial, VisualizationId(14));
        assert_eq!(config.seed, Some(42));
        assert_eq!((config.width, config.height), (1024, 768));
        assert_eq!(config.title, DEFAULT_TITLE);
    }

    #[test]
    fn bad_arguments_are_rejected() {
        assert!(parse(&["fourteen"]).is_err());
        assert!(parse(&["--seed", "-1"]).is_err());
        assert!(parse(&["--window", "0x600"]).is_err());
        assert_eq!(
            parse(&["3", "bogus"]).unwrap_err().kind(),
            ErrorKind::UnknownArgument
        );
    }

    #[test]
    fn help_and_version_short_circuit() {
        assert_eq!(parse(&["--help", "14"]).unwrap_err().kind(), ErrorKind::DisplayHelp);
        assert_eq!(parse(&["--version"]).unwrap_err().kind(), ErrorKind::DisplayVersion);
    }

    #[test]
    fn window_size_parsing() {
        let size = |w, h| WindowSize { width: w, height: h };
        assert_eq!("800x600".parse::<WindowSize>(), Ok(size(800, 600)));
        assert_eq!(" 800 X 600 ".parse::<WindowSize>(), Ok(size(800, 600)));
        assert!("800".parse::<WindowSize>().is_err());
        assert!("800x".parse::<WindowSize>().is_err());
        assert!("0x600".parse::<WindowSize>().is_err());
        assert_eq!(size(800, 600).to_string(), "800x600");
    }
}
