//! Command-line interface of the binary.

use std::{path::PathBuf, time::Duration};

use clap::Parser;

use crate::{
    algorithms::Algorithm,
    config::{MazeConfig, DEFAULT_CANVAS_SIZE, DEFAULT_DIMENSION, DEFAULT_FRAME_DELAY_MS},
    error::MazeError,
};

/// Generate perfect mazes and watch them being carved.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Number of rows and columns of the maze.
    #[arg(short, long, default_value_t = DEFAULT_DIMENSION)]
    pub dimension: usize,
    /// Generation algorithm.
    #[arg(short, long, value_enum, default_value_t)]
    pub algorithm: Algorithm,
    /// Seed for a reproducible maze; omitted means a fresh random one.
    #[arg(short, long)]
    pub seed: Option<u64>,
    /// Side length of the abstract drawing surface.
    #[arg(long, default_value_t = DEFAULT_CANVAS_SIZE)]
    pub canvas_size: usize,
    /// Draw the finished maze at once instead of animating every step.
    #[arg(long)]
    pub no_animation: bool,
    /// Delay between two animation steps, in milliseconds.
    #[arg(long, default_value_t = DEFAULT_FRAME_DELAY_MS)]
    pub frame_delay_ms: u64,
    /// Print the maze as text instead of opening the terminal interface.
    #[arg(long)]
    pub headless: bool,
    /// Write logs to this file while the terminal interface is open.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Validated engine configuration described by the arguments.
    ///
    /// # Errors
    ///
    /// Returns the validation errors of [`MazeConfig`].
    pub fn config(&self) -> Result<MazeConfig, MazeError> {
        Ok(MazeConfig::new(self.dimension)?
            .with_canvas_size(self.canvas_size)?
            .with_seed(self.seed))
    }

    /// Renderer settings described by the arguments.
    #[must_use]
    pub const fn settings(&self) -> Settings {
        Settings {
            algorithm: self.algorithm,
            animate: !self.no_animation,
            frame_delay: Duration::from_millis(self.frame_delay_ms),
        }
    }
}

/// Choices of the interactive driver that do not concern the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Algorithm started by the next run.
    pub algorithm: Algorithm,
    /// Whether events are drawn one at a time.
    pub animate: bool,
    /// Delay between two animated events.
    pub frame_delay: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            animate: true,
            frame_delay: Duration::from_millis(DEFAULT_FRAME_DELAY_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["mazeweaver"]).expect("no arguments are required");

        let config = cli.config().expect("defaults are valid");
        assert_eq!(config, MazeConfig::default());
        assert_eq!(cli.settings(), Settings::default());
        assert!(!cli.headless);
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_full_command_line() {
        let cli = Cli::try_parse_from([
            "mazeweaver",
            "--dimension",
            "40",
            "--algorithm",
            "randomized-kruskal",
            "--seed",
            "7",
            "--canvas-size",
            "400",
            "--no-animation",
            "--frame-delay-ms",
            "5",
            "--headless",
            "--log-file",
            "maze.log",
        ])
        .expect("arguments are valid");

        let config = cli.config().expect("configuration is valid");
        assert_eq!(config.dimension(), 40);
        assert_eq!(config.cell_size(), 10);
        assert_eq!(config.seed(), Some(7));

        let settings = cli.settings();
        assert_eq!(settings.algorithm, Algorithm::RandomizedKruskal);
        assert!(!settings.animate);
        assert_eq!(settings.frame_delay, Duration::from_millis(5));
        assert!(cli.headless);
        assert_eq!(cli.log_file, Some(PathBuf::from("maze.log")));
    }

    #[test]
    fn test_short_flags_and_algorithm_names() {
        let cli = Cli::try_parse_from(["mazeweaver", "-d", "5", "-a", "aldous-broder", "-s", "1"])
            .expect("arguments are valid");

        assert_eq!(cli.algorithm, Algorithm::AldousBroder);
        assert_eq!(cli.config().expect("valid").dimension(), 5);
        assert!(Cli::try_parse_from(["mazeweaver", "-a", "prim"]).is_err());
    }

    #[test]
    fn test_invalid_sizes_surface_as_maze_errors() {
        let cli = Cli::try_parse_from(["mazeweaver", "--dimension", "0"])
            .expect("zero parses as a number");
        assert!(matches!(cli.config(), Err(MazeError::InvalidDimension(0))));

        let cli = Cli::try_parse_from(["mazeweaver", "--dimension", "50", "--canvas-size", "0"])
            .expect("arguments parse");
        assert!(matches!(cli.config(), Err(MazeError::CanvasTooSmall { .. })));

        let cli = Cli::try_parse_from(["mazeweaver", "--dimension", "900"])
            .expect("arguments parse");
        assert_eq!(cli.config().expect("large grids are valid").cell_size(), 1);
    }
}
