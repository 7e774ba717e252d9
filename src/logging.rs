//! Logger setup for the binary.

use std::{fs::File, path::Path};

use color_eyre::eyre::Result;
use env_logger::{Builder, Env, Target};

/// Filter applied when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "warn";

/// Installs the global logger.
///
/// The terminal interface owns the screen, so logs go to `log_file` when one is given, to stderr
/// when running headless, and nowhere otherwise.
///
/// # Errors
///
/// Fails when the log file cannot be created or a logger is already installed.
pub fn init(headless: bool, log_file: Option<&Path>) -> Result<()> {
    let target = match log_file {
        Some(path) => Target::Pipe(Box::new(File::create(path)?)),
        None if headless => Target::Stderr,
        None => return Ok(()),
    };

    Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .target(target)
        .format_timestamp_millis()
        .try_init()?;

    Ok(())
}
