//! This crate contains the source code for the mazeweaver binary.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use std::io;

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use mazeweaver::{cli::Cli, logging, run_headless, App};

fn main() -> Result<()> {
    install()?;

    let cli = Cli::parse();
    logging::init(cli.headless, cli.log_file.as_deref())?;
    let config = cli.config()?;
    let settings = cli.settings();

    if cli.headless {
        let _ = run_headless(config, settings.algorithm, &mut io::stdout().lock())?;
        return Ok(());
    }

    let mut app = App::new(config, settings)?;
    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();

    result
}
