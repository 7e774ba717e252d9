//! Application state of the interactive driver.

use std::{
    io::Write,
    sync::mpsc::{self, Receiver},
    time::Instant,
};

use color_eyre::eyre::Result;
use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng as _};
use ratatui::DefaultTerminal;

use crate::{
    algorithms::{generate, Algorithm},
    canvas::MazeCanvas,
    cli::Settings,
    config::{MazeConfig, GRID_CHOICES},
    engine::{Engine, RunState},
    events::{CancellationToken, MazeEvent, Outcome},
    input,
    playback::Playback,
    tree::SpanningTree,
    types::{MainMenuItem, Screen},
    ui,
};

/// State of the terminal interface.
///
/// The application owns the engine and the renderer-side canvas. Events travel from the worker
/// over a channel, get paced by the playback queue and are finally applied to the canvas, which
/// is what the interface draws.
#[derive(Debug)]
pub struct App {
    /// Set once the user asks to leave.
    pub(crate) exit: bool,
    /// Screen currently displayed.
    pub(crate) screen: Screen,
    /// Algorithm and animation choices.
    pub(crate) settings: Settings,
    /// Maze generation engine.
    pub(crate) engine: Engine,
    /// Picture of the maze drawn so far.
    pub(crate) canvas: MazeCanvas,
    /// Events waiting to be drawn.
    pub(crate) playback: Playback,
    /// Receiving end of the current run's event channel.
    pub(crate) receiver: Option<Receiver<MazeEvent>>,
    /// How the last collected run ended.
    pub(crate) outcome: Option<Outcome>,
}

impl App {
    /// Creates the application on the main menu with an idle engine.
    ///
    /// # Errors
    ///
    /// Fails when the engine cannot build the configured grid.
    pub fn new(config: MazeConfig, settings: Settings) -> Result<Self> {
        let engine = Engine::new(config)?;
        let canvas = MazeCanvas::new(engine.tree().grid(), config.cell_size());

        Ok(Self {
            exit: false,
            screen: Screen::MainMenu(MainMenuItem::Generate),
            settings,
            engine,
            canvas,
            playback: Playback::new(settings.animate, settings.frame_delay),
            receiver: None,
            outcome: None,
        })
    }

    /// Runs the main loop until the user quits.
    ///
    /// Every iteration draws a frame, handles at most one key press and advances the animation.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`] from the terminal
    /// - any engine failure surfaced while collecting a run
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal.try_draw(|frame| {
                ui::draw(self, frame).map_err(std::io::Error::other)
            })?;
            input::handle_events(self)?;
            self.update(Instant::now())?;
        }

        self.reset();

        Ok(())
    }

    /// Starts a fresh run of the selected algorithm on a clean canvas.
    ///
    /// # Errors
    ///
    /// Fails when the worker thread cannot be started.
    pub(crate) fn generate(&mut self) -> Result<()> {
        self.reset();

        let (sender, receiver) = mpsc::channel();
        let _ = self.engine.start(self.settings.algorithm, sender)?;
        self.receiver = Some(receiver);
        self.screen = Screen::InGame;
        info!("started {}", self.settings.algorithm);

        Ok(())
    }

    /// Asks the running worker to stop; what was drawn stays on screen.
    pub(crate) fn cancel(&self) {
        self.engine.cancel();
    }

    /// Cancels and collects any run, then discards the canvas.
    pub(crate) fn reset(&mut self) {
        self.engine.cancel();
        if let Some(Err(error)) = self.engine.wait() {
            debug!("discarding failed run: {error}");
        }

        self.receiver = None;
        self.outcome = None;
        self.playback.clear();
        self.canvas = MazeCanvas::new(self.engine.tree().grid(), self.engine.config().cell_size());
    }

    /// Selects the next algorithm in menu order.
    pub(crate) fn cycle_algorithm(&mut self) {
        self.settings.algorithm = self.settings.algorithm.next();
    }

    /// Switches to the next offered grid size, discarding the current maze.
    ///
    /// # Errors
    ///
    /// Fails when the engine rejects the new dimension.
    pub(crate) fn cycle_grid_size(&mut self) -> Result<()> {
        let current = self.engine.config().dimension();
        let next = GRID_CHOICES
            .iter()
            .position(|&choice| choice == current)
            .and_then(|index| GRID_CHOICES.get(index + 1))
            .or_else(|| GRID_CHOICES.first())
            .copied()
            .unwrap_or(current);

        self.reset();
        self.engine.set_grid_dimension(next)?;
        self.reset();

        Ok(())
    }

    /// Turns step-by-step animation on or off.
    pub(crate) fn toggle_animation(&mut self) {
        self.settings.animate = !self.settings.animate;
        self.playback.set_animate(self.settings.animate);
    }

    /// Moves received events through the playback queue onto the canvas and collects a finished
    /// worker.
    ///
    /// # Errors
    ///
    /// Fails on an event that does not fit the grid or on a run that ended with an error.
    pub(crate) fn update(&mut self, now: Instant) -> Result<()> {
        if let Some(receiver) = &self.receiver {
            self.playback.extend(receiver.try_iter());
        }

        for event in self.playback.release(now) {
            self.canvas.apply(event)?;
        }

        if let Some(result) = self.engine.poll() {
            self.outcome = Some(result?);
        }

        Ok(())
    }

    /// One-line description of the current run.
    pub(crate) fn status(&self) -> String {
        let dimension = self.engine.config().dimension();
        let progress = match self.engine.state() {
            _ if self.receiver.is_none() => "idle".to_owned(),
            RunState::Idle => "failed".to_owned(),
            RunState::Running => format!("running, {} passages", self.canvas.passage_count()),
            RunState::Completed if self.playback.pending() > 0 => {
                format!("drawing, {} passages", self.canvas.passage_count())
            }
            RunState::Completed => format!("done, {} passages", self.canvas.passage_count()),
            RunState::Cancelled => format!("cancelled, {} passages", self.canvas.passage_count()),
        };

        format!(
            "{} on {dimension}x{dimension}: {progress}",
            self.settings.algorithm
        )
    }
}

/// Generates one maze synchronously and writes it as text followed by a summary line.
///
/// # Errors
///
/// Fails on an engine error or when `out` cannot be written.
pub fn run_headless<W: Write>(config: MazeConfig, algorithm: Algorithm, out: &mut W) -> Result<Outcome> {
    let grid = config.grid()?;
    let tree = SpanningTree::build(grid);
    let mut rng = config
        .seed()
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let mut events = Vec::new();

    let outcome = generate(
        algorithm,
        &tree,
        config.cell_size(),
        &mut rng,
        &mut events,
        &CancellationToken::new(),
    )?;

    let mut canvas = MazeCanvas::new(grid, config.cell_size());
    for event in events {
        canvas.apply(event)?;
    }

    let stats = outcome.stats();
    write!(out, "{}", canvas.to_ascii())?;
    writeln!(
        out,
        "{algorithm}: {0}x{0} grid, {1} passages carved, {2} walls skipped, {3} events",
        grid.dimension(),
        stats.carved,
        stats.skipped,
        stats.events()
    )?;

    Ok(outcome)
}
