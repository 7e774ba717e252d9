//! Driver-facing engine: owns the grid, the tree and the single worker thread.
//!
//! The renderer must never be blocked by generation, so every run happens on a dedicated worker
//! thread and reaches the outside world only through the [`EventSink`] it was started with. The
//! engine itself does no locking: the tree is immutable and shared through an [`Arc`], and at
//! most one worker exists at a time.

use std::{
    sync::Arc,
    thread::{self, JoinHandle},
};

use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng as _};

use crate::{
    algorithms::{generate, Algorithm},
    config::MazeConfig,
    error::MazeError,
    events::{CancellationToken, EventSink, Outcome},
    tree::SpanningTree,
};

/// Lifecycle of the engine's current run.
///
/// Only collecting a worker moves the state out of `Running`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    /// Nothing has run since the grid was (re)built, or the last run failed.
    #[default]
    Idle,
    /// A worker is generating.
    Running,
    /// The last run reached its terminating condition.
    Completed,
    /// The last run was cancelled.
    Cancelled,
}

/// The running worker and the token that stops it.
#[derive(Debug)]
struct Worker {
    /// Stop signal observed by the worker.
    token: CancellationToken,
    /// Thread running the generator.
    handle: JoinHandle<Result<Outcome, MazeError>>,
}

/// Maze generation engine.
///
/// Holds the configuration and the spanning tree built for it, and runs at most one generator at
/// a time on a background thread. Events leave the worker only through the sink given to
/// [`Engine::start`]; the driver learns the outcome through [`Engine::poll`] or [`Engine::wait`].
/// Dropping the engine cancels and joins any active run.
#[derive(Debug)]
pub struct Engine {
    /// Current configuration.
    config: MazeConfig,
    /// Tree for the current dimension, shared read-only with the worker.
    tree: Arc<SpanningTree>,
    /// Lifecycle of the current or last run.
    state: RunState,
    /// Worker of the active run, if any.
    worker: Option<Worker>,
}

impl Engine {
    /// Builds the grid and spanning tree described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::InvalidDimension`] if the configuration describes an empty grid.
    pub fn new(config: MazeConfig) -> Result<Self, MazeError> {
        let tree = Arc::new(SpanningTree::build(config.grid()?));
        info!(
            "engine ready with a {0}x{0} grid, cell size {1}",
            config.dimension(),
            config.cell_size()
        );

        Ok(Self {
            config,
            tree,
            state: RunState::Idle,
            worker: None,
        })
    }

    /// Current configuration.
    #[must_use]
    pub const fn config(&self) -> MazeConfig {
        self.config
    }

    /// Spanning tree of the current grid.
    #[must_use]
    pub fn tree(&self) -> &SpanningTree {
        &self.tree
    }

    /// State of the current or last run.
    #[must_use]
    pub const fn state(&self) -> RunState {
        self.state
    }

    /// Whether a worker has been started and not yet collected.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    /// Discards the grid and tree and rebuilds them for `dimension`.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::Busy`] while a run is active; the driver must cancel and collect it
    /// first. Returns the configuration errors of [`MazeConfig::with_dimension`] otherwise.
    pub fn set_grid_dimension(&mut self, dimension: usize) -> Result<(), MazeError> {
        if self.is_running() {
            return Err(MazeError::Busy);
        }

        let config = self.config.with_dimension(dimension)?;
        self.tree = Arc::new(SpanningTree::build(config.grid()?));
        self.config = config;
        self.state = RunState::Idle;
        info!("grid rebuilt as {dimension}x{dimension}");

        Ok(())
    }

    /// Changes the seed used by the next run.
    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.config = self.config.with_seed(seed);
    }

    /// Starts `algorithm` on a worker thread, delivering events into `sink`.
    ///
    /// Returns a clone of the run's cancellation token.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::Busy`] when a run is already active and [`MazeError::WorkerSpawn`]
    /// when the thread cannot be created.
    pub fn start<S>(&mut self, algorithm: Algorithm, mut sink: S) -> Result<CancellationToken, MazeError>
    where
        S: EventSink + Send + 'static,
    {
        if self.is_running() {
            return Err(MazeError::Busy);
        }

        let token = CancellationToken::new();
        let worker_token = token.clone();
        let tree = Arc::clone(&self.tree);
        let cell_size = self.config.cell_size();
        let seed = self.config.seed();

        let handle = thread::Builder::new()
            .name("maze-worker".to_owned())
            .spawn(move || {
                let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
                generate(algorithm, &tree, cell_size, &mut rng, &mut sink, &worker_token)
            })
            .map_err(MazeError::WorkerSpawn)?;

        debug!("worker started for {algorithm}");
        self.worker = Some(Worker {
            token: token.clone(),
            handle,
        });
        self.state = RunState::Running;

        Ok(token)
    }

    /// Asks the active run, if any, to stop before its next event.
    pub fn cancel(&self) {
        if let Some(worker) = &self.worker {
            worker.token.cancel();
        }
    }

    /// Collects the active run if its worker has finished, without blocking.
    ///
    /// Returns `None` while the worker is still running or when nothing was started.
    pub fn poll(&mut self) -> Option<Result<Outcome, MazeError>> {
        if self
            .worker
            .as_ref()
            .is_some_and(|worker| worker.handle.is_finished())
        {
            self.collect()
        } else {
            None
        }
    }

    /// Blocks until the active run finishes and returns its outcome.
    ///
    /// Returns `None` when nothing was started.
    pub fn wait(&mut self) -> Option<Result<Outcome, MazeError>> {
        self.collect()
    }

    /// Joins the worker and settles the run state.
    fn collect(&mut self) -> Option<Result<Outcome, MazeError>> {
        let worker = self.worker.take()?;
        let result = worker
            .handle
            .join()
            .unwrap_or(Err(MazeError::WorkerPanicked));

        self.state = match &result {
            Ok(Outcome::Completed(_)) => RunState::Completed,
            Ok(Outcome::Cancelled(_)) => RunState::Cancelled,
            Err(_) => RunState::Idle,
        };
        debug!("worker collected in state {:?}", self.state);

        Some(result)
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        self.cancel();
        let _ = self.collect();
    }
}
