//! Event stream between the generators and whoever renders them.
//!
//! Generators never draw anything. They push [`MazeEvent`]s into an [`EventSink`] owned by the
//! caller, synchronously and without pacing. Any delay for visual effect is the sink's business.

use std::{
    ops::ControlFlow,
    sync::{
        atomic::{AtomicBool, Ordering},
        mpsc::Sender,
        Arc,
    },
};

use crate::{
    error::MazeError,
    grid::{Cell, Direction},
    wall::Wall,
};

/// A single observable step of a generation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MazeEvent {
    /// A cell was entered for the first time.
    CellVisited(Cell),
    /// The wall between `cell` and its neighbour in `direction` was removed.
    PassageCarved {
        /// Cell the passage starts from.
        cell: Cell,
        /// Side of `cell` that was opened.
        direction: Direction,
    },
    /// A specific wall segment was removed.
    WallCarved(Wall),
    /// The backtracker returned to a cell it had already visited.
    CellRevisited(Cell),
}

/// Consumer of the event stream.
///
/// Returning [`ControlFlow::Break`] asks the running generator to stop; the run then ends as
/// cancelled, exactly as if its [`CancellationToken`] had been triggered.
pub trait EventSink {
    /// Receives the next event of the run.
    fn emit(&mut self, event: MazeEvent) -> ControlFlow<()>;
}

impl EventSink for Vec<MazeEvent> {
    fn emit(&mut self, event: MazeEvent) -> ControlFlow<()> {
        self.push(event);
        ControlFlow::Continue(())
    }
}

impl EventSink for Sender<MazeEvent> {
    fn emit(&mut self, event: MazeEvent) -> ControlFlow<()> {
        match self.send(event) {
            Ok(()) => ControlFlow::Continue(()),
            // The receiving renderer is gone; nobody is left to watch.
            Err(_) => ControlFlow::Break(()),
        }
    }
}

/// Cooperative stop signal shared between the driver and a running generator.
///
/// Cloning the token shares the underlying flag.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    /// Flag raised by [`CancellationToken::cancel`].
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Creates a token that has not been cancelled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests that the run observing this token stops before its next event.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Whether [`cancel`](CancellationToken::cancel) has been called on any clone.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Counters describing what a run emitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Number of `CellVisited` events.
    pub visited: usize,
    /// Number of `PassageCarved` and `WallCarved` events.
    pub carved: usize,
    /// Candidate walls skipped because carving them would close a cycle.
    pub skipped: usize,
    /// Number of `CellRevisited` events.
    pub revisited: usize,
}

impl RunStats {
    /// Total number of events delivered to the sink.
    #[must_use]
    pub const fn events(&self) -> usize {
        self.visited + self.carved + self.revisited
    }
}

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The generator reached its terminating condition.
    Completed(RunStats),
    /// The run stopped early on request; the stats cover what was emitted before stopping.
    Cancelled(RunStats),
}

impl Outcome {
    /// Stats of the run regardless of how it ended.
    #[must_use]
    pub const fn stats(&self) -> RunStats {
        match self {
            Self::Completed(stats) | Self::Cancelled(stats) => *stats,
        }
    }

    /// Whether the run was cancelled.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled(_))
    }
}

/// Reason a generator loop stopped before its terminating condition.
#[derive(Debug)]
pub(crate) enum Interrupt {
    /// Cancellation was requested, either through the token or by the sink.
    Cancelled,
    /// An internal invariant broke.
    Failed(MazeError),
}

impl From<MazeError> for Interrupt {
    fn from(error: MazeError) -> Self {
        Self::Failed(error)
    }
}

/// Gatekeeper between a generator and its sink.
///
/// Every event passes a cancellation check first, so once cancellation is observed no further
/// event reaches the sink.
pub(crate) struct Emitter<'run, S: EventSink + ?Sized> {
    /// Destination of the events.
    sink: &'run mut S,
    /// Stop signal of the run.
    token: &'run CancellationToken,
    /// Running counters.
    stats: RunStats,
}

impl<'run, S: EventSink + ?Sized> Emitter<'run, S> {
    /// Wraps `sink` for a run observing `token`.
    pub(crate) fn new(sink: &'run mut S, token: &'run CancellationToken) -> Self {
        Self {
            sink,
            token,
            stats: RunStats::default(),
        }
    }

    /// Fails with [`Interrupt::Cancelled`] once cancellation was requested.
    pub(crate) fn checkpoint(&self) -> Result<(), Interrupt> {
        if self.token.is_cancelled() {
            return Err(Interrupt::Cancelled);
        }

        Ok(())
    }

    /// Delivers `event` unless the run has been cancelled.
    ///
    /// Only events the sink accepted are counted in the run's statistics.
    pub(crate) fn emit(&mut self, event: MazeEvent) -> Result<(), Interrupt> {
        self.checkpoint()?;

        match self.sink.emit(event) {
            ControlFlow::Continue(()) => {
                match event {
                    MazeEvent::CellVisited(_) => self.stats.visited += 1,
                    MazeEvent::PassageCarved { .. } | MazeEvent::WallCarved(_) => {
                        self.stats.carved += 1;
                    }
                    MazeEvent::CellRevisited(_) => self.stats.revisited += 1,
                }
                Ok(())
            }
            ControlFlow::Break(()) => {
                self.token.cancel();
                Err(Interrupt::Cancelled)
            }
        }
    }

    /// Records a candidate wall that was skipped.
    pub(crate) fn skip(&mut self) {
        self.stats.skipped += 1;
    }

    /// Turns the result of a generator loop into the run's outcome.
    pub(crate) fn finish(self, result: Result<(), Interrupt>) -> Result<Outcome, MazeError> {
        match result {
            Ok(()) => Ok(Outcome::Completed(self.stats)),
            Err(Interrupt::Cancelled) => Ok(Outcome::Cancelled(self.stats)),
            Err(Interrupt::Failed(error)) => Err(error),
        }
    }
}
