//! Validated engine configuration.
//!
//! The configuration is an explicit value handed to the engine when it is created or resized.
//! It replaces the observable-property bindings a GUI toolkit would use: nothing changes behind
//! the engine's back.

use crate::{error::MazeError, grid::Grid};

/// Side length of the abstract drawing surface walls are expressed in.
pub const DEFAULT_CANVAS_SIZE: usize = 800;

/// Grid dimensions offered by the interactive menu.
pub const GRID_CHOICES: [usize; 2] = [20, 40];

/// Grid dimension used when nothing else is asked for.
pub const DEFAULT_DIMENSION: usize = 20;

/// Delay between two animated events, in milliseconds.
pub const DEFAULT_FRAME_DELAY_MS: u64 = 25;

/// Grid size, drawing surface and randomness of a generation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MazeConfig {
    /// Number of rows and columns.
    dimension: usize,
    /// Side length of the canvas in wall coordinates.
    canvas_size: usize,
    /// Seed for reproducible runs; `None` seeds from the operating system.
    seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
            canvas_size: DEFAULT_CANVAS_SIZE,
            seed: None,
        }
    }
}

impl MazeConfig {
    /// Configuration for a `dimension x dimension` grid on the default canvas.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::InvalidDimension`] for a zero dimension. Any positive dimension is
    /// accepted; grids wider than the canvas get one unit per cell and draw past its edge.
    pub fn new(dimension: usize) -> Result<Self, MazeError> {
        Self::default().with_dimension(dimension)
    }

    /// Returns a copy with a different grid dimension.
    ///
    /// # Errors
    ///
    /// Same as [`MazeConfig::new`].
    pub fn with_dimension(self, dimension: usize) -> Result<Self, MazeError> {
        Self {
            dimension,
            ..self
        }
        .validated()
    }

    /// Returns a copy drawing on a canvas of `canvas_size` units.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::CanvasTooSmall`] for an empty canvas.
    pub fn with_canvas_size(self, canvas_size: usize) -> Result<Self, MazeError> {
        Self {
            canvas_size,
            ..self
        }
        .validated()
    }

    /// Returns a copy using `seed`, or OS entropy when `None`.
    #[must_use]
    pub const fn with_seed(self, seed: Option<u64>) -> Self {
        Self { seed, ..self }
    }

    /// Number of rows and columns.
    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    /// Side length of the canvas.
    #[must_use]
    pub const fn canvas_size(&self) -> usize {
        self.canvas_size
    }

    /// Seed of the run, if fixed.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Side length of one cell, `canvas_size / dimension` but never less than one unit.
    ///
    /// Wall coordinates are multiples of this value, so a zero would collapse every wall onto the
    /// origin. The drawn maze always spans `dimension * cell_size()` units.
    #[must_use]
    pub const fn cell_size(&self) -> usize {
        let cell_size = self.canvas_size / self.dimension;
        if cell_size == 0 {
            1
        } else {
            cell_size
        }
    }

    /// The grid this configuration describes.
    ///
    /// # Errors
    ///
    /// Never fails for a validated configuration; the error is kept for the zero-dimension case.
    pub fn grid(&self) -> Result<Grid, MazeError> {
        Grid::new(self.dimension)
    }

    /// Checks the invariants every constructor guarantees.
    fn validated(self) -> Result<Self, MazeError> {
        if self.dimension == 0 {
            return Err(MazeError::InvalidDimension(self.dimension));
        }
        if self.canvas_size == 0 {
            return Err(MazeError::CanvasTooSmall {
                canvas: self.canvas_size,
                dimension: self.dimension,
            });
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng as _};

    use super::*;
    use crate::{
        algorithms::{generate, Algorithm},
        events::{CancellationToken, MazeEvent},
        test_support,
        tree::SpanningTree,
    };

    #[test]
    fn test_offered_sizes_divide_the_canvas() {
        for dimension in GRID_CHOICES {
            let config = MazeConfig::new(dimension).expect("offered sizes are valid");
            assert_eq!(config.cell_size() * dimension, DEFAULT_CANVAS_SIZE);
        }

        assert_eq!(MazeConfig::new(20).expect("valid").cell_size(), 40);
        assert_eq!(MazeConfig::new(40).expect("valid").cell_size(), 20);
    }

    #[test]
    fn test_zero_dimension_is_rejected() {
        assert!(matches!(
            MazeConfig::new(0),
            Err(MazeError::InvalidDimension(0))
        ));
    }

    #[test]
    fn test_grids_wider_than_the_canvas_get_one_unit_per_cell() {
        let config = MazeConfig::new(1000).expect("any positive dimension is valid");
        assert_eq!(config.cell_size(), 1);
        assert_eq!(config.dimension(), 1000);

        let config = MazeConfig::new(30)
            .expect("valid")
            .with_canvas_size(29)
            .expect("a small canvas is still a canvas");
        assert_eq!(config.cell_size(), 1);
    }

    #[test]
    fn test_kruskal_on_a_grid_wider_than_the_canvas() {
        let config = MazeConfig::new(12)
            .expect("valid")
            .with_canvas_size(10)
            .expect("valid")
            .with_seed(Some(4));
        let tree = SpanningTree::build(config.grid().expect("valid"));
        let mut events = Vec::<MazeEvent>::new();

        let outcome = generate(
            Algorithm::RandomizedKruskal,
            &tree,
            config.cell_size(),
            &mut StdRng::seed_from_u64(4),
            &mut events,
            &CancellationToken::new(),
        )
        .expect("generation succeeds");

        assert_eq!(outcome.stats().carved, 143);
        assert!(test_support::is_spanning_tree(
            12,
            &test_support::carved_edges(12, config.cell_size(), &events)
        ));
    }

    #[test]
    fn test_empty_canvas_is_rejected() {
        assert!(matches!(
            MazeConfig::new(20).expect("valid").with_canvas_size(0),
            Err(MazeError::CanvasTooSmall {
                canvas: 0,
                dimension: 20
            })
        ));
    }

    #[test]
    fn test_uneven_division_rounds_down() {
        let config = MazeConfig::new(30).expect("valid");

        assert_eq!(config.cell_size(), 26);
        assert_eq!(config.grid().expect("valid").cell_count(), 900);
    }

    #[test]
    fn test_seed_is_carried() {
        let config = MazeConfig::default().with_seed(Some(42));

        assert_eq!(config.seed(), Some(42));
        assert_eq!(config.dimension(), DEFAULT_DIMENSION);
        assert_eq!(config.canvas_size(), DEFAULT_CANVAS_SIZE);
    }
}
