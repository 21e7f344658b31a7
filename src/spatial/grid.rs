//! Boolean occupation grid backed by a dense 2-D array
//!
//! Provides the rectangular two-state grid that connectivity checks traverse.
//! Cells are addressed by `[row, col]` coordinate pairs; a `true` cell is
//! occupied, a `false` cell is empty. The same buffer is refilled in place
//! between Monte Carlo trials to avoid per-trial allocation.

use ndarray::Array2;
use rand::Rng;

use crate::io::error::{PercolationError, Result, invalid_parameter};

/// Rectangular two-state grid of occupied and empty cells
///
/// Dimensions are fixed at construction and always at least 1x1. The
/// dimensions are cached separately from the backing array so bounds
/// queries stay `const`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Occupation state for each cell (`true` = occupied)
    cells: Array2<bool>,

    /// Grid dimensions (rows, cols)
    dimensions: (usize, usize),
}

impl Grid {
    /// Create an all-empty grid with the given dimensions
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Self::filled(rows, cols, false)
    }

    /// Create a grid with every cell set to `occupied`
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero.
    pub fn filled(rows: usize, cols: usize, occupied: bool) -> Result<Self> {
        validate_dimensions(rows, cols)?;

        Ok(Self {
            cells: Array2::from_elem((rows, cols), occupied),
            dimensions: (rows, cols),
        })
    }

    /// Create a grid by evaluating `occupy` at every coordinate
    ///
    /// Useful for building deterministic test patterns such as diagonal
    /// staircases.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero.
    pub fn from_fn(rows: usize, cols: usize, occupy: impl Fn([usize; 2]) -> bool) -> Result<Self> {
        validate_dimensions(rows, cols)?;

        Ok(Self {
            cells: Array2::from_shape_fn((rows, cols), |(row, col)| occupy([row, col])),
            dimensions: (rows, cols),
        })
    }

    /// Create a grid with each cell independently occupied with probability `p`
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, p: f64, rng: &mut R) -> Result<Self> {
        let mut grid = Self::new(rows, cols)?;
        grid.fill_random(p, rng);
        Ok(grid)
    }

    /// Refill every cell in place, each independently occupied with probability `p`
    ///
    /// Values of `p` at or below 0 empty the grid; values at or above 1 fill
    /// it completely. Draws one uniform sample per cell.
    pub fn fill_random<R: Rng + ?Sized>(&mut self, p: f64, rng: &mut R) {
        for cell in &mut self.cells {
            *cell = rng.random::<f64>() < p;
        }
    }

    /// Get the number of rows in the grid
    pub const fn rows(&self) -> usize {
        self.dimensions.0
    }

    /// Get the number of columns in the grid
    pub const fn cols(&self) -> usize {
        self.dimensions.1
    }

    /// Get the grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        self.dimensions
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.dimensions.0 * self.dimensions.1
    }

    /// Coordinate of the first cell, the default connectivity source
    pub const fn top_left(&self) -> [usize; 2] {
        [0, 0]
    }

    /// Coordinate of the last cell, the default connectivity target
    pub const fn bottom_right(&self) -> [usize; 2] {
        [self.dimensions.0 - 1, self.dimensions.1 - 1]
    }

    /// Check whether a coordinate lies within grid bounds
    pub const fn contains(&self, cell: [usize; 2]) -> bool {
        cell[0] < self.dimensions.0 && cell[1] < self.dimensions.1
    }

    /// Flatten a coordinate to a dense index (`row * cols + col`)
    ///
    /// Used to key the reached mask during traversal without per-cell
    /// heap allocation.
    pub const fn flat_index(&self, cell: [usize; 2]) -> usize {
        cell[0] * self.dimensions.1 + cell[1]
    }

    /// Get the occupation state of a cell, or `None` when out of bounds
    pub fn get(&self, cell: [usize; 2]) -> Option<bool> {
        self.cells.get((cell[0], cell[1])).copied()
    }

    /// Check whether an in-bounds cell is occupied
    ///
    /// Out-of-bounds coordinates report unoccupied; connectivity endpoints
    /// are bounds-checked separately before traversal begins.
    pub fn is_occupied(&self, cell: [usize; 2]) -> bool {
        self.get(cell).unwrap_or(false)
    }

    /// Set the occupation state of a single cell
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinate is out of bounds.
    pub fn set(&mut self, cell: [usize; 2], occupied: bool) -> Result<()> {
        let dimensions = self.dimensions;
        match self.cells.get_mut((cell[0], cell[1])) {
            Some(value) => {
                *value = occupied;
                Ok(())
            }
            None => Err(PercolationError::CellOutOfBounds { cell, dimensions }),
        }
    }
}

fn validate_dimensions(rows: usize, cols: usize) -> Result<()> {
    if rows == 0 {
        return Err(invalid_parameter(
            "rows",
            &rows,
            &"grid must have at least one row",
        ));
    }
    if cols == 0 {
        return Err(invalid_parameter(
            "cols",
            &cols,
            &"grid must have at least one column",
        ));
    }
    Ok(())
}
