//! Board cell matrix with bounds-checked accessors.

use crate::common::GameError;
use crate::config::BOARD_SIZE;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Contents of a single board cell. An owner grid may carry any symbol; a
/// target grid never carries `Ship`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Ship,
    Hit,
    Miss,
    Sunk,
}

impl Cell {
    /// Single-character rendering used by the terminal UI and `Debug`.
    pub fn symbol(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Ship => 'S',
            Cell::Hit => 'X',
            Cell::Miss => 'o',
            Cell::Sunk => '#',
        }
    }
}

/// A 10x10 cell matrix. Purely passive: all semantic rules live in the
/// components above it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Grid {
    /// Create a grid of open water.
    pub fn new() -> Self {
        Grid {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn in_bounds(row: usize, col: usize) -> bool {
        row < BOARD_SIZE && col < BOARD_SIZE
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        if !Self::in_bounds(row, col) {
            return Err(GameError::OutOfBounds { row, col });
        }
        Ok(self.cells[row][col])
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), GameError> {
        if !Self::in_bounds(row, col) {
            return Err(GameError::OutOfBounds { row, col });
        }
        self.cells[row][col] = cell;
        Ok(())
    }

    /// Number of cells currently holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c == cell)
            .count()
    }

    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
