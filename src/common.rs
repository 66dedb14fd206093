//! Common types: shot outcomes and the game error taxonomy.

use core::fmt;
use serde::Serialize;

/// Result of resolving a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ShotOutcome {
    /// Shot landed in open water.
    Miss,
    /// Shot struck an undepleted ship segment.
    Hit,
    /// Shot sank a ship, carrying its name.
    Sunk(&'static str),
    /// The cell was shot before; nothing changed.
    Repeat,
}

impl ShotOutcome {
    /// Hits and sinks retain the shooter's turn.
    pub fn is_hit(&self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::Sunk(_))
    }
}

/// Placement rule violated by a rejected fleet submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementRule {
    /// Ship name is not part of the catalog.
    UnknownShip,
    /// Cell count does not match the catalog length.
    WrongLength { expected: usize, actual: usize },
    /// A cell lies outside the board.
    OutOfBounds,
    /// A cell is already taken by another ship.
    Occupied,
    /// Cells do not share a single row or a single column.
    NotAligned,
    /// Aligned cells have gaps.
    NotContiguous,
    /// The same catalog entry was submitted more than once.
    DuplicateShip,
    /// A catalog entry is absent from the submission.
    MissingShip,
}

impl fmt::Display for PlacementRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementRule::UnknownShip => write!(f, "not part of the ship catalog"),
            PlacementRule::WrongLength { expected, actual } => {
                write!(f, "expected {} cells, got {}", expected, actual)
            }
            PlacementRule::OutOfBounds => write!(f, "cell outside the board"),
            PlacementRule::Occupied => write!(f, "cell already occupied by another ship"),
            PlacementRule::NotAligned => write!(f, "cells must share a row or a column"),
            PlacementRule::NotContiguous => write!(f, "cells must form an unbroken run"),
            PlacementRule::DuplicateShip => write!(f, "listed more than once"),
            PlacementRule::MissingShip => write!(f, "missing from the fleet"),
        }
    }
}

/// Errors surfaced by game operations. Every rejected operation leaves the
/// game exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Coordinate outside the board.
    OutOfBounds { row: usize, col: usize },
    /// A fleet placement broke a rule; names the ship and the rule.
    Validation { ship: String, rule: PlacementRule },
    /// Operation attempted in the wrong phase, on the wrong turn, or after
    /// the game finished.
    Precondition(&'static str),
    /// No game has been started yet.
    NotFound,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::OutOfBounds { row, col } => {
                write!(f, "coordinates ({}, {}) are outside the board", row, col)
            }
            GameError::Validation { ship, rule } => {
                write!(f, "invalid placement for {}: {}", ship, rule)
            }
            GameError::Precondition(what) => write!(f, "operation not allowed: {}", what),
            GameError::NotFound => write!(f, "no game in progress"),
        }
    }
}

impl std::error::Error for GameError {}
