//! Shot resolution against a defending fleet.

use crate::common::{GameError, ShotOutcome};
use crate::fleet::Fleet;
use crate::grid::{Cell, Grid};

/// Outcome of one resolved shot plus a human-readable fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShotReport {
    pub outcome: ShotOutcome,
    pub message: String,
}

/// Apply a shot at `(row, col)` to the defender. `tracking` is the shooter's
/// target grid; marks mirror onto the defender's `owner` grid only when the
/// defender is the human (`mirror`), so they see enemy fire on their own
/// board. Repeats are rejected without touching any state; callers are
/// expected to filter them, this is the backstop.
pub fn resolve_shot(
    tracking: &mut Grid,
    fleet: &mut Fleet,
    owner: &mut Grid,
    mirror: bool,
    row: usize,
    col: usize,
) -> Result<ShotReport, GameError> {
    if !Grid::in_bounds(row, col) {
        return Err(GameError::OutOfBounds { row, col });
    }
    if tracking.get(row, col)? != Cell::Empty {
        return Ok(ShotReport {
            outcome: ShotOutcome::Repeat,
            message: "already fired at this square".to_string(),
        });
    }

    match fleet.ship_at_mut(row, col) {
        None => {
            tracking.set(row, col, Cell::Miss)?;
            if mirror {
                owner.set(row, col, Cell::Miss)?;
            }
            Ok(ShotReport {
                outcome: ShotOutcome::Miss,
                message: "splash, a miss".to_string(),
            })
        }
        Some(ship) => {
            ship.record_hit();
            if ship.is_sunk() {
                let name = ship.name();
                let cells = ship.cells().to_vec();
                for &(r, c) in &cells {
                    tracking.set(r, c, Cell::Sunk)?;
                    if mirror {
                        owner.set(r, c, Cell::Sunk)?;
                    }
                }
                Ok(ShotReport {
                    outcome: ShotOutcome::Sunk(name),
                    message: format!("sunk the {}!", name),
                })
            } else {
                tracking.set(row, col, Cell::Hit)?;
                if mirror {
                    owner.set(row, col, Cell::Hit)?;
                }
                Ok(ShotReport {
                    outcome: ShotOutcome::Hit,
                    message: "a hit".to_string(),
                })
            }
        }
    }
}
