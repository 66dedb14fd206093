//! Fleet assembly: placement validation and random deployment.

use crate::common::{GameError, PlacementRule};
use crate::config::{ship_type, BOARD_SIZE, SHIPS};
use crate::grid::{Cell, Grid};
use crate::ship::{Ship, ShipType};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One ship of a submitted fleet placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipPlacement {
    pub name: String,
    pub cells: Vec<(usize, usize)>,
}

/// The ships belonging to one side, exactly one per catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    ships: Vec<Ship>,
}

/// Check one ship placement against the reference grid. Rules are applied in
/// order: catalog membership and length, bounds and free cells, alignment,
/// contiguity. Returns the catalog entry on success.
pub fn validate_ship(
    name: &str,
    cells: &[(usize, usize)],
    reference: &Grid,
) -> Result<ShipType, GameError> {
    let reject = |rule| GameError::Validation {
        ship: name.to_string(),
        rule,
    };
    let def = ship_type(name).ok_or_else(|| reject(PlacementRule::UnknownShip))?;
    if cells.len() != def.length() {
        return Err(reject(PlacementRule::WrongLength {
            expected: def.length(),
            actual: cells.len(),
        }));
    }
    for &(row, col) in cells {
        if !Grid::in_bounds(row, col) {
            return Err(reject(PlacementRule::OutOfBounds));
        }
        if reference.get(row, col)? != Cell::Empty {
            return Err(reject(PlacementRule::Occupied));
        }
    }
    if cells.len() > 1 {
        let horizontal = cells.iter().all(|&(r, _)| r == cells[0].0);
        let vertical = cells.iter().all(|&(_, c)| c == cells[0].1);
        if horizontal == vertical {
            return Err(reject(PlacementRule::NotAligned));
        }
        let mut run: Vec<usize> = if horizontal {
            cells.iter().map(|&(_, c)| c).collect()
        } else {
            cells.iter().map(|&(r, _)| r).collect()
        };
        run.sort_unstable();
        if !run.windows(2).all(|w| w[1] == w[0] + 1) {
            return Err(reject(PlacementRule::NotContiguous));
        }
    }
    Ok(def)
}

impl Fleet {
    /// Fleet with no ships, used for the side that has not placed yet.
    pub(crate) fn empty() -> Self {
        Fleet { ships: Vec::new() }
    }

    /// Build a full fleet from a submission, all-or-nothing. The submitted
    /// name set must equal the catalog exactly before any per-ship rule is
    /// checked; every ship is then validated against a scratch grid. On
    /// success returns the fleet together with its owner grid.
    pub fn from_placements(placements: &[ShipPlacement]) -> Result<(Fleet, Grid), GameError> {
        for p in placements {
            if ship_type(&p.name).is_none() {
                return Err(GameError::Validation {
                    ship: p.name.clone(),
                    rule: PlacementRule::UnknownShip,
                });
            }
        }
        for def in SHIPS {
            let submitted = placements.iter().filter(|p| p.name == def.name()).count();
            let rule = match submitted {
                0 => Some(PlacementRule::MissingShip),
                1 => None,
                _ => Some(PlacementRule::DuplicateShip),
            };
            if let Some(rule) = rule {
                return Err(GameError::Validation {
                    ship: def.name().to_string(),
                    rule,
                });
            }
        }

        let mut grid = Grid::new();
        let mut ships = Vec::with_capacity(placements.len());
        for p in placements {
            let def = validate_ship(&p.name, &p.cells, &grid)?;
            for &(row, col) in &p.cells {
                grid.set(row, col, Cell::Ship)?;
            }
            ships.push(Ship::new(def, p.cells.clone()));
        }
        Ok((Fleet { ships }, grid))
    }

    /// Deploy the whole catalog at random, never overlapping. Rejection
    /// sampling terminates quickly on a 10x10 board.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> (Fleet, Grid) {
        let mut grid = Grid::new();
        let mut ships = Vec::with_capacity(SHIPS.len());
        for def in SHIPS {
            loop {
                let horizontal: bool = rng.random();
                let (max_row, max_col) = if horizontal {
                    (BOARD_SIZE, BOARD_SIZE - def.length() + 1)
                } else {
                    (BOARD_SIZE - def.length() + 1, BOARD_SIZE)
                };
                let row = rng.random_range(0..max_row);
                let col = rng.random_range(0..max_col);
                let cells: Vec<(usize, usize)> = (0..def.length())
                    .map(|i| {
                        if horizontal {
                            (row, col + i)
                        } else {
                            (row + i, col)
                        }
                    })
                    .collect();
                if cells
                    .iter()
                    .all(|&(r, c)| matches!(grid.get(r, c), Ok(Cell::Empty)))
                {
                    for &(r, c) in &cells {
                        let _ = grid.set(r, c, Cell::Ship);
                    }
                    ships.push(Ship::new(def, cells));
                    break;
                }
            }
        }
        (Fleet { ships }, grid)
    }

    /// Render the fleet back into submission form.
    pub fn placements(&self) -> Vec<ShipPlacement> {
        self.ships
            .iter()
            .map(|s| ShipPlacement {
                name: s.name().to_string(),
                cells: s.cells().to_vec(),
            })
            .collect()
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn get(&self, name: &str) -> Option<&Ship> {
        self.ships.iter().find(|s| s.name() == name)
    }

    /// The un-sunk ship occupying a cell, if any. Placement validation rules
    /// out overlaps, so at most one ship matches.
    pub fn ship_at_mut(&mut self, row: usize, col: usize) -> Option<&mut Ship> {
        self.ships
            .iter_mut()
            .find(|s| !s.is_sunk() && s.occupies(row, col))
    }

    /// Fleet is defeated when every ship is sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(|s| s.is_sunk())
    }

    /// Length of the smallest ship still afloat.
    pub fn smallest_afloat(&self) -> Option<usize> {
        self.ships
            .iter()
            .filter(|s| !s.is_sunk())
            .map(|s| s.length())
            .min()
    }
}
