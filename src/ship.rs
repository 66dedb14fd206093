//! Ship catalog entries and placed ships.

use serde::Serialize;

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship placed on an owner grid, tracking accumulated damage. Cells are
/// validated by the fleet module before a `Ship` is ever constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    cells: Vec<(usize, usize)>,
    hits: usize,
}

impl Ship {
    pub fn new(ship_type: ShipType, cells: Vec<(usize, usize)>) -> Self {
        Ship {
            ship_type,
            cells,
            hits: 0,
        }
    }

    pub fn name(&self) -> &'static str {
        self.ship_type.name()
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn length(&self) -> usize {
        self.cells.len()
    }

    /// Occupied cells in placement order.
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    pub fn occupies(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&(row, col))
    }

    /// Register one incoming hit. Callers guarantee each cell is struck at
    /// most once.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Sunk when every segment has been hit.
    pub fn is_sunk(&self) -> bool {
        self.hits == self.cells.len()
    }
}
