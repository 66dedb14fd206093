//! Append-only record of the computer's shots, kept for the oracle context.
//! Not gameplay-authoritative; the grids are.

use crate::common::ShotOutcome;
use serde::Serialize;

/// A ship confirmed sunk, with its now-revealed cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SunkShip {
    pub name: &'static str,
    pub cells: Vec<(usize, usize)>,
}

/// One computer shot with its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShotRecord {
    /// 1-based shot number.
    pub turn: usize,
    pub row: usize,
    pub col: usize,
    pub outcome: ShotOutcome,
    /// Present on the shot that sank a ship.
    pub sunk: Option<SunkShip>,
    /// Name of the ship this shot hit, filled in once that ship sinks.
    pub ship: Option<&'static str>,
}

/// Ordered shot log, cleared by starting a new game.
#[derive(Debug, Clone, Default)]
pub struct ShotLog {
    records: Vec<ShotRecord>,
}

impl ShotLog {
    pub fn new() -> Self {
        ShotLog {
            records: Vec::new(),
        }
    }

    /// Append a shot. When the shot sank a ship, earlier records on that
    /// ship's cells gain the ship-name attribution.
    pub fn record(
        &mut self,
        row: usize,
        col: usize,
        outcome: ShotOutcome,
        sunk: Option<SunkShip>,
    ) {
        let ship = sunk.as_ref().map(|s| s.name);
        if let Some(s) = &sunk {
            for rec in &mut self.records {
                if s.cells.contains(&(rec.row, rec.col)) {
                    rec.ship = Some(s.name);
                }
            }
        }
        let turn = self.records.len() + 1;
        self.records.push(ShotRecord {
            turn,
            row,
            col,
            outcome,
            sunk,
            ship,
        });
    }

    pub fn records(&self) -> &[ShotRecord] {
        &self.records
    }

    /// The most recent `n` records.
    pub fn recent(&self, n: usize) -> &[ShotRecord] {
        &self.records[self.records.len().saturating_sub(n)..]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
