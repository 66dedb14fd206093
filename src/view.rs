//! Serializable snapshots handed back to the host after every operation.
//! The computer's unrevealed ship positions never leave the engine here.

use crate::fleet::Fleet;
use crate::game::{Game, Phase, Side};
use crate::grid::Grid;
use serde::Serialize;

/// Public status of one ship: no coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShipStatus {
    pub name: &'static str,
    pub length: usize,
    pub sunk: bool,
}

/// Snapshot of the game as the human is allowed to see it.
#[derive(Debug, Clone, Serialize)]
pub struct GameView {
    pub phase: Phase,
    pub turn: Side,
    pub winner: Option<Side>,
    pub message: String,
    /// The human's own waters: ships plus incoming marks.
    pub human_board: Grid,
    /// The human's view of the computer's waters.
    pub human_tracking: Grid,
    /// The computer's shots at the human, same marks as on `human_board`.
    pub computer_tracking: Grid,
    pub human_fleet: Vec<ShipStatus>,
    pub computer_fleet: Vec<ShipStatus>,
}

fn statuses(fleet: &Fleet) -> Vec<ShipStatus> {
    fleet
        .ships()
        .iter()
        .map(|s| ShipStatus {
            name: s.name(),
            length: s.length(),
            sunk: s.is_sunk(),
        })
        .collect()
}

impl From<&Game> for GameView {
    fn from(game: &Game) -> Self {
        GameView {
            phase: game.phase(),
            turn: game.turn(),
            winner: game.winner(),
            message: game.message().to_string(),
            human_board: game.human_board().clone(),
            human_tracking: game.human_tracking().clone(),
            computer_tracking: game.computer_tracking().clone(),
            human_fleet: statuses(game.human_fleet()),
            computer_fleet: statuses(game.computer_fleet()),
        }
    }
}
