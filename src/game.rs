//! Game state machine: phases, turn control and the computer's multi-shot
//! turn loop.

use crate::ai;
use crate::common::{GameError, ShotOutcome};
use crate::config::BOARD_SIZE;
use crate::fleet::{Fleet, ShipPlacement};
use crate::grid::{Cell, Grid};
use crate::history::{ShotLog, ShotRecord, SunkShip};
use crate::oracle::{self, FleetIntel, Oracle, StrategicContext};
use crate::shot::resolve_shot;
use rand::Rng;
use serde::Serialize;
use std::time::Duration;

/// Game lifecycle. Transitions are one-way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    Placement,
    Playing,
    Finished,
}

/// The two combatants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    pub fn opponent(&self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

/// One combatant's boards: their own waters and their view of the enemy's.
struct SideState {
    fleet: Fleet,
    owner: Grid,
    tracking: Grid,
}

impl SideState {
    fn unplaced() -> Self {
        SideState {
            fleet: Fleet::empty(),
            owner: Grid::new(),
            tracking: Grid::new(),
        }
    }
}

/// A single game between the human and the computer. The computer fleet is
/// deployed on construction; the human fleet arrives through `place_fleet`.
/// Once `Finished`, the state is read-only.
pub struct Game {
    human: SideState,
    computer: SideState,
    phase: Phase,
    turn: Side,
    winner: Option<Side>,
    message: String,
    log: ShotLog,
}

impl Game {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let (fleet, owner) = Fleet::random(rng);
        log::info!("new game started, computer fleet deployed");
        Game {
            human: SideState::unplaced(),
            computer: SideState {
                fleet,
                owner,
                tracking: Grid::new(),
            },
            phase: Phase::Placement,
            turn: Side::Human,
            winner: None,
            message: "Place your ships".to_string(),
            log: ShotLog::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Human-readable description of the last action.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The computer's shots so far, oldest first.
    pub fn history(&self) -> &[ShotRecord] {
        self.log.records()
    }

    /// The human's own waters: their ships plus incoming marks.
    pub fn human_board(&self) -> &Grid {
        &self.human.owner
    }

    /// The human's view of the computer's waters. Never reveals a ship
    /// before it is hit.
    pub fn human_tracking(&self) -> &Grid {
        &self.human.tracking
    }

    /// The computer's view of the human's waters.
    pub fn computer_tracking(&self) -> &Grid {
        &self.computer.tracking
    }

    pub fn human_fleet(&self) -> &Fleet {
        &self.human.fleet
    }

    /// The computer fleet, including unrevealed positions. Hosts must not
    /// forward this to the player; `GameView` is the safe projection.
    pub fn computer_fleet(&self) -> &Fleet {
        &self.computer.fleet
    }

    /// Accept the human's one-time fleet submission and open fire. Any
    /// rule violation rejects the whole submission and stays in placement.
    pub fn place_fleet(&mut self, placements: &[ShipPlacement]) -> Result<(), GameError> {
        if self.phase != Phase::Placement {
            return Err(GameError::Precondition("the placement phase is over"));
        }
        let (fleet, owner) = Fleet::from_placements(placements)?;
        self.human.fleet = fleet;
        self.human.owner = owner;
        self.phase = Phase::Playing;
        self.turn = Side::Human;
        self.message = "Fleet deployed, your shot".to_string();
        log::info!("human fleet placed, battle begins");
        Ok(())
    }

    fn ensure_shot_allowed(&self, side: Side) -> Result<(), GameError> {
        match self.phase {
            Phase::Placement => Err(GameError::Precondition("ships are not placed yet")),
            Phase::Finished => Err(GameError::Precondition("the game is already over")),
            Phase::Playing if self.turn != side => Err(GameError::Precondition(match side {
                Side::Human => "it is the computer's turn",
                Side::Computer => "it is the human's turn",
            })),
            Phase::Playing => Ok(()),
        }
    }

    fn finish_if_defeated(&mut self, shooter: Side) {
        let defeated = match shooter {
            Side::Human => self.computer.fleet.all_sunk(),
            Side::Computer => self.human.fleet.all_sunk(),
        };
        if defeated {
            self.phase = Phase::Finished;
            self.winner = Some(shooter);
            self.message = match shooter {
                Side::Human => "Every enemy ship is down, you win!".to_string(),
                Side::Computer => "The computer has sunk your entire fleet".to_string(),
            };
            log::info!("game over, {:?} wins after {} computer shots", shooter, self.log.len());
        }
    }

    /// Resolve a human shot. A hit keeps the turn, a miss hands it to the
    /// computer. A repeated coordinate changes nothing, message included.
    pub fn human_shot(&mut self, row: usize, col: usize) -> Result<ShotOutcome, GameError> {
        self.ensure_shot_allowed(Side::Human)?;
        let report = resolve_shot(
            &mut self.human.tracking,
            &mut self.computer.fleet,
            &mut self.computer.owner,
            false,
            row,
            col,
        )?;
        if report.outcome == ShotOutcome::Repeat {
            return Ok(ShotOutcome::Repeat);
        }
        log::debug!("human fires at ({}, {}): {:?}", row, col, report.outcome);
        self.message = format!("Your shot at ({}, {}): {}", row, col, report.message);
        self.finish_if_defeated(Side::Human);
        if self.phase == Phase::Playing && !report.outcome.is_hit() {
            self.turn = Side::Computer;
        }
        Ok(report.outcome)
    }

    /// Drive the computer's whole turn sequence: it keeps shooting while it
    /// hits and yields on a miss or when the game ends. Each shot makes a
    /// single oracle attempt and falls back to the heuristic on anything
    /// unusable. `pacing` inserts a cosmetic delay before each shot.
    pub async fn run_computer_turn<R: Rng + ?Sized>(
        &mut self,
        oracle: &dyn Oracle,
        rng: &mut R,
        pacing: Option<Duration>,
    ) -> Result<(), GameError> {
        self.ensure_shot_allowed(Side::Computer)?;
        // One iteration per board cell bounds the loop even in the
        // impossible case of nothing but hits.
        for _ in 0..BOARD_SIZE * BOARD_SIZE {
            if let Some(delay) = pacing {
                tokio::time::sleep(delay).await;
            }
            let context = self.strategic_context();
            let smallest = self.human.fleet.smallest_afloat().unwrap_or(1);
            let pick =
                oracle::select_shot(oracle, &context, &self.computer.tracking, smallest, rng)
                    .await;
            let (row, col) = match pick {
                Some(p) => p,
                None => return Err(GameError::Precondition("no cell left to shoot")),
            };
            let report = resolve_shot(
                &mut self.computer.tracking,
                &mut self.human.fleet,
                &mut self.human.owner,
                true,
                row,
                col,
            )?;
            if report.outcome == ShotOutcome::Repeat {
                // unreachable given select_shot's postcondition
                continue;
            }
            let sunk = match report.outcome {
                ShotOutcome::Sunk(name) => self.human.fleet.get(name).map(|s| SunkShip {
                    name,
                    cells: s.cells().to_vec(),
                }),
                _ => None,
            };
            self.log.record(row, col, report.outcome, sunk);
            log::debug!("computer fires at ({}, {}): {:?}", row, col, report.outcome);
            self.message = format!("Computer fires at ({}, {}): {}", row, col, report.message);
            self.finish_if_defeated(Side::Computer);
            if self.phase != Phase::Playing {
                return Ok(());
            }
            if !report.outcome.is_hit() {
                self.turn = Side::Human;
                return Ok(());
            }
        }
        Ok(())
    }

    /// Assemble the summary handed to the oracle: the tracking board, shot
    /// history and derived hints. The human's unrevealed ship cells stay
    /// out of it.
    pub fn strategic_context(&self) -> StrategicContext {
        let tracking = &self.computer.tracking;
        let open_hits = ai::open_hits(tracking);
        let lines = ai::detect_lines(&open_hits);
        let mut adjacency = ai::line_extensions(tracking, &lines);
        if adjacency.is_empty() {
            adjacency = ai::adjacent_candidates(tracking, &open_hits);
        }
        let fleet: Vec<FleetIntel> = self
            .human
            .fleet
            .ships()
            .iter()
            .map(|ship| FleetIntel {
                name: ship.name(),
                length: ship.length(),
                sunk: ship.is_sunk(),
                hits: ship
                    .cells()
                    .iter()
                    .copied()
                    .filter(|&(r, c)| !matches!(tracking.get(r, c), Ok(Cell::Empty)))
                    .collect(),
            })
            .collect();
        let remaining = self
            .human
            .fleet
            .ships()
            .iter()
            .filter(|s| !s.is_sunk())
            .map(|s| s.ship_type())
            .collect();
        StrategicContext {
            board: tracking.clone(),
            shots: self.log.records().to_vec(),
            recent: self.log.recent(10).to_vec(),
            last_hit: open_hits.last().copied(),
            open_hits,
            lines,
            adjacency,
            fleet,
            remaining,
            shot_number: self.log.len() + 1,
        }
    }
}
