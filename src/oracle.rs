//! Advisory oracle boundary. An oracle proposes the computer's next shot
//! from a structured summary of the public state; its answer is re-validated
//! here and the deterministic heuristic takes over on any failure. Oracle
//! trouble never reaches the caller.

use crate::ai::{self, Line};
use crate::grid::{Cell, Grid};
use crate::history::ShotRecord;
use crate::ship::ShipType;
use core::fmt;
use rand::Rng;
use serde::Serialize;
use std::collections::VecDeque;
use tokio::sync::Mutex;

/// External suggestion failure. Always recovered locally.
#[derive(Debug)]
pub enum OracleError {
    Timeout,
    /// The response could not be parsed into a coordinate.
    Malformed(String),
    /// No oracle, or the service refused to answer.
    Unavailable(String),
}

impl fmt::Display for OracleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OracleError::Timeout => write!(f, "oracle timed out"),
            OracleError::Malformed(what) => write!(f, "oracle response malformed: {}", what),
            OracleError::Unavailable(why) => write!(f, "oracle unavailable: {}", why),
        }
    }
}

impl std::error::Error for OracleError {}

/// Status of one enemy ship as revealed so far. `hits` holds only cells the
/// computer has already struck; unrevealed cells never appear here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FleetIntel {
    pub name: &'static str,
    pub length: usize,
    pub sunk: bool,
    pub hits: Vec<(usize, usize)>,
}

/// Everything an oracle may see: the tracking board, the full shot history
/// with outcomes, and derived hint data. Deliberately excludes the
/// opponent's unrevealed ship coordinates.
#[derive(Debug, Clone, Serialize)]
pub struct StrategicContext {
    pub board: Grid,
    pub shots: Vec<ShotRecord>,
    /// The last ten shots, for pattern analysis.
    pub recent: Vec<ShotRecord>,
    pub open_hits: Vec<(usize, usize)>,
    pub last_hit: Option<(usize, usize)>,
    pub lines: Vec<Line>,
    /// Candidate cells adjacent to the open hits.
    pub adjacency: Vec<(usize, usize)>,
    pub fleet: Vec<FleetIntel>,
    /// Catalog entries not yet sunk.
    pub remaining: Vec<ShipType>,
    /// 1-based number of the shot about to be taken.
    pub shot_number: usize,
}

impl StrategicContext {
    /// Render the context as JSON for prompt-building oracle implementations.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Source of shot suggestions. A single attempt is made per shot; there is
/// no retry loop.
#[async_trait::async_trait]
pub trait Oracle: Send + Sync {
    async fn suggest(&self, context: &StrategicContext)
        -> Result<(usize, usize), OracleError>;
}

/// Oracle that never has a suggestion; the heuristic always decides.
pub struct NullOracle;

#[async_trait::async_trait]
impl Oracle for NullOracle {
    async fn suggest(
        &self,
        _context: &StrategicContext,
    ) -> Result<(usize, usize), OracleError> {
        Err(OracleError::Unavailable("no oracle configured".to_string()))
    }
}

/// Replays a fixed sequence of responses, then reports exhaustion. Useful
/// for tests and demos.
pub struct ScriptedOracle {
    replies: Mutex<VecDeque<Result<(usize, usize), OracleError>>>,
}

impl ScriptedOracle {
    pub fn new(replies: Vec<Result<(usize, usize), OracleError>>) -> Self {
        ScriptedOracle {
            replies: Mutex::new(replies.into()),
        }
    }
}

#[async_trait::async_trait]
impl Oracle for ScriptedOracle {
    async fn suggest(
        &self,
        _context: &StrategicContext,
    ) -> Result<(usize, usize), OracleError> {
        self.replies
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Err(OracleError::Unavailable("script exhausted".to_string())))
    }
}

/// Ask the oracle once and re-validate its answer: in bounds and not
/// previously shot. Anything else is discarded and the heuristic decides.
/// `None` only when no unshot cell remains.
pub async fn select_shot<R: Rng + ?Sized>(
    oracle: &dyn Oracle,
    context: &StrategicContext,
    tracking: &Grid,
    smallest_afloat: usize,
    rng: &mut R,
) -> Option<(usize, usize)> {
    match oracle.suggest(context).await {
        Ok((row, col)) => {
            if matches!(tracking.get(row, col), Ok(Cell::Empty)) {
                log::debug!("oracle suggested ({}, {})", row, col);
                return Some((row, col));
            }
            log::warn!(
                "oracle suggested unusable coordinate ({}, {}), falling back",
                row,
                col
            );
        }
        Err(e) => log::warn!("oracle failed ({}), falling back", e),
    }
    ai::select_target(rng, tracking, smallest_afloat)
}
