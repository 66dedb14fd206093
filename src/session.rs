//! Session object owning the single live game. All mutating operations
//! serialize on one async lock; starting a new game discards the old one.

use crate::common::GameError;
use crate::config::SHIPS;
use crate::fleet::ShipPlacement;
use crate::game::Game;
use crate::oracle::Oracle;
use crate::ship::ShipType;
use crate::view::GameView;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::time::Duration;
use tokio::sync::Mutex;

struct Inner {
    game: Option<Game>,
    rng: SmallRng,
}

/// One active game at a time, behind a mutex so concurrent callers never
/// observe a half-updated board.
pub struct GameSession {
    inner: Mutex<Inner>,
    oracle: Box<dyn Oracle>,
    pacing: Option<Duration>,
}

impl GameSession {
    pub fn new(oracle: Box<dyn Oracle>) -> Self {
        let mut seed_rng = rand::rng();
        Self::from_rng(oracle, SmallRng::from_rng(&mut seed_rng))
    }

    /// Fixed seed for reproducible games.
    pub fn with_seed(oracle: Box<dyn Oracle>, seed: u64) -> Self {
        Self::from_rng(oracle, SmallRng::seed_from_u64(seed))
    }

    fn from_rng(oracle: Box<dyn Oracle>, rng: SmallRng) -> Self {
        GameSession {
            inner: Mutex::new(Inner { game: None, rng }),
            oracle,
            pacing: None,
        }
    }

    /// Fixed delay before each computer shot; cosmetic only.
    pub fn with_pacing(mut self, delay: Duration) -> Self {
        self.pacing = Some(delay);
        self
    }

    /// Start a fresh game, discarding any previous one.
    pub async fn start_new_game(&self) -> GameView {
        let mut inner = self.inner.lock().await;
        let game = Game::new(&mut inner.rng);
        let view = GameView::from(&game);
        inner.game = Some(game);
        view
    }

    pub async fn submit_fleet_placement(
        &self,
        placements: &[ShipPlacement],
    ) -> Result<GameView, GameError> {
        let mut inner = self.inner.lock().await;
        let game = inner.game.as_mut().ok_or(GameError::NotFound)?;
        game.place_fleet(placements)?;
        Ok(GameView::from(&*game))
    }

    pub async fn submit_shot(&self, row: usize, col: usize) -> Result<GameView, GameError> {
        let mut inner = self.inner.lock().await;
        let game = inner.game.as_mut().ok_or(GameError::NotFound)?;
        game.human_shot(row, col)?;
        Ok(GameView::from(&*game))
    }

    /// Run the computer's turn sequence to completion.
    pub async fn run_computer_turn(&self) -> Result<GameView, GameError> {
        let mut inner = self.inner.lock().await;
        let inner = &mut *inner;
        let game = inner.game.as_mut().ok_or(GameError::NotFound)?;
        game.run_computer_turn(&*self.oracle, &mut inner.rng, self.pacing)
            .await?;
        Ok(GameView::from(&*game))
    }

    pub async fn state(&self) -> Result<GameView, GameError> {
        let inner = self.inner.lock().await;
        let game = inner.game.as_ref().ok_or(GameError::NotFound)?;
        Ok(GameView::from(game))
    }

    /// The fixed ship catalog.
    pub fn ship_catalog() -> &'static [ShipType] {
        &SHIPS
    }
}
