//! Errors that can escape [`Game::update`](crate::Game::update).
//!
//! Combat arithmetic, frame indexing and state transitions are total, so the
//! only failures are fatal ones: sprites that cannot be resolved when a battle
//! is set up, and phase/state combinations that indicate a programming error.
//! Callers are expected to propagate them to the process boundary.

use crate::assets::AssetError;
use crate::phase::GamePhase;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("failed to load fighter sprites: {0}")]
    Asset(#[from] AssetError),

    #[error("phase {phase} requires a battle but none is in progress")]
    BattleMissing { phase: GamePhase },
}
