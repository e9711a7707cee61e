//! Client builder with dependency injection pattern.

use crate::{Client, Frontend};
use anyhow::{Context, Result};
use game_core::Game;

/// Builder for constructing a Client with proper validation.
///
/// Both the game and the frontend are required; `build()` fails fast when
/// either is missing.
#[derive(Default)]
pub struct ClientBuilder {
    game: Option<Game>,
    frontend: Option<Box<dyn Frontend>>,
}

impl ClientBuilder {
    /// Create a new ClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the game (required).
    pub fn game(mut self, game: Game) -> Self {
        self.game = Some(game);
        self
    }

    /// Set the frontend (required).
    ///
    /// The frontend drives the tick loop and owns the game while running.
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if the game or the frontend is not set.
    pub fn build(self) -> Result<Client> {
        let game = self
            .game
            .context("Game is required. Use .game() to set it.")?;

        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        Ok(Client { game, frontend })
    }
}
