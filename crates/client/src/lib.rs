//! Top-level client orchestrating the game and a frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ Game (phase machine, battle, clock; no I/O)
//!   └─→ Frontend (tick driver: input, update, drawing)
//! ```
//!
//! The binary loads content ([`ContentSetup`]), builds the frontend and hands
//! both to a [`Client`]. The frontend owns the game for the whole session.

mod builder;
mod content;

pub use builder::ClientBuilder;
pub use content::{ClientConfig, ContentSetup};

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;
use game_core::Game;

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. `Client::builder()` receives the game and the frontend
/// 2. `Client::run()` transfers control to the frontend (blocking)
/// 3. Fatal errors from the game or the frontend are returned to the caller
pub struct Client {
    game: Game,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the client until the player quits.
    pub async fn run(self) -> Result<()> {
        let Client { game, mut frontend } = self;

        tracing::info!(phase = %game.phase(), "client running");
        let result = frontend.run(game).await;

        match &result {
            Ok(()) => tracing::info!("frontend exited cleanly"),
            Err(e) => tracing::error!("frontend failed: {:#}", e),
        }

        result
    }
}
