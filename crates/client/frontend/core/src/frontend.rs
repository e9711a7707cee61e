//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use game_core::Game;

/// Frontend abstraction for UI layers.
///
/// A frontend owns the tick loop: it samples input, calls
/// [`Game::update`] exactly once per tick, reacts to the returned events and
/// draws the resulting state. It returns when the game reports
/// [`Flow::Quit`](game_core::Flow::Quit) or on a fatal error.
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
///
/// # Example Implementation
///
/// ```no_run
/// use async_trait::async_trait;
/// use client_frontend_core::Frontend;
/// use game_core::{Game, InputFrame};
/// use anyhow::Result;
///
/// struct Headless;
///
/// #[async_trait]
/// impl Frontend for Headless {
///     async fn run(&mut self, mut game: Game) -> Result<()> {
///         loop {
///             let report = game.update(&InputFrame::empty())?;
///             if report.should_quit() {
///                 return Ok(());
///             }
///         }
///     }
/// }
/// ```
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend loop until the player quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the game hits a fatal condition (sprites that
    /// cannot be resolved) or the frontend's own surface fails.
    async fn run(&mut self, game: Game) -> Result<()>;
}
