//! Glue code tying the game, the roster and the terminal UI together.
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use game_content::CharacterRegistry;
use game_core::Game;

use crate::config::CliConfig;
use crate::event::{CliEventConsumer, EventLoop};
use crate::input::InputCollector;
use crate::presentation::terminal;
use client_frontend_core::{EventConsumer, Frontend, FrontendConfig, message::MessageLog};

/// Terminal frontend.
///
/// The registry supplies the glyph art and display names; it should be the
/// same one the [`Game`] resolves sprite sheets from.
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
    registry: Arc<CharacterRegistry>,
}

impl CliFrontend {
    pub fn new(
        frontend_config: FrontendConfig,
        cli_config: CliConfig,
        registry: Arc<CharacterRegistry>,
    ) -> Self {
        Self {
            frontend_config,
            cli_config,
            registry,
        }
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, game: Game) -> Result<()> {
        tracing::info!(
            tick_rate = self.frontend_config.tick_rate,
            "CLI frontend starting"
        );

        let mut messages = MessageLog::new(self.frontend_config.messages.capacity);
        messages.push_text("Welcome to Cats Vs. Dogs.");

        let consumer = CliEventConsumer::new(
            messages,
            self.registry.clone(),
            self.frontend_config.messages.show_animation,
        );

        let (mut terminal, guard) = terminal::init()?;
        let input = InputCollector::new(guard.reports_key_release());

        let event_loop = EventLoop::new(
            game,
            consumer,
            input,
            self.registry.clone(),
            &self.frontend_config,
            self.cli_config.clone(),
        );

        let result = event_loop.run(&mut terminal).await;
        drop(guard);

        let consumer = result?;
        tracing::info!(
            messages = consumer.message_log().len(),
            "CLI frontend exiting"
        );

        Ok(())
    }
}
