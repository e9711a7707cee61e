//! Fixed-rate tick loop driving the game.
//!
//! Every tick:
//! - Drains pending terminal events into the input collector
//! - Calls [`Game::update`] exactly once with that tick's input
//! - Hands the resulting events to the consumer (messages, backdrop resets)
//! - Redraws

use std::sync::Arc;

use anyhow::{Context, Result};
use crossterm::event::{self as term_event, Event as TermEvent};
use game_content::CharacterRegistry;
use game_core::Game;
use tokio::time::{self, Duration, MissedTickBehavior};

use crate::{
    config::CliConfig,
    input::InputCollector,
    presentation::{
        backdrop::Backdrop,
        terminal::Tui,
        ui::{self, RenderContext},
    },
};
use client_frontend_core::{EventConsumer, FrontendConfig};

pub struct EventLoop<C>
where
    C: EventConsumer,
{
    game: Game,
    consumer: C,
    input: InputCollector,
    backdrop: Backdrop,
    registry: Arc<CharacterRegistry>,
    tick_interval: Duration,
    cli_config: CliConfig,
}

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    pub fn new(
        game: Game,
        consumer: C,
        input: InputCollector,
        registry: Arc<CharacterRegistry>,
        frontend_config: &FrontendConfig,
        cli_config: CliConfig,
    ) -> Self {
        Self {
            game,
            consumer,
            input,
            backdrop: Backdrop::new(),
            registry,
            tick_interval: frontend_config.tick_interval(),
            cli_config,
        }
    }

    /// Runs until the quit chord is held. Fatal game errors end the loop.
    pub async fn run(mut self, terminal: &mut Tui) -> Result<C> {
        self.render(terminal)?;

        let mut ticker = time::interval(self.tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            self.drain_terminal_events()?;

            let frame = self.input.take_frame();
            let report = self
                .game
                .update(&frame)
                .with_context(|| format!("game update failed at tick {}", self.game.tick()))?;

            let impact = self.consumer.on_events(&report.events);
            if impact.reset_backdrop {
                self.backdrop.reset();
            }

            if report.should_quit() {
                tracing::info!(tick = %report.tick, "quit requested");
                break;
            }

            self.render(terminal)?;
        }

        Ok(self.consumer)
    }

    fn drain_terminal_events(&mut self) -> Result<()> {
        while term_event::poll(Duration::from_millis(0))? {
            match term_event::read()? {
                TermEvent::Key(key) => self.input.handle_key(key),
                TermEvent::Resize(width, height) => {
                    tracing::debug!(width, height, "terminal resized");
                    self.backdrop.reset();
                }
                TermEvent::FocusLost => self.input.clear(),
                _ => {}
            }
        }
        Ok(())
    }

    fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let ctx = RenderContext {
            game: &self.game,
            registry: &self.registry,
            messages: self.consumer.message_log(),
            backdrop: &mut self.backdrop,
            ui: &self.cli_config.ui,
        };

        ui::render(terminal, ctx)
    }
}
