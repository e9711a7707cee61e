//! UI rendering with Ratatui.
//!
//! Composes the header, the arena (backdrop stamps plus fighters) and the
//! message log into one frame.
use anyhow::Result;
use game_content::CharacterRegistry;
use game_core::Game;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    widgets::{Block, Borders},
};

use crate::{
    config::UiConfig,
    presentation::{
        backdrop::Backdrop,
        terminal::Tui,
        theme::CliTheme,
        widgets::{
            arena::{ArenaView, ArenaViewport},
            header, messages,
        },
    },
};
use client_frontend_core::{message::MessageLog, view_model::PhaseOverlay};

/// Rendering context containing all state and configuration needed for UI rendering.
pub struct RenderContext<'a> {
    pub game: &'a Game,
    pub registry: &'a CharacterRegistry,
    pub messages: &'a MessageLog,
    pub backdrop: &'a mut Backdrop,
    pub ui: &'a UiConfig,
}

pub fn render(terminal: &mut Tui, ctx: RenderContext<'_>) -> Result<()> {
    let theme = CliTheme::new();
    terminal.draw(|frame| render_frame(frame, ctx, &theme))?;
    Ok(())
}

fn render_frame(frame: &mut Frame, ctx: RenderContext<'_>, theme: &CliTheme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(ctx.ui.message_panel_height),
        ])
        .split(frame.area());

    header::render(frame, chunks[0], ctx.game, ctx.registry, theme);

    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(chunks[1]);
    frame.render_widget(block, chunks[1]);

    let viewport = ArenaViewport::new(inner, ctx.game.config().arena);
    let overlay = PhaseOverlay::for_game(ctx.game, &ctx.ui.quit_chord_label);
    for (line, placement) in overlay.place(&viewport, viewport.arena()) {
        ctx.backdrop.stamp(line, placement);
    }

    frame.render_widget(
        ArenaView::new(ctx.game, ctx.registry, ctx.backdrop, viewport, theme),
        inner,
    );

    messages::render(frame, chunks[2], ctx.messages, theme);
}
