//! Arena widget: backdrop stamps, ground line and both fighters.
//!
//! Everything is positioned in logical arena pixels and scaled into the
//! terminal area through [`ArenaViewport`].

use client_frontend_core::{FontTier, TextBounds, TextLayout};
use game_content::CharacterRegistry;
use game_core::{
    ArenaSize, CellSize, Character, Game, SPRITE_SCALE, SpriteFrame, Tick, sprite_frame,
};
use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use crate::presentation::{backdrop::Backdrop, theme::CliTheme};

/// Maps logical arena pixels onto a terminal rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArenaViewport {
    area: Rect,
    arena: ArenaSize,
}

impl ArenaViewport {
    pub fn new(area: Rect, arena: ArenaSize) -> Self {
        Self { area, arena }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn arena(&self) -> ArenaSize {
        self.arena
    }

    fn px_per_col(&self) -> f32 {
        self.arena.width as f32 / self.area.width.max(1) as f32
    }

    fn px_per_row(&self) -> f32 {
        self.arena.height as f32 / self.area.height.max(1) as f32
    }

    /// Terminal cell covering the arena point, or `None` outside the area.
    pub fn to_cell(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        if x < 0.0 || y < 0.0 {
            return None;
        }

        let col = (x / self.px_per_col()).floor() as u32;
        let row = (y / self.px_per_row()).floor() as u32;
        if col >= self.area.width as u32 || row >= self.area.height as u32 {
            return None;
        }

        Some((self.area.x + col as u16, self.area.y + row as u16))
    }
}

/// Terminal text: one cell per character, one row tall, whatever the tier.
impl TextLayout for ArenaViewport {
    fn measure(&self, text: &str, _tier: FontTier) -> TextBounds {
        let chars = text.chars().count() as f32;
        TextBounds::new(
            (chars * self.px_per_col()).round() as i32,
            self.px_per_row().round().max(1.0) as i32,
        )
    }
}

/// Row just below the fighters' feet.
pub fn ground_y(arena: ArenaSize) -> f32 {
    let cell = CellSize::STANDARD;
    arena.player_spawn(cell.width).y + cell.height as f32 * SPRITE_SCALE
}

/// Flips one glyph row horizontally, padding it to `width` first so every
/// row of a frame keeps its alignment.
pub fn mirror_row(row: &str, width: usize) -> String {
    let padded: Vec<char> = row
        .chars()
        .chain(std::iter::repeat(' '))
        .take(width.max(row.chars().count()))
        .collect();
    padded.into_iter().rev().map(mirror_char).collect()
}

fn mirror_char(ch: char) -> char {
    match ch {
        '(' => ')',
        ')' => '(',
        '[' => ']',
        ']' => '[',
        '{' => '}',
        '}' => '{',
        '<' => '>',
        '>' => '<',
        '/' => '\\',
        '\\' => '/',
        other => other,
    }
}

pub struct ArenaView<'a> {
    game: &'a Game,
    registry: &'a CharacterRegistry,
    backdrop: &'a Backdrop,
    viewport: ArenaViewport,
    theme: &'a CliTheme,
}

impl<'a> ArenaView<'a> {
    pub fn new(
        game: &'a Game,
        registry: &'a CharacterRegistry,
        backdrop: &'a Backdrop,
        viewport: ArenaViewport,
        theme: &'a CliTheme,
    ) -> Self {
        Self {
            game,
            registry,
            backdrop,
            viewport,
            theme,
        }
    }

    fn render_ground(&self, buf: &mut Buffer) {
        let Some((_, row)) = self.viewport.to_cell(0.0, ground_y(self.viewport.arena())) else {
            return;
        };
        let area = self.viewport.area();
        let line = "_".repeat(area.width as usize);
        buf.set_stringn(area.x, row, line, area.width as usize, self.theme.ground());
    }

    fn render_stamps(&self, buf: &mut Buffer) {
        let area = self.viewport.area();
        for stamp in self.backdrop.stamps() {
            let placement = stamp.placement;
            let x = placement.x.max(0) as f32;
            let y = placement.top().max(0) as f32;
            let Some((col, row)) = self.viewport.to_cell(x, y) else {
                continue;
            };

            let room = (area.right() - col) as usize;
            let style = self.theme.overlay(stamp.tone, stamp.tier);
            buf.set_stringn(col, row, &stamp.text, room, style);
        }
    }

    fn render_fighter(&self, buf: &mut Buffer, character: &Character, tick: Tick) {
        let frame = sprite_frame(character, tick);
        let entry = self.registry.get(character.id());

        let rows: Vec<String> = match entry.and_then(|e| e.frame_art(frame.state, frame.frame)) {
            Some(art) => {
                let width = art.iter().map(|row| row.chars().count()).max().unwrap_or(0);
                if character.is_mirrored() {
                    art.iter().map(|row| mirror_row(row, width)).collect()
                } else {
                    art.to_vec()
                }
            }
            None => vec![format!("[{}]", character.id())],
        };

        let style = match entry {
            Some(entry) if !character.is_alive() => self.theme.fallen(entry.tint),
            Some(entry) => self.theme.fighter(entry.tint),
            None => Style::default(),
        };

        self.blit(buf, &frame, &rows, style);
    }

    /// Draws `rows` centered on the sprite box and standing on its bottom edge.
    /// Spaces are transparent.
    fn blit(&self, buf: &mut Buffer, frame: &SpriteFrame, rows: &[String], style: Style) {
        let source = frame.source;
        let (x0, y0) = frame.transform.apply(0.0, 0.0);
        let (x1, y1) = frame
            .transform
            .apply(source.width as f32, source.height as f32);

        let center_x = (x0 + x1) / 2.0;
        let bottom = y0.max(y1) - 1.0;
        let Some((center_col, bottom_row)) = self.viewport.to_cell(center_x, bottom) else {
            return;
        };

        let area = self.viewport.area();
        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0) as u16;
        let left = center_col.saturating_sub(width / 2).max(area.x);
        let top = (bottom_row + 1).saturating_sub(rows.len() as u16).max(area.y);

        for (dy, row) in rows.iter().enumerate() {
            let y = top + dy as u16;
            if y > bottom_row {
                break;
            }
            for (dx, ch) in row.chars().enumerate() {
                let x = left + dx as u16;
                if ch == ' ' || x >= area.right() {
                    continue;
                }
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char(ch).set_style(style);
                }
            }
        }
    }
}

impl Widget for ArenaView<'_> {
    fn render(self, _area: Rect, buf: &mut Buffer) {
        self.render_ground(buf);
        self.render_stamps(buf);

        // Battle time, so a paused battle is drawn frozen.
        if let Some(battle) = self.game.battle() {
            self.render_fighter(buf, battle.player(), battle.now());
            self.render_fighter(buf, battle.opponent(), battle.now());
        }
    }
}
