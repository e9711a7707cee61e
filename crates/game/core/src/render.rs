//! Render parameters for a character's current frame.
//!
//! The core does no pixel work. It tells the renderer which cell of the strip
//! to cut out and how to place it: sprites are drawn at twice their size, and
//! mirrored sprites are flipped on X and shifted right by one scaled cell so
//! they occupy the same box as an unmirrored one.
use crate::character::{Character, CombatState};
use crate::clock::Tick;

/// On-screen scale of sprite cells.
pub const SPRITE_SCALE: f32 = 2.0;

/// Sub-rectangle of a strip, in source pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Scale-then-translate transform applied to the cut-out cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine {
    pub scale_x: f32,
    pub scale_y: f32,
    pub translate_x: f32,
    pub translate_y: f32,
}

impl Affine {
    /// Maps a point in cell space to arena space.
    pub fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        (
            x * self.scale_x + self.translate_x,
            y * self.scale_y + self.translate_y,
        )
    }
}

/// Everything a renderer needs to blit one character.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteFrame {
    pub state: CombatState,
    pub frame: u32,
    pub source: CellRect,
    pub transform: Affine,
}

/// Computes the frame, source rectangle and placement of `character` at `tick`.
pub fn sprite_frame(character: &Character, tick: Tick) -> SpriteFrame {
    let frame = character.displayed_frame(tick);
    let cell = character.cell();
    let position = character.position();

    let source = CellRect {
        x: frame * cell.width,
        y: 0,
        width: cell.width,
        height: cell.height,
    };

    let transform = if character.is_mirrored() {
        Affine {
            scale_x: -SPRITE_SCALE,
            scale_y: SPRITE_SCALE,
            translate_x: position.x + cell.width as f32 * SPRITE_SCALE,
            translate_y: position.y,
        }
    } else {
        Affine {
            scale_x: SPRITE_SCALE,
            scale_y: SPRITE_SCALE,
            translate_x: position.x,
            translate_y: position.y,
        }
    };

    // A latched-dead character keeps showing the Death strip even if its
    // state were ever changed afterwards.
    let state = if character.is_alive() {
        character.state()
    } else {
        CombatState::Death
    };

    SpriteFrame {
        state,
        frame,
        source,
        transform,
    }
}
