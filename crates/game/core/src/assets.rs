//! Contract between the core and whatever supplies character sprite strips.
//!
//! The core never decodes images. It only needs to know, per character, how
//! many frames each state's strip has and how large one frame cell is. The
//! lookup happens once, when a [`Character`](crate::Character) is built for a
//! battle.
use std::fmt;

use crate::character::{CombatState, FrameTable};

/// Identifier of a roster entry (e.g. `"cat1"`, `"dog2"`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CharacterId(String);

impl CharacterId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CharacterId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pixel size of one animation cell in a strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellSize {
    pub width: u32,
    pub height: u32,
}

impl CellSize {
    pub const STANDARD: Self = Self {
        width: 48,
        height: 48,
    };

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for CellSize {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Decoded layout of a character's five strips.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpriteSheet {
    pub id: CharacterId,
    pub frames: FrameTable,
    pub cell: CellSize,
}

impl SpriteSheet {
    pub fn new(id: CharacterId, frames: FrameTable, cell: CellSize) -> Self {
        Self { id, frames, cell }
    }

    /// Stock layout: Attack 4, Death 4, Hurt 2, Idle 4, Walk 6 frames of 48×48.
    pub fn standard(id: CharacterId) -> Self {
        Self::new(id, FrameTable::standard(), CellSize::STANDARD)
    }
}

/// Failures while resolving a character's sprites. All of them are fatal.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AssetError {
    #[error("unknown character '{id}'")]
    UnknownCharacter { id: CharacterId },

    #[error("{state} strip has no frames")]
    EmptyStrip { state: CombatState },

    #[error("{state} strip is missing")]
    MissingStrip { state: CombatState },

    #[error("{id}: {state} strip declares {declared} frames but decodes to {decoded}")]
    FrameMismatch {
        id: CharacterId,
        state: CombatState,
        declared: u32,
        decoded: u32,
    },

    #[error("failed to decode sprites for '{id}': {reason}")]
    Decode { id: CharacterId, reason: String },
}

/// Source of sprite sheets, keyed by character identifier.
pub trait AssetProvider: Send + Sync {
    fn sprite_sheet(&self, id: &CharacterId) -> Result<SpriteSheet, AssetError>;
}

/// Provider that hands out the stock layout for any identifier.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardSprites;

impl AssetProvider for StandardSprites {
    fn sprite_sheet(&self, id: &CharacterId) -> Result<SpriteSheet, AssetError> {
        Ok(SpriteSheet::standard(id.clone()))
    }
}
