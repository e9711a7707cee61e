//! Character roster loader.

use std::collections::HashMap;
use std::path::Path;

use game_core::{CellSize, CharacterId, CombatState};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// One frame of glyph art, top row first.
pub type GlyphFrame = Vec<String>;

/// Accent color of a fighter, as RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tint(pub u8, pub u8, pub u8);

/// A roster entry as written in the RON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: CharacterId,
    pub name: String,
    /// Key into [`RosterFile::art`].
    pub art: String,
    pub tint: Tint,
}

/// Roster file structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterFile {
    pub cell: CellSize,
    /// Declared frame count of each strip, shared by every fighter.
    pub strips: HashMap<CombatState, u32>,
    pub characters: Vec<RosterEntry>,
    /// Glyph frames per strip, keyed by art set name.
    pub art: HashMap<String, HashMap<CombatState, Vec<GlyphFrame>>>,
}

/// Loader for character rosters from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// The roster compiled into the binary.
    pub const BUILTIN: &'static str = include_str!("../../data/roster.ron");

    /// Load a roster from a RON file.
    pub fn load(path: &Path) -> LoadResult<RosterFile> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a roster from RON text.
    pub fn parse(content: &str) -> LoadResult<RosterFile> {
        let roster: RosterFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;

        Ok(roster)
    }
}
