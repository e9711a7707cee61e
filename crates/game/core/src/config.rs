//! Game configuration constants and tunable parameters.

use crate::assets::CharacterId;
use crate::character::{CharacterStats, Position};

/// Logical arena size in pixels. Frontends scale this to their surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArenaSize {
    pub width: u32,
    pub height: u32,
}

impl ArenaSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Top-left corner of the player's sprite box for a `cell`-sized sprite.
    pub fn player_spawn(&self, cell: u32) -> Position {
        Position::new(
            (self.width / 3) as f32 - cell as f32,
            (self.height / 2) as f32 - cell as f32,
        )
    }

    /// Top-left corner of the opponent's sprite box for a `cell`-sized sprite.
    pub fn opponent_spawn(&self, cell: u32) -> Position {
        Position::new(
            (self.width / 3 * 2) as f32 - cell as f32,
            (self.height / 2) as f32 - cell as f32,
        )
    }
}

impl Default for ArenaSize {
    fn default() -> Self {
        Self::new(GameConfig::ARENA_WIDTH, GameConfig::ARENA_HEIGHT)
    }
}

/// Which roster entries fight each other.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matchup {
    pub player: CharacterId,
    pub opponent: CharacterId,
}

impl Matchup {
    pub fn new(player: impl Into<CharacterId>, opponent: impl Into<CharacterId>) -> Self {
        Self {
            player: player.into(),
            opponent: opponent.into(),
        }
    }
}

impl Default for Matchup {
    fn default() -> Self {
        Self::new(
            CharacterId::new(GameConfig::DEFAULT_PLAYER),
            CharacterId::new(GameConfig::DEFAULT_OPPONENT),
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Logical arena dimensions used for spawn placement.
    pub arena: ArenaSize,
    /// Starting stats of both fighters.
    pub fighter: CharacterStats,
    /// Roster entries used when a battle is set up.
    pub matchup: Matchup,
}

impl GameConfig {
    // ===== fixed rules =====
    pub const ARENA_WIDTH: u32 = 320;
    pub const ARENA_HEIGHT: u32 = 240;
    pub const STARTING_HP: u32 = 100;
    pub const ATTACK_POWER: u32 = 50;
    pub const DEFAULT_PLAYER: &'static str = "cat1";
    pub const DEFAULT_OPPONENT: &'static str = "dog1";

    pub fn new() -> Self {
        Self {
            arena: ArenaSize::default(),
            fighter: CharacterStats::new(Self::STARTING_HP, Self::ATTACK_POWER),
            matchup: Matchup::default(),
        }
    }

    pub fn with_matchup(mut self, matchup: Matchup) -> Self {
        self.matchup = matchup;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
