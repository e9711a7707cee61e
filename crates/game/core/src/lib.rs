//! Deterministic combat and phase logic for the Cats vs. Dogs arcade fighter.
//!
//! `game-core` holds the rules only: the shared tick clock, the frame-cycling
//! animation model, the per-character combat state machine, the per-tick
//! battle coordinator and the top-level phase machine. It performs no I/O;
//! sprites, input and drawing are reached through the contracts in
//! [`assets`], [`input`] and [`render`]. All state mutation flows through
//! [`Game::update`].
pub mod animation;
pub mod assets;
pub mod battle;
pub mod character;
pub mod clock;
pub mod config;
pub mod error;
pub mod event;
pub mod game;
pub mod input;
pub mod phase;
pub mod render;

pub use animation::{TICKS_PER_FRAME, frame_index, is_frame_boundary};
pub use assets::{AssetError, AssetProvider, CellSize, CharacterId, SpriteSheet, StandardSprites};
pub use battle::{Battle, BattleOutcome};
pub use character::{
    AnimationState, Character, CharacterStats, CombatState, FrameTable, Position, Side,
};
pub use clock::{Clock, Tick};
pub use config::{ArenaSize, GameConfig, Matchup};
pub use error::GameError;
pub use event::GameEvent;
pub use game::{Flow, Game, StepReport};
pub use input::{InputFrame, InputSource, Key, Keys};
pub use phase::GamePhase;
pub use render::{Affine, CellRect, SPRITE_SCALE, SpriteFrame, sprite_frame};
