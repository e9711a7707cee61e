//! Data-driven fighter roster and configuration loaders.
//!
//! This crate houses the stock content of the game and the loaders for its
//! data files:
//! - Character roster: strip layout, names, tints and glyph art (RON)
//! - Game configuration: arena, fighter stats, default matchup (TOML)
//!
//! [`CharacterRegistry`] implements [`game_core::AssetProvider`], so a loaded
//! roster can be handed straight to [`game_core::Game::new`].

pub mod loaders;
pub mod registry;

pub use loaders::{ConfigLoader, RosterEntry, RosterFile, RosterLoader, Tint};
pub use registry::{CharacterRegistry, RegisteredCharacter};
