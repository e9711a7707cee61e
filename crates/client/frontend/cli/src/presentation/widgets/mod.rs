//! Widget modules for UI rendering.
//!
//! Each widget reads game state and renders into a terminal frame. Widgets
//! never mutate the game.

pub mod arena;
pub mod header;
pub mod messages;
