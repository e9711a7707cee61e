//! Terminal UI frontend for Cats Vs. Dogs.
//!
//! This crate provides a terminal-based user interface for the game.
//! It implements the `client_frontend_core::Frontend` trait.
//!
//! # Architecture
//!
//! CliFrontend is the tick driver:
//! - Samples crossterm key events into an [`InputFrame`](game_core::InputFrame)
//! - Calls `Game::update` once per tick at the configured rate
//! - Feeds the resulting events to a message log and redraws with ratatui

mod app;
mod config;
mod event;
mod input;
pub mod logging;
pub mod presentation;

pub use app::CliFrontend;
pub use config::{CliConfig, UiConfig};

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
