//! Event handling for CLI client.
//!
//! This module contains the tick loop and the event consumer that turns game
//! events into message log lines.

mod consumer;
mod r#loop;

pub use consumer::CliEventConsumer;
pub use r#loop::EventLoop;
