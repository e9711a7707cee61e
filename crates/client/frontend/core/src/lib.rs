//! Cross-frontend primitives for presenting the game.
//!
//! Houses message logging, event handling, text layout and the phase overlay
//! view model that both the terminal client and future graphical clients can
//! reuse.
pub mod config;
pub mod event;
pub mod frontend;
pub mod layout;
pub mod message;
pub mod view_model;

pub use config::{FrontendConfig, MessageConfig};
pub use event::{EventConsumer, EventImpact};
pub use frontend::Frontend;
pub use layout::{FixedAdvance, FontTier, TextBounds, TextLayout, TextPlacement};
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use view_model::{Column, OverlayLine, PhaseOverlay, Row, Tone, hp_caption};
