//! Terminal presentation components used by the CLI client.
pub mod backdrop;
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use backdrop::Backdrop;
