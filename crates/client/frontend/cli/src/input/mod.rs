//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-key-set mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.
//!
//! Terminals without the kitty keyboard protocol never report key releases.
//! There a key counts as held only on the tick its press (or auto-repeat)
//! arrived.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use game_core::{InputFrame, Keys};

/// Logical keys bound to a raw key event.
pub fn map_key(key: &KeyEvent) -> Keys {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char(ch) if ctrl && matches!(ch.to_ascii_lowercase(), 'w' | 'c') => {
            Keys::QUIT_CHORD
        }
        KeyCode::Enter => Keys::CONFIRM,
        KeyCode::Char(' ') => Keys::ATTACK,
        KeyCode::Esc => Keys::PAUSE_TOGGLE,
        _ => Keys::empty(),
    }
}

/// Accumulates key events between ticks into one [`InputFrame`].
#[derive(Debug, Default)]
pub struct InputCollector {
    held: Keys,
    pressed: Keys,
    tracks_release: bool,
}

impl InputCollector {
    /// `tracks_release` says whether the terminal reports release events.
    pub fn new(tracks_release: bool) -> Self {
        Self {
            held: Keys::empty(),
            pressed: Keys::empty(),
            tracks_release,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let keys = map_key(&key);
        if keys.is_empty() {
            return;
        }

        match key.kind {
            KeyEventKind::Press => {
                self.pressed |= keys;
                self.held |= keys;
            }
            KeyEventKind::Repeat => self.held |= keys,
            KeyEventKind::Release => self.held.remove(keys),
        }
    }

    /// Snapshot for this tick. Edges are consumed.
    pub fn take_frame(&mut self) -> InputFrame {
        let frame = InputFrame {
            held: self.held,
            pressed: self.pressed,
        };

        self.pressed = Keys::empty();
        if !self.tracks_release {
            self.held = Keys::empty();
        }

        frame
    }

    /// Drops every held key, e.g. after focus loss.
    pub fn clear(&mut self) {
        self.held = Keys::empty();
        self.pressed = Keys::empty();
    }
}
