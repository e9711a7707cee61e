//! Input contract consumed by the game.
//!
//! The core only ever sees two boolean views per key: whether it is held down
//! (level) and whether it went down this tick (edge). Frontends translate
//! their raw events into an [`InputSource`].
use bitflags::bitflags;

/// Logical keys the game reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Confirm,
    Attack,
    PauseToggle,
    /// First half of the quit chord.
    QuitModifier,
    /// Second half of the quit chord.
    QuitKey,
}

bitflags! {
    /// Set of logical keys.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Keys: u8 {
        const CONFIRM = 1 << 0;
        const ATTACK = 1 << 1;
        const PAUSE_TOGGLE = 1 << 2;
        const QUIT_MODIFIER = 1 << 3;
        const QUIT_KEY = 1 << 4;

        const QUIT_CHORD = Self::QUIT_MODIFIER.bits() | Self::QUIT_KEY.bits();
    }
}

impl From<Key> for Keys {
    fn from(key: Key) -> Self {
        match key {
            Key::Confirm => Keys::CONFIRM,
            Key::Attack => Keys::ATTACK,
            Key::PauseToggle => Keys::PAUSE_TOGGLE,
            Key::QuitModifier => Keys::QUIT_MODIFIER,
            Key::QuitKey => Keys::QUIT_KEY,
        }
    }
}

/// Level and edge queries for the current tick.
pub trait InputSource {
    /// Key is currently down.
    fn is_held(&self, key: Key) -> bool;

    /// Key went down during this tick.
    fn just_pressed(&self, key: Key) -> bool;

    /// Both halves of the quit chord are held.
    fn quit_requested(&self) -> bool {
        self.is_held(Key::QuitModifier) && self.is_held(Key::QuitKey)
    }
}

/// Snapshot of the keyboard for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputFrame {
    pub held: Keys,
    pub pressed: Keys,
}

impl InputFrame {
    /// No keys down.
    pub const fn empty() -> Self {
        Self {
            held: Keys::empty(),
            pressed: Keys::empty(),
        }
    }

    /// Keys that went down this tick (and are therefore also held).
    pub fn pressed(keys: Keys) -> Self {
        Self {
            held: keys,
            pressed: keys,
        }
    }

    /// Records a fresh key press.
    pub fn press(&mut self, keys: Keys) {
        self.held |= keys;
        self.pressed |= keys;
    }

    /// Records a key that is held from an earlier tick.
    pub fn hold(&mut self, keys: Keys) {
        self.held |= keys;
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty() && self.pressed.is_empty()
    }
}

impl InputSource for InputFrame {
    fn is_held(&self, key: Key) -> bool {
        self.held.contains(key.into())
    }

    fn just_pressed(&self, key: Key) -> bool {
        self.pressed.contains(key.into())
    }
}
