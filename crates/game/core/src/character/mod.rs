//! Per-character combat state machine.
//!
//! A [`Character`] couples its combat state to the animation of that state's
//! sprite strip. Entering a state loads a countdown (`remaining`) that is
//! decremented once per animation frame; reaching zero means the action is
//! complete. The battle coordinator reads those countdowns to resolve hits,
//! promote deaths and revert characters to Idle.
//!
//! ```text
//! Idle ⇄ Attack → Idle
//! Idle / Attack / Walk → Hurt → Idle
//! Hurt → Death        (only when hp == 0 and the hurt countdown is spent)
//! ```
mod state;

pub use state::{CombatState, FrameTable};

use std::fmt;

use crate::animation::{frame_index, is_frame_boundary};
use crate::assets::{CellSize, CharacterId, SpriteSheet};
use crate::clock::Tick;

/// Render placement in logical arena pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Which side of the arena a character fights on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// Driven by the keyboard.
    Player,
    /// Computer controlled; idles until hit.
    Opponent,
}

impl Side {
    /// The opponent faces left, so its sprites are flipped horizontally.
    pub fn is_mirrored(self) -> bool {
        matches!(self, Side::Opponent)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => f.write_str("player"),
            Side::Opponent => f.write_str("opponent"),
        }
    }
}

/// Starting numbers for a freshly spawned character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterStats {
    pub max_hp: u32,
    pub attack_power: u32,
}

impl CharacterStats {
    pub const fn new(max_hp: u32, attack_power: u32) -> Self {
        Self {
            max_hp,
            attack_power,
        }
    }
}

/// Animation bookkeeping for the current combat state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationState {
    /// Strip length per state.
    pub frames: FrameTable,
    /// Tick at which the current state was entered.
    pub started_at: Tick,
    /// Frames left before the current action is complete. Never negative.
    pub remaining: u32,
    last_advanced: Option<Tick>,
}

impl AnimationState {
    fn new(frames: FrameTable, started_at: Tick) -> Self {
        Self {
            frames,
            started_at,
            remaining: 0,
            last_advanced: None,
        }
    }
}

/// One fighter: health, combat state and the animation driving it.
#[derive(Clone, Debug, PartialEq)]
pub struct Character {
    id: CharacterId,
    side: Side,
    cell: CellSize,
    max_hp: u32,
    remaining_hp: u32,
    alive: bool,
    attack_power: u32,
    position: Position,
    state: CombatState,
    animation: AnimationState,
}

impl Character {
    /// Spawns a character in Idle at full health.
    pub fn new(
        sheet: SpriteSheet,
        side: Side,
        stats: CharacterStats,
        position: Position,
        spawned_at: Tick,
    ) -> Self {
        Self {
            id: sheet.id,
            side,
            cell: sheet.cell,
            max_hp: stats.max_hp,
            remaining_hp: stats.max_hp,
            alive: true,
            attack_power: stats.attack_power,
            position,
            state: CombatState::Idle,
            animation: AnimationState::new(sheet.frames, spawned_at),
        }
    }

    // ===== transitions =====

    /// Enters `state` at `tick` and loads its countdown.
    ///
    /// Re-entering the current state restarts it.
    pub fn change_state(&mut self, state: CombatState, tick: Tick) {
        self.state = state;
        self.animation.started_at = tick;
        self.animation.remaining = state.countdown(&self.animation.frames);
    }

    /// Returns to the resting state. The countdown is left untouched.
    pub fn idle(&mut self, tick: Tick) {
        self.state = CombatState::Idle;
        self.animation.started_at = tick;
    }

    pub fn start_attack(&mut self, tick: Tick) {
        self.change_state(CombatState::Attack, tick);
    }

    /// Enters Hurt, then removes `amount` HP (clamped at zero).
    ///
    /// Returns the HP left after the hit.
    pub fn take_damage(&mut self, tick: Tick, amount: u32) -> u32 {
        self.change_state(CombatState::Hurt, tick);
        self.remaining_hp = self.remaining_hp.saturating_sub(amount);
        self.remaining_hp
    }

    /// Per-tick countdown step.
    ///
    /// Decrements `remaining` by one on frame boundaries of a non-Idle state.
    /// Calling it more than once for the same tick has no further effect.
    /// Returns true if the countdown moved.
    pub fn advance(&mut self, tick: Tick) -> bool {
        if self.state == CombatState::Idle || self.animation.last_advanced == Some(tick) {
            return false;
        }
        self.animation.last_advanced = Some(tick);

        if self.animation.remaining == 0 || !is_frame_boundary(tick, self.animation.started_at) {
            return false;
        }
        self.animation.remaining -= 1;
        true
    }

    /// Frame of the current strip to show at `tick`.
    ///
    /// Reaching the last Death frame latches the character as dead; from then
    /// on the last Death frame is returned forever.
    pub fn current_frame_index(&mut self, tick: Tick) -> u32 {
        let frame = self.displayed_frame(tick);
        if self.alive
            && self.state == CombatState::Death
            && frame == self.animation.frames.last_frame(CombatState::Death)
        {
            self.alive = false;
            tracing::debug!(side = %self.side, character = %self.id, %tick, "death animation complete");
        }
        frame
    }

    /// Same as [`Character::current_frame_index`] without latching.
    pub fn displayed_frame(&self, tick: Tick) -> u32 {
        if !self.alive {
            return self.animation.frames.last_frame(CombatState::Death);
        }
        frame_index(
            tick,
            self.animation.started_at,
            self.animation.frames.get(self.state),
        )
    }

    // ===== queries =====

    pub fn id(&self) -> &CharacterId {
        &self.id
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn is_mirrored(&self) -> bool {
        self.side.is_mirrored()
    }

    pub fn cell(&self) -> CellSize {
        self.cell
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn remaining_hp(&self) -> u32 {
        self.remaining_hp
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn attack_power(&self) -> u32 {
        self.attack_power
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn state(&self) -> CombatState {
        self.state
    }

    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }

    pub fn remaining_ticks(&self) -> u32 {
        self.animation.remaining
    }

    pub fn state_started_at(&self) -> Tick {
        self.animation.started_at
    }

    /// The current action has played out (and the state has one to finish).
    pub fn action_finished(&self) -> bool {
        self.state.reverts_to_idle() && self.animation.remaining == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::TICKS_PER_FRAME;

    fn fighter(side: Side) -> Character {
        Character::new(
            SpriteSheet::standard(CharacterId::new("cat1")),
            side,
            CharacterStats::new(100, 50),
            Position::ORIGIN,
            Tick::ZERO,
        )
    }

    /// Runs the countdown until the current action finishes; returns the tick reached.
    fn play_out(character: &mut Character, mut tick: Tick) -> Tick {
        loop {
            character.advance(tick);
            if character.remaining_ticks() == 0 {
                return tick;
            }
            tick = tick + 1;
        }
    }

    #[test]
    fn spawns_idle_at_full_health() {
        let character = fighter(Side::Player);
        assert_eq!(character.state(), CombatState::Idle);
        assert_eq!(character.remaining_hp(), 100);
        assert!(character.is_alive());
        assert!(!character.is_mirrored());
        assert!(fighter(Side::Opponent).is_mirrored());
    }

    #[test]
    fn take_damage_enters_hurt_with_doubled_countdown() {
        let mut character = fighter(Side::Opponent);
        let left = character.take_damage(Tick(7), 30);

        assert_eq!(left, 70);
        assert_eq!(character.state(), CombatState::Hurt);
        assert_eq!(character.remaining_ticks(), 4);
        assert_eq!(character.state_started_at(), Tick(7));
    }

    #[test]
    fn damage_clamps_at_zero_and_never_heals() {
        let mut character = fighter(Side::Opponent);
        character.take_damage(Tick(1), 90);
        assert_eq!(character.remaining_hp(), 10);

        character.take_damage(Tick(2), 999);
        assert_eq!(character.remaining_hp(), 0);

        character.take_damage(Tick(3), 0);
        assert_eq!(character.remaining_hp(), 0);
    }

    #[test]
    fn idle_keeps_countdown() {
        let mut character = fighter(Side::Player);
        character.start_attack(Tick(10));
        character.advance(Tick(10));
        assert_eq!(character.remaining_ticks(), 3);

        character.idle(Tick(12));
        assert_eq!(character.state(), CombatState::Idle);
        assert_eq!(character.state_started_at(), Tick(12));
        assert_eq!(character.remaining_ticks(), 3);
    }

    #[test]
    fn advance_decrements_only_on_frame_boundaries() {
        let mut character = fighter(Side::Player);
        character.start_attack(Tick(10));

        assert!(character.advance(Tick(10)));
        for offset in 1..TICKS_PER_FRAME {
            assert!(!character.advance(Tick(10) + offset));
        }
        assert!(character.advance(Tick(18)));
        assert_eq!(character.remaining_ticks(), 2);
    }

    #[test]
    fn advance_runs_once_per_tick() {
        let mut character = fighter(Side::Player);
        character.start_attack(Tick(0));
        assert!(character.advance(Tick(0)));
        assert!(!character.advance(Tick(0)));
        assert_eq!(character.remaining_ticks(), 3);
    }

    #[test]
    fn attack_countdown_spans_three_full_frames() {
        let mut character = fighter(Side::Player);
        character.start_attack(Tick(5));
        let finished = play_out(&mut character, Tick(5));
        assert_eq!(finished, Tick(5) + 3 * TICKS_PER_FRAME);
        assert!(character.action_finished());
    }

    #[test]
    fn idle_has_no_spontaneous_exit() {
        let mut character = fighter(Side::Player);
        for tick in 0..200 {
            character.advance(Tick(tick));
            character.current_frame_index(Tick(tick));
        }
        assert_eq!(character.state(), CombatState::Idle);
        assert!(!character.action_finished());
    }

    #[test]
    fn death_latches_on_last_frame_and_freezes() {
        let mut character = fighter(Side::Opponent);
        character.take_damage(Tick(0), 100);
        character.change_state(CombatState::Death, Tick(40));
        assert_eq!(character.remaining_ticks(), 0);

        assert_eq!(character.current_frame_index(Tick(40)), 0);
        assert_eq!(character.current_frame_index(Tick(63)), 2);
        assert!(character.is_alive());

        assert_eq!(character.current_frame_index(Tick(64)), 3);
        assert!(!character.is_alive());

        // Past the wrap point the strip would restart, but the latch holds.
        for tick in 72..300 {
            assert_eq!(character.current_frame_index(Tick(tick)), 3);
            assert!(!character.is_alive());
        }
    }

    #[test]
    fn displayed_frame_does_not_latch() {
        let mut character = fighter(Side::Opponent);
        character.change_state(CombatState::Death, Tick(0));
        assert_eq!(character.displayed_frame(Tick(24)), 3);
        assert!(character.is_alive());
    }
}
