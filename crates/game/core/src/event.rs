//! Events emitted by [`Game::update`](crate::Game::update).
//!
//! Events describe what changed during one tick so frontends can log messages
//! and refresh visuals without diffing state. Phase, setup and quit events
//! carry the game tick; combat events carry the battle's own tick.
use crate::assets::CharacterId;
use crate::character::{CombatState, Side};
use crate::clock::Tick;
use crate::phase::GamePhase;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// The top-level phase changed.
    PhaseChanged {
        from: GamePhase,
        to: GamePhase,
        tick: Tick,
    },

    /// The background visual should be re-acquired.
    BackdropReset,

    /// Both fighters were spawned.
    BattleStarted {
        player: CharacterId,
        opponent: CharacterId,
        tick: Tick,
    },

    AttackStarted { side: Side, tick: Tick },

    /// A hit landed and the target entered Hurt.
    DamageDealt {
        target: Side,
        amount: u32,
        remaining_hp: u32,
        tick: Tick,
    },

    /// A countdown finished and the character went back to Idle.
    ActionFinished {
        side: Side,
        state: CombatState,
        tick: Tick,
    },

    /// A character with no HP left started its death animation.
    DeathStarted { side: Side, tick: Tick },

    /// The death animation reached its last frame.
    Fallen { side: Side, tick: Tick },

    /// The quit chord was held.
    QuitRequested { tick: Tick },
}

impl GameEvent {
    /// Tick the event happened at, if it carries one.
    pub fn tick(&self) -> Option<Tick> {
        match self {
            GameEvent::PhaseChanged { tick, .. }
            | GameEvent::BattleStarted { tick, .. }
            | GameEvent::AttackStarted { tick, .. }
            | GameEvent::DamageDealt { tick, .. }
            | GameEvent::ActionFinished { tick, .. }
            | GameEvent::DeathStarted { tick, .. }
            | GameEvent::Fallen { tick, .. }
            | GameEvent::QuitRequested { tick } => Some(*tick),
            GameEvent::BackdropReset => None,
        }
    }
}
