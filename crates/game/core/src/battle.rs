//! Per-tick combat resolution between the player and the opponent.
//!
//! [`Battle::step`] runs once per tick while the game is in
//! [`GamePhase::Battle`](crate::GamePhase::Battle). The order of its steps is
//! the tie-break policy for everything that can happen on the same tick:
//!
//! 1. outcome check (uses the death latch from the previous tick)
//! 2. attack initiation on an attack-key edge
//! 3. hit resolution once the attack countdown is spent
//! 4. death promotion of spent, HP-less Hurt characters
//! 5. idle reversion of every other spent action
//! 6. animation pass: countdown decrement and death latch
//!
//! Step 6 is the only place countdowns move, so each character's countdown is
//! decremented at most once per tick.
//!
//! A battle keeps its own [`Clock`]. It starts at the tick the fighters were
//! spawned on and moves only when [`Battle::step`] runs, so time spent in
//! Paused never reaches countdowns, frame boundaries or the death latch.
use crate::character::{Character, CombatState, Side};
use crate::clock::{Clock, Tick};
use crate::event::GameEvent;

/// How a battle ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BattleOutcome {
    /// The opponent fell.
    Victory,
    /// The player fell.
    Defeat,
}

/// The two fighters of one battle. Exclusively owns both characters.
#[derive(Clone, Debug, PartialEq)]
pub struct Battle {
    player: Character,
    opponent: Character,
    clock: Clock,
}

impl Battle {
    /// `started_at` is the tick both fighters were spawned on.
    pub fn new(player: Character, opponent: Character, started_at: Tick) -> Self {
        Self {
            player,
            opponent,
            clock: Clock::starting_at(started_at),
        }
    }

    /// Current battle time. Renderers draw fighters at this tick.
    pub fn now(&self) -> Tick {
        self.clock.now()
    }

    pub fn player(&self) -> &Character {
        &self.player
    }

    pub fn opponent(&self) -> &Character {
        &self.opponent
    }

    pub fn fighter(&self, side: Side) -> &Character {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    fn fighter_mut(&mut self, side: Side) -> &mut Character {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }

    /// Outcome according to the latched `alive` flags. The player's defeat
    /// takes precedence.
    pub fn outcome(&self) -> Option<BattleOutcome> {
        if !self.player.is_alive() {
            Some(BattleOutcome::Defeat)
        } else if !self.opponent.is_alive() {
            Some(BattleOutcome::Victory)
        } else {
            None
        }
    }

    /// Advances the battle clock and runs one tick of combat on it. Returns
    /// the outcome as soon as one side has fallen; the remaining steps are
    /// skipped on that tick.
    pub fn step(
        &mut self,
        attack_pressed: bool,
        events: &mut Vec<GameEvent>,
    ) -> Option<BattleOutcome> {
        let tick = self.clock.advance();
        self.run(tick, attack_pressed, events)
    }

    fn run(
        &mut self,
        tick: Tick,
        attack_pressed: bool,
        events: &mut Vec<GameEvent>,
    ) -> Option<BattleOutcome> {
        if let Some(outcome) = self.outcome() {
            return Some(outcome);
        }

        if attack_pressed && self.player.state() != CombatState::Attack {
            self.player.start_attack(tick);
            tracing::debug!(%tick, "player attack started");
            events.push(GameEvent::AttackStarted {
                side: Side::Player,
                tick,
            });
        }

        self.resolve_attack(tick, events);

        for side in [Side::Opponent, Side::Player] {
            self.promote_death(side, tick, events);
        }

        for side in [Side::Player, Side::Opponent] {
            self.revert_to_idle(side, tick, events);
        }

        for side in [Side::Player, Side::Opponent] {
            self.animate(side, tick, events);
        }

        None
    }

    fn resolve_attack(&mut self, tick: Tick, events: &mut Vec<GameEvent>) {
        if self.player.state() != CombatState::Attack
            || self.player.remaining_ticks() != 0
            || self.opponent.state().is_staggered()
        {
            return;
        }

        let amount = self.player.attack_power();
        let remaining_hp = self.opponent.take_damage(tick, amount);
        tracing::debug!(%tick, amount, remaining_hp, "opponent hit");

        events.push(GameEvent::DamageDealt {
            target: Side::Opponent,
            amount,
            remaining_hp,
            tick,
        });
        events.push(GameEvent::BackdropReset);
    }

    fn promote_death(&mut self, side: Side, tick: Tick, events: &mut Vec<GameEvent>) {
        let fighter = self.fighter_mut(side);
        if fighter.state() != CombatState::Hurt
            || fighter.remaining_ticks() != 0
            || fighter.remaining_hp() != 0
        {
            return;
        }

        fighter.change_state(CombatState::Death, tick);
        tracing::debug!(%side, %tick, "death animation started");
        events.push(GameEvent::DeathStarted { side, tick });
    }

    fn revert_to_idle(&mut self, side: Side, tick: Tick, events: &mut Vec<GameEvent>) {
        let fighter = self.fighter_mut(side);
        if !fighter.action_finished() {
            return;
        }

        let state = fighter.state();
        fighter.idle(tick);
        tracing::trace!(%side, %state, %tick, "action finished");
        events.push(GameEvent::ActionFinished { side, state, tick });
    }

    fn animate(&mut self, side: Side, tick: Tick, events: &mut Vec<GameEvent>) {
        let fighter = self.fighter_mut(side);
        fighter.advance(tick);

        let was_alive = fighter.is_alive();
        fighter.current_frame_index(tick);
        if was_alive && !fighter.is_alive() {
            events.push(GameEvent::Fallen { side, tick });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::TICKS_PER_FRAME;
    use crate::assets::{CharacterId, SpriteSheet};
    use crate::character::{CharacterStats, Position};

    fn battle() -> Battle {
        let spawn = |id: &str, side| {
            Character::new(
                SpriteSheet::standard(CharacterId::new(id)),
                side,
                CharacterStats::new(100, 50),
                Position::ORIGIN,
                Tick::ZERO,
            )
        };
        Battle::new(
            spawn("cat1", Side::Player),
            spawn("dog1", Side::Opponent),
            Tick::ZERO,
        )
    }

    #[test]
    fn step_runs_on_the_battle_clock() {
        let mut battle = battle();
        let mut events = Vec::new();
        assert_eq!(battle.now(), Tick::ZERO);

        battle.step(true, &mut events);
        assert_eq!(battle.now(), Tick(1));
        assert_eq!(battle.player().state_started_at(), Tick(1));
        assert!(events.contains(&GameEvent::AttackStarted {
            side: Side::Player,
            tick: Tick(1),
        }));

        for _ in 0..9 {
            battle.step(false, &mut events);
        }
        assert_eq!(battle.now(), Tick(10));
        // Boundaries at 1 and 9 have been spent.
        assert_eq!(battle.player().remaining_ticks(), 2);
    }

    #[test]
    fn attack_edge_starts_attack_once() {
        let mut battle = battle();
        let mut events = Vec::new();

        battle.run(Tick(1), true, &mut events);
        assert_eq!(battle.player().state(), CombatState::Attack);
        // First frame boundary is the starting tick itself.
        assert_eq!(battle.player().remaining_ticks(), 3);

        // Pressing again mid-attack does not restart it.
        battle.run(Tick(2), true, &mut events);
        assert_eq!(battle.player().state_started_at(), Tick(1));

        let starts = events
            .iter()
            .filter(|event| matches!(event, GameEvent::AttackStarted { .. }))
            .count();
        assert_eq!(starts, 1);
    }

    #[test]
    fn hit_lands_after_attack_countdown_and_attacker_rests() {
        let mut battle = battle();
        let mut events = Vec::new();

        battle.run(Tick(1), true, &mut events);
        let hit_tick = Tick(1) + 3 * TICKS_PER_FRAME + 1;
        for tick in 2..hit_tick.value() {
            battle.run(Tick(tick), false, &mut events);
            assert_eq!(battle.opponent().state(), CombatState::Idle);
        }

        battle.run(hit_tick, false, &mut events);
        assert_eq!(battle.opponent().state(), CombatState::Hurt);
        assert_eq!(battle.opponent().remaining_hp(), 50);
        assert_eq!(battle.player().state(), CombatState::Idle);
        assert!(events.contains(&GameEvent::DamageDealt {
            target: Side::Opponent,
            amount: 50,
            remaining_hp: 50,
            tick: hit_tick,
        }));
    }

    #[test]
    fn staggered_opponent_is_not_hit_again() {
        let mut battle = battle();
        let mut events = Vec::new();

        battle.fighter_mut(Side::Opponent).take_damage(Tick(1), 10);

        // Force a spent attack while the opponent is still hurt.
        let player = battle.fighter_mut(Side::Player);
        player.start_attack(Tick(1));
        for tick in [1, 9, 17, 25] {
            player.advance(Tick(tick));
        }
        assert_eq!(battle.player().remaining_ticks(), 0);

        battle.run(Tick(26), false, &mut events);
        assert_eq!(battle.opponent().remaining_hp(), 90);
        assert!(
            !events
                .iter()
                .any(|event| matches!(event, GameEvent::DamageDealt { .. }))
        );
    }

    #[test]
    fn death_is_never_reverted_to_idle() {
        let mut battle = battle();
        let mut events = Vec::new();

        let opponent = battle.fighter_mut(Side::Opponent);
        opponent.take_damage(Tick(0), 100);
        for tick in [0, 8, 16, 24] {
            opponent.advance(Tick(tick));
        }
        assert_eq!(battle.opponent().remaining_ticks(), 0);

        battle.run(Tick(25), false, &mut events);
        assert_eq!(battle.opponent().state(), CombatState::Death);

        for tick in 26..60 {
            battle.run(Tick(tick), false, &mut events);
            assert_eq!(battle.opponent().state(), CombatState::Death);
        }
    }

    #[test]
    fn outcome_follows_latch_one_tick_later() {
        let mut battle = battle();
        let mut events = Vec::new();

        battle.fighter_mut(Side::Opponent).take_damage(Tick(0), 100);
        battle
            .fighter_mut(Side::Opponent)
            .change_state(CombatState::Death, Tick(0));

        let latch_tick = Tick(3 * TICKS_PER_FRAME);
        for tick in 1..latch_tick.value() {
            assert_eq!(battle.run(Tick(tick), false, &mut events), None);
        }

        // The latch happens in the animation pass of this tick...
        assert_eq!(battle.run(latch_tick, false, &mut events), None);
        assert!(!battle.opponent().is_alive());
        assert!(events.contains(&GameEvent::Fallen {
            side: Side::Opponent,
            tick: latch_tick,
        }));

        // ...and is recognized on the next one.
        assert_eq!(
            battle.run(latch_tick + 1, false, &mut events),
            Some(BattleOutcome::Victory)
        );
    }

    #[test]
    fn player_defeat_takes_precedence() {
        let mut battle = battle();
        for side in [Side::Player, Side::Opponent] {
            let fighter = battle.fighter_mut(side);
            fighter.change_state(CombatState::Death, Tick(0));
            fighter.current_frame_index(Tick(24));
        }
        assert_eq!(battle.outcome(), Some(BattleOutcome::Defeat));
    }
}
