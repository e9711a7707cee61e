//! Maintains the CLI message log in response to game events.
use std::sync::Arc;

use client_frontend_core::{
    event::{EventConsumer, EventImpact},
    message::{MessageEntry, MessageLevel, MessageLog},
};
use game_content::CharacterRegistry;
use game_core::{CharacterId, GameEvent, GamePhase, Side, Tick};

pub struct CliEventConsumer {
    log: MessageLog,
    registry: Arc<CharacterRegistry>,
    show_animation: bool,
    player: String,
    opponent: String,
}

impl CliEventConsumer {
    pub fn new(log: MessageLog, registry: Arc<CharacterRegistry>, show_animation: bool) -> Self {
        Self {
            log,
            registry,
            show_animation,
            player: "Player".to_string(),
            opponent: "Opponent".to_string(),
        }
    }

    fn display_name(&self, id: &CharacterId) -> String {
        self.registry
            .get(id)
            .map_or_else(|| id.to_string(), |character| character.name.clone())
    }

    fn name(&self, side: Side) -> &str {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    fn push(&mut self, text: String, tick: Tick, level: MessageLevel) {
        self.log.push(MessageEntry::new(text, Some(tick), level));
    }
}

impl EventConsumer for CliEventConsumer {
    fn on_event(&mut self, event: &GameEvent) -> EventImpact {
        match event {
            GameEvent::BackdropReset => EventImpact::backdrop(),
            GameEvent::BattleStarted {
                player,
                opponent,
                tick,
            } => {
                self.player = self.display_name(player);
                self.opponent = self.display_name(opponent);
                let text = format!("{} vs. {}. Fight!", self.player, self.opponent);
                self.push(text, *tick, MessageLevel::Info);
                EventImpact::redraw()
            }
            GameEvent::PhaseChanged { from, to, tick } => {
                let (text, level) = match (from, to) {
                    (_, GamePhase::Paused) => ("Paused".to_string(), MessageLevel::Info),
                    (GamePhase::Paused, to) => (format!("Resumed {to}"), MessageLevel::Info),
                    (_, GamePhase::Won) => (
                        format!("{} is victorious!", self.player),
                        MessageLevel::Info,
                    ),
                    (_, GamePhase::Lost) => (
                        format!("{} has fallen. You are dead.", self.player),
                        MessageLevel::Error,
                    ),
                    // Battle entry is already announced by BattleStarted.
                    (_, GamePhase::Battle) => return EventImpact::redraw(),
                    (_, GamePhase::MainMenu) => {
                        ("Back to the main menu".to_string(), MessageLevel::Info)
                    }
                };
                self.push(text, *tick, level);
                EventImpact::redraw()
            }
            GameEvent::AttackStarted { side, tick } => {
                let text = format!("{} attacks!", self.name(*side));
                self.push(text, *tick, MessageLevel::Info);
                EventImpact::redraw()
            }
            GameEvent::DamageDealt {
                target,
                amount,
                remaining_hp,
                tick,
            } => {
                let level = match target {
                    Side::Player => MessageLevel::Warning,
                    Side::Opponent => MessageLevel::Info,
                };
                let text = format!(
                    "{} takes {} damage ({} HP left)",
                    self.name(*target),
                    amount,
                    remaining_hp
                );
                self.push(text, *tick, level);
                EventImpact::redraw()
            }
            GameEvent::DeathStarted { side, tick } => {
                let text = format!("{} collapses...", self.name(*side));
                self.push(text, *tick, MessageLevel::Warning);
                EventImpact::redraw()
            }
            GameEvent::Fallen { side, tick } => {
                if self.show_animation {
                    let text = format!("{} lies still", self.name(*side));
                    self.push(text, *tick, MessageLevel::Info);
                }
                EventImpact::redraw()
            }
            GameEvent::ActionFinished { side, state, tick } => {
                if self.show_animation {
                    let text = format!("{} finished {}", self.name(*side), state);
                    self.push(text, *tick, MessageLevel::Info);
                }
                EventImpact::redraw()
            }
            GameEvent::QuitRequested { tick } => {
                self.push("Quitting...".to_string(), *tick, MessageLevel::Info);
                EventImpact::redraw()
            }
        }
    }

    fn message_log(&self) -> &MessageLog {
        &self.log
    }

    fn message_log_mut(&mut self) -> &mut MessageLog {
        &mut self.log
    }

    fn take_message_log(self) -> MessageLog {
        self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn consumer(show_animation: bool) -> CliEventConsumer {
        let registry = Arc::new(CharacterRegistry::builtin().unwrap());
        CliEventConsumer::new(MessageLog::new(16), registry, show_animation)
    }

    fn last_text(consumer: &CliEventConsumer) -> &str {
        &consumer.message_log().recent(1).next().unwrap().text
    }

    fn start(consumer: &mut CliEventConsumer) {
        consumer.on_event(&GameEvent::BattleStarted {
            player: CharacterId::new("cat1"),
            opponent: CharacterId::new("dog1"),
            tick: Tick(1),
        });
    }

    #[test]
    fn battle_start_uses_roster_names() {
        let mut consumer = consumer(false);
        start(&mut consumer);
        assert_eq!(last_text(&consumer), "Tabby vs. Biscuit. Fight!");
    }

    #[test]
    fn damage_to_player_is_a_warning() {
        let mut consumer = consumer(false);
        start(&mut consumer);
        consumer.on_event(&GameEvent::DamageDealt {
            target: Side::Player,
            amount: 50,
            remaining_hp: 50,
            tick: Tick(30),
        });

        let entry = consumer.message_log().recent(1).next().unwrap();
        assert_eq!(entry.text, "Tabby takes 50 damage (50 HP left)");
        assert_eq!(entry.level, MessageLevel::Warning);
        assert_eq!(entry.timestamp, Some(Tick(30)));
    }

    #[test]
    fn backdrop_reset_requests_a_reset() {
        let mut consumer = consumer(false);
        let impact = consumer.on_event(&GameEvent::BackdropReset);
        assert!(impact.reset_backdrop);
        assert!(consumer.message_log().is_empty());
    }

    #[test]
    fn animation_messages_are_opt_in() {
        let event = GameEvent::ActionFinished {
            side: Side::Opponent,
            state: game_core::CombatState::Hurt,
            tick: Tick(5),
        };

        let mut quiet = consumer(false);
        quiet.on_event(&event);
        assert!(quiet.message_log().is_empty());

        let mut chatty = consumer(true);
        chatty.on_event(&event);
        assert_eq!(last_text(&chatty), "Opponent finished Hurt");
    }
}
