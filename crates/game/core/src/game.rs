//! Top-level phase machine.
//!
//! [`Game`] owns the shared clock, the current and previous [`GamePhase`], and
//! the [`Battle`] while one exists. The shared clock runs in every phase; the
//! battle's own clock only runs on ticks spent in Battle. Frontends call
//! [`Game::update`] exactly once per tick with that tick's input and then read
//! state back for drawing.
//!
//! ```text
//! MainMenu --confirm--> Battle --opponent falls--> Won  --confirm--> MainMenu
//!                              --player falls----> Lost --confirm--> MainMenu
//! any phase <--pause toggle--> Paused
//! ```
use std::sync::Arc;

use crate::assets::AssetProvider;
use crate::battle::{Battle, BattleOutcome};
use crate::character::{Character, Side};
use crate::clock::{Clock, Tick};
use crate::config::GameConfig;
use crate::error::GameError;
use crate::event::GameEvent;
use crate::input::{InputSource, Key};
use crate::phase::GamePhase;

/// Whether the run loop should keep going after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// What happened during one [`Game::update`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepReport {
    pub tick: Tick,
    pub flow: Flow,
    pub events: Vec<GameEvent>,
}

impl StepReport {
    pub fn should_quit(&self) -> bool {
        self.flow == Flow::Quit
    }
}

pub struct Game {
    config: GameConfig,
    assets: Arc<dyn AssetProvider>,
    clock: Clock,
    phase: GamePhase,
    previous: GamePhase,
    battle: Option<Battle>,
}

impl Game {
    /// Creates a game sitting in the main menu at tick zero.
    pub fn new(config: GameConfig, assets: Arc<dyn AssetProvider>) -> Self {
        Self {
            config,
            assets,
            clock: Clock::new(),
            phase: GamePhase::MainMenu,
            previous: GamePhase::MainMenu,
            battle: None,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn tick(&self) -> Tick {
        self.clock.now()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Phase to return to when leaving Paused.
    pub fn previous_phase(&self) -> GamePhase {
        self.previous
    }

    pub fn battle(&self) -> Option<&Battle> {
        self.battle.as_ref()
    }

    /// Advances the game by one tick.
    ///
    /// Order: clock, quit chord, pause toggle, then the current phase's
    /// handler. The quit chord ends the tick immediately.
    pub fn update(&mut self, input: &(impl InputSource + ?Sized)) -> Result<StepReport, GameError> {
        let tick = self.clock.advance();
        let mut events = Vec::new();

        if input.quit_requested() {
            tracing::info!(%tick, "quit chord held, terminating");
            events.push(GameEvent::QuitRequested { tick });
            return Ok(StepReport {
                tick,
                flow: Flow::Quit,
                events,
            });
        }

        if input.just_pressed(Key::PauseToggle) {
            self.toggle_pause(tick, &mut events);
        }

        match self.phase {
            GamePhase::MainMenu => {
                if input.just_pressed(Key::Confirm) {
                    self.start_battle(tick, &mut events)?;
                }
            }
            GamePhase::Paused => {}
            GamePhase::Battle => {
                let attack = input.just_pressed(Key::Attack);
                let battle = self.battle.as_mut().ok_or(GameError::BattleMissing {
                    phase: GamePhase::Battle,
                })?;

                match battle.step(attack, &mut events) {
                    Some(BattleOutcome::Victory) => {
                        self.enter(GamePhase::Won, tick, &mut events);
                    }
                    Some(BattleOutcome::Defeat) => {
                        self.enter(GamePhase::Lost, tick, &mut events);
                    }
                    None => {}
                }
            }
            GamePhase::Won | GamePhase::Lost => {
                if input.just_pressed(Key::Confirm) {
                    self.battle = None;
                    self.enter(GamePhase::MainMenu, tick, &mut events);
                }
            }
        }

        Ok(StepReport {
            tick,
            flow: Flow::Continue,
            events,
        })
    }

    /// Swaps between Paused and whatever phase was active before pausing.
    fn toggle_pause(&mut self, tick: Tick, events: &mut Vec<GameEvent>) {
        let from = self.phase;
        if self.phase == GamePhase::Paused {
            std::mem::swap(&mut self.phase, &mut self.previous);
        } else {
            self.previous = self.phase;
            self.phase = GamePhase::Paused;
        }

        tracing::info!(%from, to = %self.phase, %tick, "pause toggled");
        events.push(GameEvent::BackdropReset);
        events.push(GameEvent::PhaseChanged {
            from,
            to: self.phase,
            tick,
        });
    }

    fn enter(&mut self, to: GamePhase, tick: Tick, events: &mut Vec<GameEvent>) {
        let from = self.phase;
        self.previous = from;
        self.phase = to;

        tracing::info!(%from, %to, %tick, "phase changed");
        events.push(GameEvent::BackdropReset);
        events.push(GameEvent::PhaseChanged { from, to, tick });
    }

    /// Resolves both fighters' sprites and spawns them in Idle.
    fn start_battle(&mut self, tick: Tick, events: &mut Vec<GameEvent>) -> Result<(), GameError> {
        let matchup = &self.config.matchup;
        let player_sheet = self.assets.sprite_sheet(&matchup.player)?;
        let opponent_sheet = self.assets.sprite_sheet(&matchup.opponent)?;

        let arena = self.config.arena;
        let stats = self.config.fighter;
        let player_spawn = arena.player_spawn(player_sheet.cell.width);
        let opponent_spawn = arena.opponent_spawn(opponent_sheet.cell.width);

        let player = Character::new(player_sheet, Side::Player, stats, player_spawn, tick);
        let opponent = Character::new(opponent_sheet, Side::Opponent, stats, opponent_spawn, tick);

        tracing::info!(player = %player.id(), opponent = %opponent.id(), %tick, "battle set up");
        events.push(GameEvent::BattleStarted {
            player: player.id().clone(),
            opponent: opponent.id().clone(),
            tick,
        });

        self.battle = Some(Battle::new(player, opponent, tick));
        self.enter(GamePhase::Battle, tick, events);
        Ok(())
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("tick", &self.clock.now())
            .field("phase", &self.phase)
            .field("previous", &self.previous)
            .field("battle", &self.battle)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{AssetError, CharacterId, SpriteSheet, StandardSprites};
    use crate::input::{InputFrame, Keys};

    fn game() -> Game {
        Game::new(GameConfig::default(), Arc::new(StandardSprites))
    }

    fn press(game: &mut Game, keys: Keys) -> StepReport {
        game.update(&InputFrame::pressed(keys)).unwrap()
    }

    fn idle(game: &mut Game) -> StepReport {
        game.update(&InputFrame::empty()).unwrap()
    }

    #[test]
    fn starts_in_main_menu_without_battle() {
        let mut game = game();
        assert_eq!(game.phase(), GamePhase::MainMenu);
        idle(&mut game);
        assert_eq!(game.tick(), Tick(1));
        assert!(game.battle().is_none());
    }

    #[test]
    fn confirm_sets_up_battle() {
        let mut game = game();
        let report = press(&mut game, Keys::CONFIRM);

        assert_eq!(game.phase(), GamePhase::Battle);
        assert_eq!(game.previous_phase(), GamePhase::MainMenu);
        let battle = game.battle().unwrap();
        assert_eq!(battle.player().id().as_str(), "cat1");
        assert_eq!(battle.opponent().id().as_str(), "dog1");
        assert_eq!(battle.player().remaining_hp(), 100);
        assert!(battle.opponent().is_mirrored());
        assert!(report.events.contains(&GameEvent::BackdropReset));
    }

    #[test]
    fn quit_chord_stops_everything_else() {
        let mut game = game();
        let report = press(&mut game, Keys::QUIT_CHORD | Keys::CONFIRM);
        assert!(report.should_quit());
        assert_eq!(game.phase(), GamePhase::MainMenu);
    }

    #[test]
    fn pause_toggle_works_from_any_phase() {
        let mut game = game();
        press(&mut game, Keys::PAUSE_TOGGLE);
        assert_eq!(game.phase(), GamePhase::Paused);
        assert_eq!(game.previous_phase(), GamePhase::MainMenu);

        // Confirm is ignored while paused.
        press(&mut game, Keys::CONFIRM);
        assert_eq!(game.phase(), GamePhase::Paused);

        press(&mut game, Keys::PAUSE_TOGGLE);
        assert_eq!(game.phase(), GamePhase::MainMenu);
        assert_eq!(game.previous_phase(), GamePhase::Paused);
    }

    #[test]
    fn clock_runs_in_every_phase() {
        let mut game = game();
        press(&mut game, Keys::PAUSE_TOGGLE);
        for _ in 0..10 {
            idle(&mut game);
        }
        assert_eq!(game.tick(), Tick(11));
    }

    #[test]
    fn battle_clock_stands_still_while_paused() {
        let mut game = game();
        press(&mut game, Keys::CONFIRM);
        press(&mut game, Keys::ATTACK);
        assert_eq!(game.battle().unwrap().now(), Tick(2));

        press(&mut game, Keys::PAUSE_TOGGLE);
        let frozen = game.battle().unwrap().now();
        for _ in 0..13 {
            idle(&mut game);
        }
        assert_eq!(game.tick(), Tick(16));
        assert_eq!(game.battle().unwrap().now(), frozen);

        // The unpausing tick is itself a battle tick.
        press(&mut game, Keys::PAUSE_TOGGLE);
        assert_eq!(game.battle().unwrap().now(), frozen + 1);
    }

    struct MissingSprites;

    impl AssetProvider for MissingSprites {
        fn sprite_sheet(&self, id: &CharacterId) -> Result<SpriteSheet, AssetError> {
            Err(AssetError::UnknownCharacter { id: id.clone() })
        }
    }

    #[test]
    fn asset_failure_is_surfaced() {
        let mut game = Game::new(GameConfig::default(), Arc::new(MissingSprites));
        let result = game.update(&InputFrame::pressed(Keys::CONFIRM));
        assert!(matches!(
            result,
            Err(GameError::Asset(AssetError::UnknownCharacter { .. }))
        ));
        assert_eq!(game.phase(), GamePhase::MainMenu);
        assert!(game.battle().is_none());
    }
}
