//! Per-phase overlay text and its placement on the arena.
//!
//! [`PhaseOverlay`] describes what a phase shows on top of the backdrop;
//! [`PhaseOverlay::place`] turns it into baseline positions using any
//! [`TextLayout`].
use game_core::{ArenaSize, Character, Game, GamePhase};

use crate::layout::{FontTier, TextLayout, TextPlacement, centered};

pub const TITLE: &str = "Cats Vs. Dogs";

/// Semantic color of an overlay line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Secondary,
    Alert,
    Dark,
    Muted,
    Success,
}

/// Horizontal anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column {
    Center,
    /// Centered over the player's third of the arena.
    PlayerThird,
    /// Centered over the opponent's third of the arena.
    OpponentThird,
}

/// Vertical anchor for the baseline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Row {
    /// `H/4 + h/2`
    Quarter,
    /// `H/3 + h/2`
    Third,
    /// `H/3 + heading h`
    BelowHeading,
    /// `n * heading h`
    HeadingLines(i32),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverlayLine {
    pub text: String,
    pub tier: FontTier,
    pub tone: Tone,
    pub column: Column,
    pub row: Row,
}

impl OverlayLine {
    fn new(text: impl Into<String>, tier: FontTier, tone: Tone, column: Column, row: Row) -> Self {
        Self {
            text: text.into(),
            tier,
            tone,
            column,
            row,
        }
    }
}

/// Overlay text for one phase. The first line is the heading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhaseOverlay {
    pub phase: GamePhase,
    pub lines: Vec<OverlayLine>,
}

/// `HP remaining/max` caption shown above a fighter.
pub fn hp_caption(character: &Character) -> String {
    format!("HP {}/{}", character.remaining_hp(), character.max_hp())
}

impl PhaseOverlay {
    /// Builds the overlay for the game's current phase.
    ///
    /// `quit_chord` names the key combination that exits, as shown on the
    /// pause screen.
    pub fn for_game(game: &Game, quit_chord: &str) -> Self {
        use Column::*;
        use FontTier::*;

        let lines = match game.phase() {
            GamePhase::MainMenu => vec![
                OverlayLine::new(TITLE, Title, Tone::Primary, Center, Row::Quarter),
                OverlayLine::new(
                    "* Press ENTER to start a Battle! *",
                    Small,
                    Tone::Secondary,
                    Center,
                    Row::BelowHeading,
                ),
            ],
            GamePhase::Paused => vec![
                OverlayLine::new("(PAUSED)", Base, Tone::Primary, Center, Row::Quarter),
                OverlayLine::new(
                    format!("press {quit_chord} to exit or ESC to unpause"),
                    Small,
                    Tone::Secondary,
                    Center,
                    Row::Third,
                ),
            ],
            GamePhase::Battle => {
                let mut lines = vec![
                    OverlayLine::new(
                        "- Battle! -",
                        Small,
                        Tone::Alert,
                        Center,
                        Row::HeadingLines(2),
                    ),
                    OverlayLine::new(
                        "Press SPACE to attack!",
                        Small,
                        Tone::Dark,
                        Center,
                        Row::HeadingLines(4),
                    ),
                ];
                if let Some(battle) = game.battle() {
                    lines.push(OverlayLine::new(
                        hp_caption(battle.player()),
                        Small,
                        Tone::Muted,
                        PlayerThird,
                        Row::HeadingLines(6),
                    ));
                    lines.push(OverlayLine::new(
                        hp_caption(battle.opponent()),
                        Small,
                        Tone::Muted,
                        OpponentThird,
                        Row::HeadingLines(6),
                    ));
                }
                lines
            }
            GamePhase::Won => vec![
                OverlayLine::new("VICTORY!", Base, Tone::Success, Center, Row::Quarter),
                Self::return_hint(),
            ],
            GamePhase::Lost => vec![
                OverlayLine::new("You are dead", Base, Tone::Dark, Center, Row::Quarter),
                Self::return_hint(),
            ],
        };

        Self {
            phase: game.phase(),
            lines,
        }
    }

    fn return_hint() -> OverlayLine {
        OverlayLine::new(
            "Press enter to return to main menu",
            FontTier::Small,
            Tone::Secondary,
            Column::Center,
            Row::Third,
        )
    }

    pub fn heading(&self) -> Option<&OverlayLine> {
        self.lines.first()
    }

    /// Computes every line's position inside an arena of `arena` pixels.
    pub fn place<L: TextLayout + ?Sized>(
        &self,
        layout: &L,
        arena: ArenaSize,
    ) -> Vec<(&OverlayLine, TextPlacement)> {
        let width = arena.width as i32;
        let height = arena.height as i32;
        let heading_height = self
            .heading()
            .map_or(0, |line| layout.measure(&line.text, line.tier).height);

        self.lines
            .iter()
            .map(|line| {
                let bounds = layout.measure(&line.text, line.tier);
                let center_x = match line.column {
                    Column::Center => width / 2,
                    Column::PlayerThird => width / 3,
                    Column::OpponentThird => width / 3 * 2,
                };
                let y = match line.row {
                    Row::Quarter => height / 4 + bounds.height / 2,
                    Row::Third => height / 3 + bounds.height / 2,
                    Row::BelowHeading => height / 3 + heading_height,
                    Row::HeadingLines(n) => heading_height * n,
                };
                let placement = TextPlacement {
                    x: centered(center_x, bounds),
                    y,
                    bounds,
                };
                (line, placement)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{FixedAdvance, TextBounds};
    use game_core::{GameConfig, InputFrame, Keys, StandardSprites};
    use std::sync::Arc;

    fn game() -> Game {
        Game::new(GameConfig::default(), Arc::new(StandardSprites))
    }

    fn texts(overlay: &PhaseOverlay) -> Vec<&str> {
        overlay.lines.iter().map(|line| line.text.as_str()).collect()
    }

    #[test]
    fn main_menu_shows_title() {
        let overlay = PhaseOverlay::for_game(&game(), "Ctrl+W");
        assert_eq!(
            texts(&overlay),
            [TITLE, "* Press ENTER to start a Battle! *"]
        );
    }

    #[test]
    fn battle_shows_hp_captions() {
        let mut game = game();
        game.update(&InputFrame::pressed(Keys::CONFIRM)).unwrap();

        let overlay = PhaseOverlay::for_game(&game, "Ctrl+W");
        assert_eq!(
            texts(&overlay),
            [
                "- Battle! -",
                "Press SPACE to attack!",
                "HP 100/100",
                "HP 100/100"
            ]
        );
    }

    #[test]
    fn pause_names_quit_chord() {
        let mut game = game();
        game.update(&InputFrame::pressed(Keys::PAUSE_TOGGLE)).unwrap();

        let overlay = PhaseOverlay::for_game(&game, "Ctrl+W");
        assert_eq!(
            overlay.lines[1].text,
            "press Ctrl+W to exit or ESC to unpause"
        );
    }

    #[test]
    fn battle_rows_step_by_heading_height() {
        let mut game = game();
        game.update(&InputFrame::pressed(Keys::CONFIRM)).unwrap();
        let overlay = PhaseOverlay::for_game(&game, "Ctrl+W");

        let layout = FixedAdvance::new((2, 10), (3, 15), (4, 20));
        let placed = overlay.place(&layout, ArenaSize::default());
        let ys: Vec<i32> = placed.iter().map(|(_, p)| p.y).collect();
        assert_eq!(ys, [20, 40, 60, 60]);

        // "HP 100/100" is 10 chars, 20 px wide, centered on 106 and 212.
        assert_eq!(placed[2].1.x, 96);
        assert_eq!(placed[3].1.x, 202);
        assert_eq!(placed[2].1.bounds, TextBounds::new(20, 10));
    }

    #[test]
    fn menu_subtext_sits_below_title() {
        let overlay = PhaseOverlay::for_game(&game(), "Ctrl+W");
        let layout = FixedAdvance::new((2, 10), (3, 15), (4, 20));
        let placed = overlay.place(&layout, ArenaSize::default());

        assert_eq!(placed[0].1.y, 60 + 10);
        assert_eq!(placed[1].1.y, 80 + 20);
    }
}
