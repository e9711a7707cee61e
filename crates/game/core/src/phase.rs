//! Top-level game phases.
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Mode the whole game is in.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum GamePhase {
    #[default]
    MainMenu,
    Paused,
    Battle,
    Won,
    Lost,
}

impl GamePhase {
    /// Phases that own a pair of fighters.
    pub fn has_battle(self) -> bool {
        matches!(self, GamePhase::Battle | GamePhase::Won | GamePhase::Lost)
    }

    /// Battle is over and confirm returns to the main menu.
    pub fn is_finished(self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn names_round_trip() {
        for phase in GamePhase::iter() {
            assert_eq!(phase.to_string().parse::<GamePhase>().ok(), Some(phase));
        }
        assert_eq!(GamePhase::MainMenu.to_string(), "MAIN_MENU");
        assert_eq!(GamePhase::Won.to_string(), "WON");
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert!("DRAW".parse::<GamePhase>().is_err());
    }
}
