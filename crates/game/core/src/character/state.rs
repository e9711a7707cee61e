//! Combat states and per-state animation budgets.
use strum::{Display, EnumCount, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::assets::AssetError;

/// What a character is currently doing.
///
/// Every state has a matching sprite strip. Idle is the resting state and the
/// only one without a countdown; Death is terminal.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatState {
    #[default]
    Idle,
    Attack,
    Hurt,
    Death,
    Walk,
}

impl CombatState {
    /// Countdown loaded into `remaining` when this state is entered.
    ///
    /// Hurt plays out over twice its strip length. Death has no countdown.
    pub fn countdown(self, frames: &FrameTable) -> u32 {
        match self {
            CombatState::Hurt => frames.get(self) * 2,
            CombatState::Idle | CombatState::Death => 0,
            CombatState::Attack | CombatState::Walk => frames.get(self),
        }
    }

    /// Whether `remaining == 0` means "finished, go back to Idle".
    pub fn reverts_to_idle(self) -> bool {
        !matches!(self, CombatState::Idle | CombatState::Death)
    }

    /// Hurt and Death cannot be interrupted by an incoming hit.
    pub fn is_staggered(self) -> bool {
        matches!(self, CombatState::Hurt | CombatState::Death)
    }
}

/// Frame count of each state's sprite strip. Every entry is at least one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameTable {
    counts: [u32; CombatState::COUNT],
}

impl FrameTable {
    pub const STANDARD_ATTACK: u32 = 4;
    pub const STANDARD_DEATH: u32 = 4;
    pub const STANDARD_HURT: u32 = 2;
    pub const STANDARD_IDLE: u32 = 4;
    pub const STANDARD_WALK: u32 = 6;

    /// Builds a table from `(state, frames)` pairs. Every state must be listed
    /// with a non-zero frame count.
    pub fn try_from_entries(
        entries: impl IntoIterator<Item = (CombatState, u32)>,
    ) -> Result<Self, AssetError> {
        let mut counts = [0u32; CombatState::COUNT];
        for (state, frames) in entries {
            if frames == 0 {
                return Err(AssetError::EmptyStrip { state });
            }
            counts[state as usize] = frames;
        }

        if let Some(state) = CombatState::iter().find(|state| counts[*state as usize] == 0) {
            return Err(AssetError::MissingStrip { state });
        }

        Ok(Self { counts })
    }

    /// Frame counts shared by every character in the stock roster.
    pub fn standard() -> Self {
        Self {
            counts: [
                Self::STANDARD_IDLE,
                Self::STANDARD_ATTACK,
                Self::STANDARD_HURT,
                Self::STANDARD_DEATH,
                Self::STANDARD_WALK,
            ],
        }
    }

    pub fn get(&self, state: CombatState) -> u32 {
        self.counts[state as usize]
    }

    /// Index of the final frame of `state`'s strip.
    pub fn last_frame(&self, state: CombatState) -> u32 {
        self.get(state) - 1
    }

    pub fn iter(&self) -> impl Iterator<Item = (CombatState, u32)> + '_ {
        CombatState::iter().map(|state| (state, self.get(state)))
    }
}

impl Default for FrameTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_matches_stock_strips() {
        let table = FrameTable::standard();
        assert_eq!(table.get(CombatState::Attack), 4);
        assert_eq!(table.get(CombatState::Death), 4);
        assert_eq!(table.get(CombatState::Hurt), 2);
        assert_eq!(table.get(CombatState::Idle), 4);
        assert_eq!(table.get(CombatState::Walk), 6);
    }

    #[test]
    fn hurt_countdown_is_doubled() {
        let table = FrameTable::standard();
        assert_eq!(CombatState::Hurt.countdown(&table), 4);
        assert_eq!(CombatState::Attack.countdown(&table), 4);
        assert_eq!(CombatState::Death.countdown(&table), 0);
        assert_eq!(CombatState::Idle.countdown(&table), 0);
    }

    #[test]
    fn rejects_empty_and_missing_strips() {
        let empty = FrameTable::try_from_entries([(CombatState::Idle, 0)]);
        assert!(matches!(
            empty,
            Err(AssetError::EmptyStrip {
                state: CombatState::Idle
            })
        ));

        let missing = FrameTable::try_from_entries([
            (CombatState::Idle, 4),
            (CombatState::Attack, 4),
            (CombatState::Hurt, 2),
            (CombatState::Death, 4),
        ]);
        assert!(matches!(
            missing,
            Err(AssetError::MissingStrip {
                state: CombatState::Walk
            })
        ));
    }

    #[test]
    fn parses_strip_names() {
        assert_eq!("Hurt".parse::<CombatState>().ok(), Some(CombatState::Hurt));
        assert!("Jump".parse::<CombatState>().is_err());
        assert_eq!(CombatState::Death.to_string(), "Death");
    }
}
