//! Global simulation clock.
//!
//! Time is counted in monotonically increasing [`Tick`]s owned by a
//! [`Clock`]. The game owns one that runs in every phase; each battle owns
//! another that only runs while the battle is being stepped.
use std::fmt;

/// One discrete simulation step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Self = Self(0);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }

    /// Ticks elapsed since `start`. Saturates at zero if `start` is in the future.
    pub fn elapsed_since(self, start: Tick) -> u64 {
        self.0.saturating_sub(start.0)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub<u64> for Tick {
    type Output = Tick;
    fn sub(self, rhs: u64) -> Tick {
        Tick(self.0.saturating_sub(rhs))
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Owner of the shared tick counter.
///
/// The clock only moves forward, one tick per [`Clock::advance`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Clock {
    now: Tick,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clock whose next [`Clock::advance`] yields `tick + 1`.
    pub fn starting_at(tick: Tick) -> Self {
        Self { now: tick }
    }

    pub fn now(&self) -> Tick {
        self.now
    }

    /// Moves the clock forward by exactly one tick and returns the new tick.
    pub fn advance(&mut self) -> Tick {
        self.now = self.now + 1;
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_is_monotonic_by_one() {
        let mut clock = Clock::new();
        assert_eq!(clock.now(), Tick::ZERO);
        assert_eq!(clock.advance(), Tick(1));
        assert_eq!(clock.advance(), Tick(2));
        assert_eq!(clock.now(), Tick(2));
    }

    #[test]
    fn starting_at_continues_from_the_given_tick() {
        let mut clock = Clock::starting_at(Tick(40));
        assert_eq!(clock.now(), Tick(40));
        assert_eq!(clock.advance(), Tick(41));
    }

    #[test]
    fn elapsed_saturates() {
        assert_eq!(Tick(10).elapsed_since(Tick(4)), 6);
        assert_eq!(Tick(4).elapsed_since(Tick(10)), 0);
    }
}
