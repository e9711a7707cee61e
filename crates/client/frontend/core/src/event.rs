//! Utilities for reacting to game events inside UI layers.
use game_core::GameEvent;

use crate::message::MessageLog;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventImpact {
    pub requires_redraw: bool,
    /// The backdrop has to be re-acquired before the next draw.
    pub reset_backdrop: bool,
}

impl EventImpact {
    pub const fn none() -> Self {
        Self {
            requires_redraw: false,
            reset_backdrop: false,
        }
    }

    pub const fn redraw() -> Self {
        Self {
            requires_redraw: true,
            reset_backdrop: false,
        }
    }

    pub const fn backdrop() -> Self {
        Self {
            requires_redraw: true,
            reset_backdrop: true,
        }
    }

    pub fn combine(self, other: Self) -> Self {
        Self {
            requires_redraw: self.requires_redraw || other.requires_redraw,
            reset_backdrop: self.reset_backdrop || other.reset_backdrop,
        }
    }
}

pub trait EventConsumer {
    fn on_event(&mut self, event: &GameEvent) -> EventImpact;
    fn message_log(&self) -> &MessageLog;
    fn message_log_mut(&mut self) -> &mut MessageLog;
    fn take_message_log(self) -> MessageLog
    where
        Self: Sized;

    /// Folds a whole tick's events into one impact.
    fn on_events<'a>(&mut self, events: impl IntoIterator<Item = &'a GameEvent>) -> EventImpact {
        events
            .into_iter()
            .fold(EventImpact::none(), |impact, event| {
                impact.combine(self.on_event(event))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_is_sticky() {
        let impact = EventImpact::none()
            .combine(EventImpact::backdrop())
            .combine(EventImpact::redraw());
        assert_eq!(impact, EventImpact::backdrop());
    }
}
