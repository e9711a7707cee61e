//! Persistent arena backdrop.
//!
//! Overlay text is stamped onto the backdrop rather than drawn per frame, so
//! anything stamped stays visible until the backdrop is reset. The game asks
//! for a reset on every phase transition and on every hit, which is what
//! clears a stale heading or HP caption.
use client_frontend_core::{FontTier, OverlayLine, TextPlacement, Tone};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stamp {
    pub text: String,
    pub tier: FontTier,
    pub tone: Tone,
    pub placement: TextPlacement,
}

#[derive(Clone, Debug, Default)]
pub struct Backdrop {
    stamps: Vec<Stamp>,
    resets: u64,
}

impl Backdrop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-acquires a clean backdrop.
    pub fn reset(&mut self) {
        self.stamps.clear();
        self.resets += 1;
        tracing::trace!(resets = self.resets, "backdrop reset");
    }

    /// Draws `line` onto the backdrop. Stamping the same text at the same
    /// place again is a no-op.
    pub fn stamp(&mut self, line: &OverlayLine, placement: TextPlacement) {
        let already = self
            .stamps
            .iter()
            .any(|stamp| stamp.text == line.text && stamp.placement == placement);
        if already {
            return;
        }

        self.stamps.push(Stamp {
            text: line.text.clone(),
            tier: line.tier,
            tone: line.tone,
            placement,
        });
    }

    pub fn stamps(&self) -> &[Stamp] {
        &self.stamps
    }

    pub fn resets(&self) -> u64 {
        self.resets
    }
}
