//! Text measurement contract used for centering overlay text.
//!
//! Positions are in logical arena pixels with `y` on the text baseline.
use strum::{Display, EnumIter};

/// Font size tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum FontTier {
    Small,
    Base,
    Title,
}

impl FontTier {
    /// Nominal point size at 72 DPI.
    pub const fn points(self) -> u32 {
        match self {
            FontTier::Small => 12,
            FontTier::Base => 20,
            FontTier::Title => 32,
        }
    }
}

/// Ink bounding box of a measured string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBounds {
    pub width: i32,
    pub height: i32,
}

impl TextBounds {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Where a string is drawn: left edge and baseline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextPlacement {
    pub x: i32,
    pub y: i32,
    pub bounds: TextBounds,
}

impl TextPlacement {
    /// Top edge of the ink box.
    pub fn top(&self) -> i32 {
        self.y - self.bounds.height
    }
}

pub trait TextLayout {
    fn measure(&self, text: &str, tier: FontTier) -> TextBounds;
}

/// Left edge that centers `bounds` on `center_x`.
pub fn centered(center_x: i32, bounds: TextBounds) -> i32 {
    center_x - bounds.width / 2
}

/// Monospace approximation: every character advances by the same width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedAdvance {
    /// `(advance, height)` per tier, indexed Small, Base, Title.
    metrics: [(i32, i32); 3],
}

impl FixedAdvance {
    /// Metrics close to a 72 DPI sans face.
    pub const PROPORTIONAL: Self = Self {
        metrics: [(7, 9), (11, 15), (18, 23)],
    };

    /// One unit per character, one unit tall, for every tier.
    pub const CELLS: Self = Self {
        metrics: [(1, 1); 3],
    };

    pub const fn new(small: (i32, i32), base: (i32, i32), title: (i32, i32)) -> Self {
        Self {
            metrics: [small, base, title],
        }
    }

    fn metrics(&self, tier: FontTier) -> (i32, i32) {
        match tier {
            FontTier::Small => self.metrics[0],
            FontTier::Base => self.metrics[1],
            FontTier::Title => self.metrics[2],
        }
    }
}

impl Default for FixedAdvance {
    fn default() -> Self {
        Self::PROPORTIONAL
    }
}

impl TextLayout for FixedAdvance {
    fn measure(&self, text: &str, tier: FontTier) -> TextBounds {
        let (advance, height) = self.metrics(tier);
        let chars = text.chars().count() as i32;
        if chars == 0 {
            return TextBounds::default();
        }
        TextBounds::new(chars * advance, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centering_uses_half_width() {
        let bounds = FixedAdvance::CELLS.measure("VICTORY!", FontTier::Base);
        assert_eq!(bounds, TextBounds::new(8, 1));
        assert_eq!(centered(160, bounds), 156);
    }

    #[test]
    fn empty_text_has_no_ink() {
        assert_eq!(
            FixedAdvance::PROPORTIONAL.measure("", FontTier::Title),
            TextBounds::default()
        );
    }

    #[test]
    fn tiers_grow() {
        let layout = FixedAdvance::default();
        let small = layout.measure("HP", FontTier::Small);
        let title = layout.measure("HP", FontTier::Title);
        assert!(title.width > small.width && title.height > small.height);
    }
}
