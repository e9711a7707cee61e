//! Ratatui styling for overlay tones, fighters and messages.
use client_frontend_core::{FontTier, MessageLevel, Tone};
use game_content::Tint;
use ratatui::style::{Color, Modifier, Style};

/// Consistent color scheme for the CLI.
#[derive(Clone, Copy, Debug, Default)]
pub struct CliTheme;

impl CliTheme {
    pub fn new() -> Self {
        Self
    }

    pub fn overlay(&self, tone: Tone, tier: FontTier) -> Style {
        let color = match tone {
            Tone::Primary => Color::LightYellow,
            Tone::Secondary => Color::Gray,
            Tone::Alert => Color::Red,
            Tone::Dark => Color::White,
            Tone::Muted => Color::DarkGray,
            Tone::Success => Color::LightGreen,
        };

        let style = Style::default().fg(color);
        match tier {
            FontTier::Small => style,
            FontTier::Base => style.add_modifier(Modifier::BOLD),
            FontTier::Title => style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        }
    }

    pub fn fighter(&self, tint: Tint) -> Style {
        let Tint(r, g, b) = tint;
        Style::default().fg(Color::Rgb(r, g, b))
    }

    /// Dimmed once the fighter is down.
    pub fn fallen(&self, tint: Tint) -> Style {
        self.fighter(tint).add_modifier(Modifier::DIM)
    }

    pub fn ground(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn health(&self, current: u32, maximum: u32) -> Style {
        if maximum == 0 {
            return Style::default().fg(Color::Gray);
        }

        let percent = (current * 100) / maximum;
        let color = match percent {
            75..=100 => Color::Green,
            50..=74 => Color::Yellow,
            25..=49 => Color::LightRed,
            _ => Color::Red,
        };

        Style::default().fg(color)
    }

    pub fn message(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default().fg(Color::LightRed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_color_follows_percentage() {
        let theme = CliTheme::new();
        assert_eq!(theme.health(100, 100).fg, Some(Color::Green));
        assert_eq!(theme.health(50, 100).fg, Some(Color::Yellow));
        assert_eq!(theme.health(0, 100).fg, Some(Color::Red));
        assert_eq!(theme.health(0, 0).fg, Some(Color::Gray));
    }
}
