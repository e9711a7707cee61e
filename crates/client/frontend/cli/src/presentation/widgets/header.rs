//! Header widget displaying the clock, phase and fighters.

use game_content::CharacterRegistry;
use game_core::{Character, Game};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::CliTheme;

/// Render the header panel with tick, phase and fighter health.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    game: &Game,
    registry: &CharacterRegistry,
    theme: &CliTheme,
) {
    let mut spans = vec![
        Span::raw("Tick: "),
        Span::styled(game.tick().to_string(), Style::default().fg(Color::Yellow)),
        Span::raw(" | Phase: "),
        Span::styled(
            game.phase().to_string(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    if let Some(battle) = game.battle() {
        spans.push(Span::raw(" | "));
        spans.extend(fighter_spans(battle.player(), registry, theme));
        spans.push(Span::raw(" vs. "));
        spans.extend(fighter_spans(battle.opponent(), registry, theme));
    }

    let paragraph = Paragraph::new(vec![Line::from(spans)])
        .block(Block::default().borders(Borders::ALL).title("Cats Vs. Dogs"));

    frame.render_widget(paragraph, area);
}

fn fighter_spans<'a>(
    character: &Character,
    registry: &CharacterRegistry,
    theme: &CliTheme,
) -> [Span<'a>; 2] {
    let name = registry
        .get(character.id())
        .map_or_else(|| character.id().to_string(), |entry| entry.name.clone());
    let name_style = registry
        .get(character.id())
        .map_or_else(Style::default, |entry| theme.fighter(entry.tint));

    [
        Span::styled(format!("{name} "), name_style),
        Span::styled(
            format!("{}/{}", character.remaining_hp(), character.max_hp()),
            theme.health(character.remaining_hp(), character.max_hp()),
        ),
    ]
}
