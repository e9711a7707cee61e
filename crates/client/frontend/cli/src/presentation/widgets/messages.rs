//! Messages widget displaying recent game events.

use client_frontend_core::message::{MessageEntry, MessageLog};
use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, List, ListDirection, ListItem},
};

use crate::presentation::theme::CliTheme;

/// Render the message log panel, newest at the bottom.
pub fn render(frame: &mut Frame, area: Rect, messages: &MessageLog, theme: &CliTheme) {
    let visible = area.height.saturating_sub(2) as usize;

    let items: Vec<ListItem> = messages
        .recent(visible)
        .map(|entry| ListItem::new(format_message(entry)).style(theme.message(entry.level)))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Messages"))
        .direction(ListDirection::BottomToTop);

    frame.render_widget(list, area);
}

/// Format a message entry with optional timestamp.
fn format_message(entry: &MessageEntry) -> String {
    match entry.timestamp {
        Some(tick) => format!("[{}] {}", tick, entry.text),
        None => entry.text.clone(),
    }
}
