//! Terminal setup/teardown helpers for the CLI UI.
use anyhow::Result;
use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        supports_keyboard_enhancement,
    },
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enters raw mode and the alternate screen.
///
/// Release reporting is switched on where the terminal supports it. The
/// returned guard undoes everything when dropped, including on error paths.
pub fn init() -> Result<(Tui, TerminalGuard)> {
    enable_raw_mode()?;
    let mut guard = TerminalGuard {
        key_release: false,
    };

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    if matches!(supports_keyboard_enhancement(), Ok(true)) {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
        guard.key_release = true;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    Ok((terminal, guard))
}

pub fn restore(key_release: bool) -> Result<()> {
    let mut stdout = io::stdout();
    if key_release {
        execute!(stdout, PopKeyboardEnhancementFlags)?;
    }
    execute!(stdout, LeaveAlternateScreen, crossterm::cursor::Show)?;
    disable_raw_mode()?;
    Ok(())
}

pub struct TerminalGuard {
    key_release: bool,
}

impl TerminalGuard {
    /// Whether the terminal reports key release events.
    pub fn reports_key_release(&self) -> bool {
        self.key_release
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = restore(self.key_release) {
            tracing::warn!("Failed to restore terminal: {}", e);
        }
    }
}
