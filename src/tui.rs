//! Terminal setup and management
//!
//! Handles terminal initialization, restoration, and provides RAII guards
//! for safe cleanup on exit or panic.

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::{self, stdout, Stdout};

/// Type alias for our terminal backend
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize terminal for TUI mode
///
/// Sets up raw mode and the alternate screen, plus mouse capture when
/// `mouse` is set.
///
/// # Errors
/// Returns error if terminal setup fails (e.g., not a TTY).
pub fn init(mouse: bool) -> io::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Restore terminal to normal state
///
/// Disables raw mode, exits alternate screen, and disables mouse capture.
/// Safe to call multiple times.
pub fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

/// RAII guard that restores terminal state on drop
///
/// Keeps the user's shell usable even if rendering panics.
pub struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore();
    }
}
