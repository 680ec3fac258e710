//! Keyboard input handling for all modes

use super::App;
use crate::action::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

impl App {
    /// Map a key press to an action, routing overlays first
    pub fn action_for_key(&self, key: KeyEvent) -> Action {
        // Handle Ctrl+C always
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Action::Quit;
        }

        if self.show_help {
            return Self::key_help(key);
        }
        if self.modal().is_visible() {
            return Self::key_modal(key);
        }
        Self::key_normal(key)
    }

    fn key_help(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('?' | 'q') | KeyCode::Esc | KeyCode::Enter => Action::ToggleHelp,
            _ => Action::None,
        }
    }

    fn key_modal(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q' | 'x' | ' ') => Action::CloseModal,
            KeyCode::Char('j') | KeyCode::Down => Action::ScrollDown,
            KeyCode::Char('k') | KeyCode::Up => Action::ScrollUp,
            _ => Action::None,
        }
    }

    fn key_normal(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => Action::NextItem,
            KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => Action::PreviousItem,
            KeyCode::Char('l') | KeyCode::Right => Action::NextSection,
            KeyCode::Char('h') | KeyCode::Left => Action::PreviousSection,
            KeyCode::PageDown => Action::PageDown,
            KeyCode::PageUp => Action::PageUp,
            KeyCode::Enter | KeyCode::Char(' ') => Action::Select,
            KeyCode::Char('?') => Action::ToggleHelp,
            _ => Action::None,
        }
    }
}
