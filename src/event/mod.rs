//! Terminal input events

pub mod input;

use crossterm::event::{KeyEvent, MouseEvent};

/// Application events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Keyboard input
    Key(KeyEvent),
    /// Mouse click, scroll, or movement
    Mouse(MouseEvent),
    /// Terminal resized to (columns, rows)
    Resize(u16, u16),
}
