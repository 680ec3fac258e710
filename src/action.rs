//! Application actions
//!
//! Keyboard and mouse input is translated into an `Action`, then applied
//! by `App::dispatch`, following the message-passing pattern common in
//! ratatui applications.

/// Actions that can be triggered in the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,

    /// Move focus to the next list item (wraps)
    NextItem,

    /// Move focus to the previous list item (wraps)
    PreviousItem,

    /// Jump focus to the first item of the next section
    NextSection,

    /// Jump focus to the first item of the previous section
    PreviousSection,

    /// Open the detail modal for the focused item
    Select,

    /// Focus and open the item at this flattened index (mouse click)
    SelectItem(usize),

    /// Dismiss the detail modal
    CloseModal,

    /// Scroll the detail modal body
    ScrollDown,
    ScrollUp,

    /// Scroll the dashboard when it is taller than the terminal
    PageDown,
    PageUp,

    /// Toggle help overlay
    ToggleHelp,

    /// No action (used for unhandled inputs)
    None,
}

impl Action {
    /// Check if this action should trigger a re-render
    pub fn should_render(&self) -> bool {
        !matches!(self, Action::None)
    }
}
