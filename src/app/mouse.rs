//! Mouse input handling

use super::App;
use crate::action::Action;
use crate::ui::{layout, modal_area};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

impl App {
    /// Map a mouse event to an action
    ///
    /// With the modal up, a click outside it dismisses it and the wheel
    /// scrolls its body. Otherwise a click on a list row selects that item
    /// and the wheel scrolls the dashboard.
    pub fn action_for_mouse(&self, mouse: MouseEvent) -> Action {
        if self.show_help {
            return match mouse.kind {
                MouseEventKind::Down(_) => Action::ToggleHelp,
                _ => Action::None,
            };
        }

        if self.modal().is_visible() {
            return match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    let area = modal_area(self.viewport, &self.ui);
                    if area.contains(Position::new(mouse.column, mouse.row)) {
                        Action::None
                    } else {
                        Action::CloseModal
                    }
                }
                MouseEventKind::ScrollDown => Action::ScrollDown,
                MouseEventKind::ScrollUp => Action::ScrollUp,
                _ => Action::None,
            };
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                layout::compute(self.viewport, self.page_scroll)
                    .item_at(mouse.column, mouse.row)
                    .map_or(Action::None, Action::SelectItem)
            }
            MouseEventKind::ScrollDown => Action::PageDown,
            MouseEventKind::ScrollUp => Action::PageUp,
            _ => Action::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::tests::test_app;
    use crate::dashboard;
    use crate::event::Event;
    use crate::ui::layout;
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_click_on_item_opens_it() {
        let mut app = test_app();
        // Second row of the compliance list
        let body = layout::inner(layout::compute(app.viewport, 0).sections[1]);
        app.handle_event(click(body.x + 4, body.y + 1));

        assert_eq!(app.focus, 7);
        assert_eq!(
            app.modal().visible().map(|(t, _)| t),
            Some("Chemical Restrictions for Garment Factories")
        );
    }

    #[test]
    fn test_click_outside_lists_does_nothing() {
        let mut app = test_app();
        app.handle_event(click(2, 1));
        assert!(!app.modal().is_visible());
    }

    #[test]
    fn test_click_outside_modal_closes_it() {
        let mut app = test_app();
        app.open_topic("audits").unwrap();

        // Inside the centred modal: stays open
        app.handle_event(click(60, 25));
        assert!(app.modal().is_visible());

        // Top-left corner is outside it
        app.handle_event(click(0, 0));
        assert!(!app.modal().is_visible());
    }

    fn wheel_down(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_wheel_scrolls_modal() {
        let mut app = test_app();
        app.handle_event(Event::Resize(60, 20));
        app.open_topic("tc").unwrap();
        app.handle_event(wheel_down(30, 10));
        assert_eq!(app.modal().scroll(), 1);
        assert_eq!(app.page_scroll, 0);
    }

    #[test]
    fn test_wheel_scrolls_dashboard() {
        let mut app = test_app();
        app.handle_event(Event::Resize(80, 24));
        app.handle_event(wheel_down(10, 10));
        assert_eq!(app.page_scroll, 3);
        assert!(!app.modal().is_visible());
    }

    #[test]
    fn test_click_after_scrolling_hits_shifted_row() {
        let mut app = test_app();
        app.handle_event(Event::Resize(80, 24));
        for _ in 0..20 {
            app.handle_event(wheel_down(10, 10));
        }
        let layout = layout::compute(app.viewport, app.page_scroll);
        assert_eq!(app.page_scroll, layout.max_scroll());

        // Last FAQ row, wherever it sits on screen now
        let last = dashboard::item_count() - 1;
        let row = layout.item_row(last).unwrap() - app.page_scroll;
        let column = layout::inner(layout.sections[3]).x + 2;
        app.handle_event(click(column, row));

        assert_eq!(app.focus, last);
        assert_eq!(
            app.modal().visible().map(|(t, _)| t),
            Some("What happens if a supplier fails to provide TCs? (for Garment Factories)")
        );
    }
}
