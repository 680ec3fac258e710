//! Application state and logic
//!
//! This module contains the main `App` struct. Keyboard and mouse handling
//! live in sub-modules and translate input into [`Action`]s.
//!
//! The detail modal is private to `App`; it only changes through
//! [`App::open_topic`] and [`App::close_modal`].

mod keyboard;
mod mouse;

use crate::action::Action;
use crate::config::UiConfig;
use crate::content::ContentStore;
use crate::dashboard::{self, SECTIONS};
use crate::errors::Result;
use crate::event::Event;
use crate::modal::{ModalController, ModalState};
use crate::ui::{self, layout};
use ratatui::layout::Rect;

/// Lines moved per modal scroll step
const SCROLL_STEP: u16 = 1;

/// Lines moved per dashboard scroll step
const PAGE_STEP: u16 = 3;

/// Application state and logic
pub struct App {
    content: ContentStore,
    modal: ModalController,
    /// Flattened index of the focused list item
    pub focus: usize,
    /// First dashboard row on screen when the terminal is shorter than the dashboard
    pub page_scroll: u16,
    pub show_help: bool,
    pub should_quit: bool,
    /// Dirty flag: true if UI needs re-render (render-on-change optimization)
    pub needs_render: bool,
    /// Last known frame area, used for mouse hit-testing
    pub viewport: Rect,
    pub ui: UiConfig,
}

impl App {
    pub fn new(content: ContentStore, ui: UiConfig) -> Self {
        Self {
            content,
            modal: ModalController::new(),
            focus: 0,
            page_scroll: 0,
            show_help: false,
            should_quit: false,
            needs_render: true, // Always render first frame
            viewport: Rect::default(),
            ui,
        }
    }

    pub fn modal(&self) -> &ModalController {
        &self.modal
    }

    #[cfg(test)]
    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    /// Handle incoming events
    pub fn handle_event(&mut self, event: Event) {
        let action = match event {
            Event::Key(key) => self.action_for_key(key),
            Event::Mouse(mouse) => self.action_for_mouse(mouse),
            Event::Resize(cols, rows) => {
                self.viewport = Rect::new(0, 0, cols, rows);
                self.page_scroll = layout::compute(self.viewport, self.page_scroll).scroll;
                let max_scroll = self.modal_max_scroll();
                self.modal.clamp_scroll(max_scroll);
                self.needs_render = true;
                Action::None
            }
        };
        self.dispatch(action);
    }

    /// Apply an action to the state
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::NextItem => self.move_focus((self.focus + 1) % dashboard::item_count()),
            Action::PreviousItem => {
                let count = dashboard::item_count();
                self.move_focus((self.focus + count - 1) % count);
            }
            Action::NextSection => {
                let section = (self.focused_section() + 1) % SECTIONS.len();
                self.move_focus(dashboard::section_offset(section));
            }
            Action::PreviousSection => {
                let section = (self.focused_section() + SECTIONS.len() - 1) % SECTIONS.len();
                self.move_focus(dashboard::section_offset(section));
            }
            Action::Select => self.select(self.focus),
            Action::SelectItem(index) => {
                if index < dashboard::item_count() {
                    self.move_focus(index);
                    self.select(index);
                }
            }
            Action::CloseModal => self.close_modal(),
            Action::ScrollDown => {
                let max_scroll = self.modal_max_scroll();
                self.modal.scroll_down(SCROLL_STEP, max_scroll);
            }
            Action::ScrollUp => self.modal.scroll_up(SCROLL_STEP),
            Action::PageDown => {
                let wanted = self.page_scroll.saturating_add(PAGE_STEP);
                self.page_scroll = layout::compute(self.viewport, wanted).scroll;
            }
            Action::PageUp => self.page_scroll = self.page_scroll.saturating_sub(PAGE_STEP),
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::None => {}
        }
        if action.should_render() {
            self.needs_render = true;
        }
    }

    /// Section containing the focused item
    pub fn focused_section(&self) -> usize {
        let mut offset = 0;
        for (i, section) in SECTIONS.iter().enumerate() {
            offset += section.items.len();
            if self.focus < offset {
                return i;
            }
        }
        SECTIONS.len() - 1
    }

    /// Focus `index` and scroll the dashboard just enough to keep its row on screen
    fn move_focus(&mut self, index: usize) {
        self.focus = index;
        let layout = layout::compute(self.viewport, self.page_scroll);
        if let Some(row) = layout.item_row(index) {
            self.page_scroll = layout.scroll_to_show(row);
        }
    }

    /// Scroll limit for the detail modal at the current terminal size
    fn modal_max_scroll(&self) -> u16 {
        self.modal.visible().map_or(0, |(title, body)| {
            ui::modal_max_scroll(self.viewport, &self.ui, title, body)
        })
    }

    /// Open the modal for the list item at `index`
    fn select(&mut self, index: usize) {
        let Some(item) = dashboard::item_at(index) else {
            return;
        };
        if let Err(e) = self.open_topic(item.topic) {
            // Startup coverage check rejects tables that would reach this
            tracing::error!(topic = item.topic, error = %e, "List item points at a missing topic");
        }
    }

    /// Look up `key` and show it in the detail modal
    pub fn open_topic(&mut self, key: &str) -> Result<()> {
        let entry = self.content.lookup(key)?;
        tracing::debug!(topic = key, "Opening detail modal");
        self.modal.open(entry.title.as_str(), entry.body.as_str());
        self.needs_render = true;
        Ok(())
    }

    pub fn close_modal(&mut self) {
        if matches!(self.modal.current_state(), ModalState::Open { .. }) {
            tracing::debug!("Closing detail modal");
        }
        self.modal.close();
        self.needs_render = true;
    }

    /// Called after render to reset dirty flag
    pub fn rendered(&mut self) {
        self.needs_render = false;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::errors::DashboardError;

    pub(crate) fn test_app() -> App {
        let content = ContentStore::builtin().unwrap().clone();
        let mut app = App::new(content, UiConfig::default());
        app.viewport = Rect::new(0, 0, 120, 50);
        app
    }

    #[test]
    fn test_new_app_is_closed() {
        let app = test_app();
        assert_eq!(app.modal().current_state(), &ModalState::Closed);
        assert_eq!(app.focus, 0);
        assert!(app.needs_render);
    }

    #[test]
    fn test_select_transaction_certificates() {
        let mut app = test_app();
        app.dispatch(Action::Select);

        let (title, body) = app.modal().visible().unwrap();
        assert_eq!(title, "Transaction Certificates (TCs) for Garment Factories");
        assert_eq!(
            body,
            "For a garment factory, Transaction Certificates (TCs) are crucial documents \
             that verify the flow of recycled textile materials through each production \
             stage within your facility and between your factory and fabric \
             suppliers/buyers. Every transaction must be accompanied by a TC. TCs must \
             link to valid Scope Certificates (SCs), which authorize your garment factory \
             to produce GRS-certified apparel. Failure to provide TCs at any stage breaks \
             the chain of custody, invalidating your factory's certification."
        );
    }

    #[test]
    fn test_every_item_opens_its_topic() {
        let mut app = test_app();
        for (index, item) in dashboard::items().enumerate() {
            app.dispatch(Action::SelectItem(index));
            let entry = app.content().lookup(item.topic).unwrap().clone();
            assert_eq!(
                app.modal().current_state(),
                &ModalState::Open {
                    title: entry.title,
                    body: entry.body,
                },
                "item {index} ({})",
                item.label
            );
            assert_eq!(app.focus, index);
            app.dispatch(Action::CloseModal);
        }
    }

    #[test]
    fn test_selected_titles_match_lists() {
        let mut app = test_app();
        let expected = [
            (0, "Transaction Certificates (TCs) for Garment Factories"),
            (1, "Scope Certificates (SCs) for Garment Factories"),
            (2, "Record-Keeping for Garment Factories"),
            (3, "Separate Storage for Garment Factories"),
            (4, "Traceability Issue for Garment Factories"),
            (5, "Traceability Solution for Garment Factories"),
            (6, "Wastewater Treatment for Garment Factories"),
            (7, "Chemical Restrictions for Garment Factories"),
            (8, "Energy Efficiency for Garment Factories"),
            (9, "Labor Rights in Garment Factories"),
            (10, "Audits for Garment Factories"),
            (11, "Market Access: Required by Brands (for Garment Factories)"),
            (12, "Market Access: Trade Barrier Avoidance (for Garment Factories)"),
            (13, "Brand Reputation: Consumer Trust (for Garment Factories)"),
            (14, "Brand Reputation: Premium Pricing (for Garment Factories)"),
            (15, "Cost Reduction: Resource Efficiency (for Garment Factories)"),
            (16, "Cost Reduction: Waste Minimization (for Garment Factories)"),
            (17, "Cost Reduction: Government Subsidies (for Garment Factories)"),
            (18, "Can blended materials be used? (for Garment Factories)"),
            (19, "How long does GRS certification last? (for Garment Factories)"),
            (20, "Is GRS certification mandatory? (for Garment Factories)"),
            (
                21,
                "What happens if a supplier fails to provide TCs? (for Garment Factories)",
            ),
        ];
        assert_eq!(expected.len(), dashboard::item_count());
        for (index, title) in expected {
            app.dispatch(Action::SelectItem(index));
            assert_eq!(
                app.modal().visible().map(|(t, _)| t),
                Some(title),
                "item {index}"
            );
            app.dispatch(Action::CloseModal);
        }
    }

    #[test]
    fn test_focus_keeps_row_on_short_screen() {
        let mut app = test_app();
        app.handle_event(Event::Resize(80, 24));
        assert_eq!(app.page_scroll, 0, "first screen shows header and cards");

        // Wrapping back to the last FAQ scrolls it into view
        app.dispatch(Action::PreviousItem);
        let layout = layout::compute(app.viewport, app.page_scroll);
        let row = layout.item_row(app.focus).unwrap();
        assert!(row >= app.page_scroll && row < app.page_scroll + layout.view.height);

        // The first list row is still on screen, so wrapping forward does not scroll
        let scroll = app.page_scroll;
        app.dispatch(Action::NextItem);
        assert_eq!(app.focus, 0);
        assert_eq!(app.page_scroll, scroll);

        // From the very bottom of a tiny screen, the first row lands on the top line
        app.handle_event(Event::Resize(80, 12));
        app.page_scroll = layout::compute(app.viewport, u16::MAX).scroll;
        app.dispatch(Action::SelectItem(0));
        let layout = layout::compute(app.viewport, app.page_scroll);
        assert_eq!(layout.item_row(0), Some(app.page_scroll));
    }

    #[test]
    fn test_modal_scroll_clamped_on_resize() {
        let mut app = test_app();
        app.handle_event(Event::Resize(40, 20));
        app.open_topic("tc").unwrap();
        for _ in 0..50 {
            app.dispatch(Action::ScrollDown);
        }
        assert!(app.modal().scroll() > 0);

        // Enough room for the whole body
        app.handle_event(Event::Resize(200, 60));
        assert_eq!(app.modal().scroll(), 0);
    }

    #[test]
    fn test_close_then_close_again() {
        let mut app = test_app();
        app.dispatch(Action::Select);
        app.dispatch(Action::CloseModal);
        assert_eq!(app.modal().current_state(), &ModalState::Closed);
        app.dispatch(Action::CloseModal);
        assert_eq!(app.modal().current_state(), &ModalState::Closed);
    }

    #[test]
    fn test_open_unknown_topic_keeps_modal_closed() {
        let mut app = test_app();
        let err = app.open_topic("missing").unwrap_err();
        assert!(matches!(err, DashboardError::UnknownTopic(_)));
        assert!(!app.modal().is_visible());
    }

    #[test]
    fn test_out_of_range_selection_ignored() {
        let mut app = test_app();
        app.dispatch(Action::SelectItem(999));
        assert!(!app.modal().is_visible());
        assert_eq!(app.focus, 0);
    }

    #[test]
    fn test_focus_wraps() {
        let mut app = test_app();
        app.dispatch(Action::PreviousItem);
        assert_eq!(app.focus, dashboard::item_count() - 1);
        app.dispatch(Action::NextItem);
        assert_eq!(app.focus, 0);
    }

    #[test]
    fn test_section_jumps() {
        let mut app = test_app();
        app.focus = 3;
        app.dispatch(Action::NextSection);
        assert_eq!(app.focus, 6);
        assert_eq!(app.focused_section(), 1);
        app.dispatch(Action::NextSection);
        app.dispatch(Action::NextSection);
        assert_eq!(app.focus, 18);
        app.dispatch(Action::NextSection);
        assert_eq!(app.focus, 0);
        app.dispatch(Action::PreviousSection);
        assert_eq!(app.focus, 18);
    }

    #[test]
    fn test_rendered_clears_dirty_flag() {
        let mut app = test_app();
        app.rendered();
        assert!(!app.needs_render);
        app.dispatch(Action::None);
        assert!(!app.needs_render);
        app.dispatch(Action::NextItem);
        assert!(app.needs_render);
    }

    #[test]
    fn test_resize_updates_viewport() {
        let mut app = test_app();
        app.handle_event(Event::Resize(90, 30));
        assert_eq!(app.viewport, Rect::new(0, 0, 90, 30));
    }
}
