//! Detail modal state
//!
//! The single piece of dynamic state on the dashboard. Only `open` and
//! `close` change it; rendering reads it through `visible`.

/// Detail modal contents
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open { title: String, body: String },
}

/// Owner of the modal state and its scroll position
#[derive(Debug, Default)]
pub struct ModalController {
    state: ModalState,
    scroll: u16,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `title`/`body`. An empty body is stored but never drawn.
    pub fn open(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.state = ModalState::Open {
            title: title.into(),
            body: body.into(),
        };
        self.scroll = 0;
    }

    pub fn close(&mut self) {
        self.state = ModalState::Closed;
        self.scroll = 0;
    }

    pub fn current_state(&self) -> &ModalState {
        &self.state
    }

    /// Title and body to draw, if any
    pub fn visible(&self) -> Option<(&str, &str)> {
        match &self.state {
            ModalState::Open { title, body } if !body.is_empty() => {
                Some((title.as_str(), body.as_str()))
            }
            _ => None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible().is_some()
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Scroll the body down, never past `max_scroll`
    pub fn scroll_down(&mut self, lines: u16, max_scroll: u16) {
        if self.is_visible() {
            self.scroll = self.scroll.saturating_add(lines).min(max_scroll);
        }
    }

    /// Pull the offset back after the body area grew (terminal resize)
    pub fn clamp_scroll(&mut self, max_scroll: u16) {
        self.scroll = self.scroll.min(max_scroll);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        let modal = ModalController::new();
        assert_eq!(modal.current_state(), &ModalState::Closed);
        assert!(modal.visible().is_none());
    }

    #[test]
    fn test_open_shows_exact_content() {
        let mut modal = ModalController::new();
        modal.open("Audits for Garment Factories", "Third-party audits.");

        assert_eq!(
            modal.visible(),
            Some(("Audits for Garment Factories", "Third-party audits."))
        );
        assert_eq!(
            modal.current_state(),
            &ModalState::Open {
                title: "Audits for Garment Factories".to_string(),
                body: "Third-party audits.".to_string(),
            }
        );
    }

    #[test]
    fn test_open_empty_body_not_visible() {
        let mut modal = ModalController::new();
        modal.open("Title", "");
        assert!(!modal.is_visible());

        modal.open("", "");
        assert!(modal.visible().is_none());
    }

    #[test]
    fn test_open_replaces_previous() {
        let mut modal = ModalController::new();
        modal.open("First", "one");
        modal.open("Second", "two");
        assert_eq!(modal.visible(), Some(("Second", "two")));
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut modal = ModalController::new();
        modal.open("Title", "body");
        modal.close();
        assert_eq!(modal.current_state(), &ModalState::Closed);

        modal.close();
        assert_eq!(modal.current_state(), &ModalState::Closed);
        assert!(!modal.is_visible());
    }

    #[test]
    fn test_scroll_resets_on_open_and_close() {
        let mut modal = ModalController::new();
        modal.scroll_down(3, 10);
        assert_eq!(modal.scroll(), 0, "closed modal does not scroll");

        modal.open("Title", "body");
        modal.scroll_down(3, 10);
        modal.scroll_up(1);
        assert_eq!(modal.scroll(), 2);

        modal.open("Other", "body");
        assert_eq!(modal.scroll(), 0);

        modal.scroll_down(4, 10);
        modal.close();
        assert_eq!(modal.scroll(), 0);
    }

    #[test]
    fn test_scroll_stops_at_max() {
        let mut modal = ModalController::new();
        modal.open("Title", "body");
        for _ in 0..200 {
            modal.scroll_down(1, 7);
        }
        assert_eq!(modal.scroll(), 7);

        // One step back is one line up, not 193
        modal.scroll_up(1);
        assert_eq!(modal.scroll(), 6);

        modal.clamp_scroll(2);
        assert_eq!(modal.scroll(), 2);
        modal.clamp_scroll(5);
        assert_eq!(modal.scroll(), 2);
    }
}
