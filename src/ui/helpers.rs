//! UI helper functions

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Truncate a string to `max_chars` characters with ellipsis
pub fn truncate(s: &str, max_chars: usize) -> String {
    if max_chars == 0 {
        return String::new();
    }
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max_chars - 1).collect();
        out.push('…');
        out
    }
}

/// Create a centered rect with percentage-based dimensions
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("COD ≤ 80mg/L", 6), "COD ≤…");
        assert_eq!(truncate("anything", 0), "");
    }

    #[test]
    fn test_centered_rect() {
        let area = centered_rect(60, 60, Rect::new(0, 0, 100, 50));
        assert_eq!(area, Rect::new(20, 10, 60, 30));
    }
}
