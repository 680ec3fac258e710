//! Selectable topic lists
//!
//! One row per item so `layout::DashboardLayout::item_at` can map a click
//! straight back to an item.

use super::helpers::truncate;
use crate::config::colors;
use crate::dashboard::{Section, SectionItem};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// One list row, its summary cut with an ellipsis to fit `width` columns
fn item_line(item: &SectionItem, focused: bool, width: usize) -> Line<'static> {
    let marker = if focused { "▸ " } else { "• " };
    // Questions read better without a colon
    let separator = if item.label.ends_with('?') { " " } else { ": " };
    let used = marker.chars().count() + item.label.chars().count() + separator.chars().count();
    let line = Line::from(vec![
        Span::raw(marker),
        Span::styled(item.label, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(separator),
        Span::raw(truncate(item.summary, width.saturating_sub(used))),
    ]);
    if focused {
        line.style(Style::default().fg(colors::HIGHLIGHT).bg(colors::BORDER))
    } else {
        line.style(Style::default().fg(colors::FG))
    }
}

/// Render one section; `focused` is the item index within this section, if any
pub fn render_section(buf: &mut Buffer, area: Rect, section: &Section, focused: Option<usize>) {
    let active = focused.is_some();
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", section.heading),
            Style::default().fg(colors::FG).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if active {
            colors::HIGHLIGHT
        } else {
            colors::BORDER
        }))
        .border_type(if active {
            BorderType::Double
        } else {
            BorderType::Rounded
        });

    let width = usize::from(block.inner(area).width);
    let lines: Vec<Line> = section
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| item_line(item, focused == Some(i), width))
        .collect();

    Paragraph::new(lines).block(block).render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::SECTIONS;

    #[test]
    fn test_item_line_text() {
        let line = item_line(&SECTIONS[0].items[0], false, 200);
        assert_eq!(
            line.to_string(),
            "• Transaction Certificates (TCs): Verify material flow at each production stage."
        );
    }

    #[test]
    fn test_question_and_focus_marker() {
        let line = item_line(&SECTIONS[3].items[1], true, 200);
        assert_eq!(
            line.to_string(),
            "▸ How long does GRS certification last? Certificates are valid for 1 year and require annual audits for renewal."
        );
        assert_eq!(line.style.fg, Some(colors::HIGHLIGHT));
    }

    #[test]
    fn test_narrow_row_ends_with_ellipsis() {
        let line = item_line(&SECTIONS[0].items[0], false, 45);
        let text = line.to_string();
        assert_eq!(text.chars().count(), 45);
        assert_eq!(text, "• Transaction Certificates (TCs): Verify mat…");
    }

    #[test]
    fn test_label_wider_than_row_drops_summary() {
        let line = item_line(&SECTIONS[0].items[0], false, 10);
        assert!(line.to_string().ends_with(": "));
    }
}
