//! Topic detail modal

use crate::config::colors;
use ratatui::{
    prelude::*,
    widgets::{
        Block, BorderType, Borders, Clear, Padding, Paragraph, Scrollbar, ScrollbarOrientation,
        ScrollbarState, Wrap,
    },
    Frame,
};

fn modal_block() -> Block<'static> {
    Block::default()
        .title(" Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::HIGHLIGHT))
        .border_type(BorderType::Double)
        .title_bottom(Line::from(" Esc:close  j/k:scroll ").centered())
        .style(Style::default().bg(colors::BG))
        .padding(Padding::horizontal(1))
}

fn modal_text(title: &str, body: &str) -> Paragraph<'static> {
    let text = vec![
        Line::from(title.to_string()).style(
            Style::default()
                .fg(colors::HEADLINE)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(body.to_string()).style(Style::default().fg(colors::FG)),
    ];
    Paragraph::new(text).wrap(Wrap { trim: true })
}

/// Largest useful scroll offset for `title`/`body` drawn in `area`
pub fn max_scroll(area: Rect, title: &str, body: &str) -> u16 {
    let inner = modal_block().inner(area);
    if inner.width == 0 {
        return 0;
    }
    let total_lines = modal_text(title, body).line_count(inner.width);
    let total_lines = u16::try_from(total_lines).unwrap_or(u16::MAX);
    total_lines.saturating_sub(inner.height)
}

/// Render `title` and `body` in the modal rect, scrolled down `scroll` lines
pub fn render_info_modal(f: &mut Frame, area: Rect, title: &str, body: &str, scroll: u16) {
    let max_scroll = max_scroll(area, title, body);
    let scroll = scroll.min(max_scroll);

    let modal = modal_text(title, body)
        .scroll((scroll, 0))
        .block(modal_block());

    f.render_widget(Clear, area);
    f.render_widget(modal, area);

    render_scrollbar(f, area, max_scroll, scroll);
}

fn render_scrollbar(f: &mut Frame, area: Rect, max_scroll: u16, scroll: u16) {
    if max_scroll > 0 && area.width > 0 {
        let scrollbar_area = Rect {
            x: area.x + area.width - 1,
            y: area.y + 1,
            width: 1,
            height: area.height.saturating_sub(2),
        };
        let mut state = ScrollbarState::new(usize::from(max_scroll)).position(usize::from(scroll));
        f.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .thumb_style(Style::default().fg(colors::HIGHLIGHT))
                .track_style(Style::default().fg(colors::BORDER)),
            scrollbar_area,
            &mut state,
        );
    }
}
