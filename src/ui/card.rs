//! Metric card widget
//!
//! Renders a headline figure card:
//! - Icon and headline value (accent colour)
//! - Title (bold)
//! - Caption (dim), wrapped to the card width
//! - Optional progress gauge

use crate::config::colors;
use crate::dashboard::MetricCard;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph, Widget, Wrap},
};

pub fn render_metric_card(buf: &mut Buffer, area: Rect, card: &MetricCard) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER))
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    block.render(area, buf);

    let gauge_height = u16::from(card.progress.is_some());
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(gauge_height)])
        .split(inner);

    let content = vec![
        Line::from(vec![
            Span::raw(format!("{} ", card.icon)),
            Span::styled(
                card.headline,
                Style::default().fg(card.accent).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(card.title)
            .style(Style::default().fg(colors::FG).add_modifier(Modifier::BOLD)),
        Line::from(card.caption).style(Style::default().fg(colors::DIM)),
    ];
    Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(chunks[0], buf);

    if let Some(progress) = card.progress {
        Gauge::default()
            .gauge_style(Style::default().fg(card.accent).bg(colors::BORDER))
            .ratio(progress.ratio())
            .label(format!("{:.0}%", progress.percent()))
            .render(chunks[1], buf);
    }
}
