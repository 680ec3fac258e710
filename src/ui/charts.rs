//! Tier bar chart and consumer-trust proportion chart

use crate::config::colors;
use crate::dashboard::{self, ChartPoint};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

const BAR_GAP: u16 = 2;
const MAX_BAR_WIDTH: u16 = 16;

fn chart_block(title: &str) -> Block<'_> {
    Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(colors::FG).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER))
        .border_type(BorderType::Rounded)
}

fn caption(text: &str) -> Paragraph<'_> {
    Paragraph::new(text)
        .style(Style::default().fg(colors::DIM))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
}

/// Widest bar that fits `count` bars with gaps into `width`
pub fn bar_width(width: u16, count: u16) -> u16 {
    if count == 0 {
        return 1;
    }
    let gaps = BAR_GAP * count.saturating_sub(1);
    (width.saturating_sub(gaps) / count).clamp(1, MAX_BAR_WIDTH)
}

/// Columns per slice for a stacked bar of `width` columns; the last slice absorbs rounding
pub fn slice_widths(shares: &[u64], width: u16) -> Vec<u16> {
    if shares.iter().sum::<u64>() == 0 {
        return vec![0; shares.len()];
    }
    let mut widths: Vec<u16> = shares
        .iter()
        .map(|&s| (u64::from(width) * s / 100) as u16)
        .collect();
    let used: u16 = widths.iter().sum();
    if let Some(last) = widths.last_mut() {
        *last += width.saturating_sub(used);
    }
    widths
}

pub fn render_tiers_chart(buf: &mut Buffer, area: Rect) {
    let block = chart_block(dashboard::TIERS_TITLE);
    let inner = block.inner(area);
    block.render(area, buf);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Bars
            Constraint::Length(1), // Legend
            Constraint::Length(2), // Caption
        ])
        .split(inner);

    let bars: Vec<Bar> = dashboard::TIERS
        .iter()
        .map(|p| {
            Bar::default()
                .value(p.value)
                .label(Line::from(p.label))
                .text_value(format!("{}%", p.value))
                .style(Style::default().fg(colors::BAR))
                .value_style(Style::default().fg(colors::BG).bg(colors::BAR))
        })
        .collect();

    let width = bar_width(chunks[0].width, dashboard::TIERS.len() as u16);
    BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(width)
        .bar_gap(BAR_GAP)
        .max(dashboard::TIERS_MAX)
        .render(chunks[0], buf);

    let legend = Line::from(vec![
        Span::styled("■ ", Style::default().fg(colors::BAR)),
        Span::styled(dashboard::TIERS_SERIES_NAME, Style::default().fg(colors::FG)),
    ])
    .centered();
    legend.render(chunks[1], buf);
    caption(dashboard::TIERS_CAPTION).render(chunks[2], buf);
}

fn legend_lines(points: &[ChartPoint]) -> Vec<Line<'static>> {
    points
        .iter()
        .zip(dashboard::shares(points))
        .enumerate()
        .map(|(i, (p, share))| {
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(dashboard::slice_color(i))),
                Span::styled(
                    format!("{}: {}%", p.label, share),
                    Style::default().fg(colors::FG),
                ),
            ])
        })
        .collect()
}

pub fn render_trust_chart(buf: &mut Buffer, area: Rect) {
    let points = &dashboard::CONSUMER_TRUST;
    let block = chart_block(dashboard::TRUST_TITLE);
    let inner = block.inner(area);
    block.render(area, buf);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),                   // Stacked share bar
            Constraint::Length(1),                   // Spacer
            Constraint::Length(points.len() as u16), // Legend
            Constraint::Min(0),                      // Caption
        ])
        .split(inner);

    let widths = slice_widths(&dashboard::shares(points), chunks[0].width);
    let segment: Line = widths
        .iter()
        .enumerate()
        .map(|(i, &w)| {
            Span::styled(
                "█".repeat(usize::from(w)),
                Style::default().fg(dashboard::slice_color(i)),
            )
        })
        .collect::<Vec<_>>()
        .into();
    Paragraph::new(vec![segment.clone(), segment]).render(chunks[0], buf);

    Paragraph::new(legend_lines(points)).render(chunks[2], buf);
    caption(dashboard::TRUST_CAPTION).render(chunks[3], buf);
}
