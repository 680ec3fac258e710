//! UI rendering module for the GRS dashboard
//!
//! Screen layout, top to bottom:
//! - Header (title and subtitle)
//! - Six metric cards in a 3x2 grid
//! - Certification tiers bar chart | consumer trust proportion chart
//! - Four selectable topic lists
//! - Footer with key hints
//!
//! Everything but the footer is drawn on an off-screen canvas; the frame
//! shows the rows from `App::page_scroll` down. The detail modal and help
//! overlay are drawn last, over everything else.

mod card;
mod charts;
mod helpers;
pub mod layout;
mod modals;
mod sections;

use crate::app::App;
use crate::config::{colors, UiConfig};
use crate::dashboard::{self, METRIC_CARDS, SECTIONS};
use card::render_metric_card;
use helpers::centered_rect;
use modals::{render_help, render_info_modal};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
    Frame,
};
use sections::render_section;

/// Screen area of the detail modal for a given frame area
pub fn modal_area(area: Rect, ui: &UiConfig) -> Rect {
    let (width, height) = ui.modal_percent();
    centered_rect(width, height, area)
}

/// Largest useful scroll offset for the detail modal showing `title`/`body`
pub fn modal_max_scroll(area: Rect, ui: &UiConfig, title: &str, body: &str) -> u16 {
    modals::max_scroll(modal_area(area, ui), title, body)
}

/// Main render function
pub fn render(f: &mut Frame, app: &App) {
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(colors::BG)), area);

    let layout = layout::compute(area, app.page_scroll);
    let canvas = render_canvas(&layout, app.focus);

    // Copy the visible window of the canvas onto the frame
    let buf = f.buffer_mut();
    for row in 0..layout.view.height {
        let source = row + layout.scroll;
        for x in layout.view.left()..layout.view.right() {
            buf[(x, layout.view.y + row)] = canvas[(x, source)].clone();
        }
    }

    render_footer(f, layout.footer, app);

    if let Some((title, body)) = app.modal().visible() {
        render_info_modal(
            f,
            modal_area(area, &app.ui),
            title,
            body,
            app.modal().scroll(),
        );
    }

    if app.show_help {
        render_help(f);
    }
}

/// Draw every scrolling region at full size
fn render_canvas(layout: &layout::DashboardLayout, focus: usize) -> Buffer {
    let mut canvas = Buffer::empty(layout.canvas);
    Block::default()
        .style(Style::default().bg(colors::BG))
        .render(layout.canvas, &mut canvas);

    render_header(&mut canvas, layout.header);

    for (card, rect) in METRIC_CARDS.iter().zip(layout.cards) {
        render_metric_card(&mut canvas, rect, card);
    }

    charts::render_tiers_chart(&mut canvas, layout.bar_chart);
    charts::render_trust_chart(&mut canvas, layout.proportion_chart);

    for (i, (section, rect)) in SECTIONS.iter().zip(layout.sections).enumerate() {
        let offset = dashboard::section_offset(i);
        let focused = (focus >= offset && focus < offset + section.items.len())
            .then(|| focus - offset);
        render_section(&mut canvas, rect, section, focused);
    }

    canvas
}

fn render_header(buf: &mut Buffer, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled(
                dashboard::TITLE,
                Style::default().fg(colors::FG).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(
                dashboard::TITLE_SUFFIX,
                Style::default()
                    .fg(colors::HIGHLIGHT)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(dashboard::SUBTITLE).style(Style::default().fg(colors::DIM)),
    ];

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::BORDER))
                .border_type(BorderType::Rounded),
        )
        .render(area, buf);
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let hints = if app.modal().is_visible() {
        " Esc:close  j/k:scroll "
    } else {
        " j/k:move  h/l:section  Enter:open  ?:help  q:quit "
    };
    let position = format!(
        "{}/{} ",
        app.focus + 1,
        dashboard::item_count()
    );

    let footer = Line::from(vec![
        Span::styled(hints, Style::default().fg(colors::DIM)),
        Span::raw(" ".repeat(
            (area.width as usize).saturating_sub(hints.chars().count() + position.len()),
        )),
        Span::styled(position, Style::default().fg(colors::HIGHLIGHT)),
    ]);
    f.render_widget(footer, area);
}
