//! Dashboard geometry
//!
//! Everything above the footer is laid out on a canvas at least as tall as
//! the dashboard needs, and the terminal shows a window of it starting at
//! `scroll`. Rendering and mouse hit-testing both derive rects from
//! `compute`, so a click always lands on the row that was drawn there.

use crate::dashboard::{self, SECTIONS};
use ratatui::layout::{Constraint, Direction, Layout, Margin, Position, Rect};

/// Height of each metric card in rows
pub const CARD_HEIGHT: u16 = 9;

const HEADER_HEIGHT: u16 = 4;

/// Rows the charts keep even when the terminal is short
const MIN_CHART_HEIGHT: u16 = 10;

/// Rows per section list: borders plus one row per item
const fn section_height(items: usize) -> u16 {
    items as u16 + 2
}

const fn max(a: usize, b: usize) -> usize {
    if a > b {
        a
    } else {
        b
    }
}

const TOP_LISTS: u16 = section_height(max(SECTIONS[0].items.len(), SECTIONS[1].items.len()));
const BOTTOM_LISTS: u16 = section_height(max(SECTIONS[2].items.len(), SECTIONS[3].items.len()));

/// Smallest canvas that shows every region in full
pub const CONTENT_HEIGHT: u16 =
    HEADER_HEIGHT + CARD_HEIGHT * 2 + MIN_CHART_HEIGHT + TOP_LISTS + BOTTOM_LISTS;

/// Region rects in canvas coordinates, plus the window onto the canvas
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardLayout {
    pub header: Rect,
    pub cards: [Rect; 6],
    pub bar_chart: Rect,
    pub proportion_chart: Rect,
    pub sections: [Rect; 4],
    /// Whole canvas, origin at (area.x, 0)
    pub canvas: Rect,
    /// Screen rows showing the canvas
    pub view: Rect,
    /// First canvas row shown at `view.y`
    pub scroll: u16,
    /// Footer, pinned to the last screen row
    pub footer: Rect,
}

pub fn compute(area: Rect, scroll: u16) -> DashboardLayout {
    let footer_height = area.height.min(1);
    let view = Rect {
        height: area.height - footer_height,
        ..area
    };
    let footer = Rect {
        y: view.bottom(),
        height: footer_height,
        ..area
    };

    let canvas = Rect::new(area.x, 0, area.width, view.height.max(CONTENT_HEIGHT));
    let scroll = scroll.min(canvas.height - view.height);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),   // Header
            Constraint::Length(CARD_HEIGHT * 2), // Metric cards (3x2)
            Constraint::Fill(1),                 // Charts take the slack
            Constraint::Length(TOP_LISTS),       // Traceability | Compliance
            Constraint::Length(BOTTOM_LISTS),    // Benefits | FAQs
        ])
        .split(canvas);

    let card_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(rows[1]);
    let mut cards = [Rect::default(); 6];
    for (r, row) in card_rows.iter().enumerate() {
        let cols = thirds(*row);
        for (c, rect) in cols.iter().enumerate() {
            cards[r * 3 + c] = *rect;
        }
    }

    let charts = halves(rows[2]);
    let top = halves(rows[3]);
    let bottom = halves(rows[4]);

    DashboardLayout {
        header: rows[0],
        cards,
        bar_chart: charts[0],
        proportion_chart: charts[1],
        sections: [top[0], top[1], bottom[0], bottom[1]],
        canvas,
        view,
        scroll,
        footer,
    }
}

fn halves(area: Rect) -> [Rect; 2] {
    let split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(area);
    [split[0], split[1]]
}

fn thirds(area: Rect) -> [Rect; 3] {
    let split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);
    [split[0], split[1], split[2]]
}

/// Area inside a bordered block
pub fn inner(area: Rect) -> Rect {
    area.inner(Margin {
        horizontal: 1,
        vertical: 1,
    })
}

impl DashboardLayout {
    /// Largest scroll offset that still fills the view
    pub fn max_scroll(&self) -> u16 {
        self.canvas.height - self.view.height
    }

    /// Canvas row drawn at screen `row`, if that row shows the canvas
    pub fn canvas_row(&self, row: u16) -> Option<u16> {
        (row >= self.view.y && row < self.view.bottom()).then(|| row - self.view.y + self.scroll)
    }

    /// Canvas row of the item at a flattened index
    pub fn item_row(&self, index: usize) -> Option<u16> {
        let mut offset = 0;
        for (section, rect) in SECTIONS.iter().zip(self.sections) {
            let len = section.items.len();
            if index < offset + len {
                return Some(inner(rect).y + (index - offset) as u16);
            }
            offset += len;
        }
        None
    }

    /// Scroll offset that keeps canvas `row` on screen, moving as little as possible
    pub fn scroll_to_show(&self, row: u16) -> u16 {
        let height = self.view.height;
        let scroll = if height == 0 {
            self.scroll
        } else if row < self.scroll {
            row
        } else if row >= self.scroll + height {
            row + 1 - height
        } else {
            self.scroll
        };
        scroll.min(self.max_scroll())
    }

    /// Flattened index of the list item drawn at screen (column, row)
    pub fn item_at(&self, column: u16, row: u16) -> Option<usize> {
        let row = self.canvas_row(row)?;
        let pos = Position::new(column, row);
        SECTIONS
            .iter()
            .zip(self.sections)
            .enumerate()
            .find_map(|(i, (section, rect))| {
                let body = inner(rect);
                if !body.contains(pos) {
                    return None;
                }
                let line = usize::from(row - body.y);
                (line < section.items.len()).then(|| dashboard::section_offset(i) + line)
            })
    }
}
