//! Help modal

use crate::config::colors;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::super::helpers::centered_rect;

pub fn render_help(f: &mut Frame) {
    let area = centered_rect(50, 60, f.area());

    let help_text = r"
  Navigation
  j/k, ↓/↑, Tab   Move between topics
  h/l, ←/→        Previous/next section
  PgDn/PgUp       Scroll the dashboard
  Mouse wheel     Scroll the dashboard

  Details
  Enter, Space    Open focused topic
  Click           Open clicked topic
  j/k             Scroll details
  Esc, Enter      Close details

  ?               This help
  q, Esc          Quit (Esc closes details first)
  Ctrl+C          Force quit
";

    let help = Paragraph::new(help_text)
        .style(Style::default().fg(colors::FG))
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::HIGHLIGHT))
                .border_type(ratatui::widgets::BorderType::Double)
                .title_bottom(Line::from(" ?:close ").centered())
                .style(Style::default().bg(colors::BG)),
        );

    f.render_widget(ratatui::widgets::Clear, area);
    f.render_widget(help, area);
}
