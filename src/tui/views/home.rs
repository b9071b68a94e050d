//! Home screen

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

/// Render the welcome panel with the single "go to spending" action
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let entries = app.session.ledger().entry_count();
    let subtitle = if entries == 0 {
        "Track taxi, food and school fee spending".to_string()
    } else {
        format!("{} entries recorded this session", entries)
    };

    let lines = vec![
        Line::from(subtitle).style(Style::default().fg(Color::White)),
        Line::from(""),
        Line::from("[ Go to Spending ]").style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    let panel = centered_rect_fixed(46, 5, area);
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, panel);
}
