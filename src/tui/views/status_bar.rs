//! Status bar view
//!
//! Shows the running grand total and the last status message

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::display::format_amount;
use crate::tui::app::{App, StatusKind};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let totals = app.session.totals();

    let mut spans = vec![
        Span::styled(" Spent: ", Style::default().fg(Color::White)),
        Span::styled(
            format_amount(totals.grand(), app.currency()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    if let Some(ref message) = app.status_message {
        let color = match message.kind {
            StatusKind::Info => Color::Green,
            StatusKind::Error => Color::Red,
        };
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.text.as_str(),
            Style::default().fg(color),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
