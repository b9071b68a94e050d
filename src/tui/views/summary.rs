//! Spending summary

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::display::summary_rows;
use crate::tui::app::App;

/// Render per-category totals and the grand total
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let totals = app.session.totals();
    let summary = summary_rows(&totals, app.currency());
    let last = summary.len().saturating_sub(1);

    let rows: Vec<Row> = summary
        .into_iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let style = if i == last {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Row::new(vec![Cell::from(label), Cell::from(value)]).style(style)
        })
        .collect();

    let widths = [Constraint::Length(14), Constraint::Min(10)];
    let table = Table::new(rows, widths).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(table, area);
}
