//! School fee screen
//!
//! Description and amount boxes, the labeled entries recorded so far and the
//! school fee total.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::display::{format_amount, truncate};
use crate::tui::app::{App, FeeField};
use crate::tui::layout::InputLayout;

/// Render the school fee form and entry list
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let ledger = app.session.ledger();
    let layout = InputLayout::new(area, 2);

    let form = Block::default()
        .title(" Add school fee ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = form.inner(layout.form);
    frame.render_widget(form, layout.form);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let description = app
        .description_input
        .clone()
        .label("Description")
        .focused(app.fee_field == FeeField::Description);
    let amount = app
        .fee_amount_input
        .clone()
        .label("Amount     ")
        .focused(app.fee_field == FeeField::Amount);
    frame.render_widget(&description, rows[0]);
    frame.render_widget(&amount, rows[1]);

    let name_width = usize::from(layout.entries.width.saturating_sub(4)) / 2;
    let items: Vec<ListItem> = ledger
        .school_fee_entries()
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!(
                        "{:<width$} ",
                        truncate(entry.description(), name_width),
                        width = name_width
                    ),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format_amount(entry.amount(), app.currency())),
            ]))
        })
        .collect();
    let list = List::new(items).block(Block::default().title(" Entries ").borders(Borders::ALL));
    frame.render_widget(list, layout.entries);

    let total = Paragraph::new(format!(
        "Total School Fees: {}",
        format_amount(ledger.school_fee_total(), app.currency())
    ))
    .style(Style::default().add_modifier(Modifier::BOLD))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(total, layout.total);
}
