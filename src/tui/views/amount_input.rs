//! Taxi and food input screens
//!
//! One amount box, the amounts recorded so far and the running total.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::display::format_amount;
use crate::tui::app::App;
use crate::tui::layout::InputLayout;

/// Render the amount form for the current category screen
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(category) = app.screen().amount_category() else {
        return;
    };
    let ledger = app.session.ledger();
    let layout = InputLayout::new(area, 1);

    let form = Block::default()
        .title(" Enter amount ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = form.inner(layout.form);
    frame.render_widget(form, layout.form);

    let input = app.amount_input.clone().focused(true);
    frame.render_widget(&input, inner);

    let items: Vec<ListItem> = ledger
        .entries(category)
        .iter()
        .map(|amount| ListItem::new(format_amount(*amount, app.currency())))
        .collect();
    let list = List::new(items).block(
        Block::default()
            .title(format!(" {} entries ", category))
            .borders(Borders::ALL),
    );
    frame.render_widget(list, layout.entries);

    let total = Paragraph::new(format!(
        "Total: {}",
        format_amount(ledger.total(category), app.currency())
    ))
    .style(Style::default().add_modifier(Modifier::BOLD))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(total, layout.total);
}
