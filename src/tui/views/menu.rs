//! Spending menu

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::models::MenuItem;
use crate::tui::app::App;

/// Render the category menu with the highlighted row
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut items: Vec<ListItem> = MenuItem::ALL
        .iter()
        .map(|item| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("[{}] ", item.shortcut()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(item.label()),
            ]))
        })
        .collect();
    items.push(ListItem::new(Line::from(vec![
        Span::styled("[Esc] ", Style::default().fg(Color::DarkGray)),
        Span::raw("Back to Home"),
    ])));

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(app.menu_index));

    frame.render_stateful_widget(list, area, &mut state);
}
