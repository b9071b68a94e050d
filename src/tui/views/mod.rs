//! TUI Views module
//!
//! One view per screen, plus the shared header, key hints and status bar.

pub mod amount_input;
pub mod home;
pub mod menu;
pub mod school_fees;
pub mod status_bar;
pub mod summary;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::navigation::Screen;

use super::app::App;
use super::keybindings::hint_line;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());
    let screen = app.screen();

    render_header(frame, screen, layout.header);

    match screen {
        Screen::Home => home::render(frame, app, layout.body),
        Screen::Menu => menu::render(frame, app, layout.body),
        Screen::TaxiInput | Screen::FoodInput => amount_input::render(frame, app, layout.body),
        Screen::SchoolFeesInput => school_fees::render(frame, app, layout.body),
        Screen::Summary => summary::render(frame, app, layout.body),
    }

    let hints = Paragraph::new(hint_line(screen)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hints, layout.hints);

    status_bar::render(frame, app, layout.status_bar);
}

/// Render the title block at the top of every screen
fn render_header(frame: &mut Frame, screen: Screen, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let title = Paragraph::new(screen.title())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(block);

    frame.render_widget(title, area);
}
