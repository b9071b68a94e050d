//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::time::Duration;

use crate::config::settings::Settings;

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic info
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application until the user quits
pub fn run_tui(settings: &Settings) -> Result<()> {
    let mut terminal = init_terminal()?;
    let result = event_loop(&mut terminal, settings);
    let restored = restore_terminal();
    prefer_loop_error(result, restored)
}

/// The event-loop error wins; a restore failure is reported only when the
/// loop itself succeeded
fn prefer_loop_error(result: Result<()>, restored: Result<()>) -> Result<()> {
    if let (Err(_), Err(restore_err)) = (&result, &restored) {
        tracing::warn!(error = %restore_err, "failed to restore terminal");
    }
    result.and(restored)
}

fn event_loop(terminal: &mut Tui, settings: &Settings) -> Result<()> {
    let mut app = App::new(settings);
    let events = EventHandler::new(Duration::from_millis(settings.tick_rate_ms));
    tracing::info!("tui started");

    while !app.should_quit {
        terminal.draw(|frame| {
            super::views::render(frame, &app);
        })?;

        match events.next()? {
            Event::Resize(_, _) | Event::Tick => {}
            event => handle_event(&mut app, event)?,
        }
    }

    let totals = app.session.totals();
    tracing::info!(
        entries = app.session.ledger().entry_count(),
        grand_total = %totals.grand(),
        "tui stopped"
    );
    Ok(())
}
