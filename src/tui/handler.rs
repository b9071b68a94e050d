//! Event handler for the TUI
//!
//! Routes key presses to the handler for the active screen, which turns them
//! into session actions or text-box edits.

use anyhow::{anyhow, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::MenuItem;
use crate::navigation::Screen;
use crate::session::Action;

use super::app::App;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => {
            handle_key_event(app, key);
            Ok(())
        }
        Event::Error(message) => Err(anyhow!("terminal event error: {}", message)),
        Event::Tick | Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    app.clear_status();

    match app.screen() {
        Screen::Home => handle_home_key(app, key),
        Screen::Menu => handle_menu_key(app, key),
        Screen::TaxiInput | Screen::FoodInput => handle_input_key(app, key),
        Screen::SchoolFeesInput => handle_school_fees_key(app, key),
        Screen::Summary => handle_summary_key(app, key),
    }
}

fn handle_home_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.dispatch(Action::Start);
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),
        _ => {}
    }
}

fn handle_menu_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.menu_down(),
        KeyCode::Char('k') | KeyCode::Up => app.menu_up(),
        KeyCode::Enter => {
            app.select_highlighted();
        }
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
            app.dispatch(Action::GoBack);
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char(c) => {
            if let Some(item) = MenuItem::from_shortcut(c) {
                app.dispatch(Action::SelectCategory(item));
            }
        }
        _ => {}
    }
}

fn handle_input_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            app.submit();
        }
        KeyCode::Esc => {
            app.dispatch(Action::GoBack);
        }
        _ => edit_focused_input(app, key),
    }
}

fn handle_school_fees_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => app.toggle_fee_field(),
        _ => handle_input_key(app, key),
    }
}

fn handle_summary_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace | KeyCode::Char('b') => {
            app.dispatch(Action::GoBack);
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        _ => {}
    }
}

/// Apply an editing key to whichever text box has focus
fn edit_focused_input(app: &mut App, key: KeyEvent) {
    let Some(input) = app.focused_input() else {
        return;
    };

    match key.code {
        KeyCode::Char(c) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::models::Amount;
    use crate::tui::app::FeeField;

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_home_enter_opens_menu() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        press(&mut app, KeyCode::Enter);

        assert_eq!(app.screen(), Screen::Menu);
    }

    #[test]
    fn test_menu_shortcuts() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.screen(), Screen::SchoolFeesInput);

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('v'));
        assert_eq!(app.screen(), Screen::Summary);
    }

    #[test]
    fn test_menu_cursor_selection() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.screen(), Screen::FoodInput);
    }

    #[test]
    fn test_typing_and_saving_taxi_amounts() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('t'));

        type_text(&mut app, "100");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "250");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.session.totals().taxi(), Amount::new(350));
        assert_eq!(app.amount_input.value(), "");
    }

    #[test]
    fn test_q_is_text_on_input_screens() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('f'));

        type_text(&mut app, "q");
        press(&mut app, KeyCode::Enter);

        assert!(!app.should_quit);
        assert_eq!(app.amount_input.value(), "q");
        assert!(app.session.ledger().food_entries().is_empty());
    }

    #[test]
    fn test_school_fee_form() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('s'));

        type_text(&mut app, "Term 1");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.fee_field, FeeField::Amount);
        type_text(&mut app, "5000");
        press(&mut app, KeyCode::Enter);

        let entries = app.session.ledger().school_fee_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].description(), "Term 1");
        assert_eq!(app.fee_field, FeeField::Description);
    }

    #[test]
    fn test_back_navigation_is_step_wise() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('v'));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen(), Screen::Menu);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen(), Screen::Home);
    }

    #[test]
    fn test_ctrl_c_quits_anywhere() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('t'));

        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );

        assert!(app.should_quit);
    }

    #[test]
    fn test_event_error_is_propagated() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        assert!(handle_event(&mut app, Event::Error("gone".into())).is_err());
        assert!(handle_event(&mut app, Event::Tick).is_ok());
    }
}
