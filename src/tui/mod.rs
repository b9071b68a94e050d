//! Terminal User Interface module
//!
//! This module renders the session with ratatui and turns key presses into
//! session actions. Text typed into the input screens lives here and is
//! thrown away when the screen changes.

pub mod app;
pub mod event;
pub mod handler;
pub mod keybindings;
pub mod layout;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
