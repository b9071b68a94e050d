//! Keybinding definitions
//!
//! Per-screen key hints shown under the body of every screen. The bindings
//! themselves are implemented in the handler; this table only describes them.

use crate::navigation::Screen;

/// A keybinding hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keybinding {
    /// Key as shown to the user
    pub key: &'static str,
    /// Description of what the key does
    pub description: &'static str,
}

const fn kb(key: &'static str, description: &'static str) -> Keybinding {
    Keybinding { key, description }
}

static HOME: &[Keybinding] = &[kb("Enter", "Go to spending"), kb("q", "Quit")];

static MENU: &[Keybinding] = &[
    kb("j/k", "Move"),
    kb("Enter", "Open"),
    kb("t/f/s/v", "Jump"),
    kb("Esc", "Back to home"),
    kb("q", "Quit"),
];

static AMOUNT: &[Keybinding] = &[kb("Enter", "Save"), kb("Esc", "Back"), kb("Ctrl+C", "Quit")];

static SCHOOL_FEES: &[Keybinding] = &[
    kb("Tab", "Next field"),
    kb("Enter", "Add"),
    kb("Esc", "Back"),
    kb("Ctrl+C", "Quit"),
];

static SUMMARY: &[Keybinding] = &[kb("Esc", "Back"), kb("q", "Quit")];

/// Keybindings active on a screen
pub fn bindings_for(screen: Screen) -> &'static [Keybinding] {
    match screen {
        Screen::Home => HOME,
        Screen::Menu => MENU,
        Screen::TaxiInput | Screen::FoodInput => AMOUNT,
        Screen::SchoolFeesInput => SCHOOL_FEES,
        Screen::Summary => SUMMARY,
    }
}

/// Render the hints for a screen as `key:Description` pairs
pub fn hint_line(screen: Screen) -> String {
    bindings_for(screen)
        .iter()
        .map(|b| format!("{}:{}", b.key, b.description))
        .collect::<Vec<_>>()
        .join("  ")
}
