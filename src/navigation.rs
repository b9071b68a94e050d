//! Screen navigation state machine
//!
//! ```text
//!            start               select(item)
//!   Home ───────────▶ Menu ─────────────────────▶ TaxiInput | FoodInput
//!    ▲                 │ ▲                          SchoolFeesInput | Summary
//!    └──── go_back ────┘ └──────── go_back ─────────────┘
//! ```
//!
//! Back navigation is step-wise: every category screen returns to the menu and
//! only the menu returns home. Actions that make no sense on the current
//! screen leave it unchanged.

use std::fmt;

use crate::models::{AmountCategory, MenuItem};

/// The view currently shown to the user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    #[default]
    Home,
    Menu,
    TaxiInput,
    FoodInput,
    SchoolFeesInput,
    Summary,
}

impl Screen {
    /// Screen title
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Welcome to Expenditure App",
            Self::Menu => "Select Spending Category",
            Self::TaxiInput => "Taxi Spending",
            Self::FoodInput => "Food Spending",
            Self::SchoolFeesInput => "School Fees",
            Self::Summary => "Spending Summary",
        }
    }

    /// The amount-only category recorded on this screen, if any
    pub fn amount_category(&self) -> Option<AmountCategory> {
        match self {
            Self::TaxiInput => Some(AmountCategory::Taxi),
            Self::FoodInput => Some(AmountCategory::Food),
            Self::Home | Self::Menu | Self::SchoolFeesInput | Self::Summary => None,
        }
    }
}

impl From<MenuItem> for Screen {
    fn from(item: MenuItem) -> Self {
        match item {
            MenuItem::Taxi => Self::TaxiInput,
            MenuItem::Food => Self::FoodInput,
            MenuItem::SchoolFees => Self::SchoolFeesInput,
            MenuItem::Summary => Self::Summary,
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Home => "home",
            Self::Menu => "menu",
            Self::TaxiInput => "taxi",
            Self::FoodInput => "food",
            Self::SchoolFeesInput => "school_fees",
            Self::Summary => "summary",
        };
        f.write_str(name)
    }
}

/// A screen change produced by a navigation action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Screen,
    pub to: Screen,
}

/// Holds the current screen and applies navigation actions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigator {
    current: Screen,
}

impl Navigator {
    /// Start on the home screen
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    /// Leave the home screen for the menu
    pub fn start(&mut self) -> Option<Transition> {
        match self.current {
            Screen::Home => self.move_to(Screen::Menu),
            _ => None,
        }
    }

    /// Open the screen for a menu item
    pub fn select(&mut self, item: MenuItem) -> Option<Transition> {
        match self.current {
            Screen::Menu => self.move_to(Screen::from(item)),
            _ => None,
        }
    }

    /// Step back one level
    pub fn go_back(&mut self) -> Option<Transition> {
        match self.current {
            Screen::Home => None,
            Screen::Menu => self.move_to(Screen::Home),
            Screen::TaxiInput | Screen::FoodInput | Screen::SchoolFeesInput | Screen::Summary => {
                self.move_to(Screen::Menu)
            }
        }
    }

    fn move_to(&mut self, to: Screen) -> Option<Transition> {
        let from = self.current;
        self.current = to;
        Some(Transition { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(screen: Screen) -> Navigator {
        Navigator { current: screen }
    }

    #[test]
    fn test_starts_at_home() {
        assert_eq!(Navigator::new().current(), Screen::Home);
    }

    #[test]
    fn test_start_opens_menu() {
        let mut nav = Navigator::new();
        let transition = nav.start();
        assert_eq!(
            transition,
            Some(Transition {
                from: Screen::Home,
                to: Screen::Menu
            })
        );
        assert_eq!(nav.current(), Screen::Menu);
    }

    #[test]
    fn test_select_from_menu_opens_matching_screen() {
        let cases = [
            (MenuItem::Taxi, Screen::TaxiInput),
            (MenuItem::Food, Screen::FoodInput),
            (MenuItem::SchoolFees, Screen::SchoolFeesInput),
            (MenuItem::Summary, Screen::Summary),
        ];
        for (item, expected) in cases {
            let mut nav = at(Screen::Menu);
            nav.select(item);
            assert_eq!(nav.current(), expected);
        }
    }

    #[test]
    fn test_back_from_category_screens_returns_to_menu() {
        for screen in [
            Screen::TaxiInput,
            Screen::FoodInput,
            Screen::SchoolFeesInput,
            Screen::Summary,
        ] {
            let mut nav = at(screen);
            nav.go_back();
            assert_eq!(nav.current(), Screen::Menu, "back from {}", screen);
        }
    }

    #[test]
    fn test_back_from_menu_returns_home() {
        let mut nav = at(Screen::Menu);
        nav.go_back();
        assert_eq!(nav.current(), Screen::Home);
    }

    #[test]
    fn test_out_of_place_actions_are_ignored() {
        let mut nav = Navigator::new();
        assert_eq!(nav.go_back(), None);
        assert_eq!(nav.select(MenuItem::Taxi), None);
        assert_eq!(nav.current(), Screen::Home);

        let mut nav = at(Screen::FoodInput);
        assert_eq!(nav.start(), None);
        assert_eq!(nav.select(MenuItem::Summary), None);
        assert_eq!(nav.current(), Screen::FoodInput);
    }

    #[test]
    fn test_amount_category() {
        assert_eq!(Screen::TaxiInput.amount_category(), Some(AmountCategory::Taxi));
        assert_eq!(Screen::FoodInput.amount_category(), Some(AmountCategory::Food));
        assert_eq!(Screen::SchoolFeesInput.amount_category(), None);
        assert_eq!(Screen::Summary.amount_category(), None);
    }
}
