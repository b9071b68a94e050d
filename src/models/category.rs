//! Spending categories

use std::fmt;

/// Categories recorded as bare amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmountCategory {
    Taxi,
    Food,
}

impl AmountCategory {
    /// Human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            Self::Taxi => "Taxi",
            Self::Food => "Food",
        }
    }
}

impl fmt::Display for AmountCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Entries of the spending menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuItem {
    Taxi,
    Food,
    SchoolFees,
    Summary,
}

impl MenuItem {
    /// All menu items, in display order
    pub const ALL: [MenuItem; 4] = [
        MenuItem::Taxi,
        MenuItem::Food,
        MenuItem::SchoolFees,
        MenuItem::Summary,
    ];

    /// Label shown on the menu
    pub fn label(&self) -> &'static str {
        match self {
            Self::Taxi => "Taxi",
            Self::Food => "Food",
            Self::SchoolFees => "School Fees",
            Self::Summary => "View Summary",
        }
    }

    /// Shortcut key on the menu
    pub fn shortcut(&self) -> char {
        match self {
            Self::Taxi => 't',
            Self::Food => 'f',
            Self::SchoolFees => 's',
            Self::Summary => 'v',
        }
    }

    /// Look up a menu item by its shortcut key (case-insensitive)
    pub fn from_shortcut(c: char) -> Option<Self> {
        let c = c.to_ascii_lowercase();
        Self::ALL.into_iter().find(|item| item.shortcut() == c)
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
