//! Application state for the TUI
//!
//! The App struct holds the session plus the short-lived view state the
//! screens need: menu cursor, text boxes and the status message. Text boxes
//! are reset whenever the screen changes.

use crate::config::settings::Settings;
use crate::error::InputError;
use crate::models::MenuItem;
use crate::navigation::Screen;
use crate::session::{Action, Outcome, Session};

use super::widgets::TextInput;

/// Which field on the school-fee screen has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeeField {
    #[default]
    Description,
    Amount,
}

impl FeeField {
    pub fn toggle(self) -> Self {
        match self {
            Self::Description => Self::Amount,
            Self::Amount => Self::Description,
        }
    }
}

/// Severity of the status-bar message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// Message shown in the status bar until the next key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

/// Main application state
pub struct App<'a> {
    /// Navigation and ledger
    pub session: Session,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Highlighted row on the menu
    pub menu_index: usize,

    /// Amount box on the taxi and food screens
    pub amount_input: TextInput,

    /// Description box on the school-fee screen
    pub description_input: TextInput,

    /// Amount box on the school-fee screen
    pub fee_amount_input: TextInput,

    /// Focused field on the school-fee screen
    pub fee_field: FeeField,

    /// Status message to display
    pub status_message: Option<StatusMessage>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            session: Session::new(),
            settings,
            should_quit: false,
            menu_index: 0,
            amount_input: TextInput::new().placeholder("Enter amount"),
            description_input: TextInput::new().placeholder("Description"),
            fee_amount_input: TextInput::new().placeholder("Amount"),
            fee_field: FeeField::default(),
            status_message: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.session.screen()
    }

    /// Currency label from settings
    pub fn currency(&self) -> &str {
        &self.settings.currency_symbol
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Forward an action to the session and update view state from the outcome
    pub fn dispatch(&mut self, action: Action) -> Outcome {
        let outcome = self.session.dispatch(action);
        match &outcome {
            Outcome::Navigated(_) => self.reset_inputs(),
            Outcome::Recorded => {
                self.reset_inputs();
                self.set_status(StatusKind::Info, "Saved");
            }
            Outcome::Rejected(err) => self.report_rejection(err),
            Outcome::Ignored => {}
        }
        outcome
    }

    /// Submit whatever the current input screen holds
    pub fn submit(&mut self) -> Outcome {
        match self.screen() {
            Screen::TaxiInput | Screen::FoodInput => {
                let raw = self.amount_input.value().to_string();
                self.dispatch(Action::SubmitAmount(raw))
            }
            Screen::SchoolFeesInput => {
                let action = Action::SubmitLabeledEntry {
                    description: self.description_input.value().to_string(),
                    amount: self.fee_amount_input.value().to_string(),
                };
                self.dispatch(action)
            }
            Screen::Home | Screen::Menu | Screen::Summary => Outcome::Ignored,
        }
    }

    /// Open the highlighted menu entry
    pub fn select_highlighted(&mut self) -> Outcome {
        let item = MenuItem::ALL[self.menu_index.min(MenuItem::ALL.len() - 1)];
        self.dispatch(Action::SelectCategory(item))
    }

    pub fn menu_up(&mut self) {
        self.menu_index = self.menu_index.saturating_sub(1);
    }

    pub fn menu_down(&mut self) {
        if self.menu_index + 1 < MenuItem::ALL.len() {
            self.menu_index += 1;
        }
    }

    /// The text box that receives typed characters on the current screen
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.screen() {
            Screen::TaxiInput | Screen::FoodInput => Some(&mut self.amount_input),
            Screen::SchoolFeesInput => match self.fee_field {
                FeeField::Description => Some(&mut self.description_input),
                FeeField::Amount => Some(&mut self.fee_amount_input),
            },
            Screen::Home | Screen::Menu | Screen::Summary => None,
        }
    }

    pub fn toggle_fee_field(&mut self) {
        self.fee_field = self.fee_field.toggle();
    }

    fn reset_inputs(&mut self) {
        self.amount_input.clear();
        self.description_input.clear();
        self.fee_amount_input.clear();
        self.fee_field = FeeField::default();
    }

    fn report_rejection(&mut self, err: &InputError) {
        // Move focus to the offending field on the school-fee screen
        if self.screen() == Screen::SchoolFeesInput {
            self.fee_field = match err {
                InputError::EmptyDescription => FeeField::Description,
                InputError::EmptyAmount | InputError::InvalidAmount(_) => FeeField::Amount,
            };
        }
        self.set_status(StatusKind::Error, err.to_string());
    }
}
