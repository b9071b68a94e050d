//! Session: the single owner of navigation and ledger state
//!
//! The presentation layer turns user gestures into [`Action`]s and feeds them
//! to [`Session::dispatch`]. The returned [`Outcome`] says what happened so the
//! caller can decide whether to clear its input boxes or show a hint.

use tracing::{debug, info};

use crate::error::InputError;
use crate::ledger::{Ledger, Totals};
use crate::models::{Amount, LabeledEntry, MenuItem};
use crate::navigation::{Navigator, Screen, Transition};

/// An inbound user event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Leave the home screen
    Start,
    /// Pick an entry from the spending menu
    SelectCategory(MenuItem),
    /// Step back one screen
    GoBack,
    /// Save an amount typed on the taxi or food screen
    SubmitAmount(String),
    /// Save a school-fee record
    SubmitLabeledEntry { description: String, amount: String },
}

/// Result of dispatching an [`Action`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The active screen changed
    Navigated(Transition),
    /// An entry was appended to the ledger
    Recorded,
    /// The input was rejected and nothing changed
    Rejected(InputError),
    /// The action does not apply to the current screen
    Ignored,
}

impl Outcome {
    pub fn is_recorded(&self) -> bool {
        matches!(self, Self::Recorded)
    }
}

/// Navigation plus ledger for one run of the application
#[derive(Debug, Clone, Default)]
pub struct Session {
    navigator: Navigator,
    ledger: Ledger,
}

impl Session {
    /// Start a fresh session on the home screen with an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.navigator.current()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn totals(&self) -> Totals {
        self.ledger.totals()
    }

    /// Apply one user action
    pub fn dispatch(&mut self, action: Action) -> Outcome {
        let screen = self.screen();
        debug!(?action, %screen, "dispatch");

        let outcome = match action {
            Action::Start => navigated(self.navigator.start()),
            Action::SelectCategory(item) => navigated(self.navigator.select(item)),
            Action::GoBack => navigated(self.navigator.go_back()),
            Action::SubmitAmount(raw) => self.submit_amount(screen, &raw),
            Action::SubmitLabeledEntry {
                description,
                amount,
            } => self.submit_labeled_entry(screen, &description, &amount),
        };

        match &outcome {
            Outcome::Navigated(t) => debug!(from = %t.from, to = %t.to, "screen changed"),
            Outcome::Rejected(err) => debug!(%screen, error = %err, "input rejected"),
            Outcome::Ignored => debug!(%screen, "action ignored"),
            Outcome::Recorded => {}
        }

        outcome
    }

    fn submit_amount(&mut self, screen: Screen, raw: &str) -> Outcome {
        let Some(category) = screen.amount_category() else {
            return Outcome::Ignored;
        };

        match self.ledger.submit_amount(category, raw) {
            Ok(amount) => {
                info!(%category, %amount, total = %self.ledger.total(category), "amount recorded");
                Outcome::Recorded
            }
            Err(err) => Outcome::Rejected(err),
        }
    }

    fn submit_labeled_entry(&mut self, screen: Screen, description: &str, amount: &str) -> Outcome {
        if screen != Screen::SchoolFeesInput {
            return Outcome::Ignored;
        }

        match self.ledger.submit_labeled_entry(description, amount) {
            Ok(entry) => {
                log_school_fee(&entry, self.ledger.school_fee_total());
                Outcome::Recorded
            }
            Err(err) => Outcome::Rejected(err),
        }
    }
}

fn log_school_fee(entry: &LabeledEntry, total: Amount) {
    info!(
        description = entry.description(),
        amount = %entry.amount(),
        %total,
        "school fee recorded"
    );
}

fn navigated(transition: Option<Transition>) -> Outcome {
    transition.map_or(Outcome::Ignored, Outcome::Navigated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_at(item: MenuItem) -> Session {
        let mut session = Session::new();
        session.dispatch(Action::Start);
        session.dispatch(Action::SelectCategory(item));
        session
    }

    fn submit(session: &mut Session, raw: &str) -> Outcome {
        session.dispatch(Action::SubmitAmount(raw.to_string()))
    }

    fn submit_fee(session: &mut Session, description: &str, amount: &str) -> Outcome {
        session.dispatch(Action::SubmitLabeledEntry {
            description: description.to_string(),
            amount: amount.to_string(),
        })
    }

    #[test]
    fn test_new_session() {
        let session = Session::new();
        assert_eq!(session.screen(), Screen::Home);
        assert!(session.ledger().is_empty());
    }

    #[test]
    fn test_full_navigation_round_trip() {
        let mut session = Session::new();

        assert!(matches!(session.dispatch(Action::Start), Outcome::Navigated(_)));
        assert_eq!(session.screen(), Screen::Menu);

        session.dispatch(Action::SelectCategory(MenuItem::Summary));
        assert_eq!(session.screen(), Screen::Summary);

        session.dispatch(Action::GoBack);
        assert_eq!(session.screen(), Screen::Menu);

        session.dispatch(Action::GoBack);
        assert_eq!(session.screen(), Screen::Home);

        assert_eq!(session.dispatch(Action::GoBack), Outcome::Ignored);
    }

    #[test]
    fn test_taxi_submissions_sum() {
        let mut session = session_at(MenuItem::Taxi);

        assert_eq!(submit(&mut session, "100"), Outcome::Recorded);
        assert_eq!(submit(&mut session, "250"), Outcome::Recorded);

        assert_eq!(session.totals().taxi(), Amount::new(350));
        assert!(session.totals().food().is_zero());
    }

    #[test]
    fn test_food_rejects_non_numeric_text() {
        let mut session = session_at(MenuItem::Food);

        let outcome = submit(&mut session, "abc");

        assert_eq!(
            outcome,
            Outcome::Rejected(InputError::InvalidAmount("abc".into()))
        );
        assert!(session.ledger().food_entries().is_empty());
        assert!(session.totals().food().is_zero());
    }

    #[test]
    fn test_amount_routed_by_screen() {
        let mut session = session_at(MenuItem::Food);
        submit(&mut session, "75");

        assert_eq!(session.ledger().food_entries(), &[Amount::new(75)]);
        assert!(session.ledger().taxi_entries().is_empty());
    }

    #[test]
    fn test_amount_ignored_outside_amount_screens() {
        let mut session = session_at(MenuItem::SchoolFees);
        assert_eq!(submit(&mut session, "75"), Outcome::Ignored);

        let mut session = Session::new();
        assert_eq!(submit(&mut session, "75"), Outcome::Ignored);
        assert!(session.ledger().is_empty());
    }

    #[test]
    fn test_school_fees_scenario() {
        let mut session = session_at(MenuItem::SchoolFees);

        assert_eq!(submit_fee(&mut session, "Term 1", "5000"), Outcome::Recorded);
        assert_eq!(
            submit_fee(&mut session, "", "1000"),
            Outcome::Rejected(InputError::EmptyDescription)
        );

        let entries = session.ledger().school_fee_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].description(), "Term 1");
        assert_eq!(entries[0].amount(), Amount::new(5000));
        assert_eq!(session.totals().school_fees(), Amount::new(5000));
    }

    #[test]
    fn test_labeled_entry_ignored_outside_school_fees() {
        let mut session = session_at(MenuItem::Taxi);
        assert_eq!(submit_fee(&mut session, "Term 1", "5000"), Outcome::Ignored);
        assert!(session.ledger().school_fee_entries().is_empty());
    }

    #[test]
    fn test_grand_total_across_categories() {
        let mut session = session_at(MenuItem::Taxi);
        submit(&mut session, "100");
        session.dispatch(Action::GoBack);
        session.dispatch(Action::SelectCategory(MenuItem::Food));
        submit(&mut session, "40");
        submit(&mut session, "oops");
        session.dispatch(Action::GoBack);
        session.dispatch(Action::SelectCategory(MenuItem::SchoolFees));
        submit_fee(&mut session, "Term 1", "5000");

        let totals = session.totals();
        assert_eq!(totals.grand(), Amount::new(5140));
        assert_eq!(totals.grand(), totals.taxi() + totals.food() + totals.school_fees());
    }

    #[test]
    fn test_ledger_survives_navigation() {
        let mut session = session_at(MenuItem::Taxi);
        submit(&mut session, "100");
        session.dispatch(Action::GoBack);
        session.dispatch(Action::GoBack);
        session.dispatch(Action::Start);
        session.dispatch(Action::SelectCategory(MenuItem::Taxi));

        assert_eq!(session.ledger().taxi_entries(), &[Amount::new(100)]);
    }
}
