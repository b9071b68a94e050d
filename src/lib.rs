//! Expenditure - in-memory spending tracker
//!
//! This library provides the core of a small expenditure tracker: the user
//! moves between a home screen, a category menu, taxi and food input screens,
//! a labeled school-fee screen and a summary of totals. Nothing is persisted;
//! the ledger lives for as long as the session does.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths, user settings and logging setup
//! - `error`: Custom error types
//! - `models`: Amounts, labeled entries and categories
//! - `ledger`: Append-only entry sequences and derived totals
//! - `navigation`: Screen state machine
//! - `session`: Action dispatch over navigation and ledger
//! - `display`: Formatting helpers
//! - `tui`: Terminal front-end
//!
//! # Example
//!
//! ```rust
//! use expenditure::models::{Amount, MenuItem};
//! use expenditure::session::{Action, Session};
//!
//! let mut session = Session::new();
//! session.dispatch(Action::Start);
//! session.dispatch(Action::SelectCategory(MenuItem::Taxi));
//! session.dispatch(Action::SubmitAmount("100".into()));
//! session.dispatch(Action::SubmitAmount("250".into()));
//!
//! assert_eq!(session.totals().taxi(), Amount::new(350));
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod ledger;
pub mod models;
pub mod navigation;
pub mod session;
pub mod tui;

pub use error::{ExpenditureError, InputError};
pub use ledger::{Ledger, Totals};
pub use navigation::Screen;
pub use session::{Action, Outcome, Session};
