//! Core data models for the expenditure tracker
//!
//! This module contains the value types recorded by the ledger: amounts,
//! labeled entries and the spending categories.

pub mod amount;
pub mod category;
pub mod entry;

pub use amount::Amount;
pub use category::{AmountCategory, MenuItem};
pub use entry::LabeledEntry;
