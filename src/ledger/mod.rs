//! Expenditure ledger
//!
//! Three independent append-only sequences (taxi amounts, food amounts and
//! labeled school-fee entries) plus the totals derived from them. Entries are
//! never removed, edited or reordered.
//!
//! The `submit_*` methods take raw user text. A submit that fails to parse
//! leaves the ledger untouched and hands the [`InputError`] back to the caller,
//! which is free to ignore it.

pub mod totals;

pub use totals::Totals;

use crate::error::InputError;
use crate::models::{Amount, AmountCategory, LabeledEntry};

/// In-memory record of everything spent during a session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    taxi_entries: Vec<Amount>,
    food_entries: Vec<Amount>,
    school_fee_entries: Vec<LabeledEntry>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an already-validated amount to a category
    pub fn add_amount(&mut self, category: AmountCategory, amount: Amount) {
        self.entries_mut(category).push(amount);
    }

    /// Parse `raw` and append it to a category
    pub fn submit_amount(
        &mut self,
        category: AmountCategory,
        raw: &str,
    ) -> Result<Amount, InputError> {
        let amount = Amount::parse(raw)?;
        self.add_amount(category, amount);
        Ok(amount)
    }

    /// Append an already-validated school-fee entry
    pub fn add_labeled_entry(&mut self, entry: LabeledEntry) {
        self.school_fee_entries.push(entry);
    }

    /// Parse a description/amount pair and append it as a school-fee entry
    pub fn submit_labeled_entry(
        &mut self,
        raw_description: &str,
        raw_amount: &str,
    ) -> Result<LabeledEntry, InputError> {
        let entry = LabeledEntry::parse(raw_description, raw_amount)?;
        self.add_labeled_entry(entry.clone());
        Ok(entry)
    }

    /// Amounts recorded for a category, in insertion order
    pub fn entries(&self, category: AmountCategory) -> &[Amount] {
        match category {
            AmountCategory::Taxi => &self.taxi_entries,
            AmountCategory::Food => &self.food_entries,
        }
    }

    fn entries_mut(&mut self, category: AmountCategory) -> &mut Vec<Amount> {
        match category {
            AmountCategory::Taxi => &mut self.taxi_entries,
            AmountCategory::Food => &mut self.food_entries,
        }
    }

    pub fn taxi_entries(&self) -> &[Amount] {
        &self.taxi_entries
    }

    pub fn food_entries(&self) -> &[Amount] {
        &self.food_entries
    }

    pub fn school_fee_entries(&self) -> &[LabeledEntry] {
        &self.school_fee_entries
    }

    /// Sum of one amount-only category
    pub fn total(&self, category: AmountCategory) -> Amount {
        self.entries(category).iter().sum()
    }

    /// Sum of all school-fee entries
    pub fn school_fee_total(&self) -> Amount {
        self.school_fee_entries.iter().map(LabeledEntry::amount).sum()
    }

    /// Recompute every total
    pub fn totals(&self) -> Totals {
        Totals::from_parts(
            self.total(AmountCategory::Taxi),
            self.total(AmountCategory::Food),
            self.school_fee_total(),
        )
    }

    /// Number of entries across all categories
    pub fn entry_count(&self) -> usize {
        self.taxi_entries.len() + self.food_entries.len() + self.school_fee_entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ledger_is_empty() {
        let ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.totals(), Totals::default());
    }

    #[test]
    fn test_taxi_amounts_sum() {
        let mut ledger = Ledger::new();
        ledger.add_amount(AmountCategory::Taxi, Amount::new(100));
        ledger.add_amount(AmountCategory::Taxi, Amount::new(250));

        assert_eq!(ledger.total(AmountCategory::Taxi), Amount::new(350));
        assert_eq!(ledger.totals().taxi(), Amount::new(350));
        assert_eq!(ledger.taxi_entries(), &[Amount::new(100), Amount::new(250)]);
    }

    #[test]
    fn test_categories_are_independent() {
        let mut ledger = Ledger::new();
        ledger.add_amount(AmountCategory::Taxi, Amount::new(100));
        ledger.add_amount(AmountCategory::Food, Amount::new(40));

        assert_eq!(ledger.taxi_entries().len(), 1);
        assert_eq!(ledger.food_entries(), &[Amount::new(40)]);
        assert!(ledger.school_fee_entries().is_empty());
    }

    #[test]
    fn test_invalid_amount_is_rejected_without_mutation() {
        let mut ledger = Ledger::new();

        let result = ledger.submit_amount(AmountCategory::Food, "abc");

        assert_eq!(result, Err(InputError::InvalidAmount("abc".into())));
        assert!(ledger.food_entries().is_empty());
        assert!(ledger.totals().food().is_zero());
    }

    #[test]
    fn test_submit_amount_records_parsed_value() {
        let mut ledger = Ledger::new();
        let recorded = ledger.submit_amount(AmountCategory::Food, " 80 ").unwrap();

        assert_eq!(recorded, Amount::new(80));
        assert_eq!(ledger.food_entries(), &[Amount::new(80)]);
    }

    #[test]
    fn test_school_fees_blank_description_rejected() {
        let mut ledger = Ledger::new();
        ledger.submit_labeled_entry("Term 1", "5000").unwrap();
        let result = ledger.submit_labeled_entry("", "1000");

        assert_eq!(result.unwrap_err(), InputError::EmptyDescription);
        assert_eq!(ledger.school_fee_entries().len(), 1);
        assert_eq!(ledger.school_fee_entries()[0].description(), "Term 1");
        assert_eq!(ledger.school_fee_entries()[0].amount(), Amount::new(5000));
        assert_eq!(ledger.school_fee_total(), Amount::new(5000));
    }

    #[test]
    fn test_school_fees_invalid_amount_rejected() {
        let mut ledger = Ledger::new();
        assert!(ledger.submit_labeled_entry("Term 1", "five").is_err());
        assert!(ledger.school_fee_entries().is_empty());
    }

    #[test]
    fn test_grand_total_matches_parts_through_mixed_operations() {
        let mut ledger = Ledger::new();
        let ops: [(&str, &str); 6] = [
            ("taxi", "100"),
            ("food", "x"),
            ("fees", "300"),
            ("food", "55"),
            ("taxi", "-3"),
            ("fees", ""),
        ];

        for (kind, raw) in ops {
            let _ = match kind {
                "taxi" => ledger.submit_amount(AmountCategory::Taxi, raw).map(|_| ()),
                "food" => ledger.submit_amount(AmountCategory::Food, raw).map(|_| ()),
                _ => ledger.submit_labeled_entry("Books", raw).map(|_| ()),
            };
            let totals = ledger.totals();
            assert_eq!(totals.grand(), totals.taxi() + totals.food() + totals.school_fees());
        }

        assert_eq!(ledger.totals().grand(), Amount::new(455));
        assert_eq!(ledger.entry_count(), 3);
    }
}
