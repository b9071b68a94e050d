//! Labeled school-fee entries

use super::amount::Amount;
use crate::error::InputError;

/// One school-fee record: a description and the amount paid
///
/// The description is stored trimmed and is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledEntry {
    description: String,
    amount: Amount,
}

impl LabeledEntry {
    /// Create an entry, rejecting a blank description
    pub fn new(description: impl Into<String>, amount: Amount) -> Result<Self, InputError> {
        let description = description.into();
        let trimmed = description.trim();
        if trimmed.is_empty() {
            return Err(InputError::EmptyDescription);
        }

        Ok(Self {
            description: trimmed.to_string(),
            amount,
        })
    }

    /// Build an entry from raw form text
    ///
    /// The description is checked first, so a blank description is reported
    /// even when the amount is also invalid.
    pub fn parse(raw_description: &str, raw_amount: &str) -> Result<Self, InputError> {
        if raw_description.trim().is_empty() {
            return Err(InputError::EmptyDescription);
        }
        let amount = Amount::parse(raw_amount)?;
        Self::new(raw_description, amount)
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_description() {
        let entry = LabeledEntry::new("  Term 1 ", Amount::new(5000)).unwrap();
        assert_eq!(entry.description(), "Term 1");
        assert_eq!(entry.amount(), Amount::new(5000));
    }

    #[test]
    fn test_blank_description_rejected() {
        assert_eq!(
            LabeledEntry::new("   ", Amount::new(1000)),
            Err(InputError::EmptyDescription)
        );
    }

    #[test]
    fn test_whitespace_only_description_never_reaches_ledger() {
        use crate::ledger::Ledger;

        for blank in ["", " ", "\t", "\n", " \t\r\n "] {
            assert_eq!(
                LabeledEntry::new(blank, Amount::new(100)),
                Err(InputError::EmptyDescription)
            );
            assert_eq!(
                LabeledEntry::parse(blank, "100"),
                Err(InputError::EmptyDescription)
            );

            let mut ledger = Ledger::new();
            assert_eq!(
                ledger.submit_labeled_entry(blank, "100"),
                Err(InputError::EmptyDescription)
            );
            assert!(ledger.school_fee_entries().is_empty());
            assert!(ledger.totals().grand().is_zero());
        }
    }

    #[test]
    fn test_parse_checks_description_before_amount() {
        assert_eq!(
            LabeledEntry::parse("", "abc"),
            Err(InputError::EmptyDescription)
        );
        assert_eq!(
            LabeledEntry::parse("Term 2", "abc"),
            Err(InputError::InvalidAmount("abc".into()))
        );
    }

    #[test]
    fn test_parse_valid() {
        let entry = LabeledEntry::parse("Uniform", " 1200 ").unwrap();
        assert_eq!(entry.description(), "Uniform");
        assert_eq!(entry.amount().value(), 1200);
    }
}
