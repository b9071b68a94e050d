//! Derived totals

use crate::models::Amount;

/// Totals derived from the ledger
///
/// Never stored; [`Ledger::totals`](super::Ledger::totals) recomputes them on
/// every call. The fields are private so the grand total always equals the
/// sum of the three parts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    taxi: Amount,
    food: Amount,
    school_fees: Amount,
    grand: Amount,
}

impl Totals {
    /// Build totals from the three category sums
    pub fn from_parts(taxi: Amount, food: Amount, school_fees: Amount) -> Self {
        Self {
            taxi,
            food,
            school_fees,
            grand: taxi + food + school_fees,
        }
    }

    pub fn taxi(&self) -> Amount {
        self.taxi
    }

    pub fn food(&self) -> Amount {
        self.food
    }

    pub fn school_fees(&self) -> Amount {
        self.school_fees
    }

    /// Sum of every category
    pub fn grand(&self) -> Amount {
        self.grand
    }
}
