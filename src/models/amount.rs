//! Amount type for recorded expenditures
//!
//! Amounts are whole, non-negative currency units. There are no fractional
//! parts and no currency conversion.

use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use crate::error::InputError;

/// A non-negative whole-unit amount of money
///
/// Addition saturates at `u64::MAX` instead of overflowing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(u64);

impl Amount {
    /// Create an amount from whole units
    ///
    /// # Examples
    /// ```
    /// use expenditure::models::Amount;
    /// let fare = Amount::new(250);
    /// assert_eq!(fare.value(), 250);
    /// ```
    pub const fn new(units: u64) -> Self {
        Self(units)
    }

    /// The zero amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in whole units
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Parse an amount from user-entered text
    ///
    /// Surrounding whitespace is ignored and a leading `+` is accepted.
    /// Anything else that is not a plain whole number is rejected,
    /// including negatives and decimals.
    pub fn parse(s: &str) -> Result<Self, InputError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InputError::EmptyAmount);
        }

        trimmed
            .parse::<u64>()
            .map(Self)
            .map_err(|_| InputError::InvalidAmount(trimmed.to_string()))
    }

    /// Format with a currency label, e.g. `Ksh 350`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if symbol.is_empty() {
            self.0.to_string()
        } else {
            format!("{} {}", symbol, self.0)
        }
    }
}

impl FromStr for Amount {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<u64> for Amount {
    fn from(units: u64) -> Self {
        Self(units)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

impl<'a> std::iter::Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
