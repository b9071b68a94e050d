//! Formatting helpers shared by the TUI views
//!
//! Keeps currency labels and column alignment in one place so every screen
//! shows amounts the same way.

use crate::ledger::Totals;
use crate::models::Amount;

/// Format an amount with the configured currency label
pub fn format_amount(amount: Amount, symbol: &str) -> String {
    amount.format_with_symbol(symbol)
}

/// Label/value rows for the summary screen, grand total last
pub fn summary_rows(totals: &Totals, symbol: &str) -> Vec<(&'static str, String)> {
    vec![
        ("Taxi", format_amount(totals.taxi(), symbol)),
        ("Food", format_amount(totals.food(), symbol)),
        ("School Fees", format_amount(totals.school_fees(), symbol)),
        ("Total Spent", format_amount(totals.grand(), symbol)),
    ]
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    let count = s.chars().count();
    if count <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
