//! Transaction display formatting
//!
//! Register-style listing of ledger lines.

use super::report::{separator, truncate};
use crate::models::{Money, Transaction};

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction, currency_symbol: &str) -> String {
    let direction = if txn.is_income() { "+" } else { "-" };

    let description = if txn.description().is_empty() {
        "(no description)"
    } else {
        txn.description()
    };

    format!(
        "{} {} {:<24} {:<14} {:>16}",
        direction,
        txn.date().format("%Y-%m-%d"),
        truncate(description, 24),
        truncate(txn.category(), 14),
        txn.amount().format_with_symbol(currency_symbol),
    )
}

/// Format a list of transactions as a register with a running total
pub fn format_transaction_register(transactions: &[&Transaction], currency_symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "  {:10} {:<24} {:<14} {:>16}\n",
        "Date", "Description", "Category", "Amount"
    ));
    output.push_str(&separator(70));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, currency_symbol));
        output.push('\n');
    }

    let net: Money = transactions.iter().map(|t| t.amount()).sum();
    output.push_str(&separator(70));
    output.push('\n');
    output.push_str(&format!(
        "{} transaction(s), net {}\n",
        transactions.len(),
        net.format_with_symbol(currency_symbol)
    ));

    output
}
