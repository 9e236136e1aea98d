//! Ledger Summary
//!
//! Totals over the whole ledger: balance, income, expense, and the average
//! expense ticket.

use serde::Serialize;
use tracing::debug;

use crate::models::{Money, Transaction, TransactionKind};

/// Top-line totals for a set of transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LedgerSummary {
    /// Sum of all signed amounts
    pub total_balance: Money,
    /// Sum of income amounts (never negative)
    pub total_income: Money,
    /// Sum of absolute expense amounts (never negative)
    pub total_expense: Money,
    /// Number of income transactions
    pub income_count: usize,
    /// Number of expense transactions
    pub expense_count: usize,
    /// Mean expense ticket, zero when there are no expenses
    pub average_expense: Money,
}

impl LedgerSummary {
    /// Compute totals for a transaction set. Empty input yields all zeros.
    pub fn compute(transactions: &[Transaction]) -> Self {
        let mut summary = Self::default();

        for txn in transactions {
            summary.total_balance += txn.amount();
            match txn.kind() {
                TransactionKind::Income => {
                    summary.total_income += txn.amount();
                    summary.income_count += 1;
                }
                TransactionKind::Expense => {
                    summary.total_expense += txn.magnitude();
                    summary.expense_count += 1;
                }
            }
        }

        summary.average_expense = summary.total_expense.divide_rounded(summary.expense_count);

        debug!(
            transactions = transactions.len(),
            income = summary.income_count,
            expense = summary.expense_count,
            "computed ledger summary"
        );

        summary
    }

    /// Income minus expense; always equals `total_balance`
    pub fn net(&self) -> Money {
        self.total_income - self.total_expense
    }

    /// Total number of transactions summarized
    pub fn transaction_count(&self) -> usize {
        self.income_count + self.expense_count
    }
}
