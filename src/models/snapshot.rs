//! Ledger snapshot
//!
//! The immutable input to every report: known categories, the transaction
//! ledger and the budget definitions for one reporting period.

use serde::{Deserialize, Serialize};

use super::budget::Budget;
use super::category::CategorySet;
use super::transaction::Transaction;

/// A read-only view of the family's finances for one period
///
/// In JSON, every amount (`amount`, `limit`, `spent`) is an integer count of
/// minor units: `-350000` is -3500.00. CSV ingestion instead takes decimal
/// strings in major units, so the same value is written `-3500` there.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    /// Known category labels; empty means "use the configured defaults"
    #[serde(default)]
    pub categories: CategorySet,

    /// All transactions for the period
    #[serde(default)]
    pub transactions: Vec<Transaction>,

    /// Budget definitions
    #[serde(default)]
    pub budgets: Vec<Budget>,
}

impl LedgerSnapshot {
    /// Create a snapshot from parts
    pub fn new(categories: CategorySet, transactions: Vec<Transaction>, budgets: Vec<Budget>) -> Self {
        Self {
            categories,
            transactions,
            budgets,
        }
    }

    /// Fill in the category list when the snapshot did not carry one
    pub fn with_fallback_categories(mut self, fallback: &CategorySet) -> Self {
        if self.categories.is_empty() {
            self.categories = fallback.clone();
        }
        self
    }

    /// Check if the snapshot has no transactions and no budgets
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty() && self.budgets.is_empty()
    }
}
