//! Transaction filtering
//!
//! Narrows the ledger for the transactions listing and picks the most
//! recent entries for the dashboard.

use chrono::NaiveDate;

use crate::models::{Transaction, TransactionKind};

/// Filter options for the transactions listing
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Case-insensitive substring of the description
    pub search: Option<String>,
    /// Exact category label
    pub category: Option<String>,
    /// Income or expense only
    pub kind: Option<TransactionKind>,
    /// Earliest date, inclusive
    pub start_date: Option<NaiveDate>,
    /// Latest date, inclusive
    pub end_date: Option<NaiveDate>,
}

impl TransactionFilter {
    /// Create a filter that matches everything
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_date_range(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    /// Check if a transaction matches this filter
    pub fn matches(&self, txn: &Transaction) -> bool {
        if let Some(start) = self.start_date {
            if txn.date() < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if txn.date() > end {
                return false;
            }
        }

        if let Some(kind) = self.kind {
            if txn.kind() != kind {
                return false;
            }
        }

        if let Some(ref category) = self.category {
            if txn.category() != category {
                return false;
            }
        }

        if let Some(ref search) = self.search {
            let needle = search.trim().to_lowercase();
            if !needle.is_empty() && !txn.description().to_lowercase().contains(&needle) {
                return false;
            }
        }

        true
    }

    /// Keep matching transactions, in input order
    pub fn apply<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        transactions.iter().filter(|t| self.matches(t)).collect()
    }
}

/// The `count` most recent transactions, newest first.
///
/// Ordered by date rather than by position in the ledger, so an unsorted
/// snapshot still shows its latest entries. Transactions on the same date
/// keep their input order.
pub fn recent_transactions(transactions: &[Transaction], count: usize) -> Vec<&Transaction> {
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by(|a, b| b.date().cmp(&a.date()));
    sorted.truncate(count);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn txn(id: &str, day: u32, description: &str, category: &str, major: i64) -> Transaction {
        let kind = if major > 0 {
            TransactionKind::Income
        } else {
            TransactionKind::Expense
        };
        Transaction::new(
            id,
            NaiveDate::from_ymd_opt(2025, 10, day).unwrap(),
            description,
            category,
            Money::from_major(major),
            kind,
        )
        .unwrap()
    }

    fn ledger() -> Vec<Transaction> {
        vec![
            txn("1", 22, "Supermarket run", "Groceries", -3500),
            txn("2", 21, "Salary", "Income", 85000),
            txn("3", 20, "Gas station", "Transport", -2800),
            txn("4", 19, "Restaurant", "Entertainment", -4200),
            txn("5", 18, "Pharmacy", "Health", -1250),
            txn("6", 17, "Utility bills", "Utilities", -5600),
        ]
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let ledger = ledger();
        assert_eq!(TransactionFilter::new().apply(&ledger).len(), ledger.len());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let ledger = ledger();
        let hits = TransactionFilter::new().with_search("SUPER").apply(&ledger);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id().as_str(), "1");
    }

    #[test]
    fn test_category_and_kind() {
        let ledger = ledger();
        let expenses = TransactionFilter::new()
            .with_kind(TransactionKind::Expense)
            .apply(&ledger);
        assert_eq!(expenses.len(), 5);

        let health = TransactionFilter::new().with_category("Health").apply(&ledger);
        assert_eq!(health.len(), 1);

        let none = TransactionFilter::new()
            .with_category("Health")
            .with_kind(TransactionKind::Income)
            .apply(&ledger);
        assert!(none.is_empty());
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let ledger = ledger();
        let hits = TransactionFilter::new()
            .with_date_range(
                NaiveDate::from_ymd_opt(2025, 10, 18),
                NaiveDate::from_ymd_opt(2025, 10, 20),
            )
            .apply(&ledger);
        let ids: Vec<_> = hits.iter().map(|t| t.id().as_str()).collect();
        assert_eq!(ids, vec!["3", "4", "5"]);
    }

    #[test]
    fn test_recent_transactions() {
        let mut ledger = ledger();
        ledger.reverse();
        ledger.push(txn("7", 22, "Bakery", "Groceries", -300));

        let recent = recent_transactions(&ledger, 3);
        let ids: Vec<_> = recent.iter().map(|t| t.id().as_str()).collect();
        assert_eq!(ids, vec!["1", "7", "2"]);

        assert!(recent_transactions(&[], 5).is_empty());
        assert_eq!(recent_transactions(&ledger, 100).len(), ledger.len());
    }
}
