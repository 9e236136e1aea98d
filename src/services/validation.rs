//! Snapshot validation
//!
//! Sign/type and limit invariants are enforced when models are built. This
//! step covers the checks that need the whole snapshot: category membership
//! and duplicate keys. Callers run it before aggregation; the reports assume
//! it has passed.

use std::collections::HashSet;

use tracing::warn;

use crate::error::{BudgetError, BudgetResult};
use crate::models::LedgerSnapshot;

/// How strictly categories are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Every transaction and budget category must be in the known set
    #[default]
    Strict,
    /// Unknown categories are allowed
    Lenient,
}

impl ValidationMode {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            Self::Strict
        } else {
            Self::Lenient
        }
    }
}

/// Collect every problem in the snapshot, in input order
pub fn collect_issues(snapshot: &LedgerSnapshot, mode: ValidationMode) -> Vec<BudgetError> {
    let mut issues = Vec::new();
    let known = &snapshot.categories;

    let mut seen_ids = HashSet::new();
    for txn in &snapshot.transactions {
        if !seen_ids.insert(txn.id()) {
            issues.push(BudgetError::invalid_transaction(
                txn.id().as_str(),
                "duplicate transaction id",
            ));
        }
        if mode == ValidationMode::Strict && !known.contains(txn.category()) {
            issues.push(BudgetError::invalid_transaction(
                txn.id().as_str(),
                format!("category '{}' is not a known category", txn.category()),
            ));
        }
    }

    let mut seen_categories = HashSet::new();
    for budget in &snapshot.budgets {
        if !seen_categories.insert(budget.category()) {
            issues.push(BudgetError::invalid_budget(
                budget.category(),
                "more than one budget for this category",
            ));
        }
        if mode == ValidationMode::Strict && !known.contains(budget.category()) {
            issues.push(BudgetError::invalid_budget(
                budget.category(),
                "not a known category",
            ));
        }
    }

    issues
}

/// Validate the snapshot, failing on the first problem
pub fn validate_snapshot(snapshot: &LedgerSnapshot, mode: ValidationMode) -> BudgetResult<()> {
    let issues = collect_issues(snapshot, mode);
    if let Some(first) = issues.into_iter().next() {
        warn!(error = %first, "snapshot failed validation");
        return Err(first);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, CategorySet, Money, Transaction, TransactionKind};
    use chrono::NaiveDate;

    fn expense(id: &str, category: &str) -> Transaction {
        Transaction::new(
            id,
            NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
            "",
            category,
            Money::from_major(-10),
            TransactionKind::Expense,
        )
        .unwrap()
    }

    fn budget(category: &str) -> Budget {
        Budget::with_limit(category, Money::from_major(100)).unwrap()
    }

    #[test]
    fn test_valid_snapshot() {
        let snapshot = LedgerSnapshot::new(
            CategorySet::defaults(),
            vec![expense("1", "Groceries"), expense("2", "Health")],
            vec![budget("Groceries")],
        );
        assert!(validate_snapshot(&snapshot, ValidationMode::Strict).is_ok());
    }

    #[test]
    fn test_empty_snapshot_is_valid() {
        let snapshot = LedgerSnapshot::default();
        assert!(validate_snapshot(&snapshot, ValidationMode::Strict).is_ok());
    }

    #[test]
    fn test_unknown_category_strict_only() {
        let snapshot = LedgerSnapshot::new(
            CategorySet::defaults(),
            vec![expense("1", "Pets")],
            Vec::new(),
        );

        let err = validate_snapshot(&snapshot, ValidationMode::Strict).unwrap_err();
        assert!(matches!(err, BudgetError::InvalidTransaction { ref id, .. } if id == "1"));
        assert!(err.to_string().contains("'Pets'"));

        assert!(validate_snapshot(&snapshot, ValidationMode::Lenient).is_ok());
    }

    #[test]
    fn test_duplicates_reported() {
        let snapshot = LedgerSnapshot::new(
            CategorySet::defaults(),
            vec![expense("1", "Groceries"), expense("1", "Health")],
            vec![budget("Health"), budget("Health")],
        );

        let issues = collect_issues(&snapshot, ValidationMode::Lenient);
        assert_eq!(issues.len(), 2);
        assert!(matches!(issues[0], BudgetError::InvalidTransaction { .. }));
        assert!(matches!(issues[1], BudgetError::InvalidBudget { .. }));
    }

    #[test]
    fn test_unknown_budget_category() {
        let snapshot = LedgerSnapshot::new(CategorySet::defaults(), Vec::new(), vec![budget("Travel")]);

        let issues = collect_issues(&snapshot, ValidationMode::Strict);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_validation());
        assert!(collect_issues(&snapshot, ValidationMode::Lenient).is_empty());
    }

    #[test]
    fn test_mode_from_flag() {
        assert_eq!(ValidationMode::from_strict(true), ValidationMode::Strict);
        assert_eq!(ValidationMode::from_strict(false), ValidationMode::Lenient);
    }
}
