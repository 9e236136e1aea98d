//! Reports module for family-budget
//!
//! The aggregation engine: ledger totals, category ranking, budget
//! utilization, and the combined dashboard. Every function here is a pure
//! transform over borrowed input.

pub mod budget_status;
pub mod category_report;
pub mod dashboard;
pub mod ledger_summary;
pub mod transaction_filter;

pub use budget_status::{
    budgets_with_derived_spend, evaluate_budgets, evaluate_with_source, BudgetStatus, SpendSource,
    UtilizationLevel,
};
pub use category_report::{CategoryReport, CategoryTotal, DEFAULT_TOP_N};
pub use dashboard::{DashboardOptions, DashboardReport, DEFAULT_RECENT_COUNT};
pub use ledger_summary::LedgerSummary;
pub use transaction_filter::{recent_transactions, TransactionFilter};

use crate::models::{Budget, CategorySet, Transaction};

/// Totals over the whole ledger
pub fn compute_ledger_summary(transactions: &[Transaction]) -> LedgerSummary {
    LedgerSummary::compute(transactions)
}

/// Per-category spend with a `top_n` view and a full view of `known` categories
pub fn compute_category_report(
    transactions: &[Transaction],
    known: &CategorySet,
    top_n: usize,
) -> CategoryReport {
    CategoryReport::compute(transactions, known, top_n)
}

/// Utilization and status of each budget, in input order
pub fn compute_budget_statuses(budgets: &[Budget]) -> Vec<BudgetStatus> {
    evaluate_budgets(budgets)
}
