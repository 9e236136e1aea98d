//! Dashboard Report
//!
//! Runs the ledger summary, category report and budget evaluation over one
//! snapshot and bundles the results for display or export.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use super::budget_status::{evaluate_with_source, format_budget_statuses, BudgetStatus, SpendSource};
use super::category_report::{CategoryReport, DEFAULT_TOP_N};
use super::ledger_summary::LedgerSummary;
use super::transaction_filter::recent_transactions;
use crate::config::Settings;
use crate::display::report::{double_separator, separator};
use crate::display::transaction::format_transaction_row;
use crate::models::{LedgerSnapshot, Transaction};

/// Number of recent transactions shown by default
pub const DEFAULT_RECENT_COUNT: usize = 5;

/// Knobs for the combined report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardOptions {
    pub top_n: usize,
    pub recent_count: usize,
    pub spend_source: SpendSource,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            recent_count: DEFAULT_RECENT_COUNT,
            spend_source: SpendSource::default(),
        }
    }
}

impl From<&Settings> for DashboardOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            top_n: settings.top_n,
            recent_count: settings.recent_count,
            spend_source: settings.budget_spend,
        }
    }
}

/// Everything the dashboard shows, computed from one snapshot
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub generated_at: DateTime<Utc>,
    pub summary: LedgerSummary,
    pub categories: CategoryReport,
    pub budgets: Vec<BudgetStatus>,
    pub spend_source: SpendSource,
    pub recent: Vec<Transaction>,
}

impl DashboardReport {
    /// Compute the full report. Never fails on a well-formed snapshot.
    pub fn compute(snapshot: &LedgerSnapshot, options: &DashboardOptions) -> Self {
        let summary = LedgerSummary::compute(&snapshot.transactions);
        let categories =
            CategoryReport::compute(&snapshot.transactions, &snapshot.categories, options.top_n);
        let budgets = evaluate_with_source(&snapshot.budgets, &categories, options.spend_source);
        let recent = recent_transactions(&snapshot.transactions, options.recent_count)
            .into_iter()
            .cloned()
            .collect();

        debug!(
            transactions = snapshot.transactions.len(),
            budgets = budgets.len(),
            "computed dashboard"
        );

        Self {
            generated_at: Utc::now(),
            summary,
            categories,
            budgets,
            spend_source: options.spend_source,
            recent,
        }
    }

    /// Count of budgets past their limit
    pub fn over_budget_count(&self) -> usize {
        self.budgets.iter().filter(|b| b.is_over()).count()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Family Budget Dashboard\n");
        output.push_str(&double_separator(60));
        output.push('\n');
        output.push_str(&format_summary(&self.summary, currency_symbol));
        output.push('\n');

        output.push_str(&self.categories.format_top(currency_symbol));
        output.push('\n');

        output.push_str("Recent Transactions\n");
        output.push_str(&separator(60));
        output.push('\n');
        if self.recent.is_empty() {
            output.push_str("No transactions found.\n");
        }
        for txn in &self.recent {
            output.push_str(&format_transaction_row(txn, currency_symbol));
            output.push('\n');
        }
        output.push('\n');

        match self.over_budget_count() {
            0 => output.push_str("Budgets\n"),
            n => output.push_str(&format!("Budgets ({} over limit)\n", n)),
        }
        output.push_str(&format_budget_statuses(&self.budgets, currency_symbol));

        output
    }
}

/// Format the ledger summary block
pub fn format_summary(summary: &LedgerSummary, currency_symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Balance:          {:>18}\n",
        summary.total_balance.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "Income:           {:>18}\n",
        summary.total_income.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "Expenses:         {:>18}\n",
        summary.total_expense.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "Average expense:  {:>18}\n",
        summary.average_expense.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "Expense count:    {:>18}\n",
        summary.expense_count
    ));
    output
}
