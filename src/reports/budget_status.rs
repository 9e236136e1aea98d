//! Budget Status
//!
//! Compares each budget's spend with its limit and classifies the result.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use tracing::debug;

use super::category_report::CategoryReport;
use crate::display::report::{format_bar, separator};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Budget, Money};

/// Utilization above this share of the limit is a warning
const WARNING_NUMERATOR: i128 = 4;
const WARNING_DENOMINATOR: i128 = 5;

/// Where a budget's spent amount comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SpendSource {
    /// Recompute spend from the ledger's category totals
    #[default]
    Derived,
    /// Trust the `spent` value stored on each budget
    Supplied,
}

/// Classification of a budget's utilization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UtilizationLevel {
    /// At most 80% used
    Under,
    /// More than 80% and at most 100% used
    Warning,
    /// More than 100% used
    Over,
}

impl UtilizationLevel {
    /// Classify `spent` against `limit` with exact integer comparisons.
    ///
    /// `limit` must be positive.
    pub fn classify(spent: Money, limit: Money) -> Self {
        let spent = spent.minor() as i128;
        let limit = limit.minor() as i128;
        if spent > limit {
            Self::Over
        } else if spent * WARNING_DENOMINATOR > limit * WARNING_NUMERATOR {
            Self::Warning
        } else {
            Self::Under
        }
    }

    /// Short marker for terminal output
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Under => " ",
            Self::Warning => "!",
            Self::Over => "*",
        }
    }
}

impl fmt::Display for UtilizationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Under => write!(f, "Under"),
            Self::Warning => write!(f, "Warning"),
            Self::Over => write!(f, "Over"),
        }
    }
}

/// Evaluation of one budget
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetStatus {
    pub category: String,
    pub limit: Money,
    pub spent: Money,
    /// `spent / limit * 100`
    pub utilization_percentage: f64,
    pub status: UtilizationLevel,
    /// `limit - spent`; negative when over budget
    pub remaining: Money,
}

impl BudgetStatus {
    /// Evaluate a single budget
    pub fn evaluate(budget: &Budget) -> Self {
        Self {
            category: budget.category().to_string(),
            limit: budget.limit(),
            spent: budget.spent(),
            utilization_percentage: budget.spent().percentage_of(budget.limit()),
            status: UtilizationLevel::classify(budget.spent(), budget.limit()),
            remaining: budget.limit() - budget.spent(),
        }
    }

    pub fn is_over(&self) -> bool {
        self.status == UtilizationLevel::Over
    }
}

/// Evaluate every budget, preserving input order
pub fn evaluate_budgets(budgets: &[Budget]) -> Vec<BudgetStatus> {
    let statuses: Vec<BudgetStatus> = budgets.iter().map(BudgetStatus::evaluate).collect();
    debug!(
        budgets = statuses.len(),
        over = statuses.iter().filter(|s| s.is_over()).count(),
        "evaluated budgets"
    );
    statuses
}

/// Replace each budget's spent amount with the category total from the ledger
pub fn budgets_with_derived_spend(budgets: &[Budget], categories: &CategoryReport) -> Vec<Budget> {
    budgets
        .iter()
        .map(|b| b.with_spent(categories.spent_in(b.category())))
        .collect()
}

/// Resolve budgets according to `source`, then evaluate them
pub fn evaluate_with_source(
    budgets: &[Budget],
    categories: &CategoryReport,
    source: SpendSource,
) -> Vec<BudgetStatus> {
    match source {
        SpendSource::Supplied => evaluate_budgets(budgets),
        SpendSource::Derived => evaluate_budgets(&budgets_with_derived_spend(budgets, categories)),
    }
}

/// Format budget statuses for terminal display
pub fn format_budget_statuses(statuses: &[BudgetStatus], currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<20} {:>16} {:>16} {:>6}  {:<12} {:>16}\n",
        "Category", "Spent", "Limit", "Used", "", "Remaining"
    ));
    output.push_str(&separator(94));
    output.push('\n');

    if statuses.is_empty() {
        output.push_str("No budgets defined.\n");
        return output;
    }

    for status in statuses {
        output.push_str(&format!(
            "{:<20} {:>16} {:>16} {:>5.0}%  {:<12} {:>16} {}\n",
            status.category,
            status.spent.format_with_symbol(currency_symbol),
            status.limit.format_with_symbol(currency_symbol),
            status.utilization_percentage,
            // The bar is clamped to the limit; the figures are not
            format_bar(status.utilization_percentage.min(100.0), 100.0, 12),
            status.remaining.format_with_symbol(currency_symbol),
            status.status.marker(),
        ));
    }

    output.push_str("\n! = over 80% used   * = over budget\n");
    output
}

/// Export budget statuses to CSV
pub fn export_budget_statuses_csv<W: Write>(statuses: &[BudgetStatus], writer: W) -> BudgetResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["Category", "Limit", "Spent", "Utilization", "Status", "Remaining"])
        .map_err(|e| BudgetError::Export(e.to_string()))?;

    for status in statuses {
        csv.write_record([
            status.category.clone(),
            status.limit.to_string(),
            status.spent.to_string(),
            format!("{:.2}", status.utilization_percentage),
            status.status.to_string().to_lowercase(),
            status.remaining.to_string(),
        ])
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    }

    csv.flush().map_err(|e| BudgetError::Export(e.to_string()))?;
    Ok(())
}
