//! Category Report
//!
//! Groups expenses by category, ranks categories by spend and exposes a
//! bounded top-N view alongside the full listing of known categories.

use serde::Serialize;
use std::collections::HashMap;
use std::io::Write;
use tracing::debug;

use crate::display::report::{format_bar, format_percentage, separator};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{CategorySet, Money, Transaction};

/// Default size of the top categories view
pub const DEFAULT_TOP_N: usize = 5;

/// Spending aggregate for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    /// Category label
    pub category: String,
    /// Sum of absolute expense amounts
    pub total_amount: Money,
    /// Share of total expense, 0 when there is no expense at all
    pub percentage_of_total_expense: f64,
    /// Number of expense transactions
    pub transaction_count: usize,
    /// Mean expense, 0 when there are no transactions
    pub average_amount: Money,
}

impl CategoryTotal {
    fn new(category: String, total_amount: Money, transaction_count: usize, total_expense: Money) -> Self {
        Self {
            category,
            total_amount,
            percentage_of_total_expense: total_amount.percentage_of(total_expense),
            transaction_count,
            average_amount: total_amount.divide_rounded(transaction_count),
        }
    }

    /// Whether any expense landed in this category
    pub fn has_spending(&self) -> bool {
        self.transaction_count > 0
    }
}

/// Per-category spending views
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryReport {
    /// Highest-spend categories, at most `top_n` of them
    pub top: Vec<CategoryTotal>,
    /// Every category with spending plus every known category without
    pub all: Vec<CategoryTotal>,
    /// Sum of all expenses
    pub total_expense: Money,
    /// Requested size of the top view
    pub top_n: usize,
}

impl CategoryReport {
    /// Aggregate expenses by category.
    ///
    /// Categories are ranked by total descending. Equal totals keep the order
    /// in which the category first appeared in `transactions`; known
    /// categories without spending follow in `known` order.
    pub fn compute(transactions: &[Transaction], known: &CategorySet, top_n: usize) -> Self {
        // (category, total, count) in first-seen order
        let mut groups: Vec<(String, Money, usize)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut total_expense = Money::zero();

        for txn in transactions.iter().filter(|t| t.is_expense()) {
            let slot = match index.get(txn.category()) {
                Some(&slot) => slot,
                None => {
                    groups.push((txn.category().to_string(), Money::zero(), 0));
                    index.insert(txn.category().to_string(), groups.len() - 1);
                    groups.len() - 1
                }
            };
            groups[slot].1 += txn.magnitude();
            groups[slot].2 += 1;
            total_expense += txn.magnitude();
        }

        for name in known.iter() {
            if !index.contains_key(name) {
                groups.push((name.to_string(), Money::zero(), 0));
            }
        }

        let mut all: Vec<CategoryTotal> = groups
            .into_iter()
            .map(|(category, total, count)| CategoryTotal::new(category, total, count, total_expense))
            .collect();

        // sort_by is stable, which keeps ties in first-seen order
        all.sort_by(|a, b| b.total_amount.cmp(&a.total_amount));

        let top: Vec<CategoryTotal> = all
            .iter()
            .filter(|c| c.has_spending())
            .take(top_n)
            .cloned()
            .collect();

        debug!(
            categories = all.len(),
            top = top.len(),
            total_expense = total_expense.minor(),
            "computed category report"
        );

        Self {
            top,
            all,
            total_expense,
            top_n,
        }
    }

    /// Look up a category in the full view
    pub fn get(&self, category: &str) -> Option<&CategoryTotal> {
        self.all.iter().find(|c| c.category == category)
    }

    /// Total spend for a category, zero if it never appeared
    pub fn spent_in(&self, category: &str) -> Money {
        self.get(category)
            .map(|c| c.total_amount)
            .unwrap_or_default()
    }

    /// Sum of the percentages shown in the top view
    pub fn top_percentage_sum(&self) -> f64 {
        self.top.iter().map(|c| c.percentage_of_total_expense).sum()
    }

    /// Format the top categories for terminal display
    pub fn format_top(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Top {} Expense Categories\n", self.top_n));
        output.push_str(&separator(60));
        output.push('\n');

        if self.top.is_empty() {
            output.push_str("No expenses recorded.\n");
            return output;
        }

        let max = self.top[0].total_amount.minor() as f64;
        for (rank, category) in self.top.iter().enumerate() {
            output.push_str(&format!(
                "{:>2}. {:<20} {:>16}  {}\n",
                rank + 1,
                category.category,
                category.total_amount.format_with_symbol(currency_symbol),
                format_bar(category.total_amount.minor() as f64, max, 12),
            ));
            output.push_str(&format!(
                "    {} of all expenses, avg {}\n",
                format_percentage(category.percentage_of_total_expense),
                category.average_amount.format_with_symbol(currency_symbol),
            ));
        }

        output
    }

    /// Export the full category view to CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> BudgetResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["Category", "Amount", "Percentage", "Count", "Average"])
            .map_err(|e| BudgetError::Export(e.to_string()))?;

        for category in &self.all {
            csv.write_record([
                category.category.clone(),
                category.total_amount.to_string(),
                format!("{:.2}", category.percentage_of_total_expense),
                category.transaction_count.to_string(),
                category.average_amount.to_string(),
            ])
            .map_err(|e| BudgetError::Export(e.to_string()))?;
        }

        csv.flush().map_err(|e| BudgetError::Export(e.to_string()))?;
        Ok(())
    }
}
