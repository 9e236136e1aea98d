//! Category display formatting
//!
//! Renders the per-category view as a table.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::report::format_percentage;
use crate::reports::CategoryTotal;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "Average")]
    average: String,
}

/// Format category totals as a table
pub fn format_category_table(categories: &[CategoryTotal], currency_symbol: &str) -> String {
    if categories.is_empty() {
        return "No categories found.\n".to_string();
    }

    let rows = categories.iter().map(|c| CategoryRow {
        category: c.category.clone(),
        spent: c.total_amount.format_with_symbol(currency_symbol),
        share: format_percentage(c.percentage_of_total_expense),
        count: c.transaction_count,
        average: c.average_amount.format_with_symbol(currency_symbol),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}
