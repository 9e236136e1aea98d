//! CLI commands for reports
//!
//! Each command computes its report from the loaded snapshot and prints it,
//! or writes it to a file when `--output` is given.

use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_category_table, format_transaction_register};
use crate::error::{BudgetError, BudgetResult};
use crate::export::{create_output, export_json, export_yaml, finish, ExportFormat};
use crate::import::csv::parse_date;
use crate::models::{LedgerSnapshot, Transaction, TransactionKind};
use crate::reports::budget_status::{export_budget_statuses_csv, format_budget_statuses};
use crate::reports::dashboard::format_summary;
use crate::reports::{
    evaluate_with_source, CategoryReport, DashboardOptions, DashboardReport, LedgerSummary,
    SpendSource, TransactionFilter,
};

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Show balance, income and expense totals
    Summary,

    /// Rank expense categories by spend
    #[command(alias = "cat")]
    Categories {
        /// Show top N categories (defaults to the configured value)
        #[arg(short, long)]
        top: Option<usize>,

        /// List every category, including those without spending
        #[arg(short, long)]
        all: bool,

        /// Write the report to a file instead of the terminal
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// File format (guessed from the extension when omitted)
        #[arg(short, long, value_enum)]
        format: Option<ExportFormat>,
    },

    /// Show utilization and status of each budget
    Budgets {
        /// Use the spent values stored on the budgets instead of the ledger totals
        #[arg(long)]
        supplied_spend: bool,

        /// Write the report to a file instead of the terminal
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// File format (guessed from the extension when omitted)
        #[arg(short, long, value_enum)]
        format: Option<ExportFormat>,
    },

    /// Show the combined dashboard
    #[command(alias = "dash")]
    Dashboard {
        /// Use the spent values stored on the budgets instead of the ledger totals
        #[arg(long)]
        supplied_spend: bool,

        /// Write the report to a file (json or yaml)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// File format (guessed from the extension when omitted)
        #[arg(short, long, value_enum)]
        format: Option<ExportFormat>,
    },

    /// List transactions, newest first
    #[command(alias = "txn")]
    Transactions {
        /// Case-insensitive description search
        #[arg(short, long)]
        search: Option<String>,

        /// Exact category name
        #[arg(short, long)]
        category: Option<String>,

        /// income or expense
        #[arg(short = 't', long = "type")]
        kind: Option<String>,

        /// Start date (inclusive)
        #[arg(long)]
        from: Option<String>,

        /// End date (inclusive)
        #[arg(long)]
        to: Option<String>,

        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

/// Handle report commands
pub fn handle_report_command(
    snapshot: &LedgerSnapshot,
    settings: &Settings,
    cmd: ReportCommands,
) -> BudgetResult<()> {
    match cmd {
        ReportCommands::Summary => handle_summary(snapshot, settings),
        ReportCommands::Categories {
            top,
            all,
            output,
            format,
        } => handle_categories(snapshot, settings, top, all, output, format),
        ReportCommands::Budgets {
            supplied_spend,
            output,
            format,
        } => handle_budgets(snapshot, settings, supplied_spend, output, format),
        ReportCommands::Dashboard {
            supplied_spend,
            output,
            format,
        } => handle_dashboard(snapshot, settings, supplied_spend, output, format),
        ReportCommands::Transactions {
            search,
            category,
            kind,
            from,
            to,
            limit,
        } => handle_transactions(snapshot, settings, search, category, kind, from, to, limit),
    }
}

fn handle_summary(snapshot: &LedgerSnapshot, settings: &Settings) -> BudgetResult<()> {
    let summary = LedgerSummary::compute(&snapshot.transactions);

    println!("Ledger Summary");
    println!("{}", "=".repeat(60));
    print!("{}", format_summary(&summary, &settings.currency_symbol));
    println!(
        "Transactions:     {:>18}",
        format!("{} in / {} out", summary.income_count, summary.expense_count)
    );

    Ok(())
}

fn handle_categories(
    snapshot: &LedgerSnapshot,
    settings: &Settings,
    top: Option<usize>,
    all: bool,
    output: Option<PathBuf>,
    format: Option<ExportFormat>,
) -> BudgetResult<()> {
    let top_n = top.unwrap_or(settings.top_n);
    let report = CategoryReport::compute(&snapshot.transactions, &snapshot.categories, top_n);

    if let Some(path) = output {
        let mut writer = create_output(&path)?;
        match resolve_format(&path, format) {
            ExportFormat::Csv => report.export_csv(&mut writer)?,
            ExportFormat::Json => export_json(&report, &mut writer)?,
            ExportFormat::Yaml => export_yaml(&report, &mut writer)?,
        }
        finish(writer)?;
        println!("Category report exported to: {}", path.display());
    } else if all {
        println!("{}", format_category_table(&report.all, &settings.currency_symbol));
        println!(
            "Total expenses: {}",
            report.total_expense.format_with_symbol(&settings.currency_symbol)
        );
    } else {
        print!("{}", report.format_top(&settings.currency_symbol));
    }

    Ok(())
}

fn handle_budgets(
    snapshot: &LedgerSnapshot,
    settings: &Settings,
    supplied_spend: bool,
    output: Option<PathBuf>,
    format: Option<ExportFormat>,
) -> BudgetResult<()> {
    let categories =
        CategoryReport::compute(&snapshot.transactions, &snapshot.categories, settings.top_n);
    let statuses = evaluate_with_source(
        &snapshot.budgets,
        &categories,
        spend_source(settings, supplied_spend),
    );

    if let Some(path) = output {
        let mut writer = create_output(&path)?;
        match resolve_format(&path, format) {
            ExportFormat::Csv => export_budget_statuses_csv(&statuses, &mut writer)?,
            ExportFormat::Json => export_json(&statuses, &mut writer)?,
            ExportFormat::Yaml => export_yaml(&statuses, &mut writer)?,
        }
        finish(writer)?;
        println!("Budget report exported to: {}", path.display());
    } else {
        print!(
            "{}",
            format_budget_statuses(&statuses, &settings.currency_symbol)
        );
    }

    Ok(())
}

fn handle_dashboard(
    snapshot: &LedgerSnapshot,
    settings: &Settings,
    supplied_spend: bool,
    output: Option<PathBuf>,
    format: Option<ExportFormat>,
) -> BudgetResult<()> {
    let options = DashboardOptions {
        spend_source: spend_source(settings, supplied_spend),
        ..DashboardOptions::from(settings)
    };
    let report = DashboardReport::compute(snapshot, &options);

    if let Some(path) = output {
        let format = resolve_format(&path, format);
        if format == ExportFormat::Csv {
            return Err(BudgetError::Export(
                "the dashboard exports to json or yaml; use `categories` or `budgets` for CSV"
                    .into(),
            ));
        }

        let mut writer = create_output(&path)?;
        if format == ExportFormat::Yaml {
            export_yaml(&report, &mut writer)?;
        } else {
            export_json(&report, &mut writer)?;
        }
        finish(writer)?;
        println!("Dashboard exported to: {}", path.display());
    } else {
        print!("{}", report.format_terminal(&settings.currency_symbol));
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn handle_transactions(
    snapshot: &LedgerSnapshot,
    settings: &Settings,
    search: Option<String>,
    category: Option<String>,
    kind: Option<String>,
    from: Option<String>,
    to: Option<String>,
    limit: usize,
) -> BudgetResult<()> {
    let mut filter = TransactionFilter::new()
        .with_date_range(parse_date_arg(from, "start")?, parse_date_arg(to, "end")?);

    if let Some(search) = search {
        filter = filter.with_search(search);
    }
    if let Some(category) = category {
        let used = snapshot.transactions.iter().any(|t| t.category() == category);
        if !used && !snapshot.categories.contains(&category) {
            return Err(BudgetError::category_not_found(category));
        }
        filter = filter.with_category(category);
    }
    if let Some(kind) = kind {
        let kind = TransactionKind::parse(&kind).ok_or_else(|| {
            BudgetError::Validation(format!(
                "Invalid transaction type: {}. Use income or expense",
                kind
            ))
        })?;
        filter = filter.with_kind(kind);
    }

    let mut matched: Vec<&Transaction> = filter.apply(&snapshot.transactions);
    matched.sort_by(|a, b| b.date().cmp(&a.date()));
    matched.truncate(limit);

    print!(
        "{}",
        format_transaction_register(&matched, &settings.currency_symbol)
    );

    Ok(())
}

fn spend_source(settings: &Settings, supplied_spend: bool) -> SpendSource {
    if supplied_spend {
        SpendSource::Supplied
    } else {
        settings.budget_spend
    }
}

/// Explicit `--format` wins, then the file extension, then JSON
fn resolve_format(path: &Path, format: Option<ExportFormat>) -> ExportFormat {
    format
        .or_else(|| ExportFormat::from_path(path))
        .unwrap_or(ExportFormat::Json)
}

fn parse_date_arg(value: Option<String>, which: &str) -> BudgetResult<Option<chrono::NaiveDate>> {
    value
        .map(|s| {
            parse_date(&s).ok_or_else(|| {
                BudgetError::Validation(format!(
                    "Invalid {} date format: {}. Use YYYY-MM-DD",
                    which, s
                ))
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, CategorySet, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn snapshot() -> LedgerSnapshot {
        let date = NaiveDate::from_ymd_opt(2025, 10, 22).unwrap();
        LedgerSnapshot::new(
            CategorySet::defaults(),
            vec![
                Transaction::income(date, "Salary", "Income", Money::from_major(85000)).unwrap(),
                Transaction::expense(date, "Supermarket", "Groceries", Money::from_major(3500))
                    .unwrap(),
            ],
            vec![Budget::new("Groceries", Money::from_major(25000), Money::zero()).unwrap()],
        )
    }

    #[test]
    fn test_resolve_format() {
        assert_eq!(
            resolve_format(Path::new("out.yaml"), None),
            ExportFormat::Yaml
        );
        assert_eq!(
            resolve_format(Path::new("out.yaml"), Some(ExportFormat::Csv)),
            ExportFormat::Csv
        );
        assert_eq!(resolve_format(Path::new("out"), None), ExportFormat::Json);
    }

    #[test]
    fn test_spend_source_flag_overrides_settings() {
        let settings = Settings::default();
        assert_eq!(spend_source(&settings, false), SpendSource::Derived);
        assert_eq!(spend_source(&settings, true), SpendSource::Supplied);
    }

    #[test]
    fn test_categories_csv_export() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("categories.csv");
        let cmd = ReportCommands::Categories {
            top: None,
            all: false,
            output: Some(path.clone()),
            format: None,
        };
        handle_report_command(&snapshot(), &Settings::default(), cmd).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("Category,Amount,Percentage,Count,Average"));
        assert!(contents.contains("Groceries,3500.00,100.00,1,3500.00"));
    }

    #[test]
    fn test_dashboard_rejects_csv() {
        let temp_dir = TempDir::new().unwrap();
        let cmd = ReportCommands::Dashboard {
            supplied_spend: false,
            output: Some(temp_dir.path().join("dash.csv")),
            format: None,
        };
        let err = handle_report_command(&snapshot(), &Settings::default(), cmd).unwrap_err();
        assert!(matches!(err, BudgetError::Export(_)));
    }

    #[test]
    fn test_dashboard_yaml_export() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dash.yml");
        let cmd = ReportCommands::Dashboard {
            supplied_spend: false,
            output: Some(path.clone()),
            format: None,
        };
        handle_report_command(&snapshot(), &Settings::default(), cmd).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("spend_source: derived"));
    }

    #[test]
    fn test_bad_transaction_filters() {
        let cmd = ReportCommands::Transactions {
            search: None,
            category: None,
            kind: Some("transfer".into()),
            from: None,
            to: None,
            limit: 20,
        };
        assert!(handle_report_command(&snapshot(), &Settings::default(), cmd).is_err());

        let cmd = ReportCommands::Transactions {
            search: None,
            category: None,
            kind: None,
            from: Some("last week".into()),
            to: None,
            limit: 20,
        };
        assert!(handle_report_command(&snapshot(), &Settings::default(), cmd).is_err());
    }

    #[test]
    fn test_unknown_category_filter() {
        let cmd = ReportCommands::Transactions {
            search: None,
            category: Some("Pets".into()),
            kind: None,
            from: None,
            to: None,
            limit: 20,
        };
        let err = handle_report_command(&snapshot(), &Settings::default(), cmd).unwrap_err();
        assert!(err.is_not_found());
    }
}
