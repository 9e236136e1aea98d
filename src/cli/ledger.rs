//! Ledger loading and validation commands
//!
//! Resolves which snapshot the reports run over and checks it before any
//! aggregation happens.

use std::path::{Path, PathBuf};

use clap::Args;
use tracing::debug;

use crate::config::{BudgetPaths, Settings};
use crate::error::{BudgetError, BudgetResult};
use crate::import::{load_snapshot, load_transactions};
use crate::models::LedgerSnapshot;
use crate::services::{collect_issues, validate_snapshot, ValidationMode};

/// Where the snapshot comes from
#[derive(Args, Debug, Clone, Default)]
pub struct LedgerArgs {
    /// Ledger snapshot file (JSON). Defaults to ledger.json in the data directory
    #[arg(long, global = true, value_name = "FILE")]
    pub ledger: Option<PathBuf>,

    /// Additional transactions from a CSV file
    #[arg(long, global = true, value_name = "FILE")]
    pub csv: Option<PathBuf>,
}

/// Load the snapshot named by `args`.
///
/// An explicit `--ledger` must exist. The default ledger file may be absent
/// when `--csv` supplies the transactions instead.
pub fn load_ledger(
    paths: &BudgetPaths,
    settings: &Settings,
    args: &LedgerArgs,
) -> BudgetResult<LedgerSnapshot> {
    let mut snapshot = match (&args.ledger, &args.csv) {
        (Some(path), _) => load_snapshot(path)?,
        (None, csv) => {
            let default_path = paths.ledger_file();
            if default_path.exists() {
                load_snapshot(&default_path)?
            } else if csv.is_some() {
                debug!(path = %default_path.display(), "no default ledger, using CSV only");
                LedgerSnapshot::default()
            } else {
                return Err(BudgetError::ledger_not_found(
                    default_path.display().to_string(),
                ));
            }
        }
    };

    if let Some(csv_path) = &args.csv {
        snapshot.transactions.extend(load_transactions(csv_path)?);
    }

    Ok(snapshot.with_fallback_categories(&settings.categories))
}

/// Load the snapshot and run the configured validation over it
pub fn load_validated_ledger(
    paths: &BudgetPaths,
    settings: &Settings,
    args: &LedgerArgs,
) -> BudgetResult<LedgerSnapshot> {
    let snapshot = load_ledger(paths, settings, args)?;
    validate_snapshot(&snapshot, ValidationMode::from_strict(settings.strict_categories))?;
    Ok(snapshot)
}

/// Report every problem in the snapshot instead of stopping at the first
pub fn handle_validate_command(
    snapshot: &LedgerSnapshot,
    settings: &Settings,
    lenient: bool,
) -> BudgetResult<()> {
    let mode = if lenient {
        ValidationMode::Lenient
    } else {
        ValidationMode::from_strict(settings.strict_categories)
    };

    let issues = collect_issues(snapshot, mode);
    if issues.is_empty() {
        println!(
            "Ledger is valid: {} transaction(s), {} budget(s), {} known categories",
            snapshot.transactions.len(),
            snapshot.budgets.len(),
            snapshot.categories.len()
        );
        return Ok(());
    }

    println!("Found {} issue(s):", issues.len());
    for issue in &issues {
        println!("  - {}", issue);
    }

    Err(BudgetError::Validation(format!(
        "ledger has {} issue(s)",
        issues.len()
    )))
}

/// Show paths and effective settings, optionally writing the defaults to disk
pub fn handle_config_command(
    paths: &BudgetPaths,
    settings: &Settings,
    init: bool,
) -> BudgetResult<()> {
    if init {
        settings.save(paths)?;
        println!("Settings written to: {}", paths.settings_file().display());
        println!();
    }

    println!("Family Budget Configuration");
    println!("===========================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Settings file:  {}", describe(&paths.settings_file()));
    println!("Ledger file:    {}", describe(&paths.ledger_file()));
    println!();
    println!("Settings:");
    println!("  Currency symbol:   {}", settings.currency_symbol);
    println!("  Top categories:    {}", settings.top_n);
    println!("  Recent count:      {}", settings.recent_count);
    println!("  Strict categories: {}", settings.strict_categories);
    println!("  Budget spend:      {:?}", settings.budget_spend);
    println!(
        "  Categories:        {}",
        settings.categories.iter().collect::<Vec<_>>().join(", ")
    );

    Ok(())
}

fn describe(path: &Path) -> String {
    if path.exists() {
        path.display().to_string()
    } else {
        format!("{} (not found)", path.display())
    }
}
