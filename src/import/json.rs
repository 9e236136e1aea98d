//! JSON snapshot loading
//!
//! Reads a ledger snapshot file. Records are parsed loosely first and then
//! converted one by one, so that an invariant violation is reported against
//! the transaction id or budget category that caused it.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::{BudgetError, BudgetResult};
use crate::models::budget::BudgetRecord;
use crate::models::transaction::TransactionRecord;
use crate::models::{Budget, CategorySet, LedgerSnapshot, Transaction};

#[derive(Debug, Deserialize)]
struct SnapshotRecord {
    #[serde(default)]
    categories: Vec<String>,
    #[serde(default)]
    transactions: Vec<TransactionRecord>,
    #[serde(default)]
    budgets: Vec<BudgetRecord>,
}

impl SnapshotRecord {
    fn into_snapshot(self) -> BudgetResult<LedgerSnapshot> {
        let categories = CategorySet::from_names(self.categories)
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        let transactions = self
            .transactions
            .into_iter()
            .map(|record| {
                let id = record.id.to_string();
                Transaction::try_from(record).map_err(|e| e.for_transaction(id))
            })
            .collect::<BudgetResult<Vec<_>>>()?;

        let budgets = self
            .budgets
            .into_iter()
            .map(|record| {
                let category = record.category.clone();
                Budget::try_from(record).map_err(|e| e.for_category(category))
            })
            .collect::<BudgetResult<Vec<_>>>()?;

        Ok(LedgerSnapshot::new(categories, transactions, budgets))
    }
}

/// Parse a snapshot from a JSON string
pub fn parse_snapshot(json: &str) -> BudgetResult<LedgerSnapshot> {
    let record: SnapshotRecord = serde_json::from_str(json)?;
    record.into_snapshot()
}

/// Parse a snapshot from any reader
pub fn read_snapshot<R: Read>(reader: R) -> BudgetResult<LedgerSnapshot> {
    let record: SnapshotRecord = serde_json::from_reader(reader)?;
    record.into_snapshot()
}

/// Load a snapshot file, returning an error if it doesn't exist
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> BudgetResult<LedgerSnapshot> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(BudgetError::ledger_not_found(path.display().to_string()));
    }

    let file = File::open(path)
        .map_err(|e| BudgetError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let snapshot = read_snapshot(BufReader::new(file)).map_err(|e| match e {
        BudgetError::Json(msg) => {
            BudgetError::Json(format!("Failed to parse {}: {}", path.display(), msg))
        }
        other => other,
    })?;

    info!(
        path = %path.display(),
        transactions = snapshot.transactions.len(),
        budgets = snapshot.budgets.len(),
        "loaded ledger snapshot"
    );

    Ok(snapshot)
}
