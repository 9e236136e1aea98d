//! CSV transaction loading
//!
//! Reads transactions from a CSV file with the header
//! `id,date,description,category,amount,type`. `id` and `type` may be left
//! blank: a missing id is generated and a missing type is taken from the
//! sign of the amount.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use tracing::info;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Money, Transaction, TransactionId, TransactionKind};

/// Date formats accepted in the `date` column, tried in order
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d.%m.%Y", "%m/%d/%Y"];

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(default)]
    id: Option<String>,
    date: String,
    #[serde(default)]
    description: Option<String>,
    category: String,
    amount: String,
    #[serde(rename = "type", default)]
    kind: Option<String>,
}

/// Parse a date in any of the accepted formats
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s.trim(), fmt).ok())
}

fn row_to_transaction(row: CsvRow, line: u64) -> BudgetResult<Transaction> {
    let id = match row.id {
        Some(id) if !id.trim().is_empty() => TransactionId::new(id.trim()),
        _ => TransactionId::generate(),
    };

    let date = parse_date(&row.date)
        .ok_or_else(|| BudgetError::Csv(format!("line {}: invalid date '{}'", line, row.date)))?;

    let amount = Money::parse(&row.amount)
        .map_err(|e| BudgetError::Csv(format!("line {}: {}", line, e)))?;

    let kind = match row.kind.as_deref().map(str::trim) {
        Some(tag) if !tag.is_empty() => TransactionKind::parse(tag).ok_or_else(|| {
            BudgetError::Csv(format!("line {}: unknown transaction type '{}'", line, tag))
        })?,
        _ => TransactionKind::from_amount(amount)
            .ok_or_else(|| id_error(&id, "Transaction amount cannot be zero"))?,
    };

    Transaction::new(
        id.clone(),
        date,
        row.description.unwrap_or_default(),
        row.category,
        amount,
        kind,
    )
    .map_err(|e| e.for_transaction(id.as_str()))
}

fn id_error(id: &TransactionId, reason: &str) -> BudgetError {
    BudgetError::invalid_transaction(id.as_str(), reason)
}

/// Read transactions from any CSV source
pub fn read_transactions<R: Read>(reader: R) -> BudgetResult<Vec<Transaction>> {
    let mut csv = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut transactions = Vec::new();
    for (index, result) in csv.deserialize::<CsvRow>().enumerate() {
        // header is line 1
        let line = index as u64 + 2;
        let row = result.map_err(|e| BudgetError::Csv(format!("line {}: {}", line, e)))?;
        transactions.push(row_to_transaction(row, line)?);
    }

    Ok(transactions)
}

/// Load transactions from a CSV file
pub fn load_transactions<P: AsRef<Path>>(path: P) -> BudgetResult<Vec<Transaction>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(BudgetError::ledger_not_found(path.display().to_string()));
    }

    let file = std::fs::File::open(path)
        .map_err(|e| BudgetError::Io(format!("Failed to open {}: {}", path.display(), e)))?;
    let transactions = read_transactions(file)?;

    info!(
        path = %path.display(),
        transactions = transactions.len(),
        "loaded transactions from CSV"
    );

    Ok(transactions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_transactions() {
        let data = "\
id,date,description,category,amount,type
1,2025-10-22,Supermarket,Groceries,-3500,expense
2,2025-10-21,Salary,Income,85000.00,income
";
        let transactions = read_transactions(data.as_bytes()).unwrap();
        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].amount(), Money::from_major(-3500));
        assert!(transactions[1].is_income());
    }

    #[test]
    fn test_blank_id_and_type_are_filled_in() {
        let data = "\
id,date,description,category,amount,type
,20.10.2025,Gas station,Transport,-2800,
";
        let transactions = read_transactions(data.as_bytes()).unwrap();
        assert!(!transactions[0].id().is_blank());
        assert_eq!(transactions[0].kind(), TransactionKind::Expense);
        assert_eq!(
            transactions[0].date(),
            NaiveDate::from_ymd_opt(2025, 10, 20).unwrap()
        );
    }

    #[test]
    fn test_sign_mismatch_is_invalid_transaction() {
        let data = "\
id,date,description,category,amount,type
7,2025-10-22,Refund,Groceries,100,expense
";
        let err = read_transactions(data.as_bytes()).unwrap_err();
        assert!(matches!(err, BudgetError::InvalidTransaction { ref id, .. } if id == "7"));
    }

    #[test]
    fn test_bad_date_reports_line() {
        let data = "\
id,date,description,category,amount,type
1,2025-10-22,A,Groceries,-1,expense
2,yesterday,B,Groceries,-1,expense
";
        let err = read_transactions(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_inexact_amounts_rejected() {
        for amount in ["-10.999", "\"-1,250\""] {
            let data = format!(
                "id,date,description,category,amount,type\n1,2025-10-22,A,Groceries,{},expense\n",
                amount
            );
            let err = read_transactions(data.as_bytes()).unwrap_err();
            assert!(err.to_string().contains("line 2"), "{}", err);
        }
    }

    #[test]
    fn test_unknown_type() {
        let data = "\
id,date,description,category,amount,type
1,2025-10-22,A,Groceries,-1,transfer
";
        let err = read_transactions(data.as_bytes()).unwrap_err();
        assert!(matches!(err, BudgetError::Csv(_)));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("txns.csv");
        std::fs::write(
            &path,
            "id,date,description,category,amount,type\n1,2025-10-18,Pharmacy,Health,-1250,expense\n",
        )
        .unwrap();

        let transactions = load_transactions(&path).unwrap();
        assert_eq!(transactions[0].category(), "Health");
        assert!(load_transactions(temp_dir.path().join("missing.csv"))
            .unwrap_err()
            .is_not_found());
    }
}
