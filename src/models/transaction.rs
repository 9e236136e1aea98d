//! Transaction model
//!
//! A transaction is an immutable ledger line. The sign of `amount` and the
//! `type` tag must agree (income is positive, expense is negative); the
//! constructor and deserialization both refuse records that break this, so
//! every `Transaction` value in the program is well-formed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::{Money, MAX_AMOUNT_MINOR};
use crate::error::BudgetError;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in (positive amount)
    Income,
    /// Money going out (negative amount)
    Expense,
}

impl TransactionKind {
    /// The kind implied by the sign of an amount, if it has one
    pub fn from_amount(amount: Money) -> Option<Self> {
        if amount.is_positive() {
            Some(Self::Income)
        } else if amount.is_negative() {
            Some(Self::Expense)
        } else {
            None
        }
    }

    /// Parse "income" / "expense" (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }

    /// Lowercase tag used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// Serialized shape of a transaction, before invariants are checked
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(default = "TransactionId::generate")]
    pub id: TransactionId,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub amount: Money,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TransactionRecord", into = "TransactionRecord")]
pub struct Transaction {
    id: TransactionId,
    date: NaiveDate,
    description: String,
    category: String,
    amount: Money,
    kind: TransactionKind,
}

impl Transaction {
    /// Create a transaction, checking the sign/type invariant
    pub fn new(
        id: impl Into<TransactionId>,
        date: NaiveDate,
        description: impl Into<String>,
        category: impl Into<String>,
        amount: Money,
        kind: TransactionKind,
    ) -> Result<Self, TransactionValidationError> {
        let id = id.into();
        if id.is_blank() {
            return Err(TransactionValidationError::BlankId);
        }

        let category = category.into().trim().to_string();
        if category.is_empty() {
            return Err(TransactionValidationError::BlankCategory);
        }

        if !amount.is_within_limit() {
            return Err(TransactionValidationError::AmountTooLarge(amount));
        }

        match TransactionKind::from_amount(amount) {
            None => return Err(TransactionValidationError::ZeroAmount),
            Some(implied) if implied != kind => {
                return Err(TransactionValidationError::SignMismatch { amount, kind })
            }
            Some(_) => {}
        }

        Ok(Self {
            id,
            date,
            description: description.into(),
            category,
            amount,
            kind,
        })
    }

    /// Create an income transaction with a generated id.
    ///
    /// The sign of `amount` is normalized to positive.
    pub fn income(
        date: NaiveDate,
        description: impl Into<String>,
        category: impl Into<String>,
        amount: Money,
    ) -> Result<Self, TransactionValidationError> {
        Self::new(
            TransactionId::generate(),
            date,
            description,
            category,
            amount.abs(),
            TransactionKind::Income,
        )
    }

    /// Create an expense transaction with a generated id.
    ///
    /// The sign of `amount` is normalized to negative.
    pub fn expense(
        date: NaiveDate,
        description: impl Into<String>,
        category: impl Into<String>,
        amount: Money,
    ) -> Result<Self, TransactionValidationError> {
        Self::new(
            TransactionId::generate(),
            date,
            description,
            category,
            -amount.abs(),
            TransactionKind::Expense,
        )
    }

    pub fn id(&self) -> &TransactionId {
        &self.id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Signed amount (positive for income, negative for expense)
    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    /// Unsigned amount
    pub fn magnitude(&self) -> Money {
        self.amount.abs()
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

impl TryFrom<TransactionRecord> for Transaction {
    type Error = TransactionValidationError;

    fn try_from(record: TransactionRecord) -> Result<Self, Self::Error> {
        Self::new(
            record.id,
            record.date,
            record.description,
            record.category,
            record.amount,
            record.kind,
        )
    }
}

impl From<Transaction> for TransactionRecord {
    fn from(txn: Transaction) -> Self {
        Self {
            id: txn.id,
            date: txn.date,
            description: txn.description,
            category: txn.category,
            amount: txn.amount,
            kind: txn.kind,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}] {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.category,
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    BlankId,
    BlankCategory,
    ZeroAmount,
    SignMismatch { amount: Money, kind: TransactionKind },
    AmountTooLarge(Money),
}

impl TransactionValidationError {
    /// Attach the offending transaction id
    pub fn for_transaction(self, id: impl Into<String>) -> BudgetError {
        BudgetError::invalid_transaction(id, self.to_string())
    }
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlankId => write!(f, "Transaction id cannot be empty"),
            Self::BlankCategory => write!(f, "Transaction category cannot be empty"),
            Self::ZeroAmount => write!(f, "Transaction amount cannot be zero"),
            Self::SignMismatch { amount, kind } => write!(
                f,
                "Amount {} does not match type '{}' (income must be positive, expense negative)",
                amount,
                kind.as_str()
            ),
            Self::AmountTooLarge(amount) => write!(
                f,
                "Amount {} exceeds the largest supported amount {}",
                amount,
                Money::from_minor(MAX_AMOUNT_MINOR)
            ),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
