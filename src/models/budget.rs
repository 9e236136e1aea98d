//! Budget model
//!
//! A budget is a spending ceiling for one category over a period, together
//! with the amount spent so far.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::{Money, MAX_AMOUNT_MINOR};
use crate::error::BudgetError;

/// Serialized shape of a budget, before invariants are checked
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetRecord {
    pub category: String,
    pub limit: Money,
    #[serde(default)]
    pub spent: Money,
}

/// A spending limit for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BudgetRecord", into = "BudgetRecord")]
pub struct Budget {
    category: String,
    limit: Money,
    spent: Money,
}

impl Budget {
    /// Create a budget, checking that `limit > 0` and `spent >= 0`
    pub fn new(
        category: impl Into<String>,
        limit: Money,
        spent: Money,
    ) -> Result<Self, BudgetValidationError> {
        let category = category.into().trim().to_string();
        if category.is_empty() {
            return Err(BudgetValidationError::BlankCategory);
        }
        if !limit.is_positive() {
            return Err(BudgetValidationError::NonPositiveLimit(limit));
        }
        if spent.is_negative() {
            return Err(BudgetValidationError::NegativeSpent(spent));
        }
        for amount in [limit, spent] {
            if !amount.is_within_limit() {
                return Err(BudgetValidationError::AmountTooLarge(amount));
            }
        }

        Ok(Self {
            category,
            limit,
            spent,
        })
    }

    /// Create a budget with nothing spent yet
    pub fn with_limit(
        category: impl Into<String>,
        limit: Money,
    ) -> Result<Self, BudgetValidationError> {
        Self::new(category, limit, Money::zero())
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn limit(&self) -> Money {
        self.limit
    }

    pub fn spent(&self) -> Money {
        self.spent
    }

    /// A copy of this budget with a different spent amount.
    ///
    /// Negative values are clamped to zero since spend is reported unsigned.
    pub fn with_spent(&self, spent: Money) -> Self {
        Self {
            category: self.category.clone(),
            limit: self.limit,
            spent: if spent.is_negative() { Money::zero() } else { spent },
        }
    }
}

impl TryFrom<BudgetRecord> for Budget {
    type Error = BudgetValidationError;

    fn try_from(record: BudgetRecord) -> Result<Self, Self::Error> {
        Self::new(record.category, record.limit, record.spent)
    }
}

impl From<Budget> for BudgetRecord {
    fn from(budget: Budget) -> Self {
        Self {
            category: budget.category,
            limit: budget.limit,
            spent: budget.spent,
        }
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} of {}", self.category, self.spent, self.limit)
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    BlankCategory,
    NonPositiveLimit(Money),
    NegativeSpent(Money),
    AmountTooLarge(Money),
}

impl BudgetValidationError {
    /// Attach the offending category
    pub fn for_category(self, category: impl Into<String>) -> BudgetError {
        BudgetError::invalid_budget(category, self.to_string())
    }
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlankCategory => write!(f, "Budget category cannot be empty"),
            Self::NonPositiveLimit(limit) => {
                write!(f, "Budget limit must be positive (got {})", limit)
            }
            Self::NegativeSpent(spent) => {
                write!(f, "Budget spent cannot be negative (got {})", spent)
            }
            Self::AmountTooLarge(amount) => write!(
                f,
                "Budget amount {} exceeds the largest supported amount {}",
                amount,
                Money::from_minor(MAX_AMOUNT_MINOR)
            ),
        }
    }
}

impl std::error::Error for BudgetValidationError {}
