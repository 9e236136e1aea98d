//! Core data models for family-budget
//!
//! The input side of the engine: money, transactions, budgets, the known
//! category set, and the snapshot that bundles them.

pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod snapshot;
pub mod transaction;

pub use budget::{Budget, BudgetValidationError};
pub use category::{CategorySet, CategoryValidationError, DefaultCategory};
pub use ids::TransactionId;
pub use money::Money;
pub use snapshot::LedgerSnapshot;
pub use transaction::{Transaction, TransactionKind, TransactionValidationError};
