//! family-budget - aggregation engine for a family finance dashboard
//!
//! This library turns a read-only ledger snapshot (transactions, budgets and
//! known categories) into the figures a household dashboard shows: balance
//! and totals, spending ranked by category, and budget utilization.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Validated ledger data (money, transactions, budgets, categories)
//! - `reports`: The aggregation engine and the combined dashboard
//! - `services`: Snapshot-wide validation
//! - `import`: JSON and CSV snapshot loaders
//! - `export`: JSON, YAML and CSV report writers
//! - `display`: Terminal formatting
//! - `config`: Configuration and path management
//! - `cli`: Command handlers for the `fambudget` binary
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust,ignore
//! use family_budget::import::load_snapshot;
//! use family_budget::reports::{compute_category_report, compute_ledger_summary};
//!
//! let snapshot = load_snapshot("ledger.json")?;
//! let summary = compute_ledger_summary(&snapshot.transactions);
//! let categories = compute_category_report(&snapshot.transactions, &snapshot.categories, 5);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod import;
pub mod models;
pub mod reports;
pub mod services;

pub use error::{BudgetError, BudgetResult};
