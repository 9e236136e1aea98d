//! Display formatting for terminal output
//!
//! Provides utilities for formatting reports and transactions for the
//! terminal. Currency symbols and progress-bar clamping live here, never in
//! the engine.

pub mod category;
pub mod report;
pub mod transaction;

pub use category::format_category_table;
pub use transaction::{format_transaction_register, format_transaction_row};
