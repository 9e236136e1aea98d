//! Snapshot ingestion
//!
//! Read-only loaders that turn files into a validated-at-construction
//! [`LedgerSnapshot`](crate::models::LedgerSnapshot). Nothing here writes
//! ledger data back.

pub mod csv;
pub mod json;

pub use self::csv::{load_transactions, read_transactions};
pub use self::json::{load_snapshot, parse_snapshot, read_snapshot};
