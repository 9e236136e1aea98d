//! Service layer for family-budget
//!
//! Checks that run over a whole snapshot before any report is computed.

pub mod validation;

pub use validation::{collect_issues, validate_snapshot, ValidationMode};
