//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the report engine.

pub mod ledger;
pub mod report;

pub use ledger::{
    handle_config_command, handle_validate_command, load_ledger, load_validated_ledger,
    LedgerArgs,
};
pub use report::{handle_report_command, ReportCommands};
