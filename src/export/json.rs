//! JSON Export functionality
//!
//! Wraps a report in a versioned envelope and writes it as JSON.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{BudgetError, BudgetResult};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// A report together with export metadata
#[derive(Debug, Clone, Serialize)]
pub struct ReportExport<'a, T: Serialize> {
    /// Schema version for compatibility checking
    pub schema_version: &'static str,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: &'static str,

    /// The exported report
    pub report: &'a T,
}

impl<'a, T: Serialize> ReportExport<'a, T> {
    pub fn new(report: &'a T) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION"),
            report,
        }
    }
}

/// Write a report as pretty-printed JSON
pub fn export_json<T: Serialize, W: Write>(report: &T, writer: &mut W) -> BudgetResult<()> {
    serde_json::to_writer_pretty(&mut *writer, &ReportExport::new(report))
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| BudgetError::Export(e.to_string()))?;
    Ok(())
}
