//! YAML Export functionality
//!
//! Writes a report as human-readable YAML.

use serde::Serialize;
use std::io::Write;

use super::json::ReportExport;
use crate::error::{BudgetError, BudgetResult};

/// Write a report as YAML with a short comment header
pub fn export_yaml<T: Serialize, W: Write>(report: &T, writer: &mut W) -> BudgetResult<()> {
    let export = ReportExport::new(report);

    writeln!(writer, "# Family Budget Report")
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| BudgetError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}
