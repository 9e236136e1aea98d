//! Report export
//!
//! Serializes computed reports to files: JSON and YAML for any report, CSV
//! for the tabular category and budget views.

pub mod json;
pub mod yaml;

pub use json::{export_json, ReportExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_yaml;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use clap::ValueEnum;

use crate::error::{BudgetError, BudgetResult};

/// Output file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Yaml,
    Csv,
}

impl ExportFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

/// Create a buffered writer for an output file
pub fn create_output(path: &Path) -> BudgetResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        BudgetError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}

/// Flush a writer, mapping the error
pub fn finish<W: Write>(mut writer: W) -> BudgetResult<()> {
    writer
        .flush()
        .map_err(|e| BudgetError::Export(e.to_string()))
}
