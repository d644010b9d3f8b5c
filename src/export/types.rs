//! Export options shared by the CSV and JSONL writers.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::registry::{ResourceCategory, ThreatKind};

/// Output format for an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Flattened CSV, one record per row.
    Csv,
    /// One JSON object per line.
    Jsonl,
}

/// Which table to export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportTarget {
    /// Registered resources.
    Resources,
    /// Reported threats.
    Threats,
}

/// Filters and destination for one export.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Output file; stdout when `None`.
    pub output: Option<PathBuf>,
    /// Restrict resources to one category.
    pub category: Option<ResourceCategory>,
    /// Restrict threats to one kind.
    pub kind: Option<ThreatKind>,
    /// Only records at or after this timestamp (milliseconds since epoch).
    pub since_ms: Option<i64>,
}
