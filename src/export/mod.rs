//! Export functionality for registry data.
//!
//! This module provides functions to export resources and threats from the
//! SQLite database into CSV or JSONL, to a file or stdout.

mod csv;
mod jsonl;
mod queries;
mod row;
mod types;

pub use csv::export_csv;
pub use jsonl::export_jsonl;
pub use types::{ExportFormat, ExportOptions, ExportTarget};
