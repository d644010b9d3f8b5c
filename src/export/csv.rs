//! CSV export functionality.
//!
//! Exports registry data to CSV format (simplified, flattened view).
//! One row per record.

use std::io::{self, Write};

use anyhow::{Context, Result};
use csv::Writer;
use futures::TryStreamExt;
use sqlx::SqlitePool;

use super::queries::{resources_query, threats_query};
use super::row::{ResourceExportRow, ThreatExportRow};
use super::types::{ExportOptions, ExportTarget};

/// Exports records to CSV format.
///
/// Writes to `opts.output` (or stdout if `None`) and returns the number of
/// records exported.
pub async fn export_csv(
    pool: &SqlitePool,
    target: ExportTarget,
    opts: &ExportOptions,
) -> Result<usize> {
    // Use a trait object so both File and Stdout fit the same writer
    let mut writer: Writer<Box<dyn Write>> = if let Some(output_path) = &opts.output {
        let file = std::fs::File::create(output_path).context(format!(
            "Failed to create output file: {}",
            output_path.display()
        ))?;
        Writer::from_writer(Box::new(file) as Box<dyn Write>)
    } else {
        Writer::from_writer(Box::new(io::stdout()) as Box<dyn Write>)
    };

    let mut record_count = 0;

    match target {
        ExportTarget::Resources => {
            writer.write_record(ResourceExportRow::CSV_HEADER)?;
            let mut builder = resources_query(opts);
            let mut rows = builder.build().fetch(pool);
            while let Some(row) = rows.try_next().await? {
                let record = ResourceExportRow::from_row(&row)?;
                writer.write_record(record.csv_fields())?;
                record_count += 1;
            }
        }
        ExportTarget::Threats => {
            writer.write_record(ThreatExportRow::CSV_HEADER)?;
            let mut builder = threats_query(opts);
            let mut rows = builder.build().fetch(pool);
            while let Some(row) = rows.try_next().await? {
                let record = ThreatExportRow::from_row(&row);
                writer.write_record(record.csv_fields())?;
                record_count += 1;
            }
        }
    }

    writer.flush()?;

    Ok(record_count)
}
