//! JSONL export functionality.
//!
//! One JSON object per line, suitable for piping into jq or bulk loaders.

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use futures::TryStreamExt;
use sqlx::SqlitePool;

use super::queries::{resources_query, threats_query};
use super::row::{ResourceExportRow, ThreatExportRow};
use super::types::{ExportOptions, ExportTarget};

/// Exports records as JSON Lines.
///
/// Writes to `opts.output` (or stdout if `None`) and returns the number of
/// records exported.
pub async fn export_jsonl(
    pool: &SqlitePool,
    target: ExportTarget,
    opts: &ExportOptions,
) -> Result<usize> {
    let mut writer: BufWriter<Box<dyn Write>> = if let Some(output_path) = &opts.output {
        let file = std::fs::File::create(output_path).context(format!(
            "Failed to create output file: {}",
            output_path.display()
        ))?;
        BufWriter::new(Box::new(file) as Box<dyn Write>)
    } else {
        BufWriter::new(Box::new(io::stdout()) as Box<dyn Write>)
    };

    let mut record_count = 0;

    match target {
        ExportTarget::Resources => {
            let mut builder = resources_query(opts);
            let mut rows = builder.build().fetch(pool);
            while let Some(row) = rows.try_next().await? {
                let record = ResourceExportRow::from_row(&row)?;
                serde_json::to_writer(&mut writer, &record)?;
                writer.write_all(b"\n")?;
                record_count += 1;
            }
        }
        ExportTarget::Threats => {
            let mut builder = threats_query(opts);
            let mut rows = builder.build().fetch(pool);
            while let Some(row) = rows.try_next().await? {
                let record = ThreatExportRow::from_row(&row);
                serde_json::to_writer(&mut writer, &record)?;
                writer.write_all(b"\n")?;
                record_count += 1;
            }
        }
    }

    writer.flush()?;

    Ok(record_count)
}
