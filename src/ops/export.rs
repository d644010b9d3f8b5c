//! Export with role gating.

use anyhow::Result;
use log::info;
use sqlx::SqlitePool;

use crate::error_handling::RegistryError;
use crate::export::{export_csv, export_jsonl, ExportFormat, ExportOptions, ExportTarget};

use super::require_profile;

/// Result of an export.
#[derive(Debug, Clone)]
pub struct ExportOutcome {
    /// Records written.
    pub records: usize,
    /// Where they went ("stdout" or a path).
    pub destination: String,
}

/// Exports resources or threats for `caller`.
///
/// Threat exports are authority-only; resources are visible to everyone on
/// the map in the original tool, so their export carries no gate.
pub async fn export_records(
    pool: &SqlitePool,
    caller: &str,
    target: ExportTarget,
    format: ExportFormat,
    opts: ExportOptions,
) -> Result<ExportOutcome> {
    let profile = require_profile(pool, caller).await?;
    if target == ExportTarget::Threats && !profile.is_authority() {
        return Err(RegistryError::AuthorityRequired {
            username: profile.username,
            security_level: profile.security_level,
        }
        .into());
    }

    let records = match format {
        ExportFormat::Csv => export_csv(pool, target, &opts).await?,
        ExportFormat::Jsonl => export_jsonl(pool, target, &opts).await?,
    };

    let destination = opts
        .output
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| String::from("stdout"));

    info!(
        "Exported {records} records to {destination} for {}",
        profile.username
    );

    Ok(ExportOutcome {
        records,
        destination,
    })
}
