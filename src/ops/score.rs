//! Contribution score lookup.

use anyhow::Result;
use sqlx::SqlitePool;

use crate::error_handling::RegistryError;
use crate::registry::ScoreSummary;
use crate::storage::score_summary;

use super::require_profile;

/// A profile's score, ready for display.
#[derive(Debug, Clone)]
pub struct ScoreOutcome {
    /// Whose score this is.
    pub username: String,
    /// Aggregated totals.
    pub summary: ScoreSummary,
}

/// Fetches the aggregated contribution score for a profile.
pub async fn contribution_score(pool: &SqlitePool, username: &str) -> Result<ScoreOutcome> {
    let profile = require_profile(pool, username).await?;
    let summary = score_summary(pool, profile.id)
        .await
        .map_err(RegistryError::from)?;

    Ok(ScoreOutcome {
        username: profile.username,
        summary,
    })
}
