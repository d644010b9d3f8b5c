//! Daily resource confirmation.

use anyhow::Result;
use chrono::DateTime;
use log::info;
use sqlx::SqlitePool;

use crate::error_handling::RegistryError;
use crate::registry::ScoreEventKind;
use crate::storage::{record_score_event, stamp_confirmation};

use super::require_profile;

/// Result of a confirmation.
#[derive(Debug, Clone)]
pub struct ConfirmOutcome {
    /// How many resources got today's stamp.
    pub resources_confirmed: u64,
    /// Points credited for the confirmation.
    pub points_awarded: i64,
}

/// Stamps all of a profile's resources as confirmed, at most once per UTC
/// calendar day.
///
/// `now_ms` is injected so callers (and tests) control the clock.
pub async fn confirm_resources(
    pool: &SqlitePool,
    username: &str,
    now_ms: i64,
) -> Result<ConfirmOutcome> {
    let profile = require_profile(pool, username).await?;

    if let Some(last) = profile.last_confirmed_ms {
        if same_utc_day(last, now_ms) {
            return Err(RegistryError::AlreadyConfirmedToday(profile.username).into());
        }
    }

    let stamped = stamp_confirmation(pool, profile.id, now_ms)
        .await
        .map_err(RegistryError::from)?;
    let event = ScoreEventKind::ResourcesConfirmed;
    record_score_event(pool, profile.id, event, now_ms)
        .await
        .map_err(RegistryError::from)?;

    info!(
        "Confirmed {stamped} resources for {}",
        profile.username
    );

    Ok(ConfirmOutcome {
        resources_confirmed: stamped,
        points_awarded: event.points(),
    })
}

/// Whether two timestamps fall on the same UTC calendar date.
///
/// Timestamps outside chrono's representable range never match, which leaves
/// the confirmation open rather than permanently locked.
fn same_utc_day(a_ms: i64, b_ms: i64) -> bool {
    match (
        DateTime::from_timestamp_millis(a_ms),
        DateTime::from_timestamp_millis(b_ms),
    ) {
        (Some(a), Some(b)) => a.date_naive() == b.date_naive(),
        _ => false,
    }
}
