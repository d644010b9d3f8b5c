//! Threat reporting.

use anyhow::Result;
use chrono::Utc;
use log::info;
use sqlx::SqlitePool;

use crate::error_handling::RegistryError;
use crate::geo::GeoPoint;
use crate::registry::{NewThreat, ScoreEventKind, ThreatKind};
use crate::storage::{insert_threat, record_score_event};

use super::require_profile;

/// Result of a threat report.
#[derive(Debug, Clone)]
pub struct ReportOutcome {
    /// New threat's row id.
    pub threat_id: i64,
    /// Kind it was reported as.
    pub kind: ThreatKind,
    /// Reporter's username.
    pub reporter: String,
    /// Points credited for the report.
    pub points_awarded: i64,
}

/// Records a threat sighting and credits the reporter.
///
/// Unlike resources, a threat must carry a position: an unlocatable sighting
/// is not actionable.
pub async fn report_threat(
    pool: &SqlitePool,
    username: &str,
    kind: ThreatKind,
    description: Option<String>,
    position: GeoPoint,
) -> Result<ReportOutcome> {
    let profile = require_profile(pool, username).await?;

    let now_ms = Utc::now().timestamp_millis();
    let threat = NewThreat {
        reporter: profile.id,
        kind,
        description,
        position,
        reported_at_ms: now_ms,
    };

    let threat_id = insert_threat(pool, &threat)
        .await
        .map_err(RegistryError::from)?;
    let event = ScoreEventKind::ThreatReported;
    record_score_event(pool, profile.id, event, now_ms)
        .await
        .map_err(RegistryError::from)?;

    info!(
        "Recorded {kind} threat #{threat_id} at {position} from {}",
        profile.username
    );

    Ok(ReportOutcome {
        threat_id,
        kind,
        reporter: profile.username,
        points_awarded: event.points(),
    })
}
