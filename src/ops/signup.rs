//! Profile creation.

use anyhow::Result;
use chrono::Utc;
use log::info;
use sqlx::SqlitePool;

use crate::error_handling::{DatabaseError, RegistryError};
use crate::registry::{Role, ScoreEventKind};
use crate::storage::{insert_profile, record_score_event};

use super::require_profile;

/// Result of a signup.
#[derive(Debug, Clone)]
pub struct SignupOutcome {
    /// New profile's row id.
    pub profile_id: i64,
    /// New profile's username.
    pub username: String,
    /// Role derived from the assigned security level.
    pub role: Role,
    /// Referrer's username, if a referral was recorded.
    pub referrer: Option<String>,
}

/// Creates a profile, crediting the referrer when one is named.
pub async fn signup(
    pool: &SqlitePool,
    username: &str,
    security_level: i64,
    referred_by: Option<&str>,
) -> Result<SignupOutcome> {
    let referrer = match referred_by {
        Some(name) => Some(require_profile(pool, name).await?),
        None => None,
    };

    let now_ms = Utc::now().timestamp_millis();
    let profile_id = match insert_profile(
        pool,
        username,
        security_level,
        referrer.as_ref().map(|r| r.id),
        now_ms,
    )
    .await
    {
        Ok(id) => id,
        Err(DatabaseError::SqlError(sqlx::Error::Database(db)))
            if db.is_unique_violation() =>
        {
            return Err(RegistryError::DuplicateUsername(username.to_string()).into());
        }
        Err(e) => return Err(RegistryError::from(e).into()),
    };

    if let Some(referrer) = &referrer {
        record_score_event(pool, referrer.id, ScoreEventKind::MemberReferred, now_ms)
            .await
            .map_err(RegistryError::from)?;
        info!(
            "Credited {} for referring {}",
            referrer.username, username
        );
    }

    let role = Role::from_security_level(security_level);
    info!("Created profile {username:?} ({role})");

    Ok(SignupOutcome {
        profile_id,
        username: username.to_string(),
        role,
        referrer: referrer.map(|r| r.username),
    })
}
