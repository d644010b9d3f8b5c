//! Operation entry points, one module per CLI subcommand.
//!
//! Each operation is an async function over a pool plus plain arguments,
//! returning a typed outcome the binary formats for the user.

mod confirm;
mod export;
mod listing;
mod register;
mod report;
mod score;
mod signup;

pub use confirm::{confirm_resources, ConfirmOutcome};
pub use export::{export_records, ExportOutcome};
pub use listing::{
    list_resources, list_threats, resolve_query, ProximityArgs, ResourceListing, ThreatListing,
};
pub use register::{register_resource, RegisterOutcome, RegisterRequest};
pub use report::{report_threat, ReportOutcome};
pub use score::{contribution_score, ScoreOutcome};
pub use signup::{signup, SignupOutcome};

use sqlx::SqlitePool;

use crate::error_handling::RegistryError;
use crate::registry::ProfileRecord;
use crate::storage::find_profile;

/// Looks up a profile by username or fails with `UnknownProfile`.
pub(crate) async fn require_profile(
    pool: &SqlitePool,
    username: &str,
) -> Result<ProfileRecord, RegistryError> {
    find_profile(pool, username)
        .await?
        .ok_or_else(|| RegistryError::UnknownProfile(username.to_string()))
}
