//! Resource registration.

use anyhow::Result;
use chrono::Utc;
use log::info;
use sqlx::SqlitePool;

use crate::error_handling::RegistryError;
use crate::geo::GeoPoint;
use crate::registry::{NewResource, ResourceCategory, ResourceDetail, ScoreEventKind};
use crate::storage::{insert_resource, record_score_event};

use super::require_profile;

/// Everything needed to register one resource.
///
/// `position`, when present, was validated at the input boundary; `detail`,
/// when present, must belong to `category`.
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    /// Owner's username.
    pub username: String,
    /// Resource category.
    pub category: ResourceCategory,
    /// Human description.
    pub description: String,
    /// Declared capacity.
    pub capacity: u32,
    /// Free-form location description.
    pub location_note: Option<String>,
    /// Pinned position.
    pub position: Option<GeoPoint>,
    /// Availability percentage, 0..=100.
    pub availability_percent: i64,
    /// Category-specific attributes; defaulted from the category when absent.
    pub detail: Option<ResourceDetail>,
}

/// Result of a registration.
#[derive(Debug, Clone)]
pub struct RegisterOutcome {
    /// New resource's row id.
    pub resource_id: i64,
    /// Category it was registered under.
    pub category: ResourceCategory,
    /// Owner's username.
    pub owner: String,
    /// Points credited for the registration.
    pub points_awarded: i64,
}

/// Registers a resource and credits the owner.
pub async fn register_resource(
    pool: &SqlitePool,
    request: RegisterRequest,
) -> Result<RegisterOutcome> {
    let profile = require_profile(pool, &request.username).await?;

    if !(0..=100).contains(&request.availability_percent) {
        return Err(RegistryError::InvalidAvailability(request.availability_percent).into());
    }

    let detail = match request.detail {
        Some(detail) => {
            if detail.category() != request.category {
                return Err(RegistryError::DetailCategoryMismatch {
                    category: request.category.to_string(),
                    detail_category: detail.category().to_string(),
                }
                .into());
            }
            detail
        }
        None => ResourceDetail::default_for(request.category, request.capacity),
    };

    let now_ms = Utc::now().timestamp_millis();
    let new_resource = NewResource {
        owner: profile.id,
        category: request.category,
        description: request.description,
        capacity: i64::from(request.capacity),
        location_note: request.location_note,
        position: request.position,
        availability_percent: request.availability_percent,
        detail,
        created_at_ms: now_ms,
    };

    let resource_id = insert_resource(pool, &new_resource)
        .await
        .map_err(RegistryError::from)?;
    let kind = ScoreEventKind::ResourceRegistered;
    record_score_event(pool, profile.id, kind, now_ms)
        .await
        .map_err(RegistryError::from)?;

    info!(
        "Registered {} resource #{resource_id} for {}",
        request.category, profile.username
    );

    Ok(RegisterOutcome {
        resource_id,
        category: request.category,
        owner: profile.username,
        points_awarded: kind.points(),
    })
}
