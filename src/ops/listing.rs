//! Listing with role gating and proximity filtering.
//!
//! Listings fetch a snapshot from storage, then run it through the pure
//! proximity filter. The snapshot is ordered newest first and the filter is
//! stable, so filtered output keeps that order.

use anyhow::Result;
use log::{debug, info};
use sqlx::SqlitePool;

use crate::config::DEFAULT_MAX_DISTANCE_KM;
use crate::error_handling::RegistryError;
use crate::geo::{filter_within_radius, DistanceQuery, GeoPoint, LocationProvider};
use crate::registry::{ResourceCategory, ResourceRecord, ThreatKind, ThreatRecord};
use crate::storage;

use super::require_profile;

/// Proximity flags as given on the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProximityArgs {
    /// Explicit reference point (`--near LAT,LON`).
    pub near: Option<GeoPoint>,
    /// Resolve the reference point from the location provider (`--locate`).
    pub locate: bool,
    /// Radius in kilometers (`--within`); defaults when an origin is given.
    pub within: Option<f64>,
}

impl ProximityArgs {
    fn is_requested(&self) -> bool {
        self.near.is_some() || self.locate || self.within.is_some()
    }
}

/// Turns proximity flags into a concrete query, or `None` when no proximity
/// filtering was asked for.
///
/// An explicit `--near` wins over the provider. `--within` alone is an error:
/// a radius needs an origin.
pub fn resolve_query(
    args: &ProximityArgs,
    provider: &dyn LocationProvider,
) -> Result<Option<DistanceQuery>> {
    if !args.is_requested() {
        return Ok(None);
    }

    let origin = if let Some(origin) = args.near {
        origin
    } else if args.locate {
        let resolved = provider.resolve()?;
        debug!(
            "Reference point {resolved} resolved by {} provider",
            provider.name()
        );
        resolved
    } else {
        return Err(RegistryError::ReferenceRequired.into());
    };

    Ok(Some(DistanceQuery {
        origin,
        max_distance_km: args.within.unwrap_or(DEFAULT_MAX_DISTANCE_KM),
    }))
}

/// A filtered resource listing plus what it was filtered from.
#[derive(Debug, Clone)]
pub struct ResourceListing {
    /// Records that passed every filter, newest first.
    pub records: Vec<ResourceRecord>,
    /// Snapshot size before proximity filtering.
    pub total: usize,
    /// The proximity query applied, if any.
    pub query: Option<DistanceQuery>,
}

/// Lists resources visible to `caller`.
///
/// Civil profiles list their own resources (`mine` is implied for them and
/// enforced); authority profiles may list everyone's.
pub async fn list_resources(
    pool: &SqlitePool,
    caller: &str,
    mine: bool,
    category: Option<ResourceCategory>,
    proximity: &ProximityArgs,
    provider: &dyn LocationProvider,
) -> Result<ResourceListing> {
    let profile = require_profile(pool, caller).await?;

    let owner = if mine {
        Some(profile.id)
    } else if profile.is_authority() {
        None
    } else {
        return Err(RegistryError::AuthorityRequired {
            username: profile.username,
            security_level: profile.security_level,
        }
        .into());
    };

    let snapshot = storage::list_resources(pool, owner, category)
        .await
        .map_err(RegistryError::from)?;
    let total = snapshot.len();

    let query = resolve_query(proximity, provider)?;
    let records = match &query {
        Some(query) => filter_within_radius(&snapshot, query),
        None => snapshot,
    };

    info!(
        "Listing {} of {total} resources for {}",
        records.len(),
        profile.username
    );

    Ok(ResourceListing {
        records,
        total,
        query,
    })
}

/// A filtered threat listing plus what it was filtered from.
#[derive(Debug, Clone)]
pub struct ThreatListing {
    /// Records that passed every filter, newest first.
    pub records: Vec<ThreatRecord>,
    /// Snapshot size before proximity filtering.
    pub total: usize,
    /// The proximity query applied, if any.
    pub query: Option<DistanceQuery>,
}

/// Lists threats. Authority only.
pub async fn list_threats(
    pool: &SqlitePool,
    caller: &str,
    kind: Option<ThreatKind>,
    proximity: &ProximityArgs,
    provider: &dyn LocationProvider,
) -> Result<ThreatListing> {
    let profile = require_profile(pool, caller).await?;
    if !profile.is_authority() {
        return Err(RegistryError::AuthorityRequired {
            username: profile.username,
            security_level: profile.security_level,
        }
        .into());
    }

    let snapshot = storage::list_threats(pool, kind)
        .await
        .map_err(RegistryError::from)?;
    let total = snapshot.len();

    let query = resolve_query(proximity, provider)?;
    let records = match &query {
        Some(query) => filter_within_radius(&snapshot, query),
        None => snapshot,
    };

    info!(
        "Listing {} of {total} threats for {}",
        records.len(),
        profile.username
    );

    Ok(ThreatListing {
        records,
        total,
        query,
    })
}
