//! Snapshot queries over the registry tables.
//!
//! Listing queries return fully-typed records, newest first. Proximity
//! filtering is NOT done here: callers fetch a snapshot and run it through
//! `geo::filter_within_radius` in memory.

use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};

use crate::error_handling::DatabaseError;
use crate::registry::{
    ProfileRecord, ResourceCategory, ResourceDetail, ResourceRecord, ScoreEventKind,
    ScoreSummary, ThreatKind, ThreatRecord,
};

/// Looks up a profile by username.
pub async fn find_profile(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<ProfileRecord>, DatabaseError> {
    let row = sqlx::query(
        "SELECT id, username, security_level, referred_by, created_at_ms, last_confirmed_ms
         FROM profiles WHERE username = ?",
    )
    .bind(username)
    .fetch_optional(pool)
    .await
    .map_err(DatabaseError::SqlError)?;

    Ok(row.map(|row| ProfileRecord {
        id: row.get("id"),
        username: row.get("username"),
        security_level: row.get("security_level"),
        referred_by: row.get("referred_by"),
        created_at_ms: row.get("created_at_ms"),
        last_confirmed_ms: row.get("last_confirmed_ms"),
    }))
}

/// Lists resources, newest first, optionally scoped to one owner and/or one
/// category.
pub async fn list_resources(
    pool: &SqlitePool,
    owner: Option<i64>,
    category: Option<ResourceCategory>,
) -> Result<Vec<ResourceRecord>, DatabaseError> {
    let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
        "SELECT r.id, r.owner, p.username AS owner_username, r.category, r.description,
                r.capacity, r.location_note, r.latitude, r.longitude,
                r.availability_percent, r.detail, r.created_at_ms, r.confirmed_at_ms
         FROM resources r
         JOIN profiles p ON p.id = r.owner",
    );

    let mut has_where = false;
    if let Some(owner) = owner {
        builder.push(" WHERE r.owner = ");
        builder.push_bind(owner);
        has_where = true;
    }
    if let Some(category) = category {
        builder.push(if has_where { " AND " } else { " WHERE " });
        builder.push("r.category = ");
        builder.push_bind(category.as_str());
    }
    builder.push(" ORDER BY r.created_at_ms DESC, r.id DESC");

    let rows = builder
        .build()
        .fetch_all(pool)
        .await
        .map_err(DatabaseError::SqlError)?;

    rows.into_iter().map(resource_from_row).collect()
}

fn resource_from_row(row: sqlx::sqlite::SqliteRow) -> Result<ResourceRecord, DatabaseError> {
    let category_text: String = row.get("category");
    let category = ResourceCategory::parse(&category_text)
        .ok_or_else(|| DatabaseError::DecodeError(format!("resource category {category_text:?}")))?;

    let detail_json: String = row.get("detail");
    let detail: ResourceDetail = serde_json::from_str(&detail_json)
        .map_err(|e| DatabaseError::DecodeError(format!("resource detail: {e}")))?;

    Ok(ResourceRecord {
        id: row.get("id"),
        owner: row.get("owner"),
        owner_username: row.get("owner_username"),
        category,
        description: row.get("description"),
        capacity: row.get("capacity"),
        location_note: row.get("location_note"),
        latitude: row.get("latitude"),
        longitude: row.get("longitude"),
        availability_percent: row.get("availability_percent"),
        detail,
        created_at_ms: row.get("created_at_ms"),
        confirmed_at_ms: row.get("confirmed_at_ms"),
    })
}

/// Lists threats, newest first, optionally scoped to one kind.
pub async fn list_threats(
    pool: &SqlitePool,
    kind: Option<ThreatKind>,
) -> Result<Vec<ThreatRecord>, DatabaseError> {
    let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
        "SELECT t.id, t.reporter, p.username AS reporter_username, t.kind, t.description,
                t.latitude, t.longitude, t.reported_at_ms
         FROM threats t
         JOIN profiles p ON p.id = t.reporter",
    );

    if let Some(kind) = kind {
        builder.push(" WHERE t.kind = ");
        builder.push_bind(kind.as_str());
    }
    builder.push(" ORDER BY t.reported_at_ms DESC, t.id DESC");

    let rows = builder
        .build()
        .fetch_all(pool)
        .await
        .map_err(DatabaseError::SqlError)?;

    rows.into_iter()
        .map(|row| {
            let kind_text: String = row.get("kind");
            let kind = ThreatKind::parse(&kind_text).ok_or_else(|| {
                DatabaseError::DecodeError(format!("threat kind {kind_text:?}"))
            })?;
            Ok(ThreatRecord {
                id: row.get("id"),
                reporter: row.get("reporter"),
                reporter_username: row.get("reporter_username"),
                kind,
                description: row.get("description"),
                latitude: row.get("latitude"),
                longitude: row.get("longitude"),
                reported_at_ms: row.get("reported_at_ms"),
            })
        })
        .collect()
}

/// Aggregates a profile's score events into a summary.
pub async fn score_summary(
    pool: &SqlitePool,
    profile: i64,
) -> Result<ScoreSummary, DatabaseError> {
    let rows = sqlx::query(
        "SELECT kind, COUNT(*) AS events, SUM(points) AS points
         FROM score_events WHERE profile = ? GROUP BY kind",
    )
    .bind(profile)
    .fetch_all(pool)
    .await
    .map_err(DatabaseError::SqlError)?;

    let mut summary = ScoreSummary::default();
    for row in rows {
        let kind_text: String = row.get("kind");
        let kind = ScoreEventKind::parse(&kind_text)
            .ok_or_else(|| DatabaseError::DecodeError(format!("score kind {kind_text:?}")))?;
        let events: i64 = row.get("events");
        let points: i64 = row.get("points");
        match kind {
            ScoreEventKind::ResourceRegistered => summary.resources_registered = events,
            ScoreEventKind::ThreatReported => summary.threats_reported = events,
            ScoreEventKind::ResourcesConfirmed => summary.confirmations = events,
            ScoreEventKind::MemberReferred => summary.members_referred = events,
        }
        summary.total_points += points;
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::GeoPoint;
    use crate::registry::NewResource;
    use crate::storage::insert::{insert_profile, insert_resource, record_score_event};
    use crate::storage::test_helpers::create_test_pool;

    fn supply(owner: i64, description: &str, created_at_ms: i64) -> NewResource {
        NewResource {
            owner,
            category: ResourceCategory::Supply,
            description: description.into(),
            capacity: 1,
            location_note: None,
            position: None,
            availability_percent: 100,
            detail: ResourceDetail::Supply { units: 1 },
            created_at_ms,
        }
    }

    #[tokio::test]
    async fn test_find_profile_missing_is_none() {
        let pool = create_test_pool().await;
        assert!(find_profile(&pool, "nobody")
            .await
            .expect("query should succeed")
            .is_none());
    }

    #[tokio::test]
    async fn test_list_resources_newest_first() {
        let pool = create_test_pool().await;
        let owner = insert_profile(&pool, "alice", 1, None, 0)
            .await
            .expect("insert profile");
        insert_resource(&pool, &supply(owner, "older", 1_000))
            .await
            .expect("insert older");
        insert_resource(&pool, &supply(owner, "newer", 2_000))
            .await
            .expect("insert newer");

        let records = list_resources(&pool, None, None).await.expect("list");
        let descriptions: Vec<&str> =
            records.iter().map(|r| r.description.as_str()).collect();
        assert_eq!(descriptions, vec!["newer", "older"]);
        assert_eq!(records[0].owner_username, "alice");
    }

    #[tokio::test]
    async fn test_list_resources_scoped_by_owner_and_category() {
        let pool = create_test_pool().await;
        let alice = insert_profile(&pool, "alice", 1, None, 0)
            .await
            .expect("insert alice");
        let bob = insert_profile(&pool, "bob", 1, None, 0)
            .await
            .expect("insert bob");
        insert_resource(&pool, &supply(alice, "alice supply", 1_000))
            .await
            .expect("insert");
        insert_resource(&pool, &supply(bob, "bob supply", 2_000))
            .await
            .expect("insert");
        let vehicle = NewResource {
            owner: alice,
            category: ResourceCategory::Vehicle,
            description: "van".into(),
            capacity: 7,
            location_note: None,
            position: None,
            availability_percent: 100,
            detail: ResourceDetail::Vehicle { seats: 7 },
            created_at_ms: 3_000,
        };
        insert_resource(&pool, &vehicle).await.expect("insert");

        let alices = list_resources(&pool, Some(alice), None).await.expect("list");
        assert_eq!(alices.len(), 2);
        assert!(alices.iter().all(|r| r.owner == alice));

        let vehicles = list_resources(&pool, None, Some(ResourceCategory::Vehicle))
            .await
            .expect("list");
        assert_eq!(vehicles.len(), 1);
        assert_eq!(vehicles[0].description, "van");
    }

    #[tokio::test]
    async fn test_score_summary_aggregates_kinds() {
        let pool = create_test_pool().await;
        let profile = insert_profile(&pool, "alice", 1, None, 0)
            .await
            .expect("insert profile");
        record_score_event(&pool, profile, ScoreEventKind::ResourceRegistered, 0)
            .await
            .expect("event");
        record_score_event(&pool, profile, ScoreEventKind::ResourceRegistered, 1)
            .await
            .expect("event");
        record_score_event(&pool, profile, ScoreEventKind::MemberReferred, 2)
            .await
            .expect("event");

        let summary = score_summary(&pool, profile).await.expect("summary");
        assert_eq!(summary.resources_registered, 2);
        assert_eq!(summary.members_referred, 1);
        assert_eq!(
            summary.total_points,
            2 * ScoreEventKind::ResourceRegistered.points()
                + ScoreEventKind::MemberReferred.points()
        );
    }
}
