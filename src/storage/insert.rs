//! Typed insert and update operations.

use sqlx::{Row, SqlitePool};

use crate::error_handling::DatabaseError;
use crate::registry::{NewResource, NewThreat, ScoreEventKind};

/// Inserts a profile and returns its row id.
///
/// A unique-constraint violation on the username surfaces as
/// `DatabaseError::SqlError`; the signup operation maps it to a friendlier
/// registry error.
pub async fn insert_profile(
    pool: &SqlitePool,
    username: &str,
    security_level: i64,
    referred_by: Option<i64>,
    created_at_ms: i64,
) -> Result<i64, DatabaseError> {
    let id = sqlx::query(
        "INSERT INTO profiles (username, security_level, referred_by, created_at_ms)
         VALUES (?, ?, ?, ?)
         RETURNING id",
    )
    .bind(username)
    .bind(security_level)
    .bind(referred_by)
    .bind(created_at_ms)
    .fetch_one(pool)
    .await
    .map_err(DatabaseError::SqlError)?
    .get::<i64, _>(0);

    Ok(id)
}

/// Inserts a resource and returns its row id.
pub async fn insert_resource(
    pool: &SqlitePool,
    resource: &NewResource,
) -> Result<i64, DatabaseError> {
    let detail_json = serde_json::to_string(&resource.detail)
        .map_err(|e| DatabaseError::DecodeError(format!("detail payload: {e}")))?;

    let id = sqlx::query(
        "INSERT INTO resources (
            owner, category, description, capacity, location_note,
            latitude, longitude, availability_percent, detail, created_at_ms
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING id",
    )
    .bind(resource.owner)
    .bind(resource.category.as_str())
    .bind(&resource.description)
    .bind(resource.capacity)
    .bind(&resource.location_note)
    .bind(resource.position.map(|p| p.latitude))
    .bind(resource.position.map(|p| p.longitude))
    .bind(resource.availability_percent)
    .bind(detail_json)
    .bind(resource.created_at_ms)
    .fetch_one(pool)
    .await
    .map_err(DatabaseError::SqlError)?
    .get::<i64, _>(0);

    Ok(id)
}

/// Inserts a threat report and returns its row id.
pub async fn insert_threat(pool: &SqlitePool, threat: &NewThreat) -> Result<i64, DatabaseError> {
    let id = sqlx::query(
        "INSERT INTO threats (reporter, kind, description, latitude, longitude, reported_at_ms)
         VALUES (?, ?, ?, ?, ?, ?)
         RETURNING id",
    )
    .bind(threat.reporter)
    .bind(threat.kind.as_str())
    .bind(&threat.description)
    .bind(threat.position.latitude)
    .bind(threat.position.longitude)
    .bind(threat.reported_at_ms)
    .fetch_one(pool)
    .await
    .map_err(DatabaseError::SqlError)?
    .get::<i64, _>(0);

    Ok(id)
}

/// Appends a score event for a profile.
pub async fn record_score_event(
    pool: &SqlitePool,
    profile: i64,
    kind: ScoreEventKind,
    occurred_at_ms: i64,
) -> Result<(), DatabaseError> {
    sqlx::query(
        "INSERT INTO score_events (profile, kind, points, occurred_at_ms)
         VALUES (?, ?, ?, ?)",
    )
    .bind(profile)
    .bind(kind.as_str())
    .bind(kind.points())
    .bind(occurred_at_ms)
    .execute(pool)
    .await
    .map_err(DatabaseError::SqlError)?;

    Ok(())
}

/// Stamps today's confirmation on a profile and all its resources.
///
/// Returns the number of resources stamped.
pub async fn stamp_confirmation(
    pool: &SqlitePool,
    profile: i64,
    confirmed_at_ms: i64,
) -> Result<u64, DatabaseError> {
    let stamped = sqlx::query("UPDATE resources SET confirmed_at_ms = ? WHERE owner = ?")
        .bind(confirmed_at_ms)
        .bind(profile)
        .execute(pool)
        .await
        .map_err(DatabaseError::SqlError)?
        .rows_affected();

    sqlx::query("UPDATE profiles SET last_confirmed_ms = ? WHERE id = ?")
        .bind(confirmed_at_ms)
        .bind(profile)
        .execute(pool)
        .await
        .map_err(DatabaseError::SqlError)?;

    Ok(stamped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::GeoPoint;
    use crate::registry::{ResourceCategory, ResourceDetail, ThreatKind};
    use crate::storage::test_helpers::create_test_pool;

    #[tokio::test]
    async fn test_insert_profile_returns_increasing_ids() {
        let pool = create_test_pool().await;
        let first = insert_profile(&pool, "alice", 1, None, 1_704_067_200_000)
            .await
            .expect("insert alice");
        let second = insert_profile(&pool, "bob", 1, Some(first), 1_704_067_201_000)
            .await
            .expect("insert bob");
        assert!(second > first);
    }

    #[tokio::test]
    async fn test_duplicate_username_is_rejected() {
        let pool = create_test_pool().await;
        insert_profile(&pool, "alice", 1, None, 0)
            .await
            .expect("first insert");
        let err = insert_profile(&pool, "alice", 1, None, 0)
            .await
            .expect_err("second insert should fail");
        match err {
            DatabaseError::SqlError(sqlx::Error::Database(db)) => {
                assert!(db.is_unique_violation());
            }
            other => panic!("expected unique violation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_insert_resource_round_trips_detail() {
        let pool = create_test_pool().await;
        let owner = insert_profile(&pool, "alice", 1, None, 0)
            .await
            .expect("insert profile");

        let resource = NewResource {
            owner,
            category: ResourceCategory::Vehicle,
            description: "Ford F-150 pickup".into(),
            capacity: 4,
            location_note: Some("behind the library".into()),
            position: Some(GeoPoint {
                latitude: 40.0,
                longitude: -74.0,
            }),
            availability_percent: 100,
            detail: ResourceDetail::Vehicle { seats: 4 },
            created_at_ms: 1_704_067_200_000,
        };
        let id = insert_resource(&pool, &resource).await.expect("insert");
        assert!(id > 0);

        let stored: String = sqlx::query_scalar("SELECT detail FROM resources WHERE id = ?")
            .bind(id)
            .fetch_one(&pool)
            .await
            .expect("fetch detail");
        let detail: ResourceDetail = serde_json::from_str(&stored).expect("parse detail");
        assert_eq!(detail, ResourceDetail::Vehicle { seats: 4 });
    }

    #[tokio::test]
    async fn test_stamp_confirmation_counts_resources() {
        let pool = create_test_pool().await;
        let owner = insert_profile(&pool, "alice", 1, None, 0)
            .await
            .expect("insert profile");
        for i in 0..3 {
            let resource = NewResource {
                owner,
                category: ResourceCategory::Supply,
                description: format!("crate {i}"),
                capacity: 1,
                location_note: None,
                position: None,
                availability_percent: 100,
                detail: ResourceDetail::Supply { units: 1 },
                created_at_ms: i,
            };
            insert_resource(&pool, &resource).await.expect("insert");
        }

        let stamped = stamp_confirmation(&pool, owner, 1_704_067_200_000)
            .await
            .expect("stamp");
        assert_eq!(stamped, 3);

        let last: Option<i64> =
            sqlx::query_scalar("SELECT last_confirmed_ms FROM profiles WHERE id = ?")
                .bind(owner)
                .fetch_one(&pool)
                .await
                .expect("fetch profile");
        assert_eq!(last, Some(1_704_067_200_000));
    }

    #[tokio::test]
    async fn test_record_score_event_stores_points() {
        let pool = create_test_pool().await;
        let profile = insert_profile(&pool, "alice", 1, None, 0)
            .await
            .expect("insert profile");
        record_score_event(&pool, profile, ScoreEventKind::MemberReferred, 0)
            .await
            .expect("record event");

        let points: i64 = sqlx::query_scalar("SELECT points FROM score_events WHERE profile = ?")
            .bind(profile)
            .fetch_one(&pool)
            .await
            .expect("fetch points");
        assert_eq!(points, ScoreEventKind::MemberReferred.points());
    }

    #[tokio::test]
    async fn test_insert_threat() {
        let pool = create_test_pool().await;
        let reporter = insert_profile(&pool, "alice", 1, None, 0)
            .await
            .expect("insert profile");
        let threat = NewThreat {
            reporter,
            kind: ThreatKind::Roadblock,
            description: Some("fallen tree across Route 9".into()),
            position: GeoPoint {
                latitude: 40.1,
                longitude: -74.2,
            },
            reported_at_ms: 1_704_067_200_000,
        };
        let id = insert_threat(&pool, &threat).await.expect("insert");

        let kind: String = sqlx::query_scalar("SELECT kind FROM threats WHERE id = ?")
            .bind(id)
            .fetch_one(&pool)
            .await
            .expect("fetch kind");
        assert_eq!(kind, "roadblock");
    }
}
