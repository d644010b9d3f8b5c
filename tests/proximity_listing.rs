//! Proximity filtering end to end: snapshot from storage through the pure
//! distance filter.

mod helpers;

use helpers::{create_test_pool, FixedLocation};

use resource_radar::geo::GeoPoint;
use resource_radar::ops::{
    list_resources, list_threats, register_resource, report_threat, signup, ProximityArgs,
    RegisterRequest,
};
use resource_radar::registry::{ResourceCategory, ThreatKind};

fn located_request(
    username: &str,
    description: &str,
    position: Option<GeoPoint>,
) -> RegisterRequest {
    RegisterRequest {
        username: username.to_string(),
        category: ResourceCategory::Supply,
        description: description.to_string(),
        capacity: 1,
        location_note: None,
        position,
        availability_percent: 100,
        detail: None,
    }
}

fn point(latitude: f64, longitude: f64) -> GeoPoint {
    GeoPoint {
        latitude,
        longitude,
    }
}

#[tokio::test]
async fn test_fifty_km_radius_scenario() {
    let pool = create_test_pool().await;
    signup(&pool, "captain", 10, None).await.expect("signup");

    // At the reference point, ~135km away, and unlocatable
    register_resource(
        &pool,
        located_request("captain", "at origin", Some(point(40.0, -74.0))),
    )
    .await
    .expect("register");
    register_resource(
        &pool,
        located_request("captain", "far away", Some(point(41.0, -75.0))),
    )
    .await
    .expect("register");
    register_resource(&pool, located_request("captain", "no coordinates", None))
        .await
        .expect("register");

    let proximity = ProximityArgs {
        near: Some(point(40.0, -74.0)),
        locate: false,
        within: Some(50.0),
    };
    let listing = list_resources(
        &pool,
        "captain",
        false,
        None,
        &proximity,
        &FixedLocation(point(0.0, 0.0)),
    )
    .await
    .expect("list");

    assert_eq!(listing.total, 3);
    assert_eq!(listing.records.len(), 1);
    assert_eq!(listing.records[0].description, "at origin");
}

#[tokio::test]
async fn test_infinite_radius_still_excludes_unlocatable() {
    let pool = create_test_pool().await;
    signup(&pool, "captain", 10, None).await.expect("signup");

    register_resource(
        &pool,
        located_request("captain", "located", Some(point(10.0, 10.0))),
    )
    .await
    .expect("register");
    register_resource(&pool, located_request("captain", "unlocated", None))
        .await
        .expect("register");

    let proximity = ProximityArgs {
        near: Some(point(40.0, -74.0)),
        locate: false,
        within: Some(f64::INFINITY),
    };
    let listing = list_resources(
        &pool,
        "captain",
        false,
        None,
        &proximity,
        &FixedLocation(point(0.0, 0.0)),
    )
    .await
    .expect("list");

    assert_eq!(listing.records.len(), 1);
    assert_eq!(listing.records[0].description, "located");
}

#[tokio::test]
async fn test_filtered_listing_keeps_snapshot_order() {
    let pool = create_test_pool().await;
    signup(&pool, "captain", 10, None).await.expect("signup");

    // All within a few km of the origin; listing order is newest first
    for description in ["first", "second", "third"] {
        register_resource(
            &pool,
            located_request("captain", description, Some(point(40.0, -74.0))),
        )
        .await
        .expect("register");
    }

    let proximity = ProximityArgs {
        near: Some(point(40.0, -74.0)),
        locate: false,
        within: Some(10.0),
    };
    let listing = list_resources(
        &pool,
        "captain",
        false,
        None,
        &proximity,
        &FixedLocation(point(0.0, 0.0)),
    )
    .await
    .expect("list");

    let descriptions: Vec<&str> = listing
        .records
        .iter()
        .map(|r| r.description.as_str())
        .collect();
    assert_eq!(descriptions, vec!["third", "second", "first"]);
}

#[tokio::test]
async fn test_locate_flag_uses_the_provider() {
    let pool = create_test_pool().await;
    signup(&pool, "captain", 10, None).await.expect("signup");

    register_resource(
        &pool,
        located_request("captain", "near provider", Some(point(51.51, -0.13))),
    )
    .await
    .expect("register");
    register_resource(
        &pool,
        located_request("captain", "across the ocean", Some(point(40.0, -74.0))),
    )
    .await
    .expect("register");

    let proximity = ProximityArgs {
        near: None,
        locate: true,
        within: None,
    };
    let listing = list_resources(
        &pool,
        "captain",
        false,
        None,
        &proximity,
        &FixedLocation(point(51.5074, -0.1278)),
    )
    .await
    .expect("list");

    assert_eq!(listing.records.len(), 1);
    assert_eq!(listing.records[0].description, "near provider");
    let query = listing.query.expect("query should be set");
    assert_eq!(query.max_distance_km, 50.0);
}

#[tokio::test]
async fn test_threats_filter_by_kind_and_radius() {
    let pool = create_test_pool().await;
    signup(&pool, "alice", 1, None).await.expect("signup alice");
    signup(&pool, "captain", 10, None).await.expect("signup captain");

    report_threat(
        &pool,
        "alice",
        ThreatKind::Hazard,
        Some("flooded underpass".into()),
        point(40.01, -74.0),
    )
    .await
    .expect("report");
    report_threat(
        &pool,
        "alice",
        ThreatKind::Hazard,
        Some("wildfire smoke".into()),
        point(44.0, -74.0),
    )
    .await
    .expect("report");
    report_threat(
        &pool,
        "alice",
        ThreatKind::Drone,
        None,
        point(40.01, -74.01),
    )
    .await
    .expect("report");

    let proximity = ProximityArgs {
        near: Some(point(40.0, -74.0)),
        locate: false,
        within: Some(20.0),
    };
    let listing = list_threats(
        &pool,
        "captain",
        Some(ThreatKind::Hazard),
        &proximity,
        &FixedLocation(point(0.0, 0.0)),
    )
    .await
    .expect("list");

    assert_eq!(listing.records.len(), 1);
    assert_eq!(
        listing.records[0].description.as_deref(),
        Some("flooded underpass")
    );
}
