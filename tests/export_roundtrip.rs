//! Export tests: CSV and JSONL output, filters, and role gating.

mod helpers;

use helpers::create_test_pool;

use resource_radar::error_handling::RegistryError;
use resource_radar::export::{ExportFormat, ExportOptions, ExportTarget};
use resource_radar::geo::GeoPoint;
use resource_radar::ops::{
    export_records, register_resource, report_threat, signup, RegisterRequest,
};
use resource_radar::registry::{ResourceCategory, ThreatKind};

fn request(username: &str, category: ResourceCategory, description: &str) -> RegisterRequest {
    RegisterRequest {
        username: username.to_string(),
        category,
        description: description.to_string(),
        capacity: 3,
        location_note: Some("town hall".into()),
        position: Some(GeoPoint {
            latitude: 40.0,
            longitude: -74.0,
        }),
        availability_percent: 80,
        detail: None,
    }
}

#[tokio::test]
async fn test_export_resources_csv() {
    let pool = create_test_pool().await;
    signup(&pool, "alice", 1, None).await.expect("signup");
    register_resource(&pool, request("alice", ResourceCategory::Vehicle, "van"))
        .await
        .expect("register");
    register_resource(&pool, request("alice", ResourceCategory::Supply, "water"))
        .await
        .expect("register");

    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("resources.csv");
    let outcome = export_records(
        &pool,
        "alice",
        ExportTarget::Resources,
        ExportFormat::Csv,
        ExportOptions {
            output: Some(output.clone()),
            ..ExportOptions::default()
        },
    )
    .await
    .expect("export");
    assert_eq!(outcome.records, 2);

    let content = std::fs::read_to_string(&output).expect("read export");
    let mut lines = content.lines();
    let header = lines.next().expect("header line");
    assert!(header.starts_with("id,owner_username,category,description"));
    let body: Vec<&str> = lines.collect();
    assert_eq!(body.len(), 2);
    assert!(body.iter().any(|line| line.contains("water")));
    assert!(body.iter().any(|line| line.contains("van")));
}

#[tokio::test]
async fn test_export_resources_csv_category_filter() {
    let pool = create_test_pool().await;
    signup(&pool, "alice", 1, None).await.expect("signup");
    register_resource(&pool, request("alice", ResourceCategory::Vehicle, "van"))
        .await
        .expect("register");
    register_resource(&pool, request("alice", ResourceCategory::Supply, "water"))
        .await
        .expect("register");

    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("vehicles.csv");
    let outcome = export_records(
        &pool,
        "alice",
        ExportTarget::Resources,
        ExportFormat::Csv,
        ExportOptions {
            output: Some(output.clone()),
            category: Some(ResourceCategory::Vehicle),
            ..ExportOptions::default()
        },
    )
    .await
    .expect("export");
    assert_eq!(outcome.records, 1);

    let content = std::fs::read_to_string(&output).expect("read export");
    assert!(content.contains("van"));
    assert!(!content.contains("water"));
}

#[tokio::test]
async fn test_export_resources_jsonl_parses_back() {
    let pool = create_test_pool().await;
    signup(&pool, "alice", 1, None).await.expect("signup");
    register_resource(&pool, request("alice", ResourceCategory::Shelter, "spare room"))
        .await
        .expect("register");

    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("resources.jsonl");
    let outcome = export_records(
        &pool,
        "alice",
        ExportTarget::Resources,
        ExportFormat::Jsonl,
        ExportOptions {
            output: Some(output.clone()),
            ..ExportOptions::default()
        },
    )
    .await
    .expect("export");
    assert_eq!(outcome.records, 1);

    let content = std::fs::read_to_string(&output).expect("read export");
    let mut parsed_lines = 0;
    for line in content.lines() {
        let value: serde_json::Value = serde_json::from_str(line).expect("valid JSON line");
        assert_eq!(value["owner_username"], "alice");
        assert_eq!(value["category"], "shelter");
        assert_eq!(value["detail"]["kind"], "shelter");
        assert_eq!(value["detail"]["beds"], 3);
        parsed_lines += 1;
    }
    assert_eq!(parsed_lines, 1);
}

#[tokio::test]
async fn test_threat_export_requires_authority() {
    let pool = create_test_pool().await;
    signup(&pool, "alice", 1, None).await.expect("signup alice");
    signup(&pool, "captain", 10, None).await.expect("signup captain");
    report_threat(
        &pool,
        "alice",
        ThreatKind::Roadblock,
        Some("fallen tree".into()),
        GeoPoint {
            latitude: 40.0,
            longitude: -74.0,
        },
    )
    .await
    .expect("report");

    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("threats.csv");

    let err = export_records(
        &pool,
        "alice",
        ExportTarget::Threats,
        ExportFormat::Csv,
        ExportOptions {
            output: Some(output.clone()),
            ..ExportOptions::default()
        },
    )
    .await
    .expect_err("civil export should fail");
    assert!(matches!(
        err.downcast_ref::<RegistryError>(),
        Some(RegistryError::AuthorityRequired { .. })
    ));

    let outcome = export_records(
        &pool,
        "captain",
        ExportTarget::Threats,
        ExportFormat::Csv,
        ExportOptions {
            output: Some(output.clone()),
            ..ExportOptions::default()
        },
    )
    .await
    .expect("authority export");
    assert_eq!(outcome.records, 1);

    let content = std::fs::read_to_string(&output).expect("read export");
    assert!(content.contains("roadblock"));
    assert!(content.contains("fallen tree"));
}

#[tokio::test]
async fn test_export_since_filter() {
    let pool = create_test_pool().await;
    signup(&pool, "alice", 1, None).await.expect("signup");
    register_resource(&pool, request("alice", ResourceCategory::Supply, "water"))
        .await
        .expect("register");

    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("none.csv");
    // since far in the future: nothing qualifies
    let outcome = export_records(
        &pool,
        "alice",
        ExportTarget::Resources,
        ExportFormat::Csv,
        ExportOptions {
            output: Some(output.clone()),
            since_ms: Some(i64::MAX),
            ..ExportOptions::default()
        },
    )
    .await
    .expect("export");
    assert_eq!(outcome.records, 0);

    let content = std::fs::read_to_string(&output).expect("read export");
    assert_eq!(content.lines().count(), 1, "header only");
}
