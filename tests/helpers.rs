// Shared test helpers for database setup and test data creation.

use sqlx::SqlitePool;

use resource_radar::error_handling::LocateError;
use resource_radar::geo::{GeoPoint, LocationProvider};
use resource_radar::run_migrations;

/// Creates a test database pool with migrations applied.
/// Uses an in-memory database for fast test execution.
#[allow(dead_code)] // Used by other test files
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePool::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database pool");
    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

/// Location provider that always returns the same point.
#[allow(dead_code)]
pub struct FixedLocation(pub GeoPoint);

impl LocationProvider for FixedLocation {
    fn resolve(&self) -> Result<GeoPoint, LocateError> {
        Ok(self.0)
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

/// Location provider that always fails, for callers that must not need one.
#[allow(dead_code)]
pub struct NoLocation;

impl LocationProvider for NoLocation {
    fn resolve(&self) -> Result<GeoPoint, LocateError> {
        Err(LocateError::PermissionDenied)
    }

    fn name(&self) -> &'static str {
        "none"
    }
}
