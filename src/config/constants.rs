//! Configuration constants.

/// Default SQLite database path.
pub const DEFAULT_DB_PATH: &str = "./resource_radar.db";

/// Security level at and above which a profile has authority clearance.
pub const AUTHORITY_SECURITY_LEVEL: i64 = 10;

/// Security level assigned to new profiles unless overridden.
pub const DEFAULT_SECURITY_LEVEL: i64 = 1;

/// Radius applied when a proximity filter is requested without `--within`.
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 50.0;

/// Points awarded for registering a resource.
pub const POINTS_RESOURCE_REGISTERED: i64 = 10;

/// Points awarded for reporting a threat.
pub const POINTS_THREAT_REPORTED: i64 = 10;

/// Points awarded for the daily resource confirmation.
pub const POINTS_RESOURCES_CONFIRMED: i64 = 5;

/// Points awarded to the referrer when a referred member signs up.
pub const POINTS_MEMBER_REFERRED: i64 = 15;

/// Points per contribution level.
pub const LEVEL_STEP_POINTS: i64 = 20;

/// Environment variable read by the fallback location provider.
pub const LOCATION_ENV_VAR: &str = "RESOURCE_RADAR_LOCATION";
