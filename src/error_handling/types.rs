//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for database operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Error creating the database file.
    #[error("Database file creation error: {0}")]
    FileCreationError(String),

    /// SQL execution error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),

    /// Migration error.
    #[error("Migration error: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),

    /// A stored value could not be decoded into its domain type.
    ///
    /// Indicates a row written by a different version or by hand; the schema
    /// itself does not constrain category/kind/detail columns.
    #[error("Unexpected stored value: {0}")]
    DecodeError(String),
}

/// Error types for coordinate input.
///
/// Raised at the parsing boundary only -- the distance calculator itself
/// accepts whatever it is handed (see `geo::distance_km`).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoordinateError {
    /// Input was not a `LAT,LON` pair.
    #[error("expected coordinates as LAT,LON (e.g. 40.7128,-74.0060), got {0:?}")]
    Malformed(String),

    /// A component parsed but is NaN or infinite.
    #[error("coordinate components must be finite numbers")]
    NonFinite,

    /// Latitude outside the valid range.
    #[error("latitude {0} is outside -90..=90")]
    LatitudeOutOfRange(f64),

    /// Longitude outside the valid range.
    #[error("longitude {0} is outside -180..=180")]
    LongitudeOutOfRange(f64),
}

/// Failure reasons when resolving a reference point from a location provider.
///
/// Mirrors the small set of outcomes a device location service reports.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LocateError {
    /// The provider is not allowed to (or cannot) supply a position.
    #[error("location access denied")]
    PermissionDenied,

    /// The provider answered but had no usable position.
    #[error("location unavailable: {0}")]
    PositionUnavailable(String),

    /// The provider did not answer in time.
    #[error("location request timed out")]
    Timeout,

    /// Anything else.
    #[error("location error: {0}")]
    Unknown(String),
}

/// Error types for registry operations (profiles, resources, threats, scoring).
#[derive(Error, Debug)]
pub enum RegistryError {
    /// No profile exists with the given username.
    #[error("no profile named {0:?}")]
    UnknownProfile(String),

    /// A profile with this username already exists.
    #[error("a profile named {0:?} already exists")]
    DuplicateUsername(String),

    /// The operation requires authority clearance.
    #[error("{username:?} (security level {security_level}) lacks authority clearance for this operation")]
    AuthorityRequired {
        /// The caller's username.
        username: String,
        /// The caller's security level.
        security_level: i64,
    },

    /// Resources were already confirmed today.
    #[error("{0:?} already confirmed resources today; confirmation is once per UTC day")]
    AlreadyConfirmedToday(String),

    /// The supplied detail payload belongs to a different category.
    #[error("detail payload is for category {detail_category}, resource is {category}")]
    DetailCategoryMismatch {
        /// Category the resource was registered under.
        category: String,
        /// Category the detail payload belongs to.
        detail_category: String,
    },

    /// Availability must be a percentage.
    #[error("availability {0} is outside 0..=100")]
    InvalidAvailability(i64),

    /// A radius was given without any way to resolve a reference point.
    #[error("--within requires a reference point; pass --near LAT,LON or --locate")]
    ReferenceRequired,

    /// Underlying database failure.
    #[error(transparent)]
    Database(#[from] DatabaseError),
}
