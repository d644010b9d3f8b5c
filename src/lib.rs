//! resource_radar library: community resource coordination
//!
//! Members register resources (vehicles, shelter, supplies, labour, energy)
//! and report threats; authority profiles see the whole picture. Everything
//! lives in a tool-owned SQLite database, and listings can be narrowed to a
//! radius around a reference point via a pure great-circle proximity filter.
//!
//! # Example
//!
//! ```no_run
//! use resource_radar::geo::{filter_within_radius, DistanceQuery, GeoPoint};
//!
//! # fn example(resources: Vec<resource_radar::registry::ResourceRecord>) {
//! let query = DistanceQuery {
//!     origin: GeoPoint { latitude: 40.7128, longitude: -74.0060 },
//!     max_distance_km: 50.0,
//! };
//! let nearby = filter_within_radius(&resources, &query);
//! # }
//! ```
//!
//! The async pieces (storage, operations, export) require a Tokio runtime;
//! use `#[tokio::main]` or call them from an async context.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod error_handling;
pub mod export;
pub mod geo;
pub mod initialization;
pub mod ops;
pub mod registry;
pub mod storage;

// Re-export the pieces nearly every caller touches
pub use cli::Cli;
pub use geo::{distance_km, filter_within_radius, DistanceQuery, GeoPoint, Located};
pub use storage::{init_db_pool_with_path, run_migrations};
