//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{DEFAULT_DB_PATH, DEFAULT_SECURITY_LEVEL, LogFormat, LogLevel};
use crate::error_handling::CoordinateError;
use crate::export::{ExportFormat, ExportTarget};
use crate::geo::GeoPoint;
use crate::registry::{ResourceCategory, ThreatKind};

/// Parses and validates a `LAT,LON` argument.
pub fn parse_geo_point(s: &str) -> Result<GeoPoint, CoordinateError> {
    s.parse()
}

/// Community resource and threat registry with proximity search.
#[derive(Parser, Debug)]
#[command(name = "resource_radar", version, about)]
pub struct Cli {
    /// SQLite database path
    #[arg(long, global = true, default_value = DEFAULT_DB_PATH)]
    pub db_path: PathBuf,

    /// Log level
    #[arg(long, global = true, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, global = true, value_enum, default_value = "plain")]
    pub log_format: LogFormat,

    /// What to do
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the database and apply migrations
    Init,

    /// Create a profile
    Signup {
        /// Username for the new profile
        username: String,

        /// Security clearance level (10 and above is authority)
        #[arg(long, default_value_t = DEFAULT_SECURITY_LEVEL)]
        security_level: i64,

        /// Username of the member who referred this signup
        #[arg(long)]
        referred_by: Option<String>,
    },

    /// Register a resource
    Register {
        /// Owner's username
        #[arg(long)]
        user: String,

        /// Resource category
        #[arg(long, value_enum)]
        category: ResourceCategory,

        /// What the resource is, e.g. "Ford F-150 pickup"
        #[arg(long)]
        description: String,

        /// People or units the resource supports
        #[arg(long, default_value_t = 1)]
        capacity: u32,

        /// Free-form location description, e.g. "behind the library"
        #[arg(long)]
        location_note: Option<String>,

        /// Pinned coordinates as LAT,LON
        #[arg(long, value_parser = parse_geo_point)]
        at: Option<GeoPoint>,

        /// Availability percentage (0-100)
        #[arg(long, default_value_t = 100)]
        availability: i64,

        /// Category-specific detail as tagged JSON,
        /// e.g. '{"kind":"vehicle","seats":4}'
        #[arg(long)]
        detail: Option<String>,
    },

    /// Report a threat
    Report {
        /// Reporter's username
        #[arg(long)]
        user: String,

        /// Kind of threat
        #[arg(long, value_enum)]
        kind: ThreatKind,

        /// What was seen
        #[arg(long)]
        description: Option<String>,

        /// Sighting coordinates as LAT,LON
        #[arg(long, value_parser = parse_geo_point)]
        at: GeoPoint,
    },

    /// List resources or threats
    List {
        /// What to list
        #[command(subcommand)]
        target: ListTarget,
    },

    /// Confirm your resources for today
    Confirm {
        /// Confirming profile's username
        #[arg(long)]
        user: String,
    },

    /// Show a contribution score
    Score {
        /// Whose score to show
        #[arg(long)]
        user: String,
    },

    /// Export records to CSV or JSONL
    Export {
        /// Exporting profile's username
        #[arg(long)]
        user: String,

        /// Which records to export
        #[arg(long, value_enum)]
        target: ExportTarget,

        /// Output format
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Restrict resources to one category
        #[arg(long, value_enum)]
        category: Option<ResourceCategory>,

        /// Restrict threats to one kind
        #[arg(long, value_enum)]
        kind: Option<ThreatKind>,

        /// Only records at or after this timestamp (milliseconds since epoch)
        #[arg(long)]
        since_ms: Option<i64>,
    },
}

/// Listing targets.
#[derive(Subcommand, Debug)]
pub enum ListTarget {
    /// Registered resources
    Resources {
        /// Calling profile's username
        #[arg(long)]
        user: String,

        /// Only your own resources (implied for civil profiles)
        #[arg(long)]
        mine: bool,

        /// Restrict to one category
        #[arg(long, value_enum)]
        category: Option<ResourceCategory>,

        /// Reference point as LAT,LON
        #[arg(long, value_parser = parse_geo_point)]
        near: Option<GeoPoint>,

        /// Resolve the reference point from the location provider
        #[arg(long)]
        locate: bool,

        /// Radius in kilometers (defaults to 50 when a reference point is given)
        #[arg(long)]
        within: Option<f64>,
    },

    /// Reported threats (authority only)
    Threats {
        /// Calling profile's username
        #[arg(long)]
        user: String,

        /// Restrict to one kind
        #[arg(long, value_enum)]
        kind: Option<ThreatKind>,

        /// Reference point as LAT,LON
        #[arg(long, value_parser = parse_geo_point)]
        near: Option<GeoPoint>,

        /// Resolve the reference point from the location provider
        #[arg(long)]
        locate: bool,

        /// Radius in kilometers (defaults to 50 when a reference point is given)
        #[arg(long)]
        within: Option<f64>,
    },
}
