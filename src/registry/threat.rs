//! Threat records.

use super::ThreatKind;
use crate::geo::{GeoPoint, Located};

/// A threat report as stored, joined with the reporter's username.
#[derive(Debug, Clone, PartialEq)]
pub struct ThreatRecord {
    /// Row id.
    pub id: i64,
    /// Reporting profile id.
    pub reporter: i64,
    /// Reporting profile's username.
    pub reporter_username: String,
    /// Kind of threat.
    pub kind: ThreatKind,
    /// What was seen.
    pub description: Option<String>,
    /// Latitude of the sighting. Nullable in storage for imported rows;
    /// the report operation itself requires a position.
    pub latitude: Option<f64>,
    /// Longitude of the sighting.
    pub longitude: Option<f64>,
    /// Report time, milliseconds since the Unix epoch.
    pub reported_at_ms: i64,
}

impl Located for ThreatRecord {
    fn position(&self) -> Option<GeoPoint> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(GeoPoint {
                latitude,
                longitude,
            }),
            _ => None,
        }
    }
}

/// A threat about to be inserted. Position is mandatory at this boundary.
#[derive(Debug, Clone)]
pub struct NewThreat {
    /// Reporting profile id.
    pub reporter: i64,
    /// Kind of threat.
    pub kind: ThreatKind,
    /// What was seen.
    pub description: Option<String>,
    /// Where it was seen.
    pub position: GeoPoint,
    /// Report time.
    pub reported_at_ms: i64,
}
