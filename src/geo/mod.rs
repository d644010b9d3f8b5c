//! Geographic primitives: points, great-circle distance, coordinate parsing.
//!
//! The distance calculator is deliberately validation-free; `GeoPoint`'s
//! `FromStr` implementation is the validation boundary, and every coordinate
//! that enters through the CLI passes through it.

mod filter;
mod provider;

pub use filter::{filter_within_radius, DistanceQuery, Located};
pub use provider::{EnvLocation, LocationProvider};

use std::str::FromStr;

use crate::error_handling::CoordinateError;

/// Mean Earth radius in kilometers, as used by the Haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographic coordinate pair in decimal degrees.
///
/// Fields are public and unchecked: records loaded from storage construct
/// points directly, and the distance calculator accepts whatever it is handed.
/// Input arriving from users goes through [`GeoPoint::from_str`], which
/// enforces finiteness and the conventional ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Latitude in degrees, conventionally -90..=90.
    pub latitude: f64,
    /// Longitude in degrees, conventionally -180..=180.
    pub longitude: f64,
}

impl GeoPoint {
    /// Builds a point, rejecting non-finite or out-of-range components.
    pub fn checked(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(CoordinateError::NonFinite);
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

impl FromStr for GeoPoint {
    type Err = CoordinateError;

    /// Parses `"LAT,LON"` with validation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat_raw, lon_raw) = s
            .split_once(',')
            .ok_or_else(|| CoordinateError::Malformed(s.to_string()))?;
        let latitude: f64 = lat_raw
            .trim()
            .parse()
            .map_err(|_| CoordinateError::Malformed(s.to_string()))?;
        let longitude: f64 = lon_raw
            .trim()
            .parse()
            .map_err(|_| CoordinateError::Malformed(s.to_string()))?;
        Self::checked(latitude, longitude)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6},{:.6}", self.latitude, self.longitude)
    }
}

/// Great-circle distance between two points in kilometers (Haversine).
///
/// Symmetric in its arguments and zero for coincident points. Performs no
/// validation: non-finite input yields a non-finite (but non-panicking)
/// result, and out-of-range degrees yield a mathematically defined but
/// meaningless distance. Callers validate upstream.
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1_rad = a.latitude.to_radians();
    let lat2_rad = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}
