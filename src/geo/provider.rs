//! Reference-point resolution.
//!
//! A location provider is a single-shot request for the caller's position.
//! The filtering core never talks to one directly; CLI handlers resolve a
//! point first and hand the result down as a plain value.

use std::env;

use log::debug;

use super::GeoPoint;
use crate::config::LOCATION_ENV_VAR;
use crate::error_handling::LocateError;

/// A source of the caller's current position.
///
/// Resolution is one-shot; retry policy, if any, belongs to the caller.
pub trait LocationProvider {
    /// Resolves the current position, or fails with one of the enumerated
    /// reasons.
    fn resolve(&self) -> Result<GeoPoint, LocateError>;

    /// Name of this provider (for logging).
    fn name(&self) -> &'static str;
}

/// Reads the position from an environment variable (`LAT,LON`).
///
/// Stands in for a device location service: absent variable maps to a denied
/// request, unparsable content to an unavailable position.
pub struct EnvLocation {
    var: &'static str,
}

impl EnvLocation {
    /// Provider over the default `RESOURCE_RADAR_LOCATION` variable.
    pub fn new() -> Self {
        Self::from_var(LOCATION_ENV_VAR)
    }

    /// Provider over an arbitrary variable.
    pub fn from_var(var: &'static str) -> Self {
        Self { var }
    }
}

impl Default for EnvLocation {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationProvider for EnvLocation {
    fn resolve(&self) -> Result<GeoPoint, LocateError> {
        match env::var(self.var) {
            Ok(raw) => {
                let point: GeoPoint = raw
                    .parse()
                    .map_err(|e: crate::error_handling::CoordinateError| {
                        LocateError::PositionUnavailable(e.to_string())
                    })?;
                debug!("Resolved reference point {point} from ${}", self.var);
                Ok(point)
            }
            Err(env::VarError::NotPresent) => Err(LocateError::PermissionDenied),
            Err(env::VarError::NotUnicode(_)) => Err(LocateError::Unknown(format!(
                "${} is not valid unicode",
                self.var
            ))),
        }
    }

    fn name(&self) -> &'static str {
        "env"
    }
}
