//! Proximity filtering over collections of optionally-located entities.

use super::{distance_km, GeoPoint};

/// Anything that may carry a geographic position.
///
/// Records whose latitude or longitude is absent return `None` and are
/// treated as unlocatable: they never match a proximity query, whatever the
/// radius.
pub trait Located {
    /// The entity's position, if both coordinates are present.
    fn position(&self) -> Option<GeoPoint>;
}

impl Located for GeoPoint {
    fn position(&self) -> Option<GeoPoint> {
        Some(*self)
    }
}

/// Criteria for one proximity query: a reference point and an inclusive
/// radius in kilometers.
///
/// Constructed per filter invocation by the calling layer; the filter itself
/// holds no state between calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceQuery {
    /// The point all distances are measured from.
    pub origin: GeoPoint,
    /// Inclusive maximum distance in kilometers.
    pub max_distance_km: f64,
}

/// Returns the entities within `query.max_distance_km` of `query.origin`.
///
/// The filter is stable (output preserves input order), does not mutate its
/// input, and excludes unlocatable entities unconditionally. A zero radius
/// keeps only entities whose computed distance is `<= 0`; a negative radius
/// matches nothing, since no entity has negative distance.
pub fn filter_within_radius<T>(entities: &[T], query: &DistanceQuery) -> Vec<T>
where
    T: Located + Clone,
{
    if query.max_distance_km < 0.0 {
        return Vec::new();
    }
    entities
        .iter()
        .filter(|entity| match entity.position() {
            Some(position) => distance_km(query.origin, position) <= query.max_distance_km,
            None => false,
        })
        .cloned()
        .collect()
}
