//! Resource records and their category-specific detail payloads.

use serde::{Deserialize, Serialize};

use super::ResourceCategory;
use crate::geo::{GeoPoint, Located};

/// Category-specific attributes of a resource.
///
/// One variant per [`ResourceCategory`], each carrying only the fields that
/// category needs. Serialized into the `detail` column as tagged JSON; the
/// tag must agree with the record's category column, which registration
/// enforces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResourceDetail {
    /// Passenger or cargo vehicle.
    Vehicle {
        /// Seats available, driver excluded.
        seats: u32,
    },
    /// Power source.
    Energy {
        /// Sustained output in kilowatts.
        output_kw: f64,
    },
    /// Medical skill or stock.
    Medical {
        /// Specialty or supply description, e.g. "paramedic" or "insulin".
        specialty: String,
    },
    /// Sheltering space.
    Shelter {
        /// Beds (or bedrolls) on offer.
        beds: u32,
    },
    /// Consumable stock.
    Supply {
        /// Units on hand.
        units: u32,
    },
    /// People offering their time.
    Labour {
        /// Number of people.
        headcount: u32,
    },
    /// Anything that fits no other category.
    Other {
        /// Free-form note.
        note: String,
    },
}

impl ResourceDetail {
    /// The category this payload belongs to.
    pub fn category(&self) -> ResourceCategory {
        match self {
            ResourceDetail::Vehicle { .. } => ResourceCategory::Vehicle,
            ResourceDetail::Energy { .. } => ResourceCategory::Energy,
            ResourceDetail::Medical { .. } => ResourceCategory::Medical,
            ResourceDetail::Shelter { .. } => ResourceCategory::Shelter,
            ResourceDetail::Supply { .. } => ResourceCategory::Supply,
            ResourceDetail::Labour { .. } => ResourceCategory::Labour,
            ResourceDetail::Other { .. } => ResourceCategory::Other,
        }
    }

    /// Default payload for a category, seeded from the declared capacity.
    ///
    /// Used when a resource is registered without an explicit `--detail`.
    pub fn default_for(category: ResourceCategory, capacity: u32) -> Self {
        match category {
            ResourceCategory::Vehicle => ResourceDetail::Vehicle { seats: capacity },
            ResourceCategory::Energy => ResourceDetail::Energy {
                output_kw: f64::from(capacity),
            },
            ResourceCategory::Medical => ResourceDetail::Medical {
                specialty: String::from("general"),
            },
            ResourceCategory::Shelter => ResourceDetail::Shelter { beds: capacity },
            ResourceCategory::Supply => ResourceDetail::Supply { units: capacity },
            ResourceCategory::Labour => ResourceDetail::Labour {
                headcount: capacity,
            },
            ResourceCategory::Other => ResourceDetail::Other {
                note: String::new(),
            },
        }
    }
}

/// A resource as stored, joined with its owner's username.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceRecord {
    /// Row id.
    pub id: i64,
    /// Owning profile id.
    pub owner: i64,
    /// Owning profile's username.
    pub owner_username: String,
    /// Category column; always agrees with `detail`.
    pub category: ResourceCategory,
    /// Human description, e.g. "Ford F-150 pickup".
    pub description: String,
    /// People/units the resource supports.
    pub capacity: i64,
    /// Free-form location description ("behind the library").
    pub location_note: Option<String>,
    /// Latitude, if the owner pinned one.
    pub latitude: Option<f64>,
    /// Longitude, if the owner pinned one.
    pub longitude: Option<f64>,
    /// Current availability, 0..=100.
    pub availability_percent: i64,
    /// Category-specific attributes.
    pub detail: ResourceDetail,
    /// Registration time, milliseconds since the Unix epoch.
    pub created_at_ms: i64,
    /// Last daily confirmation, if any.
    pub confirmed_at_ms: Option<i64>,
}

impl ResourceRecord {
    /// Whether any of the resource is currently available.
    pub fn is_available(&self) -> bool {
        self.availability_percent > 0
    }
}

impl Located for ResourceRecord {
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

/// A resource about to be inserted.
#[derive(Debug, Clone)]
pub struct NewResource {
    /// Owning profile id.
    pub owner: i64,
    /// Category column.
    pub category: ResourceCategory,
    /// Human description.
    pub description: String,
    /// Declared capacity.
    pub capacity: i64,
    /// Free-form location description.
    pub location_note: Option<String>,
    /// Pinned position, already validated at the input boundary.
    pub position: Option<GeoPoint>,
    /// Availability, 0..=100.
    pub availability_percent: i64,
    /// Category-specific attributes; must agree with `category`.
    pub detail: ResourceDetail,
    /// Registration time.
    pub created_at_ms: i64,
}
