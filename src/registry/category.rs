//! Resource categories and threat kinds.
//!
//! Both sets are closed: the storage layer round-trips them as text, and an
//! unrecognized stored value is a decode error rather than a new category.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// Category of a registered resource.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, EnumIter, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ResourceCategory {
    /// Cars, trucks, boats -- anything that moves people or goods.
    Vehicle,
    /// Generators, batteries, fuel.
    Energy,
    /// Medical skills and supplies.
    Medical,
    /// Rooms, beds, buildings.
    Shelter,
    /// Food, water, tools, consumables.
    Supply,
    /// Hands and time.
    Labour,
    /// Everything else.
    Other,
}

impl ResourceCategory {
    /// Stable text form used in storage and export.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceCategory::Vehicle => "vehicle",
            ResourceCategory::Energy => "energy",
            ResourceCategory::Medical => "medical",
            ResourceCategory::Shelter => "shelter",
            ResourceCategory::Supply => "supply",
            ResourceCategory::Labour => "labour",
            ResourceCategory::Other => "other",
        }
    }

    /// Parses the stable text form.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "vehicle" => Some(ResourceCategory::Vehicle),
            "energy" => Some(ResourceCategory::Energy),
            "medical" => Some(ResourceCategory::Medical),
            "shelter" => Some(ResourceCategory::Shelter),
            "supply" => Some(ResourceCategory::Supply),
            "labour" => Some(ResourceCategory::Labour),
            "other" => Some(ResourceCategory::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a reported threat.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, EnumIter, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ThreatKind {
    /// Unidentified people or activity worth a second look.
    SuspiciousActivity,
    /// Unmanned aircraft sighting.
    Drone,
    /// Blocked road or passage.
    Roadblock,
    /// Fire, flood, chemical or structural hazard.
    Hazard,
    /// Everything else.
    Other,
}

impl ThreatKind {
    /// Stable text form used in storage and export.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThreatKind::SuspiciousActivity => "suspicious_activity",
            ThreatKind::Drone => "drone",
            ThreatKind::Roadblock => "roadblock",
            ThreatKind::Hazard => "hazard",
            ThreatKind::Other => "other",
        }
    }

    /// Parses the stable text form.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "suspicious_activity" => Some(ThreatKind::SuspiciousActivity),
            "drone" => Some(ThreatKind::Drone),
            "roadblock" => Some(ThreatKind::Roadblock),
            "hazard" => Some(ThreatKind::Hazard),
            "other" => Some(ThreatKind::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for ThreatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_category_round_trip() {
        for category in ResourceCategory::iter() {
            assert_eq!(
                ResourceCategory::parse(category.as_str()),
                Some(category),
                "{category:?} should round-trip through its text form"
            );
        }
    }

    #[test]
    fn test_kind_round_trip() {
        for kind in ThreatKind::iter() {
            assert_eq!(ThreatKind::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_unknown_text_does_not_parse() {
        assert_eq!(ResourceCategory::parse("submarine"), None);
        assert_eq!(ThreatKind::parse("asteroid"), None);
    }
}
