//! Contribution scoring.
//!
//! Scores are an append-only event log; everything shown to the user (totals,
//! level, title) is derived at read time.

use strum_macros::EnumIter;

use crate::config::{
    LEVEL_STEP_POINTS, POINTS_MEMBER_REFERRED, POINTS_RESOURCES_CONFIRMED,
    POINTS_RESOURCE_REGISTERED, POINTS_THREAT_REPORTED,
};

/// Kind of scoreable contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ScoreEventKind {
    /// Registered a resource.
    ResourceRegistered,
    /// Reported a threat.
    ThreatReported,
    /// Confirmed resources for the day.
    ResourcesConfirmed,
    /// Referred a member who signed up.
    MemberReferred,
}

impl ScoreEventKind {
    /// Points this event is worth.
    pub fn points(&self) -> i64 {
        match self {
            ScoreEventKind::ResourceRegistered => POINTS_RESOURCE_REGISTERED,
            ScoreEventKind::ThreatReported => POINTS_THREAT_REPORTED,
            ScoreEventKind::ResourcesConfirmed => POINTS_RESOURCES_CONFIRMED,
            ScoreEventKind::MemberReferred => POINTS_MEMBER_REFERRED,
        }
    }

    /// Stable text form used in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreEventKind::ResourceRegistered => "resource_registered",
            ScoreEventKind::ThreatReported => "threat_reported",
            ScoreEventKind::ResourcesConfirmed => "resources_confirmed",
            ScoreEventKind::MemberReferred => "member_referred",
        }
    }

    /// Parses the stable text form.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "resource_registered" => Some(ScoreEventKind::ResourceRegistered),
            "threat_reported" => Some(ScoreEventKind::ThreatReported),
            "resources_confirmed" => Some(ScoreEventKind::ResourcesConfirmed),
            "member_referred" => Some(ScoreEventKind::MemberReferred),
            _ => None,
        }
    }
}

impl std::fmt::Display for ScoreEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregated contribution totals for one profile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreSummary {
    /// Resources registered.
    pub resources_registered: i64,
    /// Threats reported.
    pub threats_reported: i64,
    /// Daily confirmations made.
    pub confirmations: i64,
    /// Members referred.
    pub members_referred: i64,
    /// Sum of all event points.
    pub total_points: i64,
}

impl ScoreSummary {
    /// Contribution level; one level per [`LEVEL_STEP_POINTS`] points,
    /// starting at 1.
    pub fn level(&self) -> i64 {
        self.total_points / LEVEL_STEP_POINTS + 1
    }

    /// Points accumulated toward the next level.
    pub fn points_into_level(&self) -> i64 {
        self.total_points % LEVEL_STEP_POINTS
    }

    /// Title for the current level.
    pub fn title(&self) -> &'static str {
        let level = self.level();
        if level >= 10 {
            "Community Legend"
        } else if level >= 7 {
            "Resource Master"
        } else if level >= 5 {
            "Network Builder"
        } else if level >= 3 {
            "Active Contributor"
        } else if level >= 2 {
            "Helper"
        } else {
            "Newcomer"
        }
    }
}
