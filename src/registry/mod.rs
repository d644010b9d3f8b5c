//! Domain records: profiles, resources, threats, and the contribution score.

mod category;
mod profile;
mod resource;
mod score;
mod threat;

pub use category::{ResourceCategory, ThreatKind};
pub use profile::{ProfileRecord, Role};
pub use resource::{NewResource, ResourceDetail, ResourceRecord};
pub use score::{ScoreEventKind, ScoreSummary};
pub use threat::{NewThreat, ThreatRecord};
