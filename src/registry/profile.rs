//! Profiles and the role derived from their security level.

use crate::config::AUTHORITY_SECURITY_LEVEL;

/// What a profile is allowed to see.
///
/// Never stored; always derived from the security level so that clearance
/// changes take effect on the next lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Regular community member: own resources, threat reporting.
    Civil,
    /// Coordinator: all resources, all threats, exports.
    Authority,
}

impl Role {
    /// Derives the role from a security level.
    pub fn from_security_level(level: i64) -> Self {
        if level >= AUTHORITY_SECURITY_LEVEL {
            Role::Authority
        } else {
            Role::Civil
        }
    }

    /// Lowercase text form for display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Civil => "civil",
            Role::Authority => "authority",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A profile as stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileRecord {
    /// Row id.
    pub id: i64,
    /// Unique username.
    pub username: String,
    /// Clearance level; 10 and above is authority.
    pub security_level: i64,
    /// Referring profile id, if any.
    pub referred_by: Option<i64>,
    /// Signup time, milliseconds since the Unix epoch.
    pub created_at_ms: i64,
    /// Last daily resource confirmation, if any.
    pub last_confirmed_ms: Option<i64>,
}

impl ProfileRecord {
    /// The role this profile currently holds.
    pub fn role(&self) -> Role {
        Role::from_security_level(self.security_level)
    }

    /// Whether this profile has authority clearance.
    pub fn is_authority(&self) -> bool {
        self.role() == Role::Authority
    }
}
