//! User roles
//!
//! Every authenticated session carries exactly one role, and every
//! role-restricted dashboard zone requires exactly one role.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Dashboard role of an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Implementing partner (Swinfy): verifies submissions and media
    Admin,
    /// Sponsor (UWH): read-only reporting
    Sponsor,
    /// Field trainer: submits session reports
    Trainer,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Sponsor, Role::Trainer];

    /// Wire name used by the API and in stored sessions.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Sponsor => "sponsor",
            Role::Trainer => "trainer",
        }
    }

    /// Human-readable role name.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Swinfy admin",
            Role::Sponsor => "UWH sponsor",
            Role::Trainer => "Trainer",
        }
    }

    /// Root of the role's own dashboard zone.
    pub fn landing_path(&self) -> &'static str {
        match self {
            Role::Admin => "/swinfy",
            Role::Sponsor => "/uwh",
            Role::Trainer => "/trainer",
        }
    }

    /// The role's dashboard page.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Admin => "/swinfy/dashboard",
            Role::Sponsor => "/uwh/dashboard",
            Role::Trainer => "/trainer/dashboard",
        }
    }

    /// CLI command group serving this role's views.
    pub fn command(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Sponsor => "sponsor",
            Role::Trainer => "trainer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "sponsor" => Ok(Role::Sponsor),
            "trainer" => Ok(Role::Trainer),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips_through_wire_name() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>(), Ok(role));
        }
    }

    #[test]
    fn test_role_rejects_unknown_and_miscased_names() {
        assert!("Admin".parse::<Role>().is_err());
        assert!("sponser".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_serde_lowercase() {
        let json = serde_json::to_string(&Role::Sponsor).unwrap();
        assert_eq!(json, "\"sponsor\"");
        let role: Role = serde_json::from_str("\"trainer\"").unwrap();
        assert_eq!(role, Role::Trainer);
    }

    #[test]
    fn test_dashboard_is_inside_landing_zone() {
        for role in Role::ALL {
            assert!(role.dashboard_path().starts_with(role.landing_path()));
        }
    }
}
