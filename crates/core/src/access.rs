//! Access levels used to gate routes.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Closed set of roles a request can act under.
///
/// `Anonymous` describes a request with no valid identity attached. No stored
/// user ever holds it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessLevel {
    Admin,
    User,
    Anonymous,
}

impl AccessLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessLevel::Admin => "Admin",
            AccessLevel::User => "User",
            AccessLevel::Anonymous => "Anonymous",
        }
    }
}

impl core::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(AccessLevel::Admin),
            "User" => Ok(AccessLevel::User),
            "Anonymous" => Ok(AccessLevel::Anonymous),
            other => Err(DomainError::validation(format!("unknown access level '{other}'"))),
        }
    }
}
