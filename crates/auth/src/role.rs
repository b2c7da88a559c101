//! Staff roles.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use vettrack_core::DomainError;

/// Role assigned to a staff account.
///
/// New accounts that have never been assigned a role default to `Worker`
/// (the least privileged role covering day-to-day clinic work).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Cashier,
    #[default]
    Worker,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Cashier, Role::Worker];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Cashier => "cashier",
            Role::Worker => "worker",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "cashier" => Ok(Role::Cashier),
            "worker" => Ok(Role::Worker),
            other => Err(DomainError::validation_field(
                "role",
                format!("unknown role '{other}'"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(
            serde_json::from_str::<Role>("\"cashier\"").unwrap(),
            Role::Cashier
        );
    }

    #[test]
    fn default_role_is_worker() {
        assert_eq!(Role::default(), Role::Worker);
    }

    #[test]
    fn unknown_role_string_is_rejected() {
        assert!("manager".parse::<Role>().is_err());
    }
}
