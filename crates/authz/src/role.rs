use std::str::FromStr;

use serde::{Deserialize, Serialize};

use rentora_core::DomainError;

/// Closed set of roles known to the platform.
///
/// Roles are a fixed enum rather than opaque strings: every authorization
/// decision in this crate is total over this set, and an unknown role name
/// simply fails to parse instead of silently matching nothing at check time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    TenantOwner,
    Admin,
    Manager,
    Employee,
    Staff,
}

impl Role {
    /// All roles, most senior first.
    pub const ALL: [Role; 5] = [
        Role::TenantOwner,
        Role::Admin,
        Role::Manager,
        Role::Employee,
        Role::Staff,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::TenantOwner => "tenant_owner",
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Employee => "employee",
            Role::Staff => "staff",
        }
    }

    /// Parse a role name, returning `None` for anything unrecognized.
    ///
    /// Callers that receive role names from the outside (route params, stored
    /// session blobs) go through here so that a bad name denies instead of
    /// panicking.
    pub fn from_name(name: &str) -> Option<Role> {
        match name {
            "tenant_owner" => Some(Role::TenantOwner),
            "admin" => Some(Role::Admin),
            "manager" => Some(Role::Manager),
            "employee" => Some(Role::Employee),
            "staff" => Some(Role::Staff),
            _ => None,
        }
    }

    /// Seniority level for display and auditing. Higher is more senior.
    ///
    /// This is informational only. User-management rules are written out
    /// explicitly in the engine rather than derived from level comparisons,
    /// so peer roles (admin managing admin) stay denied.
    pub fn level(&self) -> u8 {
        match self {
            Role::TenantOwner => 5,
            Role::Admin => 4,
            Role::Manager => 3,
            Role::Employee => 2,
            Role::Staff => 1,
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
        Role::from_name(s).ok_or_else(|| DomainError::validation(format!("unknown role: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_names_round_trip() {
        for role in Role::ALL {
            assert_eq!(Role::from_name(role.as_str()), Some(role));
            assert_eq!(role.as_str().parse::<Role>().ok(), Some(role));
        }
    }

    #[test]
    fn unknown_role_name_is_rejected() {
        assert_eq!(Role::from_name("superadmin"), None);
        assert_eq!(Role::from_name("Admin"), None);
        assert_eq!(Role::from_name(""), None);
        assert!("owner".parse::<Role>().is_err());
    }

    #[test]
    fn levels_are_strictly_ordered_by_seniority() {
        let levels: Vec<u8> = Role::ALL.iter().map(Role::level).collect();
        assert_eq!(levels, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn serde_uses_snake_case_names() {
        let json = serde_json::to_string(&Role::TenantOwner).unwrap();
        assert_eq!(json, "\"tenant_owner\"");
        let back: Role = serde_json::from_str("\"staff\"").unwrap();
        assert_eq!(back, Role::Staff);
    }
}
