use std::str::FromStr;

use serde::{Deserialize, Serialize};

use rentora_core::DomainError;

/// Resources that actions are checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Users,
    Audit,
    Inventory,
    Customers,
    Rentals,
    Reports,
    Settings,
    Permissions,
}

impl Resource {
    pub const ALL: [Resource; 8] = [
        Resource::Users,
        Resource::Audit,
        Resource::Inventory,
        Resource::Customers,
        Resource::Rentals,
        Resource::Reports,
        Resource::Settings,
        Resource::Permissions,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Users => "users",
            Resource::Audit => "audit",
            Resource::Inventory => "inventory",
            Resource::Customers => "customers",
            Resource::Rentals => "rentals",
            Resource::Reports => "reports",
            Resource::Settings => "settings",
            Resource::Permissions => "permissions",
        }
    }

    /// Parse a resource name, returning `None` for anything unrecognized.
    pub fn from_name(name: &str) -> Option<Resource> {
        match name {
            "users" => Some(Resource::Users),
            "audit" => Some(Resource::Audit),
            "inventory" => Some(Resource::Inventory),
            "customers" => Some(Resource::Customers),
            "rentals" => Some(Resource::Rentals),
            "reports" => Some(Resource::Reports),
            "settings" => Some(Resource::Settings),
            "permissions" => Some(Resource::Permissions),
            _ => None,
        }
    }
}

impl core::fmt::Display for Resource {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resource {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Resource::from_name(s)
            .ok_or_else(|| DomainError::validation(format!("unknown resource: {s}")))
    }
}

/// Navigable sections of the dashboard.
///
/// Every resource has a section of the same name; `Dashboard` is the landing
/// section and maps to no resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Dashboard,
    Users,
    Audit,
    Inventory,
    Customers,
    Rentals,
    Reports,
    Settings,
    Permissions,
}

impl Section {
    pub const ALL: [Section; 9] = [
        Section::Dashboard,
        Section::Users,
        Section::Audit,
        Section::Inventory,
        Section::Customers,
        Section::Rentals,
        Section::Reports,
        Section::Settings,
        Section::Permissions,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Users => "users",
            Section::Audit => "audit",
            Section::Inventory => "inventory",
            Section::Customers => "customers",
            Section::Rentals => "rentals",
            Section::Reports => "reports",
            Section::Settings => "settings",
            Section::Permissions => "permissions",
        }
    }

    /// Parse a section name, returning `None` for anything unrecognized.
    pub fn from_name(name: &str) -> Option<Section> {
        match name {
            "dashboard" => Some(Section::Dashboard),
            "users" => Some(Section::Users),
            "audit" => Some(Section::Audit),
            "inventory" => Some(Section::Inventory),
            "customers" => Some(Section::Customers),
            "rentals" => Some(Section::Rentals),
            "reports" => Some(Section::Reports),
            "settings" => Some(Section::Settings),
            "permissions" => Some(Section::Permissions),
            _ => None,
        }
    }

    /// The backing resource, if any. The landing section has none.
    pub fn resource(&self) -> Option<Resource> {
        match self {
            Section::Dashboard => None,
            Section::Users => Some(Resource::Users),
            Section::Audit => Some(Resource::Audit),
            Section::Inventory => Some(Resource::Inventory),
            Section::Customers => Some(Resource::Customers),
            Section::Rentals => Some(Resource::Rentals),
            Section::Reports => Some(Resource::Reports),
            Section::Settings => Some(Resource::Settings),
            Section::Permissions => Some(Resource::Permissions),
        }
    }
}

impl core::fmt::Display for Section {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::from_name(s)
            .ok_or_else(|| DomainError::validation(format!("unknown section: {s}")))
    }
}
