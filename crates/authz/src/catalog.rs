//! Role catalog for auditing and display.
//!
//! A read-only view over the static table, shaped for rendering in an admin
//! screen or dumping as JSON.

use serde::Serialize;

use crate::action::Action;
use crate::resource::{Resource, Section};
use crate::role::Role;
use crate::table::{self, ROLE_GRANTS};

/// Actions a role holds on one resource, in display order.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceGrant {
    pub resource: Resource,
    pub actions: Vec<Action>,
}

/// One role's full reach, for audit and display.
#[derive(Debug, Clone, Serialize)]
pub struct RoleDefinition {
    pub role: Role,
    pub level: u8,
    pub description: String,
    pub sections: Vec<Section>,
    pub grants: Vec<ResourceGrant>,
}

fn role_description(role: Role) -> &'static str {
    match role {
        Role::TenantOwner => "Owner with unrestricted reach, including settings and permissions",
        Role::Admin => "Administrator for daily operations and user management",
        Role::Manager => "Operations manager for inventory, customers, rentals and reports",
        Role::Employee => "Desk staff handling day-to-day rentals and customer records",
        Role::Staff => "Support staff with read-only access to customers and rentals",
    }
}

fn definition(role: Role) -> RoleDefinition {
    RoleDefinition {
        role,
        level: role.level(),
        description: role_description(role).to_string(),
        sections: table::sections_for(role).to_vec(),
        grants: Resource::ALL
            .into_iter()
            .filter_map(|resource| {
                let set = table::actions_for(role, resource);
                (!set.is_empty()).then(|| ResourceGrant {
                    resource,
                    actions: set.iter().collect(),
                })
            })
            .collect(),
    }
}

/// Every role's definition, most senior first.
pub fn role_catalog() -> Vec<RoleDefinition> {
    ROLE_GRANTS.iter().map(|row| definition(row.role)).collect()
}

/// The definition of a single role.
pub fn role_definition(role: Role) -> RoleDefinition {
    definition(role)
}
