//! Static role grants.
//!
//! The table is declarative data, not branching logic: adding or adjusting a
//! role's reach means editing a row here, and every lookup is fail-closed
//! (roles without a row, or resources without an entry, resolve to nothing).

use crate::action::{Action, ActionSet};
use crate::resource::{Resource, Section};
use crate::role::Role;

/// One row of the static table: the sections a role may open and the actions
/// it may take per resource.
#[derive(Debug, Clone, Copy)]
pub struct RoleGrants {
    pub role: Role,
    pub sections: &'static [Section],
    pub actions: &'static [(Resource, ActionSet)],
}

const CRUD: ActionSet = ActionSet::of(&[
    Action::Create,
    Action::Read,
    Action::Update,
    Action::Delete,
]);

const FULL: ActionSet = ActionSet::of(&[
    Action::Create,
    Action::Read,
    Action::Update,
    Action::Delete,
    Action::Import,
    Action::Export,
]);

const MANAGE: ActionSet = ActionSet::of(&[Action::Manage]);

/// The complete table, most senior role first.
pub const ROLE_GRANTS: &[RoleGrants] = &[
    RoleGrants {
        role: Role::TenantOwner,
        sections: &Section::ALL,
        actions: &[
            (Resource::Users, MANAGE),
            (Resource::Audit, MANAGE),
            (Resource::Inventory, MANAGE),
            (Resource::Customers, MANAGE),
            (Resource::Rentals, MANAGE),
            (Resource::Reports, MANAGE),
            (Resource::Settings, MANAGE),
            (Resource::Permissions, MANAGE),
        ],
    },
    RoleGrants {
        role: Role::Admin,
        sections: &[
            Section::Dashboard,
            Section::Users,
            Section::Audit,
            Section::Inventory,
            Section::Customers,
            Section::Rentals,
            Section::Reports,
        ],
        actions: &[
            (Resource::Users, CRUD),
            (Resource::Audit, ActionSet::of(&[Action::Read, Action::Export])),
            (Resource::Inventory, FULL),
            (Resource::Customers, FULL),
            (
                Resource::Rentals,
                ActionSet::of(&[
                    Action::Create,
                    Action::Read,
                    Action::Update,
                    Action::Delete,
                    Action::Export,
                ]),
            ),
            (Resource::Reports, ActionSet::of(&[Action::Read, Action::Export])),
        ],
    },
    RoleGrants {
        role: Role::Manager,
        sections: &[
            Section::Dashboard,
            Section::Inventory,
            Section::Customers,
            Section::Rentals,
            Section::Reports,
        ],
        actions: &[
            (Resource::Inventory, FULL),
            (Resource::Customers, CRUD),
            (Resource::Rentals, CRUD),
            (Resource::Reports, ActionSet::of(&[Action::Read, Action::Export])),
        ],
    },
    RoleGrants {
        role: Role::Employee,
        sections: &[
            Section::Dashboard,
            Section::Inventory,
            Section::Customers,
            Section::Rentals,
        ],
        actions: &[
            (
                Resource::Inventory,
                ActionSet::of(&[Action::Create, Action::Read, Action::Update]),
            ),
            (
                Resource::Customers,
                ActionSet::of(&[Action::Create, Action::Read, Action::Update]),
            ),
            (
                Resource::Rentals,
                ActionSet::of(&[Action::Create, Action::Read, Action::Update]),
            ),
        ],
    },
    RoleGrants {
        role: Role::Staff,
        sections: &[Section::Dashboard, Section::Customers, Section::Rentals],
        actions: &[
            (Resource::Customers, ActionSet::of(&[Action::Read])),
            (Resource::Rentals, ActionSet::of(&[Action::Read])),
        ],
    },
];

fn find(role: Role) -> Option<&'static RoleGrants> {
    ROLE_GRANTS.iter().find(|row| row.role == role)
}

/// Sections the role may open, or an empty slice for roles without a row.
pub fn sections_for(role: Role) -> &'static [Section] {
    find(role).map(|row| row.sections).unwrap_or(&[])
}

/// Actions the role holds on `resource`, or the empty set.
pub fn actions_for(role: Role, resource: Resource) -> ActionSet {
    find(role)
        .and_then(|row| {
            row.actions
                .iter()
                .find(|(r, _)| *r == resource)
                .map(|(_, set)| *set)
        })
        .unwrap_or(ActionSet::EMPTY)
}
