//! Authorization decisions.
//!
//! Every function here is a pure lookup against the static table or a grant
//! list. No IO, no panics, no stored state. Unknown names and roles without
//! table rows resolve to "denied" or "nothing", never to an error.

use crate::action::{Action, ActionSet};
use crate::grant::GrantSet;
use crate::resource::{Resource, Section};
use crate::role::Role;
use crate::table;

/// Whether `role` may open `section`.
pub fn has_permission(role: Role, section: Section) -> bool {
    table::sections_for(role).contains(&section)
}

/// Name-based variant of [`has_permission`] for callers holding raw strings.
/// Unknown names deny.
pub fn has_permission_named(role: &str, section: &str) -> bool {
    match (Role::from_name(role), Section::from_name(section)) {
        (Some(role), Some(section)) => has_permission(role, section),
        _ => false,
    }
}

/// Whether `role` may take `action` on `resource`.
///
/// A `manage` entry in the role's row permits every action on that resource.
pub fn has_resource_action(role: Role, resource: Resource, action: Action) -> bool {
    table::actions_for(role, resource).permits(action)
}

/// Name-based variant of [`has_resource_action`]. Unknown names deny.
pub fn has_resource_action_named(role: &str, resource: &str, action: &str) -> bool {
    match (
        Role::from_name(role),
        Resource::from_name(resource),
        Action::from_name(action),
    ) {
        (Some(role), Some(resource), Some(action)) => has_resource_action(role, resource, action),
        _ => false,
    }
}

/// The actions declared for `role` on `resource`, exactly as tabled.
///
/// A `manage` entry is returned as itself, not expanded into the actions it
/// implies; use [`has_resource_action`] to test reach.
pub fn allowed_actions(role: Role, resource: Resource) -> ActionSet {
    table::actions_for(role, resource)
}

/// Whether a dynamic grant list admits `section`.
///
/// The list is taken as the complete authority: the caller's role table row,
/// if any, plays no part here.
pub fn can_access(grants: &GrantSet, section: Section) -> bool {
    grants.allows_section(section)
}

/// Name-based variant of [`can_access`]. Unknown section names deny.
pub fn can_access_named(grants: &GrantSet, section: &str) -> bool {
    match Section::from_name(section) {
        Some(section) => can_access(grants, section),
        None => false,
    }
}

/// Whether `role` may open the permission-management surface at all.
pub fn can_manage_permissions(role: Role) -> bool {
    matches!(role, Role::TenantOwner | Role::Admin)
}

/// Whether `actor` may edit the stored permissions of users holding `target`.
///
/// Owners may edit every role, their own included. Admins may edit the roles
/// below them but never admins or owners, so peer lockout stays impossible.
pub fn can_modify_role_permissions(actor: Role, target: Role) -> bool {
    if !can_manage_permissions(actor) {
        return false;
    }
    match actor {
        Role::TenantOwner => true,
        Role::Admin => !matches!(target, Role::TenantOwner | Role::Admin),
        _ => false,
    }
}

/// Whether `actor` may administer (create, edit, deactivate) a user holding
/// `target`.
///
/// The rule is written out per role rather than derived from seniority
/// levels: owners manage everyone including other owners, admins manage only
/// the roles strictly below admin, and nobody else manages users at all.
pub fn can_manage_user(actor: Role, target: Role) -> bool {
    match actor {
        Role::TenantOwner => true,
        Role::Admin => !matches!(target, Role::Admin | Role::TenantOwner),
        _ => false,
    }
}

/// Whether `role` may read the audit trail.
pub fn can_view_audit(role: Role) -> bool {
    matches!(role, Role::TenantOwner | Role::Admin)
}

/// Landing URL after sign-in. Every role lands on the shared dashboard; the
/// sections visible there differ per role.
pub fn role_dashboard_url(role: Role) -> &'static str {
    match role {
        Role::TenantOwner | Role::Admin | Role::Manager | Role::Employee | Role::Staff => {
            "/dashboard"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn grant_set(entries: &[&str]) -> GrantSet {
        GrantSet::from_raw(entries.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn manager_creates_inventory_but_not_users() {
        assert!(has_resource_action(Role::Manager, Resource::Inventory, Action::Create));
        assert!(!has_resource_action(Role::Manager, Resource::Users, Action::Create));
    }

    #[test]
    fn staff_cannot_open_the_inventory_section() {
        assert!(!has_permission(Role::Staff, Section::Inventory));
        assert!(has_permission(Role::Staff, Section::Rentals));
    }

    #[test]
    fn employee_rental_actions_are_exactly_create_read_update() {
        let actions: Vec<Action> = allowed_actions(Role::Employee, Resource::Rentals)
            .iter()
            .collect();
        assert_eq!(actions, vec![Action::Create, Action::Read, Action::Update]);
        assert!(!has_resource_action(Role::Employee, Resource::Rentals, Action::Delete));
    }

    #[test]
    fn admin_never_reaches_settings_or_permissions() {
        for action in Action::ALL {
            assert!(!has_resource_action(Role::Admin, Resource::Settings, action));
            assert!(!has_resource_action(Role::Admin, Resource::Permissions, action));
        }
        assert!(!has_permission(Role::Admin, Section::Settings));
        assert!(!has_permission(Role::Admin, Section::Permissions));
    }

    #[test]
    fn owner_manage_entry_covers_actions_it_does_not_list() {
        let declared = allowed_actions(Role::TenantOwner, Resource::Settings);
        assert_eq!(declared.iter().collect::<Vec<_>>(), vec![Action::Manage]);
        assert!(has_resource_action(Role::TenantOwner, Resource::Settings, Action::Delete));
    }

    #[test]
    fn ungranted_pairs_deny_every_action() {
        for role in Role::ALL {
            for resource in Resource::ALL {
                if allowed_actions(role, resource).is_empty() {
                    for action in Action::ALL {
                        assert!(
                            !has_resource_action(role, resource, action),
                            "{role} on {resource} without a table entry must deny {action}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn unknown_names_always_deny() {
        assert!(!has_permission_named("superuser", "rentals"));
        assert!(!has_permission_named("admin", "moon_base"));
        assert!(!has_resource_action_named("admin", "users", "teleport"));
        assert!(!has_resource_action_named("", "", ""));
        assert!(!can_access_named(&grant_set(&["*"]), "moon_base"));
    }

    #[test]
    fn named_lookups_agree_with_typed_lookups() {
        for role in Role::ALL {
            for section in Section::ALL {
                assert_eq!(
                    has_permission_named(role.as_str(), section.as_str()),
                    has_permission(role, section)
                );
            }
            for resource in Resource::ALL {
                for action in Action::ALL {
                    let named = has_resource_action_named(
                        role.as_str(),
                        resource.as_str(),
                        action.as_str(),
                    );
                    assert_eq!(named, has_resource_action(role, resource, action));
                }
            }
        }
    }

    #[test]
    fn grant_list_is_the_sole_authority_when_present() {
        // A list that only mentions rentals withholds everything else, even
        // sections the holder's role row would have allowed.
        let grants = grant_set(&["rentals:read"]);
        assert!(can_access(&grants, Section::Rentals));
        assert!(can_access(&grants, Section::Dashboard));
        assert!(!can_access(&grants, Section::Inventory));
        assert!(!can_access(&grants, Section::Users));
    }

    #[test]
    fn empty_grant_list_admits_nothing() {
        let grants = GrantSet::default();
        for section in Section::ALL {
            assert!(!can_access(&grants, section));
        }
    }

    #[test]
    fn permission_management_gate() {
        assert!(can_manage_permissions(Role::TenantOwner));
        assert!(can_manage_permissions(Role::Admin));
        assert!(!can_manage_permissions(Role::Manager));
        assert!(!can_manage_permissions(Role::Employee));
        assert!(!can_manage_permissions(Role::Staff));
    }

    #[test]
    fn role_permission_editing_matrix() {
        let expectations = [
            (Role::TenantOwner, Role::TenantOwner, true),
            (Role::TenantOwner, Role::Admin, true),
            (Role::TenantOwner, Role::Manager, true),
            (Role::TenantOwner, Role::Employee, true),
            (Role::TenantOwner, Role::Staff, true),
            (Role::Admin, Role::TenantOwner, false),
            (Role::Admin, Role::Admin, false),
            (Role::Admin, Role::Manager, true),
            (Role::Admin, Role::Employee, true),
            (Role::Admin, Role::Staff, true),
        ];
        for (actor, target, expected) in expectations {
            assert_eq!(
                can_modify_role_permissions(actor, target),
                expected,
                "{actor} editing {target}"
            );
        }
        for actor in [Role::Manager, Role::Employee, Role::Staff] {
            for target in Role::ALL {
                assert!(!can_modify_role_permissions(actor, target));
            }
        }
    }

    #[test]
    fn user_management_matrix() {
        let expectations = [
            (Role::TenantOwner, Role::TenantOwner, true),
            (Role::TenantOwner, Role::Admin, true),
            (Role::TenantOwner, Role::Manager, true),
            (Role::TenantOwner, Role::Employee, true),
            (Role::TenantOwner, Role::Staff, true),
            (Role::Admin, Role::TenantOwner, false),
            (Role::Admin, Role::Admin, false),
            (Role::Admin, Role::Manager, true),
            (Role::Admin, Role::Employee, true),
            (Role::Admin, Role::Staff, true),
        ];
        for (actor, target, expected) in expectations {
            assert_eq!(can_manage_user(actor, target), expected, "{actor} managing {target}");
        }
        for actor in [Role::Manager, Role::Employee, Role::Staff] {
            for target in Role::ALL {
                assert!(!can_manage_user(actor, target), "{actor} managing {target}");
            }
        }
    }

    #[test]
    fn user_management_is_not_plain_seniority_comparison() {
        // A strict level comparison would deny owners managing fellow owners
        // and admit managers over staff; the explicit rule does the opposite.
        assert!(can_manage_user(Role::TenantOwner, Role::TenantOwner));
        assert!(!can_manage_user(Role::Manager, Role::Staff));
    }

    #[test]
    fn audit_visibility_gate() {
        for role in Role::ALL {
            assert_eq!(
                can_view_audit(role),
                matches!(role, Role::TenantOwner | Role::Admin)
            );
        }
    }

    #[test]
    fn every_role_lands_on_the_dashboard() {
        for role in Role::ALL {
            assert_eq!(role_dashboard_url(role), "/dashboard");
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: name-based checks never panic and deny all unknown input.
        #[test]
        fn arbitrary_names_never_panic(role in "\\PC*", section in "\\PC*", action in "\\PC*") {
            let _ = has_permission_named(&role, &section);
            let _ = has_resource_action_named(&role, &section, &action);
            if Role::from_name(&role).is_none() {
                prop_assert!(!has_permission_named(&role, &section));
                prop_assert!(!has_resource_action_named(&role, &section, &action));
            }
        }

        /// Property: decisions are pure, so asking twice gives the same answer.
        #[test]
        fn decisions_are_deterministic(
            role_idx in 0usize..5,
            resource_idx in 0usize..8,
            action_idx in 0usize..7,
        ) {
            let role = Role::ALL[role_idx];
            let resource = Resource::ALL[resource_idx];
            let action = Action::ALL[action_idx];
            let first = has_resource_action(role, resource, action);
            let second = has_resource_action(role, resource, action);
            prop_assert_eq!(first, second);
        }

        /// Property: an admitted resource is always named by some raw entry
        /// (or covered by the bare wildcard). Malformed strings grant nothing.
        #[test]
        fn admitted_resources_are_named_in_the_raw_list(
            entries in proptest::collection::vec("[a-z:*]{0,16}", 0..6),
        ) {
            let grants = GrantSet::from_raw(entries);
            for resource in Resource::ALL {
                for action in Action::ALL {
                    if grants.allows(resource, action) {
                        let named = grants.raw().iter().any(|raw| {
                            let raw = raw.trim();
                            raw == "*" || raw.starts_with(&format!("{}:", resource.as_str()))
                        });
                        prop_assert!(named);
                    }
                }
            }
        }
    }
}
