//! `rentora-authz`: pure authorization boundary for the Rentora dashboard.
//!
//! This crate is intentionally decoupled from HTTP and storage. Everything in
//! it is a stateless lookup: the static role table answers for users without
//! stored permissions, a user's own grant list answers when one is present,
//! and the two are never merged. Unknown roles, resources, actions and grant
//! strings deny instead of erroring.

pub mod action;
pub mod catalog;
pub mod engine;
pub mod explain;
pub mod grant;
pub mod resource;
pub mod role;
pub mod session;
pub mod source;
pub mod table;

pub use action::{Action, ActionSet};
pub use catalog::{ResourceGrant, RoleDefinition, role_catalog, role_definition};
pub use engine::{
    allowed_actions, can_access, can_access_named, can_manage_permissions, can_manage_user,
    can_modify_role_permissions, can_view_audit, has_permission, has_permission_named,
    has_resource_action, has_resource_action_named, role_dashboard_url,
};
pub use explain::{
    AccessExplanation, DecisionSource, DenialKind, DenialReason, decision_source,
    explain_resource_access, explain_section_access,
};
pub use grant::{Grant, GrantSet};
pub use resource::{Resource, Section};
pub use role::Role;
pub use session::{Actor, SessionClaims, SessionValidationError, validate_claims};
pub use source::{ActorSource, DynamicGrantSource, PermissionSource, StaticRoleSource};
pub use table::{ROLE_GRANTS, RoleGrants, actions_for, sections_for};
