//! Authorization explanations (audit trail).
//!
//! These helpers answer the question "why was this allowed or denied?" with
//! enough detail to debug a support ticket without re-deriving the decision
//! by hand. The decision logic itself lives in [`crate::engine`] and the
//! sources; explanations only narrate it.

use serde::Serialize;

use crate::action::Action;
use crate::resource::{Resource, Section};
use crate::role::Role;
use crate::session::Actor;
use crate::source::{ActorSource, PermissionSource};
use crate::table;

/// Which side answered for the actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionSource {
    RoleTable,
    GrantList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialKind {
    MissingAction,
    MissingGrant,
    SectionHidden,
}

/// Detailed reason why access was denied.
#[derive(Debug, Clone, Serialize)]
pub struct DenialReason {
    pub kind: DenialKind,
    pub message: String,
    pub suggestions: Vec<String>,
}

/// Detailed explanation of an access decision.
#[derive(Debug, Clone, Serialize)]
pub struct AccessExplanation {
    /// Whether access was granted.
    pub granted: bool,

    /// Which side answered: the static role table or the dynamic grant list.
    pub source: DecisionSource,

    /// The actor's role.
    pub role: Role,

    /// The actor's stored permission strings, verbatim.
    pub grants: Vec<String>,

    /// Actions the deciding source admits on the resource in question.
    /// Empty for section checks.
    pub allowed: Vec<Action>,

    /// Human-readable reason for the decision.
    pub reason: String,

    /// If denied, what was missing.
    pub denial: Option<DenialReason>,
}

/// Which side answers for `actor`: the grant list when one is present, the
/// role table otherwise.
pub fn decision_source(actor: &Actor) -> DecisionSource {
    match actor.permission_source() {
        ActorSource::Static(_) => DecisionSource::RoleTable,
        ActorSource::Dynamic(_) => DecisionSource::GrantList,
    }
}

fn admitted_actions(actor: &Actor, resource: Resource) -> Vec<Action> {
    match actor.permission_source() {
        ActorSource::Static(source) => {
            table::actions_for(source.role(), resource).iter().collect()
        }
        ActorSource::Dynamic(source) => Action::ALL
            .into_iter()
            .filter(|a| source.allows(resource, *a))
            .collect(),
    }
}

/// Explain whether the actor may take `action` on `resource`.
pub fn explain_resource_access(
    actor: &Actor,
    resource: Resource,
    action: Action,
) -> AccessExplanation {
    let source = decision_source(actor);
    let granted = actor.permits(resource, action);
    let allowed = admitted_actions(actor, resource);
    let role = actor.role();

    let (reason, denial) = match (granted, source) {
        (true, DecisionSource::RoleTable) => (
            format!("role '{role}' holds '{action}' on '{resource}' in the role table"),
            None,
        ),
        (true, DecisionSource::GrantList) => (
            format!("the user's permission list admits '{action}' on '{resource}'"),
            None,
        ),
        (false, DecisionSource::RoleTable) => (
            format!("role '{role}' does not hold '{action}' on '{resource}'"),
            Some(DenialReason {
                kind: DenialKind::MissingAction,
                message: format!("Missing action: '{action}' on '{resource}'"),
                suggestions: vec![
                    format!("Assign a role whose table row covers '{action}' on '{resource}'"),
                    format!(
                        "Attach the permission '{resource}:{action}' to the user (the list then replaces the role table)"
                    ),
                ],
            }),
        ),
        (false, DecisionSource::GrantList) => (
            format!(
                "the user's permission list is present and does not admit '{action}' on '{resource}'"
            ),
            Some(DenialReason {
                kind: DenialKind::MissingGrant,
                message: format!("Missing grant: '{resource}:{action}'"),
                suggestions: vec![
                    format!(
                        "Add '{resource}:{action}' or '{resource}:*' to the user's permission list"
                    ),
                    "Clear the user's permission list to fall back to the role table".to_string(),
                ],
            }),
        ),
    };

    AccessExplanation {
        granted,
        source,
        role,
        grants: actor.grants().raw().to_vec(),
        allowed,
        reason,
        denial,
    }
}

/// Explain whether the actor may open `section`.
pub fn explain_section_access(actor: &Actor, section: Section) -> AccessExplanation {
    let source = decision_source(actor);
    let granted = actor.can_view_section(section);
    let role = actor.role();

    let (reason, denial) = if granted {
        (
            match source {
                DecisionSource::RoleTable => {
                    format!("role '{role}' lists section '{section}' in the role table")
                }
                DecisionSource::GrantList => {
                    format!("the user's permission list mentions section '{section}'")
                }
            },
            None,
        )
    } else {
        let suggestions = match (source, section.resource()) {
            (DecisionSource::RoleTable, _) => vec![
                format!("Assign a role whose table row lists section '{section}'"),
            ],
            (DecisionSource::GrantList, Some(resource)) => vec![
                format!("Add a '{resource}:*' or '{resource}:<action>' grant to the user's list"),
                "Clear the user's permission list to fall back to the role table".to_string(),
            ],
            (DecisionSource::GrantList, None) => vec![
                "Clear the user's permission list to fall back to the role table".to_string(),
            ],
        };
        (
            format!("section '{section}' is not visible to this user"),
            Some(DenialReason {
                kind: DenialKind::SectionHidden,
                message: format!("Section hidden: '{section}'"),
                suggestions,
            }),
        )
    };

    AccessExplanation {
        granted,
        source,
        role,
        grants: actor.grants().raw().to_vec(),
        allowed: Vec::new(),
        reason,
        denial,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grant::GrantSet;

    #[test]
    fn decision_source_tracks_grant_list_presence() {
        let table_backed = Actor::with_role(Role::Admin);
        assert_eq!(decision_source(&table_backed), DecisionSource::RoleTable);

        let list_backed = Actor::new(
            Role::Admin,
            GrantSet::from_raw(vec!["users:read".to_string()]),
        );
        assert_eq!(decision_source(&list_backed), DecisionSource::GrantList);
    }

    #[test]
    fn static_grant_is_narrated_from_the_table() {
        let actor = Actor::with_role(Role::Manager);
        let explanation = explain_resource_access(&actor, Resource::Inventory, Action::Create);
        assert!(explanation.granted);
        assert_eq!(explanation.source, DecisionSource::RoleTable);
        assert!(explanation.denial.is_none());
        assert!(explanation.allowed.contains(&Action::Create));
    }

    #[test]
    fn static_denial_suggests_a_role_or_a_grant() {
        let actor = Actor::with_role(Role::Staff);
        let explanation = explain_resource_access(&actor, Resource::Inventory, Action::Read);
        assert!(!explanation.granted);
        let denial = explanation.denial.unwrap();
        assert_eq!(denial.kind, DenialKind::MissingAction);
        assert_eq!(denial.suggestions.len(), 2);
        assert!(explanation.allowed.is_empty());
    }

    #[test]
    fn dynamic_denial_points_at_the_grant_list() {
        let actor = Actor::new(
            Role::Admin,
            GrantSet::from_raw(vec!["rentals:read".to_string()]),
        );
        let explanation = explain_resource_access(&actor, Resource::Users, Action::Read);
        assert!(!explanation.granted);
        assert_eq!(explanation.source, DecisionSource::GrantList);
        assert_eq!(explanation.denial.unwrap().kind, DenialKind::MissingGrant);
        assert_eq!(explanation.grants, vec!["rentals:read".to_string()]);
    }

    #[test]
    fn dynamic_allowed_actions_expand_manage() {
        let actor = Actor::new(
            Role::Staff,
            GrantSet::from_raw(vec!["inventory:manage".to_string()]),
        );
        let explanation = explain_resource_access(&actor, Resource::Inventory, Action::Delete);
        assert!(explanation.granted);
        assert_eq!(explanation.allowed.len(), Action::ALL.len());
    }

    #[test]
    fn hidden_section_is_reported_with_its_kind() {
        let actor = Actor::with_role(Role::Employee);
        let explanation = explain_section_access(&actor, Section::Audit);
        assert!(!explanation.granted);
        assert_eq!(explanation.denial.unwrap().kind, DenialKind::SectionHidden);
    }

    #[test]
    fn explanations_serialize_with_snake_case_tags() {
        let actor = Actor::with_role(Role::Staff);
        let explanation = explain_resource_access(&actor, Resource::Users, Action::Delete);
        let json = serde_json::to_value(&explanation).unwrap();
        assert_eq!(json["source"], "role_table");
        assert_eq!(json["denial"]["kind"], "missing_action");
        assert_eq!(json["role"], "staff");
    }
}
