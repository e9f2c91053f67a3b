//! Permission sources.
//!
//! Exactly one source answers for an actor: the static role table, or the
//! dynamic grant list when one is present. The two are never merged, so a
//! grant list that withholds a resource really withholds it even when the
//! actor's role would have allowed it.

use crate::action::Action;
use crate::grant::GrantSet;
use crate::resource::{Resource, Section};
use crate::role::Role;
use crate::table;

/// Answers permission questions for one actor.
pub trait PermissionSource {
    fn allows(&self, resource: Resource, action: Action) -> bool;
    fn allows_section(&self, section: Section) -> bool;
}

/// Source backed by the static role table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticRoleSource {
    role: Role,
}

impl StaticRoleSource {
    pub fn new(role: Role) -> StaticRoleSource {
        StaticRoleSource { role }
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

impl PermissionSource for StaticRoleSource {
    fn allows(&self, resource: Resource, action: Action) -> bool {
        table::actions_for(self.role, resource).permits(action)
    }

    fn allows_section(&self, section: Section) -> bool {
        table::sections_for(self.role).contains(&section)
    }
}

/// Source backed by a user's dynamic grant list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DynamicGrantSource<'a> {
    grants: &'a GrantSet,
}

impl<'a> DynamicGrantSource<'a> {
    pub fn new(grants: &'a GrantSet) -> DynamicGrantSource<'a> {
        DynamicGrantSource { grants }
    }
}

impl PermissionSource for DynamicGrantSource<'_> {
    fn allows(&self, resource: Resource, action: Action) -> bool {
        self.grants.allows(resource, action)
    }

    fn allows_section(&self, section: Section) -> bool {
        self.grants.allows_section(section)
    }
}

/// The source selected for an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorSource<'a> {
    Static(StaticRoleSource),
    Dynamic(DynamicGrantSource<'a>),
}

impl PermissionSource for ActorSource<'_> {
    fn allows(&self, resource: Resource, action: Action) -> bool {
        match self {
            ActorSource::Static(source) => source.allows(resource, action),
            ActorSource::Dynamic(source) => source.allows(resource, action),
        }
    }

    fn allows_section(&self, section: Section) -> bool {
        match self {
            ActorSource::Static(source) => source.allows_section(section),
            ActorSource::Dynamic(source) => source.allows_section(section),
        }
    }
}
