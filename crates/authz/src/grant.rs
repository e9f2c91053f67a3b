use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use rentora_core::DomainError;

use crate::action::Action;
use crate::resource::{Resource, Section};

/// A single dynamic permission grant.
///
/// The string vocabulary is `*` (everything), `resource:*` (every action on
/// one resource) and `resource:action` (one action on one resource).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grant {
    All,
    Resource(Resource),
    Action(Resource, Action),
}

impl Grant {
    /// Parse a grant string, returning `None` when it does not match the
    /// vocabulary. Lookups never fail on bad input; they just grant nothing.
    pub fn parse(raw: &str) -> Option<Grant> {
        let raw = raw.trim();
        if raw == "*" {
            return Some(Grant::All);
        }
        let (resource, action) = raw.split_once(':')?;
        let resource = Resource::from_name(resource)?;
        if action == "*" {
            return Some(Grant::Resource(resource));
        }
        Action::from_name(action).map(|action| Grant::Action(resource, action))
    }

    /// Whether this grant permits `action` on `resource`.
    pub fn allows(&self, resource: Resource, action: Action) -> bool {
        match self {
            Grant::All => true,
            Grant::Resource(r) => *r == resource,
            Grant::Action(r, a) => {
                *r == resource && (*a == action || *a == Action::Manage)
            }
        }
    }

    /// Whether this grant mentions `resource` at all.
    fn touches(&self, resource: Resource) -> bool {
        match self {
            Grant::All => true,
            Grant::Resource(r) | Grant::Action(r, _) => *r == resource,
        }
    }
}

impl FromStr for Grant {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grant::parse(s).ok_or_else(|| DomainError::validation(format!("unrecognized grant: {s}")))
    }
}

/// The dynamic permission list attached to a user.
///
/// Presence is judged on the raw strings exactly as stored: a non-empty list
/// makes the dynamic side authoritative even when every entry is malformed.
/// Malformed entries are retained for display and auditing but never grant
/// anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrantSet {
    raw: Vec<String>,
    parsed: Vec<Grant>,
}

impl GrantSet {
    pub fn from_raw(raw: Vec<String>) -> GrantSet {
        let parsed = raw.iter().filter_map(|s| Grant::parse(s)).collect();
        GrantSet { raw, parsed }
    }

    /// Whether the stored list is empty. Counts raw entries, not parseable
    /// ones, so a list of malformed strings still reads as present.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// The stored strings, verbatim.
    pub fn raw(&self) -> &[String] {
        &self.raw
    }

    /// The entries that parsed into the grant vocabulary.
    pub fn grants(&self) -> &[Grant] {
        &self.parsed
    }

    /// Whether any grant permits `action` on `resource`.
    pub fn allows(&self, resource: Resource, action: Action) -> bool {
        self.parsed.iter().any(|g| g.allows(resource, action))
    }

    /// Whether the section should be visible under this list.
    ///
    /// The landing section is open to any user with a present list; resource
    /// sections require a grant that mentions the resource.
    pub fn allows_section(&self, section: Section) -> bool {
        match section.resource() {
            None => !self.is_empty(),
            Some(resource) => self.parsed.iter().any(|g| g.touches(resource)),
        }
    }
}

impl Serialize for GrantSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GrantSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<String>::deserialize(deserializer).map(GrantSet::from_raw)
    }
}
