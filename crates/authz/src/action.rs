use std::str::FromStr;

use serde::{Deserialize, Serialize};

use rentora_core::DomainError;

/// Operations a role may perform on a resource.
///
/// `Manage` is the blanket action: a set containing it permits every other
/// action on the same resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
    Import,
    Export,
    Manage,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::Create,
        Action::Read,
        Action::Update,
        Action::Delete,
        Action::Import,
        Action::Export,
        Action::Manage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Read => "read",
            Action::Update => "update",
            Action::Delete => "delete",
            Action::Import => "import",
            Action::Export => "export",
            Action::Manage => "manage",
        }
    }

    /// Parse an action name, returning `None` for anything unrecognized.
    pub fn from_name(name: &str) -> Option<Action> {
        match name {
            "create" => Some(Action::Create),
            "read" => Some(Action::Read),
            "update" => Some(Action::Update),
            "delete" => Some(Action::Delete),
            "import" => Some(Action::Import),
            "export" => Some(Action::Export),
            "manage" => Some(Action::Manage),
            _ => None,
        }
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl core::fmt::Display for Action {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::from_name(s).ok_or_else(|| DomainError::validation(format!("unknown action: {s}")))
    }
}

/// Compact set of [`Action`]s, const-constructible so role grants can live in
/// static tables.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionSet(u8);

impl ActionSet {
    pub const EMPTY: ActionSet = ActionSet(0);

    pub const fn of(actions: &[Action]) -> ActionSet {
        let mut bits = 0u8;
        let mut i = 0;
        while i < actions.len() {
            bits |= actions[i].bit();
            i += 1;
        }
        ActionSet(bits)
    }

    /// Whether `action` is literally a member of the set.
    pub const fn contains(self, action: Action) -> bool {
        self.0 & action.bit() != 0
    }

    /// Whether `action` is permitted by the set, treating `Manage` as a
    /// blanket grant for every action.
    pub const fn permits(self, action: Action) -> bool {
        self.contains(action) || self.contains(Action::Manage)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Members in declaration order of [`Action::ALL`].
    pub fn iter(self) -> impl Iterator<Item = Action> {
        Action::ALL.into_iter().filter(move |a| self.contains(*a))
    }
}

impl FromIterator<Action> for ActionSet {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        let mut bits = 0u8;
        for action in iter {
            bits |= action.bit();
        }
        ActionSet(bits)
    }
}

impl core::fmt::Debug for ActionSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.iter().map(|a| a.as_str())).finish()
    }
}
