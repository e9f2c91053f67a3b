use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use rentora_core::{TenantId, UserId};

use crate::action::Action;
use crate::grant::GrantSet;
use crate::resource::{Resource, Section};
use crate::role::Role;
use crate::source::{ActorSource, DynamicGrantSource, PermissionSource, StaticRoleSource};

/// Session claims model (transport-agnostic).
///
/// This is the minimal set of claims the dashboard expects once a session
/// token has been decoded/verified by whatever transport layer is in use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject / user identifier.
    pub sub: UserId,

    /// Tenant context for the session.
    pub tenant_id: TenantId,

    /// Role granted within the tenant context.
    pub role: Role,

    /// Dynamic permission strings, if any were assigned to the user.
    #[serde(default)]
    pub permissions: Vec<String>,

    /// Issued-at timestamp.
    pub issued_at: DateTime<Utc>,

    /// Expiration timestamp.
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionValidationError {
    #[error("session has expired")]
    Expired,

    #[error("session not yet valid (issued_at is in the future)")]
    NotYetValid,

    #[error("invalid session time window (expires_at <= issued_at)")]
    InvalidTimeWindow,
}

/// Deterministically validate session claims.
///
/// Note: this validates the *claims* only. Signature verification / decoding
/// is intentionally outside this crate.
pub fn validate_claims(
    claims: &SessionClaims,
    now: DateTime<Utc>,
) -> Result<(), SessionValidationError> {
    if claims.expires_at <= claims.issued_at {
        return Err(SessionValidationError::InvalidTimeWindow);
    }
    if now < claims.issued_at {
        return Err(SessionValidationError::NotYetValid);
    }
    if now >= claims.expires_at {
        return Err(SessionValidationError::Expired);
    }
    Ok(())
}

/// A resolved actor: the role plus whatever dynamic grants the user carries.
///
/// Construction is decoupled from storage and transport. The dashboard builds
/// one from validated session claims; tests build them directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    role: Role,
    grants: GrantSet,
}

impl Actor {
    pub fn new(role: Role, grants: GrantSet) -> Actor {
        Actor { role, grants }
    }

    /// An actor with no dynamic grants; the role table answers for it.
    pub fn with_role(role: Role) -> Actor {
        Actor {
            role,
            grants: GrantSet::default(),
        }
    }

    pub fn from_claims(claims: &SessionClaims) -> Actor {
        let grants = GrantSet::from_raw(claims.permissions.clone());
        tracing::debug!(
            role = %claims.role,
            grant_count = grants.len(),
            "actor resolved from session claims"
        );
        Actor {
            role: claims.role,
            grants,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn grants(&self) -> &GrantSet {
        &self.grants
    }

    /// The single source that answers for this actor.
    ///
    /// A present grant list takes over completely; otherwise the static role
    /// table applies. The two are never consulted together.
    pub fn permission_source(&self) -> ActorSource<'_> {
        if self.grants.is_empty() {
            ActorSource::Static(StaticRoleSource::new(self.role))
        } else {
            ActorSource::Dynamic(DynamicGrantSource::new(&self.grants))
        }
    }

    pub fn can_view_section(&self, section: Section) -> bool {
        self.permission_source().allows_section(section)
    }

    pub fn permits(&self, resource: Resource, action: Action) -> bool {
        self.permission_source().allows(resource, action)
    }
}
