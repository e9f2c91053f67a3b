//! Domain error model.
//!
//! These are boundary errors: a caller handed us a string that does not name
//! anything in the domain. Authorization denial is never an error anywhere in
//! Rentora; it is an ordinary `false` or empty-set value.

use thiserror::Error;

/// Deterministic domain-level error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier failed to parse.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A value failed validation (e.g. a malformed grant string).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
