//! `rentora-core`: shared domain primitives for the Rentora platform.
//!
//! Strongly typed identifiers and the domain error model. Nothing in this
//! crate performs I/O or holds process state.

pub mod error;
pub mod id;

pub use error::DomainError;
pub use id::{TenantId, UserId};
