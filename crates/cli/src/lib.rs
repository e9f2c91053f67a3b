//! `rentora-cli`: inspection tool over the authorization core.
//!
//! Lets operators and developers answer "what can this user see and do, and
//! why" from a terminal, with the same code paths the dashboard uses.

pub mod command;
