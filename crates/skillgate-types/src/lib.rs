//! Shared domain types for Skillgate.
//!
//! This crate contains the types passed between the validator layers:
//! findings, validator configuration, skill summaries, and scaffold errors.
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod config;
pub mod error;
pub mod finding;
pub mod skill;
