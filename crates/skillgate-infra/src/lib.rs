//! Filesystem layer for Skillgate.
//!
//! Everything that touches disk lives here: the structural rule engine that
//! walks a skills tree, skill discovery for listings, the config loader, and
//! the skill scaffolder. Pure parsing and rule logic stays in
//! `skillgate-core`.

pub mod config;
pub mod discover;
pub mod scaffold;
pub mod validate;

/// Primary document required in every skill directory.
pub const SKILL_FILE: &str = "SKILL.md";

/// Secondary overview document expected in every skill directory.
pub const README_FILE: &str = "README.md";
