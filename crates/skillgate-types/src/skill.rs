//! Skill unit summaries.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A discovered skill unit, as reported by `skillgate list`.
///
/// Identity is the directory name; the description comes from the SKILL.md
/// front matter when one is present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillSummary {
    pub name: String,
    pub description: Option<String>,
    pub has_readme: bool,
    pub path: PathBuf,
}
