//! Validator configuration.

use serde::{Deserialize, Serialize};

/// Tunable validator settings, loaded from `skillgate.toml` at the skills
/// root when present.
///
/// Only the exempt-directory set and the size ceiling are configurable. The
/// primary and secondary document names and the auxiliary folder names are
/// part of the structural contract itself and cannot be changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Top-level directory names excluded from skill-structure rules
    /// (shared reference collections and the like).
    #[serde(default = "default_exempt_dirs")]
    pub exempt_dirs: Vec<String>,

    /// Maximum permitted SKILL.md line count. A generous ceiling meant to
    /// force splitting oversized skills into auxiliary files.
    #[serde(default = "default_max_skill_lines")]
    pub max_skill_lines: usize,
}

fn default_exempt_dirs() -> Vec<String> {
    vec!["reference".to_owned()]
}

fn default_max_skill_lines() -> usize {
    500
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            exempt_dirs: default_exempt_dirs(),
            max_skill_lines: default_max_skill_lines(),
        }
    }
}

impl ValidatorConfig {
    /// Whether a top-level directory name is exempt from skill rules.
    pub fn is_exempt(&self, dir_name: &str) -> bool {
        self.exempt_dirs.iter().any(|d| d == dir_name)
    }
}
