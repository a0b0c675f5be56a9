//! Validation findings.
//!
//! A finding is one reported rule violation: a discriminant naming the rule
//! that fired plus a human-readable message identifying the offending skill
//! or file.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The structural rule a finding was produced by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    /// A loose markdown file sits directly at the skills root.
    LooseSkillFile,
    /// A skill directory has no SKILL.md.
    MissingSkillFile,
    /// A skill directory has no README.md.
    MissingReadme,
    /// SKILL.md does not open with a front-matter block.
    MissingFrontMatter,
    /// The front matter has no usable `name` entry.
    MissingName,
    /// The front matter has no usable `description` entry.
    MissingDescription,
    /// The declared name differs from the directory name.
    NameMismatch,
    /// The declared name is not a lowercase hyphenated slug.
    InvalidNameFormat,
    /// SKILL.md exceeds the line ceiling.
    OversizedSkillFile,
    /// A referenced auxiliary path does not exist under the skill.
    UnresolvedReference,
}

/// One reported rule violation.
///
/// Findings are pure output: no severity levels, no suppression state. A
/// run's findings form an ordered sequence in discovery order; duplicate
/// messages for distinct causes are preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub kind: FindingKind,
    pub message: String,
}

impl Finding {
    pub fn new(kind: FindingKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
