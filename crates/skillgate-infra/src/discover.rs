//! Skill discovery for listings.
//!
//! Scans the skills root for directories containing a SKILL.md and returns
//! lightweight summaries. Discovery is lenient where validation is strict:
//! a skill with a broken header is still listed, with no description.

use std::path::Path;

use anyhow::Context;
use skillgate_core::frontmatter;
use skillgate_types::config::ValidatorConfig;
use skillgate_types::skill::SkillSummary;

use crate::{README_FILE, SKILL_FILE};

/// Discover skill units under `skills_root`, in sorted name order.
///
/// Directories without a SKILL.md and exempt directories are skipped;
/// unreadable primary documents are logged and skipped.
pub fn discover_skills(
    skills_root: &Path,
    config: &ValidatorConfig,
) -> anyhow::Result<Vec<SkillSummary>> {
    let entries = std::fs::read_dir(skills_root)
        .with_context(|| format!("Failed to read skills root: {}", skills_root.display()))?;

    let mut skills = Vec::new();

    for entry in entries {
        let entry = entry
            .with_context(|| format!("Failed to list skills root: {}", skills_root.display()))?;
        let skill_dir = entry.path();
        if !skill_dir.is_dir() {
            continue;
        }

        let name = skill_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if config.is_exempt(&name) {
            continue;
        }

        let skill_file = skill_dir.join(SKILL_FILE);
        if !skill_file.is_file() {
            continue;
        }

        let content = match std::fs::read_to_string(&skill_file) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!(skill = %name, error = %err, "Skipping unreadable SKILL.md");
                continue;
            }
        };

        let description = frontmatter::parse_front_matter(&content)
            .and_then(|m| m.field("description").map(str::to_owned));

        skills.push(SkillSummary {
            name,
            description,
            has_readme: skill_dir.join(README_FILE).is_file(),
            path: skill_dir,
        });
    }

    skills.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(skills)
}
