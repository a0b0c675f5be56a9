//! Structural rule engine.
//!
//! Walks a skills root and applies the presence, naming, size, and reference
//! rules to every skill directory, accumulating findings instead of failing
//! on the first violation. Only a missing primary document short-circuits,
//! and only for that one skill; the walk always runs to completion.
//!
//! Skills are visited in lexicographic directory-name order so the report is
//! byte-identical across runs over an unchanged tree.

use std::path::Path;

use anyhow::Context;
use skillgate_core::{frontmatter, name, reference};
use skillgate_types::config::ValidatorConfig;
use skillgate_types::finding::{Finding, FindingKind};

use crate::{README_FILE, SKILL_FILE};

/// Validate the whole tree under `skills_root`.
///
/// Returns every finding in deterministic order: loose root files first,
/// then each skill's findings in rule-evaluation order. Errors only when the
/// root itself cannot be listed; per-skill problems become findings, never
/// errors.
pub fn validate_tree(
    skills_root: &Path,
    config: &ValidatorConfig,
) -> anyhow::Result<Vec<Finding>> {
    let entries = std::fs::read_dir(skills_root)
        .with_context(|| format!("Failed to read skills root: {}", skills_root.display()))?;

    let mut loose_files = Vec::new();
    let mut skill_dirs = Vec::new();

    for entry in entries {
        let entry = entry
            .with_context(|| format!("Failed to list skills root: {}", skills_root.display()))?;
        let path = entry.path();
        if path.is_dir() {
            skill_dirs.push(path);
        } else if path.extension().is_some_and(|ext| ext == "md") {
            loose_files.push(path);
        }
    }

    // Directory enumeration order is filesystem-dependent; sort explicitly
    // so the report is stable and diffable.
    loose_files.sort();
    skill_dirs.sort();

    let mut findings = Vec::new();

    for file in &loose_files {
        findings.push(Finding::new(
            FindingKind::LooseSkillFile,
            format!("Unexpected single-file skill: {}", file.display()),
        ));
    }

    for skill_dir in &skill_dirs {
        let dir_name = skill_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if config.is_exempt(&dir_name) {
            continue;
        }
        findings.extend(validate_skill(skill_dir, &dir_name, config));
    }

    Ok(findings)
}

/// Run every per-skill rule against one skill directory.
fn validate_skill(skill_dir: &Path, dir_name: &str, config: &ValidatorConfig) -> Vec<Finding> {
    let skill_file = skill_dir.join(SKILL_FILE);

    // A missing or unreadable primary document is fatal for this skill:
    // every remaining rule needs its content.
    let Some(text) = read_lossy(&skill_file) else {
        return vec![Finding::new(
            FindingKind::MissingSkillFile,
            format!("Missing SKILL.md: {}", skill_dir.display()),
        )];
    };

    let mut findings = Vec::new();
    findings.extend(check_secondary(skill_dir));
    findings.extend(check_front_matter(&skill_file, dir_name, &text));
    findings.extend(check_size(&skill_file, &text, config.max_skill_lines));
    findings.extend(check_references(skill_dir, &skill_file, &text));
    findings
}

/// Read a file with best-effort decoding; invalid byte sequences are
/// replaced. Returns `None` when the file is missing or unreadable -- the
/// engine treats both the same way.
fn read_lossy(path: &Path) -> Option<String> {
    match std::fs::read(path) {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(err) => {
            if err.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("Failed to read {}: {err}", path.display());
            }
            None
        }
    }
}

/// Rule: the optional overview document should be present.
fn check_secondary(skill_dir: &Path) -> Vec<Finding> {
    if skill_dir.join(README_FILE).exists() {
        return Vec::new();
    }
    vec![Finding::new(
        FindingKind::MissingReadme,
        format!("Missing README.md: {}", skill_dir.display()),
    )]
}

/// Rules: front-matter presence, required keys, name consistency, and name
/// format.
///
/// With no block at all there are no values to inspect, so only the presence
/// finding is produced. The consistency and format rules are independent of
/// each other: both can fire for the same malformed name.
fn check_front_matter(skill_file: &Path, dir_name: &str, text: &str) -> Vec<Finding> {
    let Some(matter) = frontmatter::parse_front_matter(text) else {
        return vec![Finding::new(
            FindingKind::MissingFrontMatter,
            format!("Missing front matter: {}", skill_file.display()),
        )];
    };

    let mut findings = Vec::new();
    let declared_name = matter.field("name");

    if declared_name.is_none() {
        findings.push(Finding::new(
            FindingKind::MissingName,
            format!("Missing name in front matter: {}", skill_file.display()),
        ));
    }
    if matter.field("description").is_none() {
        findings.push(Finding::new(
            FindingKind::MissingDescription,
            format!("Missing description in front matter: {}", skill_file.display()),
        ));
    }

    if let Some(declared) = declared_name {
        if declared != dir_name {
            findings.push(Finding::new(
                FindingKind::NameMismatch,
                format!("Name does not match directory: {}", skill_file.display()),
            ));
        }
        if !name::is_valid_name(declared) {
            findings.push(Finding::new(
                FindingKind::InvalidNameFormat,
                format!("Invalid name format: {}", skill_file.display()),
            ));
        }
    }

    findings
}

/// Rule: the primary document must not exceed the line ceiling.
fn check_size(skill_file: &Path, text: &str, max_lines: usize) -> Vec<Finding> {
    let line_count = text.lines().count();
    if line_count <= max_lines {
        return Vec::new();
    }
    vec![Finding::new(
        FindingKind::OversizedSkillFile,
        format!(
            "SKILL.md too long ({line_count} lines): {}",
            skill_file.display()
        ),
    )]
}

/// Rule: every reference token in the document must resolve under the
/// skill's own directory, except exempt hook groups.
fn check_references(skill_dir: &Path, skill_file: &Path, text: &str) -> Vec<Finding> {
    let mut findings = Vec::new();
    for token in reference::scan_reference_tokens(text) {
        if !reference::requires_existing_path(&token) {
            continue;
        }
        if !skill_dir.join(&token).exists() {
            findings.push(Finding::new(
                FindingKind::UnresolvedReference,
                format!(
                    "Missing referenced file: {} -> {token}",
                    skill_file.display()
                ),
            ));
        }
    }
    findings
}
