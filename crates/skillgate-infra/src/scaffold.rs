//! Skill scaffolding.
//!
//! Writes the fixed SKILL.md and README.md skeletons for a new skill
//! directory. Refuses to overwrite an existing skill unless forced, creates
//! intermediate directories as needed, and produces a tree that passes the
//! structural validator as written.

use std::path::{Path, PathBuf};

use skillgate_core::name;
use skillgate_types::error::ScaffoldError;

use crate::{README_FILE, SKILL_FILE};

/// Options accepted by the scaffolder.
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    /// Skill name; doubles as the directory name and the declared name.
    pub name: String,
    /// Attribution recorded in the front matter.
    pub owner: String,
    /// Description recorded in the front matter.
    pub description: String,
    /// Overwrite an existing skill's documents.
    pub force: bool,
}

/// Create the directory and starter documents for a new skill under
/// `skills_root`. Returns the skill directory path.
pub fn scaffold_skill(
    skills_root: &Path,
    opts: &ScaffoldOptions,
) -> Result<PathBuf, ScaffoldError> {
    if !name::is_valid_name(&opts.name) {
        return Err(ScaffoldError::InvalidName(opts.name.clone()));
    }

    let skill_dir = skills_root.join(&opts.name);
    let skill_file = skill_dir.join(SKILL_FILE);
    if skill_file.exists() && !opts.force {
        return Err(ScaffoldError::AlreadyExists(skill_file));
    }

    std::fs::create_dir_all(&skill_dir)?;
    std::fs::write(&skill_file, render_skill_md(opts))?;
    std::fs::write(skill_dir.join(README_FILE), render_readme(opts))?;

    Ok(skill_dir)
}

/// Generate SKILL.md content for a new skill.
fn render_skill_md(opts: &ScaffoldOptions) -> String {
    format!(
        r#"---
name: {name}
description: {description}
owner: {owner}
---

# {name}

## Overview

{description}

## Usage

Describe when and how this skill applies.

## Resources

Place helper scripts under `scripts/`, reference material under
`references/`, static files under `assets/`, and lifecycle hooks under
`hooks/`, then link them from this document.
"#,
        name = opts.name,
        description = opts.description,
        owner = opts.owner,
    )
}

/// Generate the README.md overview stub.
fn render_readme(opts: &ScaffoldOptions) -> String {
    format!(
        "# {name}\n\n{description}\n\nSee SKILL.md for the full definition.\n",
        name = opts.name,
        description = opts.description,
    )
}

#[cfg(test)]
mod tests {
    use skillgate_types::config::ValidatorConfig;

    use super::*;
    use crate::validate::validate_tree;

    fn options(name: &str) -> ScaffoldOptions {
        ScaffoldOptions {
            name: name.to_owned(),
            owner: "team".to_owned(),
            description: format!("The {name} skill."),
            force: false,
        }
    }

    #[test]
    fn scaffolded_skill_passes_validation() {
        let tmpdir = tempfile::tempdir().unwrap();
        let dir = scaffold_skill(tmpdir.path(), &options("deploy-helper")).unwrap();

        assert!(dir.join(SKILL_FILE).is_file());
        assert!(dir.join(README_FILE).is_file());

        let findings = validate_tree(tmpdir.path(), &ValidatorConfig::default()).unwrap();
        assert!(findings.is_empty(), "unexpected findings: {findings:?}");
    }

    #[test]
    fn rejects_invalid_names_before_touching_disk() {
        let tmpdir = tempfile::tempdir().unwrap();
        let err = scaffold_skill(tmpdir.path(), &options("Bad Name")).unwrap_err();
        assert!(matches!(err, ScaffoldError::InvalidName(_)));
        assert!(std::fs::read_dir(tmpdir.path()).unwrap().next().is_none());
    }

    #[test]
    fn refuses_overwrite_without_force() {
        let tmpdir = tempfile::tempdir().unwrap();
        scaffold_skill(tmpdir.path(), &options("deploy-helper")).unwrap();

        let err = scaffold_skill(tmpdir.path(), &options("deploy-helper")).unwrap_err();
        assert!(matches!(err, ScaffoldError::AlreadyExists(_)));
    }

    #[test]
    fn force_overwrites_existing_documents() {
        let tmpdir = tempfile::tempdir().unwrap();
        scaffold_skill(tmpdir.path(), &options("deploy-helper")).unwrap();

        let mut opts = options("deploy-helper");
        opts.description = "Rewritten description.".to_owned();
        opts.force = true;
        let dir = scaffold_skill(tmpdir.path(), &opts).unwrap();

        let content = std::fs::read_to_string(dir.join(SKILL_FILE)).unwrap();
        assert!(content.contains("Rewritten description."));
    }

    #[test]
    fn creates_intermediate_directories() {
        let tmpdir = tempfile::tempdir().unwrap();
        let nested_root = tmpdir.path().join("nested").join("skills");
        let dir = scaffold_skill(&nested_root, &options("deploy-helper")).unwrap();
        assert!(dir.join(SKILL_FILE).is_file());
    }
}
