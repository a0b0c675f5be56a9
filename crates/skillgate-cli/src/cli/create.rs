//! The `skillgate new` command.

use std::path::Path;

use anyhow::Result;
use console::style;
use skillgate_infra::scaffold::{scaffold_skill, ScaffoldOptions};

/// Scaffold a new skill directory and report where it was written.
pub fn run_create(
    root: &Path,
    name: &str,
    owner: &str,
    description: Option<&str>,
    force: bool,
    json: bool,
) -> Result<()> {
    let description = description
        .map(str::to_owned)
        .unwrap_or_else(|| format!("Describe what the {name} skill does."));

    let opts = ScaffoldOptions {
        name: name.to_owned(),
        owner: owner.to_owned(),
        description,
        force,
    };

    let skill_dir = scaffold_skill(root, &opts)?;

    if json {
        let out = serde_json::json!({
            "name": name,
            "path": skill_dir.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!();
        println!(
            "  {} Created skill '{}'",
            style("*").green().bold(),
            style(name).cyan()
        );
        println!("  Path: {}", skill_dir.display());
        println!();
        println!("  Edit {} to define your skill.", style("SKILL.md").yellow());
        println!();
    }

    Ok(())
}
