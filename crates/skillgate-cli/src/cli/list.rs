//! The `skillgate list` command.

use std::path::Path;

use anyhow::Result;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use skillgate_infra::{config, discover};

/// List discovered skills as a table, or as JSON records with `--json`.
pub fn run_list(root: &Path, json: bool) -> Result<()> {
    let config = config::load_config(root);
    let skills = discover::discover_skills(root, &config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&skills)?);
        return Ok(());
    }

    if skills.is_empty() {
        println!();
        println!("  No skills found. Use 'skillgate new <name>' to scaffold one.");
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Name").fg(Color::Cyan),
            Cell::new("Description"),
            Cell::new("README"),
        ]);

    for skill in &skills {
        table.add_row(vec![
            Cell::new(&skill.name),
            Cell::new(skill.description.as_deref().unwrap_or("-")),
            Cell::new(if skill.has_readme { "yes" } else { "no" }),
        ]);
    }

    println!();
    println!("{table}");
    println!();

    Ok(())
}
