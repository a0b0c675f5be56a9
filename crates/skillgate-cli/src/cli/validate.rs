//! The `skillgate validate` command.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use skillgate_core::report;
use skillgate_infra::{config, validate};

/// Run the validator over `root` and print the report.
///
/// The textual report is byte-stable across runs over an unchanged tree;
/// `--json` emits the findings as structured records instead. Exits with
/// failure status iff at least one finding was produced.
pub fn run_validate(
    root: &Path,
    max_lines: Option<usize>,
    extra_exempt: &[String],
    json: bool,
) -> Result<ExitCode> {
    let mut config = config::load_config(root);
    if let Some(max_lines) = max_lines {
        config.max_skill_lines = max_lines;
    }
    config.exempt_dirs.extend(extra_exempt.iter().cloned());

    let findings = validate::validate_tree(root, &config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&findings)?);
    } else {
        print!("{}", report::render_report(&findings));
    }

    Ok(if findings.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
