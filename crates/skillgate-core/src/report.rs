//! Report rendering.
//!
//! A run's outcome is a plain textual report with stable line order so the
//! validator can serve as a regression gate: the same input tree always
//! renders byte-identical output.

use skillgate_types::finding::Finding;

/// Success line printed when a run produces no findings.
pub const PASSED: &str = "Skill validation passed.";

/// Header line opening a failed run's report.
pub const FAILED_HEADER: &str = "Skill validation failed:";

/// Render the full report for a run: the success line, or the failure header
/// followed by one line per finding in collection order.
pub fn render_report(findings: &[Finding]) -> String {
    if findings.is_empty() {
        return format!("{PASSED}\n");
    }

    let mut out = String::from(FAILED_HEADER);
    out.push('\n');
    for finding in findings {
        out.push_str("- ");
        out.push_str(&finding.message);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use skillgate_types::finding::FindingKind;

    use super::*;

    #[test]
    fn empty_run_renders_success_line() {
        assert_eq!(render_report(&[]), "Skill validation passed.\n");
    }

    #[test]
    fn findings_render_in_order() {
        let findings = vec![
            Finding::new(FindingKind::MissingSkillFile, "Missing SKILL.md: skills/a"),
            Finding::new(FindingKind::MissingReadme, "Missing README.md: skills/b"),
        ];
        assert_eq!(
            render_report(&findings),
            "Skill validation failed:\n- Missing SKILL.md: skills/a\n- Missing README.md: skills/b\n"
        );
    }

    #[test]
    fn duplicate_messages_are_preserved() {
        let finding = Finding::new(FindingKind::MissingReadme, "Missing README.md: skills/a");
        let report = render_report(&[finding.clone(), finding]);
        assert_eq!(report.matches("Missing README.md").count(), 2);
    }
}
