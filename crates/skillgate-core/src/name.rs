//! Skill-name lexical rule.

/// Check a skill name against the naming rule: lowercase alphanumeric
/// segments separated by single hyphens, equivalent to the pattern
/// `^[a-z0-9]+(-[a-z0-9]+)*$`.
///
/// No leading or trailing hyphen, no repeated hyphen, no uppercase, no other
/// punctuation.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        && !name.starts_with('-')
        && !name.ends_with('-')
        && !name.contains("--")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_hyphenated_slugs() {
        assert!(is_valid_name("my-skill"));
        assert!(is_valid_name("a"));
        assert!(is_valid_name("skill123"));
        assert!(is_valid_name("a-b-c"));
    }

    #[test]
    fn rejects_malformed_names() {
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("-bad"));
        assert!(!is_valid_name("bad-"));
        assert!(!is_valid_name("Bad"));
        assert!(!is_valid_name("has space"));
        assert!(!is_valid_name("has--double"));
        assert!(!is_valid_name("under_score"));
        assert!(!is_valid_name("dotted.name"));
    }
}
