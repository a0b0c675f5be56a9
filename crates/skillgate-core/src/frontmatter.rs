//! Front-matter extraction from skill documents.
//!
//! A front-matter block is a flat key-value header delimited by `---` lines:
//!
//! ```text
//! ---
//! name: my-skill
//! description: What the skill does
//! # comment lines and blank lines are ignored
//! ---
//! ```
//!
//! The opening delimiter must be the very first line of the document, and the
//! closing delimiter must end with a line break. Anything else means "no
//! front matter" -- a distinct outcome from a block that exists but lacks a
//! required key, and the rule engine reports the two differently.

use std::collections::HashMap;

/// Delimiter line opening and closing a front-matter block.
const DELIMITER: &str = "---";

/// Parsed front-matter header: trimmed keys mapped to trimmed values.
///
/// Keys are case-sensitive and order-insignificant. The format is flat: no
/// type coercion, no nesting, no multi-line values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    entries: HashMap<String, String>,
}

impl FrontMatter {
    /// Look up a key, treating a value that trimmed to nothing as absent.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Scanner position while walking the document line by line.
enum State {
    /// At the first line; the block must open here or not at all.
    Start,
    /// Inside the block, collecting entry lines until the closer.
    Collecting,
}

/// Extract the front-matter block from the start of `text`.
///
/// Returns `None` when the document has no well-formed block: the first line
/// is not the delimiter, or no closing delimiter line terminated by a line
/// break follows. A block with zero content lines parses as present and
/// empty.
///
/// Within the block, blank lines, lines whose first non-space byte is `#`,
/// and lines without a `:` separator are skipped rather than treated as
/// errors; malformed lines surface through the missing-key rules instead.
pub fn parse_front_matter(text: &str) -> Option<FrontMatter> {
    let mut entries = HashMap::new();
    let mut state = State::Start;

    for raw in text.split_inclusive('\n') {
        let (line, terminated) = match raw.strip_suffix('\n') {
            Some(l) => (l.strip_suffix('\r').unwrap_or(l), true),
            None => (raw, false),
        };

        match state {
            State::Start => {
                // Anchoring is strict: the delimiter must be the whole first
                // line, not merely present somewhere in the text.
                if line != DELIMITER || !terminated {
                    return None;
                }
                state = State::Collecting;
            }
            State::Collecting => {
                if line == DELIMITER {
                    // A closer without a trailing line break does not close
                    // the block.
                    if terminated {
                        return Some(FrontMatter { entries });
                    }
                    return None;
                }

                let trimmed = line.trim();
                if trimmed.is_empty() || trimmed.starts_with('#') {
                    continue;
                }
                let Some((key, value)) = line.split_once(':') else {
                    continue;
                };
                entries.insert(key.trim().to_owned(), value.trim().to_owned());
            }
        }
    }

    // Ran out of lines without seeing the closer.
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_name_and_description() {
        let matter = parse_front_matter("---\nname: foo\ndescription: bar\n---\nbody\n").unwrap();
        assert_eq!(matter.field("name"), Some("foo"));
        assert_eq!(matter.field("description"), Some("bar"));
    }

    #[test]
    fn blank_and_comment_lines_are_skipped() {
        let text = "---\n\nname: foo\n# a comment\n   # indented comment\n\ndescription: bar\n---\n";
        let matter = parse_front_matter(text).unwrap();
        assert_eq!(matter.field("name"), Some("foo"));
        assert_eq!(matter.field("description"), Some("bar"));
    }

    #[test]
    fn lines_without_separator_are_skipped() {
        let matter = parse_front_matter("---\nnot an entry\nname: foo\n---\n").unwrap();
        assert_eq!(matter.field("name"), Some("foo"));
        assert!(matter.field("not an entry").is_none());
    }

    #[test]
    fn keys_and_values_are_trimmed() {
        let matter = parse_front_matter("---\n  name  :   foo bar  \n---\n").unwrap();
        assert_eq!(matter.field("name"), Some("foo bar"));
    }

    #[test]
    fn value_splits_at_first_separator() {
        let matter = parse_front_matter("---\ndescription: a: b: c\n---\n").unwrap();
        assert_eq!(matter.field("description"), Some("a: b: c"));
    }

    #[test]
    fn empty_value_reads_as_absent() {
        let matter = parse_front_matter("---\nname:\ndescription:   \n---\n").unwrap();
        assert!(matter.field("name").is_none());
        assert!(matter.field("description").is_none());
    }

    #[test]
    fn keys_are_case_sensitive() {
        let matter = parse_front_matter("---\nName: foo\n---\n").unwrap();
        assert!(matter.field("name").is_none());
        assert_eq!(matter.field("Name"), Some("foo"));
    }

    #[test]
    fn empty_block_is_present() {
        let matter = parse_front_matter("---\n---\nbody\n").unwrap();
        assert!(matter.is_empty());
    }

    #[test]
    fn absent_when_document_starts_with_text() {
        assert!(parse_front_matter("# heading\n---\nname: foo\n---\n").is_none());
    }

    #[test]
    fn absent_when_delimiter_is_not_first_line() {
        assert!(parse_front_matter("\n---\nname: foo\n---\n").is_none());
    }

    #[test]
    fn absent_without_closing_delimiter() {
        assert!(parse_front_matter("---\nname: foo\n").is_none());
    }

    #[test]
    fn absent_when_closer_lacks_trailing_newline() {
        assert!(parse_front_matter("---\nname: foo\n---").is_none());
    }

    #[test]
    fn absent_for_empty_document() {
        assert!(parse_front_matter("").is_none());
    }

    #[test]
    fn crlf_line_endings_are_accepted() {
        let matter = parse_front_matter("---\r\nname: foo\r\n---\r\nbody\r\n").unwrap();
        assert_eq!(matter.field("name"), Some("foo"));
    }
}
