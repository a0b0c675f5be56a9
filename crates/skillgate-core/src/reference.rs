//! Reference-token scanning.
//!
//! A reference token is a path-like substring of a document that names a
//! file under one of the conventional auxiliary folders (`scripts/`,
//! `references/`, `assets/`, `hooks/`). Recognition is a lexical scan over
//! the raw text -- not a markdown parse -- so tokens are found wherever they
//! appear, including prose, code spans, and tables.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

/// Auxiliary-folder reference: one of the four folder names, a separator,
/// then everything up to the next whitespace or quote character.
static REF_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:scripts|references|assets|hooks)/[^\s`"']+"#)
        .expect("reference pattern is valid")
});

/// Scan `text` for auxiliary-path tokens.
///
/// Tokens are returned in order of first appearance, without duplicates, so
/// the same missing path is never reported twice for one document.
pub fn scan_reference_tokens(text: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for m in REF_TOKEN.find_iter(text) {
        if !tokens.iter().any(|t| t == m.as_str()) {
            tokens.push(m.as_str().to_owned());
        }
    }
    tokens
}

/// Whether a recognized token must resolve to an existing path.
///
/// A `hooks/` token with no file-extension suffix and no trailing separator
/// names a hook group rather than a file and is exempt from existence
/// checking. Every other token must exist under the skill directory.
pub fn requires_existing_path(token: &str) -> bool {
    if !token.starts_with("hooks/") {
        return true;
    }
    token.ends_with('/') || Path::new(token).extension().is_some()
}
