use std::path::PathBuf;

use thiserror::Error;

/// Errors from scaffolding a new skill directory.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("invalid skill name '{0}': use lowercase letters, digits, and single hyphens")]
    InvalidName(String),

    #[error("skill already exists at {} (pass force to overwrite)", .0.display())]
    AlreadyExists(PathBuf),

    #[error("filesystem error: {0}")]
    Io(#[from] std::io::Error),
}
