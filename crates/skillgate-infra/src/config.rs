//! Validator configuration loader.
//!
//! Reads `skillgate.toml` from the skills root and deserializes it into
//! [`ValidatorConfig`]. Falls back to the defaults when the file is missing
//! or malformed -- a broken config file must never stop a validation run.

use std::path::Path;

use skillgate_types::config::ValidatorConfig;

/// Name of the optional per-tree configuration file.
pub const CONFIG_FILE: &str = "skillgate.toml";

/// Load validator configuration from `{skills_root}/skillgate.toml`.
///
/// - If the file does not exist, returns [`ValidatorConfig::default()`].
/// - If the file exists but cannot be read or parsed, logs a warning and
///   returns the default.
/// - Otherwise returns the parsed config.
pub fn load_config(skills_root: &Path) -> ValidatorConfig {
    let config_path = skills_root.join(CONFIG_FILE);

    let content = match std::fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(
                "No {CONFIG_FILE} found at {}, using defaults",
                config_path.display()
            );
            return ValidatorConfig::default();
        }
        Err(err) => {
            tracing::warn!(
                "Failed to read {}: {err}, using defaults",
                config_path.display()
            );
            return ValidatorConfig::default();
        }
    };

    match toml::from_str::<ValidatorConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            ValidatorConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let tmpdir = tempfile::tempdir().unwrap();
        let config = load_config(tmpdir.path());
        assert_eq!(config.exempt_dirs, vec!["reference"]);
        assert_eq!(config.max_skill_lines, 500);
    }

    #[test]
    fn file_values_override_defaults() {
        let tmpdir = tempfile::tempdir().unwrap();
        std::fs::write(
            tmpdir.path().join(CONFIG_FILE),
            "exempt_dirs = [\"reference\", \"shared\"]\nmax_skill_lines = 200\n",
        )
        .unwrap();

        let config = load_config(tmpdir.path());
        assert_eq!(config.exempt_dirs, vec!["reference", "shared"]);
        assert_eq!(config.max_skill_lines, 200);
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let tmpdir = tempfile::tempdir().unwrap();
        std::fs::write(tmpdir.path().join(CONFIG_FILE), "max_skill_lines = 64\n").unwrap();

        let config = load_config(tmpdir.path());
        assert_eq!(config.exempt_dirs, vec!["reference"]);
        assert_eq!(config.max_skill_lines, 64);
    }

    #[test]
    fn malformed_file_yields_defaults() {
        let tmpdir = tempfile::tempdir().unwrap();
        std::fs::write(tmpdir.path().join(CONFIG_FILE), "max_skill_lines = \"many\"").unwrap();

        let config = load_config(tmpdir.path());
        assert_eq!(config.max_skill_lines, 500);
    }
}
