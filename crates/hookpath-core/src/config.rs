// Rust guideline compliant 2026-10-18

//! Configuration management for hookpath.

use crate::{HooksPath, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the hooks path configurator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory written to `core.hooksPath`.
    #[serde(default)]
    pub hooks_path: HooksPath,
}

impl Config {
    /// Loads configuration, falling back to defaults when no file is given.
    ///
    /// Nothing is read implicitly: without `path` the built-in defaults are
    /// returned unchanged.
    ///
    /// # Arguments
    ///
    /// * `path` - Optional path to a TOML configuration file
    ///
    /// # Returns
    ///
    /// A Config with file values applied over the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The file contains invalid TOML or unknown keys
    /// - A value fails validation
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or a value fails validation.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| crate::Error::InvalidConfig(format!("Invalid config file: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.hooks_path.as_str(), ".githooks");
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        let config = Config::load(None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("hookpath.toml");
        std::fs::write(&config_path, "hooks_path = \"scripts/hooks\"\n").unwrap();

        let config = Config::load(Some(&config_path)).unwrap();
        assert_eq!(config.hooks_path.as_str(), "scripts/hooks");
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.hooks_path.as_str(), ".githooks");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = Config::load(Some(&temp_dir.path().join("absent.toml")));
        assert!(matches!(result, Err(crate::Error::Io(_))));
    }

    #[test]
    fn test_empty_hooks_path_rejected() {
        let result = Config::from_toml("hooks_path = \"\"");
        assert!(matches!(result, Err(crate::Error::InvalidConfig(_))));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = Config::from_toml("hooks_dir = \".githooks\"");
        assert!(matches!(result, Err(crate::Error::InvalidConfig(_))));
    }
}
