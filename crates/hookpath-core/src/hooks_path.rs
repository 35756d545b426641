// Rust guideline compliant 2026-10-18

//! Validated value type for the `core.hooksPath` setting.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hooks directory used when nothing else is configured.
pub const DEFAULT_HOOKS_DIR: &str = ".githooks";

/// A hooks directory value suitable for `core.hooksPath`.
///
/// The value is stored exactly as given, so relative paths stay relative and
/// Git resolves them against the working tree root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HooksPath(String);

impl HooksPath {
    /// Creates a hooks path after validating it.
    ///
    /// # Arguments
    ///
    /// * `value` - Directory path as it should appear in the Git config
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The value is empty
    /// - The value contains control characters (newline, NUL, ...)
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(Error::InvalidHooksPath(
                "hooks path cannot be empty".to_string(),
            ));
        }
        if value.chars().any(char::is_control) {
            return Err(Error::InvalidHooksPath(format!(
                "hooks path contains control characters: {:?}",
                value
            )));
        }
        Ok(Self(value))
    }

    /// Returns the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for HooksPath {
    fn default() -> Self {
        Self(DEFAULT_HOOKS_DIR.to_string())
    }
}

impl fmt::Display for HooksPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for HooksPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for HooksPath {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<HooksPath> for String {
    fn from(path: HooksPath) -> Self {
        path.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_githooks() {
        assert_eq!(HooksPath::default().as_str(), ".githooks");
    }

    #[test]
    fn test_accepts_relative_and_absolute_paths() {
        assert!(HooksPath::new("tools/hooks").is_ok());
        assert!(HooksPath::new("/opt/shared-hooks").is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        let err = HooksPath::new("").unwrap_err();
        assert!(err.to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_rejects_newline() {
        assert!(HooksPath::new(".githooks\n[core]").is_err());
        assert!(HooksPath::new("hooks\0").is_err());
    }

    #[test]
    fn test_from_str_and_display_agree() {
        let path: HooksPath = ".hooks".parse().unwrap();
        assert_eq!(path.to_string(), ".hooks");
    }
}
