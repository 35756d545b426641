// Rust guideline compliant 2026-10-18

//! Implementation of the `setup-hooks status` command.

use anyhow::Result;
use hookpath_core::{Config, HooksConfigurator, HOOKS_PATH_KEY};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Snapshot of the local hooks path setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HooksStatus {
    /// Config key inspected.
    pub key: &'static str,
    /// Current local value, if any.
    pub value: Option<String>,
    /// Value the configurator would write.
    pub expected: String,
    /// Whether the current value matches the expected one.
    pub configured: bool,
}

impl HooksStatus {
    /// Builds a status from the current and expected values.
    #[must_use]
    pub fn new(value: Option<String>, expected: &str) -> Self {
        let configured = value.as_deref() == Some(expected);
        Self {
            key: HOOKS_PATH_KEY,
            value,
            expected: expected.to_string(),
            configured,
        }
    }

    /// Renders the status as a single human-readable line.
    #[must_use]
    pub fn render(&self) -> String {
        match (&self.value, self.configured) {
            (Some(value), true) => format!("{} = {} (configured)", self.key, value),
            (Some(value), false) => {
                format!("{} = {} (expected {})", self.key, value, self.expected)
            }
            (None, _) => format!("{} is not set (expected {})", self.key, self.expected),
        }
    }
}

/// Prints the local `core.hooksPath` state.
///
/// # Arguments
///
/// * `start` - Directory to start repository discovery from
/// * `config` - Loaded configuration providing the expected value
/// * `json` - Emit JSON instead of a plain line
/// * `out` - Output destination
///
/// # Errors
///
/// Returns an error if no repository encloses `start` or the local config
/// store cannot be read.
pub fn execute(
    start: &Path,
    config: &Config,
    json: bool,
    out: &mut impl Write,
) -> Result<HooksStatus> {
    let value = HooksConfigurator::discover(start)?.current()?;
    let status = HooksStatus::new(value, config.hooks_path.as_str());

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&status)?)?;
    } else {
        writeln!(out, "{}", status.render())?;
    }
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_configured() {
        let status = HooksStatus::new(Some(".githooks".to_string()), ".githooks");
        assert!(status.configured);
        assert_eq!(status.render(), "core.hooksPath = .githooks (configured)");
    }

    #[test]
    fn test_render_mismatch() {
        let status = HooksStatus::new(Some("hooks".to_string()), ".githooks");
        assert!(!status.configured);
        assert_eq!(status.render(), "core.hooksPath = hooks (expected .githooks)");
    }

    #[test]
    fn test_render_unset() {
        let status = HooksStatus::new(None, ".githooks");
        assert_eq!(
            status.render(),
            "core.hooksPath is not set (expected .githooks)"
        );
    }

    #[test]
    fn test_json_fields() {
        let status = HooksStatus::new(None, ".githooks");
        let value = serde_json::to_value(&status).unwrap();
        assert_eq!(value["key"], "core.hooksPath");
        assert!(value["value"].is_null());
        assert_eq!(value["configured"], false);
    }
}
