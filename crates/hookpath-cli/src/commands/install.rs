// Rust guideline compliant 2026-10-18

//! Implementation of the default `setup-hooks` action.
//!
//! Points the enclosing repository's `core.hooksPath` at the hooks directory
//! and prints the confirmation line.

use anyhow::Result;
use hookpath_core::{ApplyOutcome, Config, HooksConfigurator, CONFIRMATION};
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Configures the hooks path and prints the confirmation line.
///
/// # Arguments
///
/// * `start` - Directory to start repository discovery from
/// * `config` - Loaded configuration
/// * `out` - Destination for the confirmation line
///
/// # Returns
///
/// The outcome of the config write.
///
/// # Errors
///
/// Returns an error if:
/// - `start` is not inside a Git repository
/// - The local config store cannot be read or written
/// - Writing the confirmation line fails
pub fn execute(start: &Path, config: &Config, out: &mut impl Write) -> Result<ApplyOutcome> {
    let configurator = HooksConfigurator::discover(start)?;
    let outcome = configurator.apply(&config.hooks_path)?;
    debug!(?outcome, "hooks path applied");

    writeln!(out, "{}", CONFIRMATION)?;
    Ok(outcome)
}
