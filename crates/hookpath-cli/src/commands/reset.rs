// Rust guideline compliant 2026-10-18

//! Implementation of the `setup-hooks reset` command.

use anyhow::Result;
use hookpath_core::HooksConfigurator;
use std::io::Write;
use std::path::Path;

/// Unsets `core.hooksPath` in the enclosing repository.
///
/// # Returns
///
/// The removed value, if one was set.
///
/// # Errors
///
/// Returns an error if no repository encloses `start` or the local config
/// store cannot be updated.
pub fn execute(start: &Path, out: &mut impl Write) -> Result<Option<String>> {
    let removed = HooksConfigurator::discover(start)?.reset()?;
    if removed.is_some() {
        writeln!(out, "Git hooks path reset.")?;
    } else {
        writeln!(out, "Git hooks path was not set.")?;
    }
    Ok(removed)
}
