// Rust guideline compliant 2026-10-18

//! Reads and writes `core.hooksPath` in a repository's local Git config.
//!
//! Only the local level (`.git/config`) is touched. Global and system values
//! are neither read nor modified.

use crate::{HooksPath, Result};
use git2::{ConfigLevel, ErrorCode, Repository, RepositoryOpenFlags};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{debug, info};

/// Git config key holding the hooks directory.
pub const HOOKS_PATH_KEY: &str = "core.hooksPath";

/// Line printed after a successful configuration.
pub const CONFIRMATION: &str =
    "Git hooks configured. Pre-commit hook will run fmt, clippy, and test.";

/// Result of applying a hooks path to the local config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The key was absent and has been written.
    Created,
    /// The key already held the requested value; nothing was written.
    Unchanged,
    /// The key held a different value, which was overwritten.
    Replaced {
        /// Value held before the write.
        previous: String,
    },
}

/// Configures the hooks directory of a single repository.
pub struct HooksConfigurator {
    repo: Repository,
}

impl HooksConfigurator {
    /// Finds the repository containing `start`.
    ///
    /// Discovery walks up parent directories and, like `git`, stops at
    /// filesystem boundaries.
    ///
    /// # Errors
    ///
    /// Returns an error if no repository encloses `start`.
    pub fn discover(start: &Path) -> Result<Self> {
        let repo = Repository::open_ext(
            start,
            RepositoryOpenFlags::empty(),
            &[] as &[&OsStr],
        )?;
        debug!(git_dir = %repo.path().display(), "discovered repository");
        Ok(Self::from_repository(repo))
    }

    /// Wraps an already opened repository.
    #[must_use]
    pub fn from_repository(repo: Repository) -> Self {
        Self { repo }
    }

    /// Reads the local `core.hooksPath` value.
    ///
    /// # Returns
    ///
    /// `Some(value)` when the key is set locally, `None` otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the local config store cannot be opened or read.
    pub fn current(&self) -> Result<Option<String>> {
        let config = self.local_config()?;
        match config.get_string(HOOKS_PATH_KEY) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.code() == ErrorCode::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Points `core.hooksPath` at `hooks_path`.
    ///
    /// The write is skipped when the key already holds the same value, so
    /// repeated calls leave the config file untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the local config store cannot be read or written,
    /// for example when another process holds `config.lock`.
    pub fn apply(&self, hooks_path: &HooksPath) -> Result<ApplyOutcome> {
        let previous = self.current()?;
        if previous.as_deref() == Some(hooks_path.as_str()) {
            debug!(key = HOOKS_PATH_KEY, value = %hooks_path, "already configured");
            return Ok(ApplyOutcome::Unchanged);
        }

        let mut config = self.local_config()?;
        config.set_str(HOOKS_PATH_KEY, hooks_path.as_str())?;
        info!(key = HOOKS_PATH_KEY, value = %hooks_path, previous = ?previous, "hooks path set");

        Ok(match previous {
            Some(previous) => ApplyOutcome::Replaced { previous },
            None => ApplyOutcome::Created,
        })
    }

    /// Removes `core.hooksPath` from the local config.
    ///
    /// # Returns
    ///
    /// The removed value, or `None` when the key was not set.
    ///
    /// # Errors
    ///
    /// Returns an error if the local config store cannot be read or written.
    pub fn reset(&self) -> Result<Option<String>> {
        let Some(previous) = self.current()? else {
            debug!(key = HOOKS_PATH_KEY, "nothing to reset");
            return Ok(None);
        };

        let mut config = self.local_config()?;
        config.remove(HOOKS_PATH_KEY)?;
        info!(key = HOOKS_PATH_KEY, previous = %previous, "hooks path removed");
        Ok(Some(previous))
    }

    fn local_config(&self) -> Result<git2::Config> {
        let config = self.repo.config()?;
        Ok(config.open_level(ConfigLevel::Local)?)
    }
}
