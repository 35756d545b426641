// Rust guideline compliant 2026-10-18

//! Hookpath Core Library
//!
//! This crate points a Git repository at a versioned hooks directory:
//! - Validated hooks directory values
//! - Reading, writing and unsetting `core.hooksPath` in the local config
//! - Optional TOML configuration
//! - Error types and result handling

pub mod config;
pub mod configurator;
pub mod error;
pub mod hooks_path;

pub use config::Config;
pub use configurator::{ApplyOutcome, HooksConfigurator, CONFIRMATION, HOOKS_PATH_KEY};
pub use error::{Error, Result};
pub use hooks_path::{HooksPath, DEFAULT_HOOKS_DIR};
