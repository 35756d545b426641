// Rust guideline compliant 2026-10-18

//! Command implementations for the hookpath CLI.

pub mod install;
pub mod reset;
pub mod status;
