// Rust guideline compliant 2026-10-18

//! Unit tests for error types and messages.

use hookpath_core::Error;

#[test]
fn test_git_error_is_verbatim() {
    let git_err = git2::Error::from_str("could not find repository at '/tmp/x'");
    let msg = Error::Git(git_err).to_string();
    assert_eq!(msg, "could not find repository at '/tmp/x'");
}

#[test]
fn test_git_error_has_no_duplicate_source() {
    let git_err = git2::Error::from_str("could not lock config file");
    let error = Error::from(git_err);
    assert!(
        std::error::Error::source(&error).is_none(),
        "Git errors should not repeat their message through source()"
    );
}

#[test]
fn test_invalid_hooks_path_formatting() {
    let error = Error::InvalidHooksPath("hooks path cannot be empty".to_string());
    assert_eq!(error.to_string(), "Invalid hooks path: hooks path cannot be empty");
}

#[test]
fn test_io_error_formatting() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let msg = Error::from(io_err).to_string();
    assert!(msg.contains("IO error"), "IO error should contain 'IO error' prefix");
}
