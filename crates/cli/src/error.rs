//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish failures.
//! - Map errors in an `anyhow` chain to the matching exit code.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Per-target API failures never reach this module; a finished batch exits 0.

use gke_config::ConfigError;

/// Structured exit codes for gke-inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - the batch ran to completion (some targets may have been skipped).
    Success = 0,

    /// General error - report write failure or any other unclassified error.
    GeneralError = 1,

    /// Configuration error - unreadable targets file, missing token, bad URL.
    ///
    /// Scripts should fix the configuration and not retry unchanged.
    ConfigError = 2,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(_: &ConfigError) -> Self {
        ExitCode::ConfigError
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ConfigError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::ConfigError.as_i32(), 2);
    }

    #[test]
    fn test_config_error_maps_to_config_exit_code() {
        let err: anyhow::Error = ConfigError::MissingAccessToken.into();
        assert_eq!(err.exit_code(), ExitCode::ConfigError);
    }

    #[test]
    fn test_config_error_found_through_context() {
        let result: Result<(), ConfigError> = Err(ConfigError::TargetsFileRead {
            path: PathBuf::from("project/NON-PROD.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        });
        let err = result.context("Failed to load targets").unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::ConfigError);
    }

    #[test]
    fn test_other_errors_are_general() {
        let err = anyhow::anyhow!("disk full");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }
}
