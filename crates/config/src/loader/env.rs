//! Environment variable parsing for configuration.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.
//! - Invalid numeric values return `ConfigError::InvalidValue`.

use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{
    ENV_ACCESS_TOKEN, ENV_BASE_URL, ENV_ENVIRONMENT, ENV_GOOGLE_ACCESS_TOKEN, ENV_TARGETS_PATH,
    ENV_TIMEOUT,
};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none(ENV_BASE_URL) {
        loader.set_base_url(Some(url));
    }

    let token =
        env_var_or_none(ENV_ACCESS_TOKEN).or_else(|| env_var_or_none(ENV_GOOGLE_ACCESS_TOKEN));
    if let Some(token) = token {
        loader.set_access_token(Some(SecretString::new(token.into())));
    }

    if let Some(timeout) = env_var_or_none(ENV_TIMEOUT) {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_TIMEOUT.to_string(),
            message: "must be a number".to_string(),
        })?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(environment) = env_var_or_none(ENV_ENVIRONMENT) {
        loader.set_environment(Some(environment));
    }
    if let Some(path) = env_var_or_none(ENV_TARGETS_PATH) {
        loader.set_targets_path(Some(PathBuf::from(path)));
    }

    Ok(())
}
