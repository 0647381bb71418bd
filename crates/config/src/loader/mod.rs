//! Configuration loader for environment variables and files.
//!
//! Responsibilities:
//! - Load connection settings from `.env` files, environment variables, and builder overrides.
//! - Resolve the targets file and report path for the selected environment.
//! - Read the JSON targets file.
//!
//! Does NOT handle:
//! - Validating targets against the remote API (see client crate).
//!
//! Invariants / Assumptions:
//! - Builder methods (CLI flags) take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

mod builder;
mod env;
mod error;
mod targets;

pub use builder::ConfigLoader;
pub use error::ConfigError;
pub use targets::load_targets;

#[cfg(test)]
mod tests;
