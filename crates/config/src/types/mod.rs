//! Configuration type definitions.
//!
//! Responsibilities:
//! - Define connection, authentication, and report output settings.
//! - Define the `FetchTarget` entries read from the targets file.
//!
//! Does NOT handle:
//! - Loading from environment variables or files (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - Secret values use `secrecy::SecretString` to prevent accidental logging.

mod auth;
pub(crate) mod connection;
mod report;
mod target;

pub use auth::AuthConfig;
pub use connection::{Config, ConnectionConfig};
pub use report::ReportConfig;
pub use target::FetchTarget;
