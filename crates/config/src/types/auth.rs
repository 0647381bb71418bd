//! Authentication settings for the control-plane API.
//!
//! Does NOT handle:
//! - Minting or refreshing OAuth tokens. The token is provided by the
//!   environment (for example `gcloud auth print-access-token`).

use secrecy::SecretString;

/// Authentication configuration.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// OAuth 2.0 access token sent as a bearer token.
    pub access_token: SecretString,
}
