//! Shared response envelopes.

use serde::{Deserialize, Serialize};

/// Google API error envelope: `{"error": {"code": 404, "message": "...", "status": "NOT_FOUND"}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleApiError {
    pub error: GoogleErrorBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleErrorBody {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
    pub status: Option<String>,
}

impl GoogleApiError {
    /// Human-readable message, prefixed with the canonical status when present.
    pub fn display_message(&self) -> String {
        match &self.error.status {
            Some(status) if !status.is_empty() => format!("{}: {}", status, self.error.message),
            _ => self.error.message.clone(),
        }
    }
}
