//! Request execution and status handling.
//!
//! Every request is sent exactly once; nothing here retries.

use reqwest::{RequestBuilder, Response, StatusCode};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::GoogleApiError;

/// Sends an HTTP request and maps non-success statuses to errors.
///
/// # Arguments
///
/// * `builder` - The prepared request
/// * `resource` - Resource name, used for the not-found error and logging
///
/// # Errors
///
/// - `ClientError::NotFound` for HTTP 404
/// - `ClientError::ApiError` for any other non-2xx status, carrying the
///   message from the Google error envelope when the body has one
/// - `ClientError::HttpError` for transport failures
pub async fn send_request(builder: RequestBuilder, resource: &str) -> Result<Response> {
    let response = builder.send().await?;
    let status = response.status();

    debug!(resource, status = status.as_u16(), "GKE API response");

    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::NOT_FOUND {
        return Err(ClientError::NotFound(resource.to_string()));
    }

    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    let message = match serde_json::from_str::<GoogleApiError>(&body) {
        Ok(envelope) => envelope.display_message(),
        Err(_) => body,
    };

    Err(ClientError::ApiError {
        status: status.as_u16(),
        url,
        message,
    })
}
