// crates/typing-client/src/http.rs
// ============================================================================
// Module: HTTP Request Plumbing
// Description: Request construction and response normalization.
// Purpose: Give every client the same status-plus-body exchange shape.
// Dependencies: reqwest, serde_json, url
// ============================================================================

//! ## Overview
//! Request construction is a pure function of base URL, path, and method;
//! callers layer on headers, query parameters, and bodies, and the values
//! they set pass through untouched. Dispatch never treats a non-2xx status
//! as a failure: every completed exchange is normalized to [`ApiResponse`]
//! and status interpretation is left to the caller. Empty bodies normalize
//! to JSON null; bodies that are present but not JSON fail closed as a
//! decode error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use reqwest::Client;
use reqwest::Method;
use reqwest::RequestBuilder;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::error::ClientError;

// ============================================================================
// SECTION: Response Type
// ============================================================================

/// A completed HTTP exchange: status code plus parsed JSON body.
///
/// # Invariants
/// - `status` is returned verbatim; no status is ever converted to an error
///   by this layer.
/// - `body` is [`Value::Null`] when the response body was empty.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// Response status code, uninterpreted.
    pub status: StatusCode,
    /// Parsed JSON response body.
    pub body: Value,
}

impl ApiResponse {
    /// Decodes the body into a typed shape for assertions.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Decode`] when the body does not match `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        serde_json::from_value(self.body.clone())
            .map_err(|err| ClientError::Decode(err.to_string()))
    }
}

// ============================================================================
// SECTION: Construction
// ============================================================================

/// Builds a reqwest client with the given request timeout.
///
/// # Errors
///
/// Returns [`ClientError::Config`] when the client cannot be constructed.
pub(crate) fn build_client(timeout: Duration) -> Result<Client, ClientError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|err| ClientError::Config(format!("failed to build http client: {err}")))
}

/// Starts a request against `base` joined with `path`.
///
/// # Errors
///
/// Returns [`ClientError::Config`] when the path does not join onto the base.
pub(crate) fn request(
    client: &Client,
    base: &Url,
    method: Method,
    path: &str,
) -> Result<RequestBuilder, ClientError> {
    let url = base
        .join(path)
        .map_err(|err| ClientError::Config(format!("invalid request path '{path}': {err}")))?;
    Ok(client.request(method, url))
}

/// Sends a request and normalizes the result to [`ApiResponse`].
///
/// # Errors
///
/// Returns [`ClientError::Transport`] when the exchange itself fails and
/// [`ClientError::Decode`] when a non-empty body is not valid JSON.
pub(crate) async fn dispatch(request: RequestBuilder) -> Result<ApiResponse, ClientError> {
    let response = request.send().await?;
    let status = response.status();
    let bytes = response.bytes().await?;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .map_err(|err| ClientError::Decode(format!("body is not valid json: {err}")))?
    };
    Ok(ApiResponse {
        status,
        body,
    })
}

// ============================================================================
// SECTION: Tests
// ============================================================================
