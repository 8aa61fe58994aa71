// crates/typing-client/src/auth.rs
// ============================================================================
// Module: Token Refresh Client
// Description: Exchange a refresh credential for a short-lived access token.
// Purpose: Establish the bearer credential every authenticated call carries.
// Dependencies: reqwest, serde, url
// ============================================================================

//! ## Overview
//! The storage service mints short-lived access tokens from a long-lived
//! refresh credential via a form-encoded POST. Refresh is a setup
//! precondition: anything other than a 200 with a usable `accessToken` field
//! fails the run, not a single scenario.
//!
//! Security posture: both credential types render masked or redacted through
//! `Debug`/`Display`; the raw values are only readable inside this crate.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::time::Duration;

use reqwest::Client;
use reqwest::Method;
use reqwest::StatusCode;
use serde::Deserialize;
use url::Url;

use crate::error::ClientError;
use crate::error::SetupError;
use crate::http;
use crate::telemetry::SetupObserver;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Auth refresh endpoint path on the storage service.
const REFRESH_PATH: &str = "/api/v1/signin/auth/refresh";

/// Number of trailing token characters left visible in the masked form.
const MASK_VISIBLE_CHARS: usize = 5;

// ============================================================================
// SECTION: Credential Types
// ============================================================================

/// Long-lived refresh credential supplied by the environment.
///
/// # Invariants
/// - The raw value is never mutated and never rendered by `Debug`.
#[derive(Clone)]
pub struct RefreshCredential(String);

impl RefreshCredential {
    /// Wraps a raw credential value.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the raw credential for request encoding.
    pub(crate) fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RefreshCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RefreshCredential(<redacted>)")
    }
}

/// Short-lived bearer token published to the run context.
///
/// # Invariants
/// - `Display` and `Debug` render only the masked form: an asterisk prefix
///   plus the final five characters.
#[derive(Clone)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wraps a raw token value.
    #[must_use]
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the masked rendering used in diagnostics.
    #[must_use]
    pub fn masked(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        let start = chars.len().saturating_sub(MASK_VISIBLE_CHARS);
        let tail: String = chars[start..].iter().collect();
        format!("*****{tail}")
    }

    /// Returns the raw token for Authorization headers.
    pub(crate) fn reveal(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccessToken({})", self.masked())
    }
}

// ============================================================================
// SECTION: Wire Shapes
// ============================================================================

/// Refresh endpoint response payload.
#[derive(Debug, Deserialize)]
struct RefreshResponse {
    /// Newly minted access token; absent or empty means an unusable payload.
    #[serde(rename = "accessToken", default)]
    access_token: String,
}

// ============================================================================
// SECTION: Client
// ============================================================================

/// Client for the storage service's token refresh endpoint.
pub struct AuthClient {
    /// Shared HTTP client with the configured timeout.
    http: Client,
    /// Storage service base URL.
    base: Url,
}

impl AuthClient {
    /// Creates an auth client against the storage base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] when the HTTP client cannot be built.
    pub fn new(base: Url, timeout: Duration) -> Result<Self, ClientError> {
        Ok(Self {
            http: http::build_client(timeout)?,
            base,
        })
    }

    /// Exchanges the refresh credential for a fresh access token.
    ///
    /// Requires exactly a 200 response carrying a non-empty `accessToken`.
    /// Reports the masked token to the observer on success.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::RefreshStatus`] on any non-200 status,
    /// [`SetupError::RefreshPayload`] when the token field is missing or
    /// empty, and wraps transport/decoding failures as
    /// [`SetupError::Client`].
    pub async fn refresh(
        &self,
        credential: &RefreshCredential,
        observer: &dyn SetupObserver,
    ) -> Result<AccessToken, SetupError> {
        let request = http::request(&self.http, &self.base, Method::POST, REFRESH_PATH)?
            .form(&[("refresh_token", credential.secret())]);
        let response = http::dispatch(request).await?;
        if response.status != StatusCode::OK {
            return Err(SetupError::RefreshStatus {
                status: response.status,
            });
        }
        let payload: RefreshResponse = response.decode()?;
        if payload.access_token.is_empty() {
            return Err(SetupError::RefreshPayload);
        }
        let token = AccessToken::from_raw(payload.access_token);
        observer.token_received(&token.masked());
        Ok(token)
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
