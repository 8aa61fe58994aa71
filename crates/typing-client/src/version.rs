// crates/typing-client/src/version.rs
// ============================================================================
// Module: Version Client
// Description: Unauthenticated probe of the storage service version endpoint.
// Purpose: Verify the service identifies itself with the product marker.
// Dependencies: reqwest, serde, url
// ============================================================================

//! ## Overview
//! `GET /api/version` needs no credentials and returns a single version
//! string. The deployed service renders it as `Typing <version>-<build>
//! <os>/<arch>`, so scenarios assert on the product marker substring rather
//! than an exact value.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use reqwest::Client;
use reqwest::Method;
use serde::Deserialize;
use url::Url;

use crate::error::ClientError;
use crate::http;
use crate::http::ApiResponse;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Version endpoint path on the storage service.
const VERSION_PATH: &str = "/api/version";

/// Product marker every deployed version string contains.
pub const PRODUCT_MARKER: &str = "Typing";

// ============================================================================
// SECTION: Wire Shapes
// ============================================================================

/// Version endpoint response payload.
#[derive(Debug, Clone, Deserialize)]
pub struct VersionInfo {
    /// Full version string reported by the service.
    #[serde(default)]
    pub version: String,
}

// ============================================================================
// SECTION: Client
// ============================================================================

/// Client for the storage service's version endpoint.
pub struct VersionClient {
    /// Shared HTTP client with the configured timeout.
    http: Client,
    /// Storage service base URL.
    base: Url,
}

impl VersionClient {
    /// Creates a version client against the storage base URL.
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

    /// Fetches the version payload without credentials.
    ///
    /// # Errors
    ///
    /// Propagates transport and body-decoding failures.
    pub async fn fetch(&self) -> Result<ApiResponse, ClientError> {
        let request = http::request(&self.http, &self.base, Method::GET, VERSION_PATH)?;
        http::dispatch(request).await
    }
}
