// crates/typing-client/src/error.rs
// ============================================================================
// Module: Client Errors
// Description: Error taxonomy for the Typing client surface.
// Purpose: Separate recoverable transport failures from fatal setup failures.
// Dependencies: reqwest, thiserror
// ============================================================================

//! ## Overview
//! Two error families cover the whole client surface. [`ClientError`] is the
//! transport/decoding layer: the caller decides what a failed or undecodable
//! exchange means. [`SetupError`] is the fatal taxonomy for the run-global
//! fixture: any variant means the test environment is unusable and the run
//! must not proceed to scenarios. No retry is performed for either family.

// ============================================================================
// SECTION: Imports
// ============================================================================

use reqwest::StatusCode;
use thiserror::Error;

// ============================================================================
// SECTION: Client Errors
// ============================================================================

/// Errors raised by request plumbing and response decoding.
///
/// # Invariants
/// - Variants are stable for harness error mapping and tests.
/// - Payload strings may include untrusted server text.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Underlying HTTP transport failure.
    #[error("http transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// Response body was present but not decodable as the expected shape.
    #[error("response decode error: {0}")]
    Decode(String),
    /// Client construction or request construction failure.
    #[error("client config error: {0}")]
    Config(String),
}

// ============================================================================
// SECTION: Setup Errors
// ============================================================================

/// Fatal failures during run setup (token refresh and Drive cleanup).
///
/// # Invariants
/// - Any variant aborts the run before the first scenario executes.
/// - Status-mismatch variants carry the observed status for diagnostics.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The refresh credential was absent or empty in the environment.
    #[error("missing refresh credential: {0}")]
    MissingCredential(String),
    /// Token refresh returned a status other than 200.
    #[error("token refresh returned status {status}, expected 200")]
    RefreshStatus {
        /// Observed response status.
        status: StatusCode,
    },
    /// Token refresh returned 200 but no usable `accessToken` field.
    #[error("token refresh response missing accessToken")]
    RefreshPayload,
    /// Application-data file listing returned a status other than 200.
    #[error("file listing returned status {status}, expected 200")]
    ListStatus {
        /// Observed response status.
        status: StatusCode,
    },
    /// Application-data file deletion returned a status other than 204.
    #[error("deleting file '{name}' returned status {status}, expected 204")]
    DeleteStatus {
        /// Name of the file the deletion targeted.
        name: String,
        /// Observed response status.
        status: StatusCode,
    },
    /// Transport or decoding failure underneath a setup call.
    #[error(transparent)]
    Client(#[from] ClientError),
}
