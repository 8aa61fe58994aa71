// crates/typing-client/src/lib.rs
// ============================================================================
// Module: Typing Client Library
// Description: Typed HTTP clients for the Typing storage service and the
//              Drive application-data cleanup flow.
// Purpose: Provide the client surface used by the Typing system-test harness.
// Dependencies: reqwest, serde, thiserror, url
// ============================================================================

//! ## Overview
//! This crate holds the typed clients the Typing system-tests drive against
//! live services: token refresh against the storage service's auth endpoint,
//! cleanup of the Drive application-data area, the notes CRUD surface under
//! test, and the unauthenticated version probe.
//!
//! Responses are normalized to a status code plus parsed JSON body; no client
//! here interprets status codes beyond the setup-critical flows (token
//! refresh and Drive cleanup), which fail closed on any unexpected status.
//! Security posture: server responses are untrusted; credentials are never
//! rendered unmasked by any `Debug` or `Display` implementation.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod auth;
pub mod drive;
pub mod error;
pub mod http;
pub mod notes;
pub mod telemetry;
pub mod version;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use auth::AccessToken;
pub use auth::AuthClient;
pub use auth::RefreshCredential;
pub use drive::DriveClient;
pub use drive::RemoteFile;
pub use error::ClientError;
pub use error::SetupError;
pub use http::ApiResponse;
pub use notes::Note;
pub use notes::NoteDraft;
pub use notes::NotesClient;
pub use telemetry::NoopObserver;
pub use telemetry::SetupObserver;
pub use version::VersionClient;
pub use version::VersionInfo;
