// crates/typing-client/src/notes.rs
// ============================================================================
// Module: Notes API Client
// Description: CRUD operations against the notes storage endpoints.
// Purpose: Provide the thin, uniformly-shaped surface scenarios assert on.
// Dependencies: reqwest, serde, url
// ============================================================================

//! ## Overview
//! Five operations against `/api/v1/storage/notes`, each carrying the bearer
//! token when the client holds one and each returning the raw normalized
//! [`ApiResponse`]. The client performs no retries and no status-code
//! interpretation: scenarios own every expectation, including the 404 after
//! deletion and the 401 for the tokenless boundary case.
//!
//! The wire model follows the service's `omitempty` serialization: empty
//! `metadata`/`labels` are omitted from request bodies and absent fields
//! deserialize to empty collections, so missing and empty compare equal.
//! Server-stamped fields such as `dateCreated` are ignored.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::Client;
use reqwest::Method;
use serde::Deserialize;
use serde::Serialize;
use url::Url;

use crate::auth::AccessToken;
use crate::error::ClientError;
use crate::http;
use crate::http::ApiResponse;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Notes collection path on the storage service.
const NOTES_PATH: &str = "/api/v1/storage/notes";

// ============================================================================
// SECTION: Wire Shapes
// ============================================================================

/// A note as returned by the storage service.
///
/// # Invariants
/// - `id` is assigned only by the service on creation and is immutable.
/// - Absent `metadata`/`labels` deserialize to empty collections.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Note {
    /// Server-assigned identifier, non-empty after creation.
    #[serde(default)]
    pub id: String,
    /// Note name.
    #[serde(default)]
    pub name: String,
    /// Note description.
    #[serde(default)]
    pub desc: String,
    /// Structured metadata; replaced wholesale on update.
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
    /// Ordered labels; replaced wholesale on update.
    #[serde(default)]
    pub labels: Vec<String>,
}

/// A note body as submitted by the harness.
///
/// # Invariants
/// - Empty collections are omitted from the serialized body, matching the
///   service's own `omitempty` convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteDraft {
    /// Note name.
    pub name: String,
    /// Note description.
    pub desc: String,
    /// Structured metadata to submit.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
    /// Ordered labels to submit.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
}

impl NoteDraft {
    /// Creates a draft carrying only name and description.
    #[must_use]
    pub fn new(name: &str, desc: &str) -> Self {
        Self {
            name: name.to_string(),
            desc: desc.to_string(),
            metadata: BTreeMap::new(),
            labels: Vec::new(),
        }
    }

    /// Attaches metadata to the draft.
    #[must_use]
    pub fn with_metadata(mut self, metadata: BTreeMap<String, String>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Attaches labels to the draft.
    #[must_use]
    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = labels;
        self
    }
}

// ============================================================================
// SECTION: Client
// ============================================================================

/// Client for the notes storage endpoints.
pub struct NotesClient {
    /// Shared HTTP client with the configured timeout.
    http: Client,
    /// Storage service base URL.
    base: Url,
    /// Bearer token; `None` for the authorization boundary case.
    token: Option<AccessToken>,
}

impl NotesClient {
    /// Creates an authenticated notes client.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] when the HTTP client cannot be built.
    pub fn new(base: Url, timeout: Duration, token: AccessToken) -> Result<Self, ClientError> {
        Ok(Self {
            http: http::build_client(timeout)?,
            base,
            token: Some(token),
        })
    }

    /// Creates a client that sends no Authorization header.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] when the HTTP client cannot be built.
    pub fn anonymous(base: Url, timeout: Duration) -> Result<Self, ClientError> {
        Ok(Self {
            http: http::build_client(timeout)?,
            base,
            token: None,
        })
    }

    /// Fetches the note collection.
    ///
    /// # Errors
    ///
    /// Propagates transport and body-decoding failures.
    pub async fn list(&self) -> Result<ApiResponse, ClientError> {
        self.send(Method::GET, NOTES_PATH, None).await
    }

    /// Fetches one note by id.
    ///
    /// # Errors
    ///
    /// Propagates transport and body-decoding failures.
    pub async fn get(&self, id: &str) -> Result<ApiResponse, ClientError> {
        self.send(Method::GET, &note_path(id), None).await
    }

    /// Creates a note from the draft.
    ///
    /// # Errors
    ///
    /// Propagates transport and body-decoding failures.
    pub async fn create(&self, draft: &NoteDraft) -> Result<ApiResponse, ClientError> {
        self.send(Method::POST, NOTES_PATH, Some(draft)).await
    }

    /// Replaces the note with the draft's fields.
    ///
    /// # Errors
    ///
    /// Propagates transport and body-decoding failures.
    pub async fn update(&self, id: &str, draft: &NoteDraft) -> Result<ApiResponse, ClientError> {
        self.send(Method::PUT, &note_path(id), Some(draft)).await
    }

    /// Deletes one note by id.
    ///
    /// # Errors
    ///
    /// Propagates transport and body-decoding failures.
    pub async fn delete(&self, id: &str) -> Result<ApiResponse, ClientError> {
        self.send(Method::DELETE, &note_path(id), None).await
    }

    /// Issues one request with the shared header and body layering.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&NoteDraft>,
    ) -> Result<ApiResponse, ClientError> {
        let mut request = http::request(&self.http, &self.base, method, path)?;
        if let Some(token) = &self.token {
            request = request.bearer_auth(token.reveal());
        }
        if let Some(draft) = body {
            request = request.json(draft);
        }
        http::dispatch(request).await
    }
}

/// Returns the note-by-id path.
fn note_path(id: &str) -> String {
    format!("{NOTES_PATH}/{id}")
}

// ============================================================================
// SECTION: Tests
// ============================================================================
