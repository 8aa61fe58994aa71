// crates/typing-client/src/drive.rs
// ============================================================================
// Module: Drive Cleanup Client
// Description: Enumerate and delete residual application-data files.
// Purpose: Guarantee each run starts from an empty remote state.
// Dependencies: reqwest, serde, url
// ============================================================================

//! ## Overview
//! The storage service keeps its data in the caller's Drive application-data
//! space. Before a run, every residual file there is enumerated and deleted
//! so scenarios observe only their own effects. Listing requires exactly 200
//! and deletion exactly 204; any other status means the environment is
//! unusable and the run aborts. Deletions are issued sequentially, never
//! concurrently, so a failure attributes to one specific file and the Drive
//! API sees no burst traffic at setup time.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use reqwest::Client;
use reqwest::Method;
use reqwest::StatusCode;
use serde::Deserialize;
use serde::Serialize;
use url::Url;

use crate::auth::AccessToken;
use crate::error::ClientError;
use crate::error::SetupError;
use crate::http;
use crate::telemetry::SetupObserver;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Drive files collection path.
const FILES_PATH: &str = "/drive/v3/files";

/// Query value scoping requests to the application-data space.
const APP_DATA_SPACE: &str = "appDataFolder";

// ============================================================================
// SECTION: Wire Shapes
// ============================================================================

/// A file in the application-data space.
///
/// # Invariants
/// - Values are server-provided and untrusted; the harness never creates
///   these entries itself.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RemoteFile {
    /// Server-assigned file identifier.
    pub id: String,
    /// File display name.
    pub name: String,
}

/// Files listing response payload.
#[derive(Debug, Deserialize)]
struct FileList {
    /// Listed files in server order; absent means empty.
    #[serde(default)]
    files: Vec<RemoteFile>,
}

// ============================================================================
// SECTION: Client
// ============================================================================

/// Client for the Drive application-data cleanup flow.
pub struct DriveClient {
    /// Shared HTTP client with the configured timeout.
    http: Client,
    /// Drive API base URL.
    base: Url,
}

impl DriveClient {
    /// Creates a cleanup client against the Drive base URL.
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

    /// Lists all files in the application-data space, preserving server order.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::ListStatus`] on any non-200 status and wraps
    /// transport/decoding failures as [`SetupError::Client`].
    pub async fn list_files(&self, token: &AccessToken) -> Result<Vec<RemoteFile>, SetupError> {
        let request = http::request(&self.http, &self.base, Method::GET, FILES_PATH)?
            .query(&[("spaces", APP_DATA_SPACE)])
            .bearer_auth(token.reveal());
        let response = http::dispatch(request).await?;
        if response.status != StatusCode::OK {
            return Err(SetupError::ListStatus {
                status: response.status,
            });
        }
        let list: FileList = response.decode()?;
        Ok(list.files)
    }

    /// Deletes one file from the application-data space.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::DeleteStatus`] on any non-204 status and wraps
    /// transport failures as [`SetupError::Client`].
    pub async fn delete_file(
        &self,
        file: &RemoteFile,
        token: &AccessToken,
    ) -> Result<(), SetupError> {
        let path = format!("{FILES_PATH}/{}", file.id);
        let request = http::request(&self.http, &self.base, Method::DELETE, &path)?
            .bearer_auth(token.reveal());
        let response = http::dispatch(request).await?;
        if response.status != StatusCode::NO_CONTENT {
            return Err(SetupError::DeleteStatus {
                name: file.name.clone(),
                status: response.status,
            });
        }
        Ok(())
    }

    /// Lists and deletes every residual file, sequentially.
    ///
    /// An empty listing is success with zero deletions. Each deletion is
    /// reported to the observer as it is issued.
    ///
    /// # Errors
    ///
    /// Propagates the first listing or deletion failure; files after a
    /// failed deletion are left untouched.
    pub async fn purge_app_data(
        &self,
        token: &AccessToken,
        observer: &dyn SetupObserver,
    ) -> Result<usize, SetupError> {
        let files = self.list_files(token).await?;
        observer.files_listed(files.len());
        for file in &files {
            observer.file_deleted(file);
            self.delete_file(file, token).await?;
        }
        Ok(files.len())
    }
}
