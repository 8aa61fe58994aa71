// system-tests/src/config/env.rs
// ============================================================================
// Module: System Test Environment
// Description: Environment-backed configuration for system tests.
// Purpose: Centralize env parsing with strict UTF-8 validation.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Environment values are parsed with strict UTF-8 enforcement to avoid
//! silent misconfiguration. Invalid UTF-8 and set-but-empty values fail
//! closed. The refresh credential stays optional at this layer; the fixture
//! turns its absence into a setup failure before any scenario runs.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default storage service base URL.
pub const DEFAULT_STORAGE_URL: &str = "http://localhost:7070";

/// Default Drive API base URL.
pub const DEFAULT_DRIVE_URL: &str = "https://www.googleapis.com";

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Environment keys for system test configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingTestEnv {
    /// Long-lived refresh credential for the storage service.
    RefreshToken,
    /// Optional storage service base URL override.
    StorageUrl,
    /// Optional Drive API base URL override.
    DriveUrl,
    /// Optional timeout override in seconds (positive integer).
    TimeoutSeconds,
}

impl TypingTestEnv {
    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RefreshToken => "TYPING_SYSTEM_TEST_REFRESH_TOKEN",
            Self::StorageUrl => "TYPING_SYSTEM_TEST_STORAGE_URL",
            Self::DriveUrl => "TYPING_SYSTEM_TEST_DRIVE_URL",
            Self::TimeoutSeconds => "TYPING_SYSTEM_TEST_TIMEOUT_SEC",
        }
    }
}

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Typed system test configuration derived from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SystemTestConfig {
    /// Refresh credential; required by the fixture, optional here.
    pub refresh_token: Option<String>,
    /// Optional storage base URL override.
    pub storage_url: Option<String>,
    /// Optional Drive base URL override.
    pub drive_url: Option<String>,
    /// Optional timeout override in seconds (positive integer).
    pub timeout: Option<Duration>,
}

impl SystemTestConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error when an environment value is not valid UTF-8, is
    /// empty, or fails validation (for example, an invalid timeout).
    pub fn load() -> Result<Self, String> {
        let refresh_token = read_env_nonempty(TypingTestEnv::RefreshToken.as_str())?;
        let storage_url = read_env_nonempty(TypingTestEnv::StorageUrl.as_str())?;
        let drive_url = read_env_nonempty(TypingTestEnv::DriveUrl.as_str())?;
        let timeout = read_env_nonempty(TypingTestEnv::TimeoutSeconds.as_str())?
            .map(|value| parse_timeout_seconds(TypingTestEnv::TimeoutSeconds.as_str(), &value))
            .transpose()?;
        Ok(Self {
            refresh_token,
            storage_url,
            drive_url,
            timeout,
        })
    }

    /// Returns the effective storage base URL.
    #[must_use]
    pub fn storage_url_or_default(&self) -> &str {
        self.storage_url.as_deref().unwrap_or(DEFAULT_STORAGE_URL)
    }

    /// Returns the effective Drive base URL.
    #[must_use]
    pub fn drive_url_or_default(&self) -> &str {
        self.drive_url.as_deref().unwrap_or(DEFAULT_DRIVE_URL)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads an environment variable and enforces UTF-8 validity.
///
/// # Errors
///
/// Returns an error when the environment variable contains invalid UTF-8.
pub fn read_env_strict(name: &str) -> Result<Option<String>, String> {
    std::env::var_os(name).map_or(Ok(None), |raw| {
        raw.into_string().map(Some).map_err(|_| format!("{name} must be valid UTF-8"))
    })
}

/// Reads an environment variable and rejects empty values.
///
/// # Errors
///
/// Returns an error when the variable is set but empty or whitespace.
fn read_env_nonempty(name: &str) -> Result<Option<String>, String> {
    match read_env_strict(name)? {
        Some(value) if value.trim().is_empty() => Err(format!("{name} must not be empty")),
        Some(value) => Ok(Some(value)),
        None => Ok(None),
    }
}

/// Parses a positive timeout value from an environment variable string.
///
/// # Errors
///
/// Returns an error when the value is missing, non-numeric, or zero.
fn parse_timeout_seconds(name: &str, raw: &str) -> Result<Duration, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(format!("{name} must be a positive integer number of seconds"));
    }
    let secs: u64 = trimmed
        .parse()
        .map_err(|_| format!("{name} must be a positive integer number of seconds"))?;
    if secs == 0 {
        return Err(format!("{name} must be greater than zero"));
    }
    Ok(Duration::from_secs(secs))
}
