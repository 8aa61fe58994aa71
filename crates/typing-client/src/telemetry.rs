// crates/typing-client/src/telemetry.rs
// ============================================================================
// Module: Setup Telemetry
// Description: Observer hooks for run-setup diagnostics.
// Purpose: Let harnesses capture setup events without a hard logging dep.
// Dependencies: none
// ============================================================================

//! ## Overview
//! This module exposes a thin observer interface for the diagnostic events
//! the setup flow emits: token receipt and application-data cleanup progress.
//! It is intentionally dependency-light so a harness can route events into
//! its own reporting without redesign.
//! Security posture: only the masked token form ever crosses this boundary.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::drive::RemoteFile;

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Sink for diagnostic events emitted during run setup.
pub trait SetupObserver: Send + Sync {
    /// Called after a successful token refresh with the masked token.
    fn token_received(&self, masked: &str);
    /// Called after the application-data listing with the file count.
    fn files_listed(&self, count: usize);
    /// Called for each file as its deletion is issued.
    fn file_deleted(&self, file: &RemoteFile);
}

/// No-op observer.
///
/// # Invariants
/// - Events are intentionally discarded.
pub struct NoopObserver;

impl SetupObserver for NoopObserver {
    fn token_received(&self, _masked: &str) {}

    fn files_listed(&self, _count: usize) {}

    fn file_deleted(&self, _file: &RemoteFile) {}
}
