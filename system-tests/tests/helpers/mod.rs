// system-tests/tests/helpers/mod.rs
// ============================================================================
// Module: System Test Helpers
// Description: Shared helpers for Typing system-tests.
// Purpose: Provide the run fixture, supervision, and artifact utilities.
// Dependencies: system-tests, typing-client, tokio
// ============================================================================

//! ## Overview
//! Shared helpers for Typing system-tests.
//! Purpose: Provide the run fixture, supervision, and artifact utilities.
//! Invariants:
//! - Setup runs once per test process and fails the whole run on error.
//! - Scenarios execute sequentially under the supervisor's run lock.

#![allow(dead_code, reason = "Shared helpers are reused across multiple test suites.")]

pub mod asserts;
pub mod timeouts;
