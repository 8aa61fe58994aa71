// system-tests/tests/helpers/asserts.rs
// ============================================================================
// Module: Response Assertions
// Description: Shared status and body checks for scenario code.
// Purpose: Keep scenario expectations uniform and their failures readable.
// Dependencies: typing-client
// ============================================================================

use typing_client::ApiResponse;

/// Checks a response status against the expected code.
///
/// # Errors
///
/// Returns a message naming the operation, expected, and observed status.
pub fn ensure_status(operation: &str, response: &ApiResponse, expected: u16) -> Result<(), String> {
    let observed = response.status.as_u16();
    if observed == expected {
        return Ok(());
    }
    Err(format!("{operation} returned status {observed}, expected {expected}"))
}

/// Checks that a string field is non-empty.
///
/// # Errors
///
/// Returns a message naming the field when the value is empty.
pub fn ensure_non_empty(field: &str, value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err(format!("{field} must not be empty"));
    }
    Ok(())
}
