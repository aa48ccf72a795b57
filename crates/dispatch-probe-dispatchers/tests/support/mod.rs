// crates/dispatch-probe-dispatchers/tests/support/mod.rs
// ============================================================================
// Module: Dispatcher Test Support
// Description: Shared assertions for dispatcher tests.
// Purpose: Provide panic-free assertions across test binaries.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Panic-free assertion helpers shared by the dispatcher test binaries.

#![allow(dead_code, reason = "Shared support is reused across multiple test binaries.")]

/// Result type for panic-free test functions.
pub type TestResult = Result<(), String>;

/// Fails with `message` when `condition` is false.
pub fn ensure(condition: bool, message: &str) -> TestResult {
    if condition {
        Ok(())
    } else {
        Err(message.to_string())
    }
}
