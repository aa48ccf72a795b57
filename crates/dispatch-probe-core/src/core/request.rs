// crates/dispatch-probe-core/src/core/request.rs
// ============================================================================
// Module: Probe Request
// Description: Immutable synthetic request issued against a dispatcher.
// Purpose: Scope one probe call to a path with an optional status check.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A [`ProbeRequest`] is constructed per call and never mutated afterward.
//! The expected status is an explicit `Option`: `None` means "no check",
//! letting readiness polling observe transient statuses without failing.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Probe Request
// ============================================================================

/// Synthetic request issued against a request-dispatch capability.
///
/// # Invariants
/// - Constructed once per probe call; never mutated afterward.
/// - `expected_status: None` disables the status assertion entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeRequest {
    /// Resource path the request is scoped to, including any extension
    /// suffix (for example `/.json`).
    pub path: String,
    /// Status the caller expects, or `None` to return the raw response
    /// without checking.
    pub expected_status: Option<u16>,
}

impl ProbeRequest {
    /// Creates a request for `path` with no status check.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            expected_status: None,
        }
    }

    /// Creates a request for `path` that must observe `status`.
    #[must_use]
    pub fn expecting(path: impl Into<String>, status: u16) -> Self {
        Self {
            path: path.into(),
            expected_status: Some(status),
        }
    }
}
