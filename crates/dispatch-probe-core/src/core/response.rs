// crates/dispatch-probe-core/src/core/response.rs
// ============================================================================
// Module: Probe Response
// Description: Response sink populated by dispatchers and its frozen form.
// Purpose: Normalize dispatcher output into a status/body pair.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Dispatchers populate a [`ResponseSink`] as a side effect of processing a
//! request; the sink is then consumed exactly once into an immutable
//! [`ProbeResponse`]. An untouched sink reads as status 200 with an empty
//! body, so dispatchers only set what they change.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Response Sink
// ============================================================================

/// Default status reported by a sink no dispatcher has touched.
const DEFAULT_STATUS: u16 = 200;

/// Mutable response object handed to a dispatcher for one probe call.
///
/// # Invariants
/// - Consumed into a [`ProbeResponse`] exactly once.
#[derive(Debug)]
pub struct ResponseSink {
    /// Status code set by the dispatcher.
    status: u16,
    /// Body accumulated by the dispatcher.
    body: String,
}

impl ResponseSink {
    /// Creates an empty sink with the default status.
    #[must_use]
    pub fn new() -> Self {
        Self {
            status: DEFAULT_STATUS,
            body: String::new(),
        }
    }

    /// Sets the response status.
    pub const fn set_status(&mut self, status: u16) {
        self.status = status;
    }

    /// Returns the current response status.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Appends text to the response body.
    pub fn write_body(&mut self, chunk: &str) {
        self.body.push_str(chunk);
    }

    /// Freezes the sink into an immutable response.
    #[must_use]
    pub fn into_response(self) -> ProbeResponse {
        ProbeResponse {
            status: self.status,
            body: self.body,
        }
    }
}

impl Default for ResponseSink {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// SECTION: Probe Response
// ============================================================================

/// Normalized result of one probe call.
///
/// # Invariants
/// - Produced once per probe; never mutated afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeResponse {
    /// Observed status code.
    pub status: u16,
    /// Observed response body.
    pub body: String,
}

impl ProbeResponse {
    /// Returns true when the body contains `needle` literally.
    #[must_use]
    pub fn body_contains(&self, needle: &str) -> bool {
        self.body.contains(needle)
    }
}
