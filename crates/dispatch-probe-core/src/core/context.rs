// crates/dispatch-probe-core/src/core/context.rs
// ============================================================================
// Module: Dispatch Context
// Description: Per-call metadata handed to dispatchers.
// Purpose: Identify the capability and correlation scope of one probe call.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The context is a snapshot built per probe call. Dispatchers read it for
//! diagnostics and correlation; they must not treat it as mutable state.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Dispatch Context
// ============================================================================

/// Metadata describing the scope of one dispatch invocation.
///
/// # Invariants
/// - Values are snapshots; dispatchers must not mutate them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchContext {
    /// Capability name the call was routed through.
    pub capability: String,
    /// Optional correlation identifier supplied by the caller.
    pub correlation_id: Option<String>,
}

impl DispatchContext {
    /// Creates a context for the named capability.
    #[must_use]
    pub fn new(capability: impl Into<String>) -> Self {
        Self {
            capability: capability.into(),
            correlation_id: None,
        }
    }

    /// Attaches a correlation identifier.
    #[must_use]
    pub fn with_correlation_id(mut self, correlation_id: impl Into<String>) -> Self {
        self.correlation_id = Some(correlation_id.into());
        self
    }
}
