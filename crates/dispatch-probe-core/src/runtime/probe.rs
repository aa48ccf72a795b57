// crates/dispatch-probe-core/src/runtime/probe.rs
// ============================================================================
// Module: Request Probe
// Description: Issues one synthetic request through a leased capability.
// Purpose: Exercise a request-dispatch path and normalize the outcome.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! A probe call acquires the configured capability fresh from the registry,
//! delegates to it with a new request/response pair, and releases the lease
//! before the response is examined. No handle survives the call, so repeated
//! polling cannot leak pooled service references.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::DispatchContext;
use crate::core::ProbeRequest;
use crate::core::ProbeResponse;
use crate::core::ResponseSink;
use crate::interfaces::CapabilityLease;
use crate::interfaces::CapabilityRegistry;
use crate::interfaces::DispatchError;

// ============================================================================
// SECTION: Probe Errors
// ============================================================================

/// Probe call failures.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - Status mismatches are surfaced to the caller, never swallowed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    /// Capability lookup or invocation failed.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
    /// The observed status did not match the requested expectation.
    #[error("expected status {expected} at {path}, got {actual}")]
    StatusMismatch {
        /// Path the probe was issued against.
        path: String,
        /// Status the request expected.
        expected: u16,
        /// Status the dispatcher produced.
        actual: u16,
    },
}

// ============================================================================
// SECTION: Request Probe
// ============================================================================

/// Issues synthetic requests against a named dispatch capability.
///
/// # Invariants
/// - Each call acquires and releases its own capability lease.
/// - Probe calls are stateless; a failed call cannot corrupt later ones.
pub struct RequestProbe<'a> {
    /// Registry the capability is resolved from.
    registry: &'a dyn CapabilityRegistry,
    /// Capability name probes are routed through.
    capability: String,
    /// Optional correlation identifier attached to every call.
    correlation_id: Option<String>,
}

impl<'a> RequestProbe<'a> {
    /// Creates a probe routed through the named capability.
    #[must_use]
    pub fn new(registry: &'a dyn CapabilityRegistry, capability: impl Into<String>) -> Self {
        Self {
            registry,
            capability: capability.into(),
            correlation_id: None,
        }
    }

    /// Attaches a correlation identifier to every call issued by this probe.
    #[must_use]
    pub fn with_correlation_id(mut self, correlation_id: impl Into<String>) -> Self {
        self.correlation_id = Some(correlation_id.into());
        self
    }

    /// Returns the capability name this probe routes through.
    #[must_use]
    pub fn capability(&self) -> &str {
        &self.capability
    }

    /// Executes one probe call and returns the normalized response.
    ///
    /// When `request.expected_status` is `None` the raw response is returned
    /// unchecked, so callers can poll without failing on transient states.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::Dispatch`] when the capability cannot be located
    /// or invoked, and [`ProbeError::StatusMismatch`] when an expectation is
    /// set and the observed status differs.
    pub fn execute(&self, request: &ProbeRequest) -> Result<ProbeResponse, ProbeError> {
        let response = self.dispatch(request)?;
        if let Some(expected) = request.expected_status
            && response.status != expected
        {
            return Err(ProbeError::StatusMismatch {
                path: request.path.clone(),
                expected,
                actual: response.status,
            });
        }
        Ok(response)
    }

    /// Dispatches the request through a scoped lease.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::Dispatch`] when lookup or invocation fails. The
    /// lease is released before this function returns, on every path.
    fn dispatch(&self, request: &ProbeRequest) -> Result<ProbeResponse, ProbeError> {
        let lease = CapabilityLease::acquire(self.registry, &self.capability)?;
        let mut sink = ResponseSink::new();
        let mut ctx = DispatchContext::new(&self.capability);
        if let Some(correlation_id) = &self.correlation_id {
            ctx = ctx.with_correlation_id(correlation_id.clone());
        }
        lease.dispatcher().process(request, &mut sink, &ctx)?;
        drop(lease);
        Ok(sink.into_response())
    }
}
