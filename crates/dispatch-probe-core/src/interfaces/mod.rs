// crates/dispatch-probe-core/src/interfaces/mod.rs
// ============================================================================
// Module: Dispatch Probe Interfaces
// Description: Backend-agnostic interfaces for dispatch and capability lookup.
// Purpose: Define the contract surfaces the probe runtime depends on.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! Interfaces define how the harness integrates with a request-processing
//! system without embedding backend-specific details. The
//! [`RequestDispatcher`] trait is the stable polymorphic contract implemented
//! by real dispatch pipelines and test doubles alike; [`CapabilityRegistry`]
//! is the lookup-by-name handshake for obtaining one transiently. Leases are
//! released exactly once, whatever the outcome of the call they scope.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use thiserror::Error;

use crate::core::DispatchContext;
use crate::core::ProbeRequest;
use crate::core::ResponseSink;

// ============================================================================
// SECTION: Dispatch Errors
// ============================================================================

/// Dispatch errors for capability lookup and invocation.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - Every variant is fatal for the probe call that observed it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// No capability is registered under the requested name.
    #[error("no dispatch capability registered as {capability}")]
    CapabilityMissing {
        /// Capability name that failed to resolve.
        capability: String,
    },
    /// The dispatcher was found but could not process the request.
    #[error("dispatch invocation failed: {reason}")]
    Invocation {
        /// Backend-reported failure description.
        reason: String,
    },
}

impl DispatchError {
    /// Creates a missing-capability error for `capability`.
    #[must_use]
    pub fn capability_missing(capability: impl Into<String>) -> Self {
        Self::CapabilityMissing {
            capability: capability.into(),
        }
    }

    /// Creates an invocation error with the given reason.
    #[must_use]
    pub fn invocation(reason: impl Into<String>) -> Self {
        Self::Invocation {
            reason: reason.into(),
        }
    }
}

// ============================================================================
// SECTION: Request Dispatcher
// ============================================================================

/// Request-processing entry point of the system under test.
pub trait RequestDispatcher {
    /// Processes `request` into `response` as a side effect.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] when the request cannot be processed at all.
    /// Routing outcomes such as "not found" are reported through the response
    /// status instead.
    fn process(
        &self,
        request: &ProbeRequest,
        response: &mut ResponseSink,
        ctx: &DispatchContext,
    ) -> Result<(), DispatchError>;
}

// ============================================================================
// SECTION: Capability Registry
// ============================================================================

/// Registry resolving dispatch capabilities by name.
///
/// Implementations pair every successful `acquire` with exactly one
/// `release`; [`CapabilityLease`] enforces that pairing for callers.
pub trait CapabilityRegistry {
    /// Resolves the capability registered under `capability`.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::CapabilityMissing`] when no capability is
    /// registered under that name.
    fn acquire(
        &self,
        capability: &str,
    ) -> Result<Arc<dyn RequestDispatcher + Send + Sync>, DispatchError>;

    /// Releases a capability previously returned by `acquire`.
    fn release(&self, capability: &str);
}

// ============================================================================
// SECTION: Capability Lease
// ============================================================================

/// Scoped acquisition of a dispatch capability.
///
/// # Invariants
/// - The capability is released exactly once, on drop, including when the
///   scoped call fails or unwinds.
pub struct CapabilityLease<'a> {
    /// Registry the capability was acquired from.
    registry: &'a dyn CapabilityRegistry,
    /// Name the capability was acquired under.
    capability: String,
    /// The acquired dispatcher.
    dispatcher: Arc<dyn RequestDispatcher + Send + Sync>,
}

impl<'a> CapabilityLease<'a> {
    /// Acquires the named capability from `registry`.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::CapabilityMissing`] when the registry does
    /// not know the name.
    pub fn acquire(
        registry: &'a dyn CapabilityRegistry,
        capability: &str,
    ) -> Result<Self, DispatchError> {
        let dispatcher = registry.acquire(capability)?;
        Ok(Self {
            registry,
            capability: capability.to_string(),
            dispatcher,
        })
    }

    /// Returns the leased dispatcher.
    #[must_use]
    pub fn dispatcher(&self) -> &(dyn RequestDispatcher + Send + Sync) {
        &*self.dispatcher
    }

    /// Returns the capability name the lease was acquired under.
    #[must_use]
    pub fn capability(&self) -> &str {
        &self.capability
    }
}

impl Drop for CapabilityLease<'_> {
    fn drop(&mut self) {
        self.registry.release(&self.capability);
    }
}
