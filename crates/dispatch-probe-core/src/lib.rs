// crates/dispatch-probe-core/src/lib.rs
// ============================================================================
// Module: Dispatch Probe Core
// Description: Data model, interfaces, and runtime for the probe harness.
// Purpose: Wait for a target system to become ready, then verify one
//          request-dispatch path end to end.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Dispatch Probe is a verification harness for request-dispatch pipelines:
//! a [`ReadinessWaiter`] polls a well-known path on a bounded time budget
//! until the target system reports an expected status, after which a
//! [`RequestProbe`] exercises target paths and returns normalized responses
//! for assertion.
//!
//! The system under test stays external. The harness only requires a
//! [`RequestDispatcher`] capability obtained by name from a
//! [`CapabilityRegistry`], acquired fresh per probe call and released when
//! the call completes, whatever its outcome.
//!
//! Invariants:
//! - Polling stops at or after the configured deadline, never unbounded.
//! - Capability handles are never retained across probe calls.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;
pub mod telemetry;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use crate::core::DispatchContext;
pub use crate::core::ProbeRequest;
pub use crate::core::ProbeResponse;
pub use crate::core::ResponseSink;
pub use crate::interfaces::CapabilityLease;
pub use crate::interfaces::CapabilityRegistry;
pub use crate::interfaces::DispatchError;
pub use crate::interfaces::RequestDispatcher;
pub use crate::runtime::ProbeError;
pub use crate::runtime::ReadinessReport;
pub use crate::runtime::ReadinessWaiter;
pub use crate::runtime::RequestProbe;
pub use crate::runtime::WaitError;
pub use crate::runtime::WaiterConfig;
pub use crate::runtime::WaiterConfigError;
pub use crate::telemetry::PollEvent;
pub use crate::telemetry::ProbeObserver;
