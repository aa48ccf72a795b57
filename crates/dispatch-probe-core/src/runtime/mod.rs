// crates/dispatch-probe-core/src/runtime/mod.rs
// ============================================================================
// Module: Probe Runtime
// Description: Request probe and readiness waiter.
// Purpose: Drive probe calls and bounded readiness polling.
// Dependencies: crate::core, crate::interfaces, crate::telemetry
// ============================================================================

//! ## Overview
//! The runtime composes the two harness operations: [`RequestProbe`] issues
//! one synthetic request through a leased capability, and
//! [`ReadinessWaiter`] repeats unchecked probes against a well-known path
//! until the target reports ready or the time budget elapses.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod probe;
mod waiter;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use probe::ProbeError;
pub use probe::RequestProbe;
pub use waiter::ReadinessReport;
pub use waiter::ReadinessWaiter;
pub use waiter::WaitError;
pub use waiter::WaiterConfig;
pub use waiter::WaiterConfigError;
