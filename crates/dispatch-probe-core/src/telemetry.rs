// crates/dispatch-probe-core/src/telemetry.rs
// ============================================================================
// Module: Probe Telemetry
// Description: Observability hooks for readiness polling.
// Purpose: Provide poll events without hard observability dependencies.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! This module exposes a thin observer interface for readiness polling. It is
//! intentionally dependency-light so host test suites can plug in counters,
//! log lines, or assertion recorders without the harness taking an
//! observability dependency.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use serde::Serialize;

// ============================================================================
// SECTION: Poll Events
// ============================================================================

/// One completed readiness poll.
///
/// # Invariants
/// - `attempt` starts at 1 and increases by 1 per poll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PollEvent {
    /// Path that was polled.
    pub path: String,
    /// 1-based poll attempt number.
    pub attempt: u32,
    /// Status observed by this poll.
    pub status: u16,
    /// Wall-clock time since polling started.
    pub elapsed: Duration,
}

// ============================================================================
// SECTION: Observer
// ============================================================================

/// Receiver for readiness poll events.
pub trait ProbeObserver {
    /// Called after every poll, ready or not.
    fn on_poll(&self, event: &PollEvent);
}
