// crates/dispatch-probe-core/tests/support/mod.rs
// ============================================================================
// Module: Core Test Support
// Description: Shared assertions and doubles for dispatch-probe-core tests.
// Purpose: Provide panic-free assertions and scripted dispatch doubles.
// Dependencies: dispatch_probe_core
// ============================================================================

//! ## Overview
//! Test doubles implementing the core interfaces: scripted and fixed
//! dispatchers, a registry with acquire/release accounting, and a recording
//! observer. Assertions go through `ensure` so test functions return
//! `Result` instead of panicking mid-scenario.

#![allow(dead_code, reason = "Shared support is reused across multiple test binaries.")]

use std::collections::BTreeMap;
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;

use dispatch_probe_core::CapabilityRegistry;
use dispatch_probe_core::DispatchContext;
use dispatch_probe_core::DispatchError;
use dispatch_probe_core::PollEvent;
use dispatch_probe_core::ProbeObserver;
use dispatch_probe_core::ProbeRequest;
use dispatch_probe_core::RequestDispatcher;
use dispatch_probe_core::ResponseSink;

// ============================================================================
// SECTION: Assertions
// ============================================================================

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

// ============================================================================
// SECTION: Dispatcher Doubles
// ============================================================================

/// Dispatcher that always reports one status and body.
pub struct FixedDispatcher {
    /// Status reported on every call.
    pub status: u16,
    /// Body written on every call.
    pub body: String,
}

impl RequestDispatcher for FixedDispatcher {
    fn process(
        &self,
        _request: &ProbeRequest,
        response: &mut ResponseSink,
        _ctx: &DispatchContext,
    ) -> Result<(), DispatchError> {
        response.set_status(self.status);
        response.write_body(&self.body);
        Ok(())
    }
}

/// Dispatcher that replays a scripted status sequence, then repeats the last
/// entry forever.
pub struct ScriptedDispatcher {
    /// Remaining scripted statuses.
    script: Mutex<VecDeque<u16>>,
    /// Status repeated once the script is exhausted.
    terminal: u16,
    /// Body written when the terminal status is reported.
    ready_body: String,
}

impl ScriptedDispatcher {
    /// Creates a dispatcher replaying `statuses`; the final entry repeats.
    pub fn new(statuses: &[u16], ready_body: impl Into<String>) -> Self {
        let terminal = statuses.last().copied().unwrap_or(200);
        Self {
            script: Mutex::new(statuses.iter().copied().collect()),
            terminal,
            ready_body: ready_body.into(),
        }
    }
}

impl RequestDispatcher for ScriptedDispatcher {
    fn process(
        &self,
        _request: &ProbeRequest,
        response: &mut ResponseSink,
        _ctx: &DispatchContext,
    ) -> Result<(), DispatchError> {
        let status = self
            .script
            .lock()
            .map_err(|_| DispatchError::invocation("script mutex poisoned"))?
            .pop_front()
            .unwrap_or(self.terminal);
        response.set_status(status);
        if status == self.terminal {
            response.write_body(&self.ready_body);
        }
        Ok(())
    }
}

/// Dispatcher that always fails invocation.
pub struct FailingDispatcher {
    /// Failure reason reported on every call.
    pub reason: String,
}

impl RequestDispatcher for FailingDispatcher {
    fn process(
        &self,
        _request: &ProbeRequest,
        _response: &mut ResponseSink,
        _ctx: &DispatchContext,
    ) -> Result<(), DispatchError> {
        Err(DispatchError::invocation(self.reason.clone()))
    }
}

// ============================================================================
// SECTION: Registry Double
// ============================================================================

/// Registry double with acquire/release accounting.
pub struct CountingRegistry {
    /// Registered dispatchers keyed by capability name.
    dispatchers: BTreeMap<String, Arc<dyn RequestDispatcher + Send + Sync>>,
    /// Total successful acquires.
    acquires: Mutex<u64>,
    /// Total releases.
    releases: Mutex<u64>,
}

impl CountingRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            dispatchers: BTreeMap::new(),
            acquires: Mutex::new(0),
            releases: Mutex::new(0),
        }
    }

    /// Registers a dispatcher under `capability`.
    pub fn register(
        &mut self,
        capability: impl Into<String>,
        dispatcher: Arc<dyn RequestDispatcher + Send + Sync>,
    ) {
        self.dispatchers.insert(capability.into(), dispatcher);
    }

    /// Returns total successful acquires.
    pub fn acquires(&self) -> u64 {
        self.acquires.lock().map_or(0, |count| *count)
    }

    /// Returns total releases.
    pub fn releases(&self) -> u64 {
        self.releases.lock().map_or(0, |count| *count)
    }

    /// Returns acquires minus releases.
    pub fn outstanding(&self) -> u64 {
        self.acquires().saturating_sub(self.releases())
    }
}

impl CapabilityRegistry for CountingRegistry {
    fn acquire(
        &self,
        capability: &str,
    ) -> Result<Arc<dyn RequestDispatcher + Send + Sync>, DispatchError> {
        let dispatcher = self
            .dispatchers
            .get(capability)
            .cloned()
            .ok_or_else(|| DispatchError::capability_missing(capability))?;
        if let Ok(mut count) = self.acquires.lock() {
            *count += 1;
        }
        Ok(dispatcher)
    }

    fn release(&self, _capability: &str) {
        if let Ok(mut count) = self.releases.lock() {
            *count += 1;
        }
    }
}

// ============================================================================
// SECTION: Observer Double
// ============================================================================

/// Observer that records every poll event.
#[derive(Clone)]
pub struct RecordingObserver {
    /// Recorded events in arrival order.
    events: Arc<Mutex<Vec<PollEvent>>>,
}

impl RecordingObserver {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns a snapshot of recorded events.
    pub fn events(&self) -> Vec<PollEvent> {
        self.events.lock().map_or_else(|_| Vec::new(), |events| events.clone())
    }
}

impl ProbeObserver for RecordingObserver {
    fn on_poll(&self, event: &PollEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}
