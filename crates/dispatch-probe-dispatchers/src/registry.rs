// crates/dispatch-probe-dispatchers/src/registry.rs
// ============================================================================
// Module: Capability Registry
// Description: Static registry of dispatch capabilities with lease accounting.
// Purpose: Resolve capabilities by name and make release discipline
//          observable.
// Dependencies: dispatch-probe-core
// ============================================================================

//! ## Overview
//! The static registry maps capability names to dispatcher implementations
//! and counts acquires and releases per name. The outstanding count exposes
//! lease leaks: after any sequence of probe calls it must read zero, because
//! probes acquire fresh per call and release through the lease drop guard.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::Mutex;

use dispatch_probe_core::CapabilityRegistry;
use dispatch_probe_core::DispatchError;
use dispatch_probe_core::RequestDispatcher;

// ============================================================================
// SECTION: Static Registry
// ============================================================================

/// Per-capability acquire/release counters.
#[derive(Debug, Clone, Copy, Default)]
struct LeaseCounters {
    /// Total successful acquires.
    acquires: u64,
    /// Total releases.
    releases: u64,
}

/// Registry of dispatch capabilities keyed by name.
///
/// # Invariants
/// - Capability names are unique within the registry.
/// - Counters only move forward; `outstanding` is acquires minus releases.
pub struct StaticCapabilityRegistry {
    /// Dispatcher implementations keyed by capability name.
    dispatchers: BTreeMap<String, Arc<dyn RequestDispatcher + Send + Sync>>,
    /// Lease counters keyed by capability name.
    counters: Mutex<BTreeMap<String, LeaseCounters>>,
}

impl StaticCapabilityRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dispatchers: BTreeMap::new(),
            counters: Mutex::new(BTreeMap::new()),
        }
    }

    /// Registers a dispatcher under `capability`, replacing any previous one.
    pub fn register(
        &mut self,
        capability: impl Into<String>,
        dispatcher: Arc<dyn RequestDispatcher + Send + Sync>,
    ) {
        self.dispatchers.insert(capability.into(), dispatcher);
    }

    /// Returns the registered capability names.
    #[must_use]
    pub fn capabilities(&self) -> Vec<String> {
        self.dispatchers.keys().cloned().collect()
    }

    /// Returns the number of currently outstanding leases for `capability`.
    #[must_use]
    pub fn outstanding(&self, capability: &str) -> u64 {
        self.counters.lock().map_or(0, |counters| {
            counters
                .get(capability)
                .map_or(0, |entry| entry.acquires.saturating_sub(entry.releases))
        })
    }

    /// Returns the total number of acquires for `capability`.
    #[must_use]
    pub fn acquires(&self, capability: &str) -> u64 {
        self.counters
            .lock()
            .map_or(0, |counters| counters.get(capability).map_or(0, |entry| entry.acquires))
    }
}

impl Default for StaticCapabilityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CapabilityRegistry for StaticCapabilityRegistry {
    fn acquire(
        &self,
        capability: &str,
    ) -> Result<Arc<dyn RequestDispatcher + Send + Sync>, DispatchError> {
        let dispatcher = self
            .dispatchers
            .get(capability)
            .cloned()
            .ok_or_else(|| DispatchError::capability_missing(capability))?;
        if let Ok(mut counters) = self.counters.lock() {
            counters.entry(capability.to_string()).or_default().acquires += 1;
        }
        Ok(dispatcher)
    }

    fn release(&self, capability: &str) {
        if let Ok(mut counters) = self.counters.lock() {
            counters.entry(capability.to_string()).or_default().releases += 1;
        }
    }
}
