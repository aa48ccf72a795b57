// crates/dispatch-probe-dispatchers/src/lib.rs
// ============================================================================
// Module: Dispatch Probe Dispatchers
// Description: Concrete dispatch capabilities and the capability registry.
// Purpose: Provide in-process, remote, and registry implementations of the
//          core dispatch interfaces.
// Dependencies: dispatch-probe-core, reqwest, serde_json
// ============================================================================

//! ## Overview
//! Concrete implementations of the core dispatch seams: a content-tree
//! dispatcher that renders resources as JSON in process, a remote adapter
//! that forwards probes over HTTP, and a static registry with lease
//! accounting so resource discipline is observable in tests.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod content;
pub mod registry;
pub mod remote;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use content::ContentDispatcher;
pub use content::ContentNode;
pub use registry::StaticCapabilityRegistry;
pub use remote::RemoteDispatcher;
pub use remote::RemoteDispatcherConfig;
