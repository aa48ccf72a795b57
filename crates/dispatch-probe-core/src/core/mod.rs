// crates/dispatch-probe-core/src/core/mod.rs
// ============================================================================
// Module: Probe Data Model
// Description: Request, response, and context value types for probe calls.
// Purpose: Define the ephemeral per-call values exchanged with dispatchers.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Every probe call builds its values fresh: a [`ProbeRequest`] scoped to one
//! path, a [`ResponseSink`] the dispatcher populates, and a
//! [`DispatchContext`] carrying call metadata. Nothing here persists between
//! calls.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod context;
mod request;
mod response;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use context::DispatchContext;
pub use request::ProbeRequest;
pub use response::ProbeResponse;
pub use response::ResponseSink;
