// crates/dispatch-probe-dispatchers/src/content.rs
// ============================================================================
// Module: Content Dispatcher
// Description: In-process content tree rendered as JSON by resource path.
// Purpose: Provide a local request-processing target for probe scenarios.
// Dependencies: dispatch-probe-core, serde, serde_json
// ============================================================================

//! ## Overview
//! The content dispatcher resolves slash-separated resource paths against a
//! node tree and renders the addressed node's properties for the requested
//! extension. Only the `json` rendering is supported; unknown paths and
//! unsupported extensions report 404 through the response status rather than
//! failing the dispatch.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use dispatch_probe_core::DispatchContext;
use dispatch_probe_core::DispatchError;
use dispatch_probe_core::ProbeRequest;
use dispatch_probe_core::RequestDispatcher;
use dispatch_probe_core::ResponseSink;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// SECTION: Content Tree
// ============================================================================

/// Rendering extension the dispatcher understands.
const JSON_EXTENSION: &str = "json";

/// One node in the content tree.
///
/// # Invariants
/// - Child names contain no slashes; paths address children segment by
///   segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentNode {
    /// Properties rendered for this node.
    pub properties: BTreeMap<String, Value>,
    /// Named child nodes.
    pub children: BTreeMap<String, ContentNode>,
}

impl ContentNode {
    /// Creates an empty node.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a property to the node.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: Value) -> Self {
        self.properties.insert(name.into(), value);
        self
    }

    /// Adds a named child node.
    #[must_use]
    pub fn with_child(mut self, name: impl Into<String>, child: Self) -> Self {
        self.children.insert(name.into(), child);
        self
    }

    /// Resolves a child by path segments.
    fn resolve(&self, segments: &[&str]) -> Option<&Self> {
        let mut node = self;
        for segment in segments {
            node = node.children.get(*segment)?;
        }
        Some(node)
    }
}

// ============================================================================
// SECTION: Content Dispatcher
// ============================================================================

/// Request dispatcher backed by an in-process content tree.
///
/// # Invariants
/// - The tree is immutable once the dispatcher is built, so repeated probes
///   of the same path yield identical responses.
pub struct ContentDispatcher {
    /// Root of the content tree.
    root: ContentNode,
}

impl ContentDispatcher {
    /// Creates a dispatcher over the given tree.
    #[must_use]
    pub const fn new(root: ContentNode) -> Self {
        Self {
            root,
        }
    }
}

impl RequestDispatcher for ContentDispatcher {
    fn process(
        &self,
        request: &ProbeRequest,
        response: &mut ResponseSink,
        _ctx: &DispatchContext,
    ) -> Result<(), DispatchError> {
        let Some((resource, extension)) = split_path(&request.path) else {
            response.set_status(404);
            response.write_body(&format!("no rendering selected for {}", request.path));
            return Ok(());
        };
        if extension != JSON_EXTENSION {
            response.set_status(404);
            response.write_body(&format!("unsupported rendering {extension} at {resource}"));
            return Ok(());
        }
        let segments: Vec<&str> =
            resource.split('/').filter(|segment| !segment.is_empty()).collect();
        let Some(node) = self.root.resolve(&segments) else {
            response.set_status(404);
            response.write_body(&format!("no resource at {resource}"));
            return Ok(());
        };
        let body = serde_json::to_string(&node.properties)
            .map_err(|err| DispatchError::invocation(format!("json rendering failed: {err}")))?;
        response.set_status(200);
        response.write_body(&body);
        Ok(())
    }
}

// ============================================================================
// SECTION: Path Handling
// ============================================================================

/// Splits a request path into resource path and rendering extension.
///
/// `/.json` addresses the root resource with the `json` rendering;
/// `/content/a.json` addresses `/content/a`. Paths without an extension in
/// their final segment select no rendering.
fn split_path(path: &str) -> Option<(&str, &str)> {
    let (parent, last) = path.rsplit_once('/')?;
    let (name, extension) = last.rsplit_once('.')?;
    if extension.is_empty() {
        return None;
    }
    let resource_len = parent.len() + 1 + name.len();
    Some((&path[..resource_len], extension))
}
