// system-tests/tests/helpers/fixtures.rs
// ============================================================================
// Module: Content Fixtures
// Description: Repository-shaped content fixtures for probe scenarios.
// Purpose: Provide the content tree and expected renderings scenarios assert
//          on.
// Dependencies: dispatch-probe-dispatchers, serde_json
// ============================================================================

use dispatch_probe_dispatchers::ContentNode;
use serde_json::json;

/// Well-known readiness path polled by every scenario.
pub const READY_PATH: &str = "/.json";

/// Status that marks the target ready.
pub const READY_STATUS: u16 = 200;

/// Literal fragments the root rendering must contain.
pub const ROOT_FRAGMENTS: [&str; 2] =
    ["jcr:primaryType\":\"rep:root", "jcr:mixinTypes\":[\"rep:AccessControllable\"]"];

/// Builds the repository root used by the dispatch scenarios.
pub fn repository_root() -> ContentNode {
    ContentNode::new()
        .with_property("jcr:primaryType", json!("rep:root"))
        .with_property("jcr:mixinTypes", json!(["rep:AccessControllable"]))
        .with_child(
            "content",
            ContentNode::new()
                .with_property("jcr:primaryType", json!("nt:folder"))
                .with_child(
                    "hello",
                    ContentNode::new().with_property("text", json!("hello world")),
                ),
        )
}
