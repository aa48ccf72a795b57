// system-tests/tests/helpers/harness.rs
// ============================================================================
// Module: HTTP Fixture Harness
// Description: Loopback HTTP server fronting a content dispatcher.
// Purpose: Provide deterministic server startup and teardown for remote
//          scenarios.
// Dependencies: dispatch-probe-core, dispatch-probe-dispatchers, tiny_http
// ============================================================================

//! ## Overview
//! The fixture server routes every HTTP request through a real
//! [`ContentDispatcher`], so remote scenarios exercise the same rendering the
//! in-process scenarios do. A warm-up count simulates startup: early requests
//! answer 503 before the dispatcher takes over. Teardown unblocks the accept
//! loop and joins the server thread.

use std::sync::Arc;
use std::sync::atomic::AtomicU32;
use std::sync::atomic::Ordering;
use std::thread;

use dispatch_probe_core::DispatchContext;
use dispatch_probe_core::ProbeRequest;
use dispatch_probe_core::RequestDispatcher;
use dispatch_probe_core::ResponseSink;
use dispatch_probe_dispatchers::ContentDispatcher;
use dispatch_probe_dispatchers::ContentNode;
use system_tests::config::SystemTestConfig;
use tiny_http::Response;
use tiny_http::Server;

/// Handle for a spawned HTTP fixture server.
pub struct HttpFixtureHandle {
    /// Base URL of the fixture server.
    base_url: String,
    /// Server shared with the accept-loop thread.
    server: Arc<Server>,
    /// Accept-loop thread.
    join: Option<thread::JoinHandle<()>>,
}

impl HttpFixtureHandle {
    /// Returns the fixture base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Drop for HttpFixtureHandle {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }
}

/// Spawns a fixture server rendering `root`, answering 503 for the first
/// `warmup_requests` requests.
pub fn spawn_http_fixture(
    root: ContentNode,
    warmup_requests: u32,
) -> Result<HttpFixtureHandle, String> {
    let bind = SystemTestConfig::load()?.http_bind.unwrap_or_else(|| "127.0.0.1:0".to_string());
    let server = Arc::new(
        Server::http(&bind).map_err(|err| format!("failed to bind fixture server: {err}"))?,
    );
    let addr = server
        .server_addr()
        .to_ip()
        .ok_or_else(|| "fixture server has no ip address".to_string())?;
    let base_url = format!("http://{addr}");
    let dispatcher = ContentDispatcher::new(root);
    let accept_server = Arc::clone(&server);
    let served = AtomicU32::new(0);
    let join = thread::spawn(move || {
        while let Ok(request) = accept_server.recv() {
            let seen = served.fetch_add(1, Ordering::SeqCst);
            if seen < warmup_requests {
                let _ = request.respond(Response::from_string("starting up").with_status_code(503));
                continue;
            }
            let probe_request = ProbeRequest::new(request.url());
            let mut sink = ResponseSink::new();
            let ctx = DispatchContext::new("http-fixture");
            let (status, body) = match dispatcher.process(&probe_request, &mut sink, &ctx) {
                Ok(()) => {
                    let rendered = sink.into_response();
                    (rendered.status, rendered.body)
                }
                Err(err) => (500, format!("dispatch failed: {err}")),
            };
            let _ = request.respond(Response::from_string(body).with_status_code(status));
        }
    });
    Ok(HttpFixtureHandle {
        base_url,
        server,
        join: Some(join),
    })
}
