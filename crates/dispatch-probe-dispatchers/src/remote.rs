// crates/dispatch-probe-dispatchers/src/remote.rs
// ============================================================================
// Module: Remote Dispatcher
// Description: HTTP adapter implementing the request-dispatch interface.
// Purpose: Probe out-of-process systems through the same harness contract.
// Dependencies: dispatch-probe-core, reqwest
// ============================================================================

//! ## Overview
//! The remote dispatcher forwards each probe as a blocking `GET` against a
//! base URL and copies the observed status and body into the response sink.
//! Redirects are not followed, so the probed status is the one the target
//! actually produced. Transport failures map to dispatch invocation errors;
//! non-success statuses are routing outcomes and flow through the response.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use dispatch_probe_core::DispatchContext;
use dispatch_probe_core::DispatchError;
use dispatch_probe_core::ProbeRequest;
use dispatch_probe_core::RequestDispatcher;
use dispatch_probe_core::ResponseSink;
use reqwest::blocking::Client;
use reqwest::redirect::Policy;

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Configuration for the remote dispatcher.
///
/// # Invariants
/// - `timeout_ms` applies to the full request lifecycle.
/// - Redirects are never followed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteDispatcherConfig {
    /// Base URL probes are issued against; request paths are appended.
    pub base_url: String,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
    /// User agent string for outbound requests.
    pub user_agent: String,
}

impl RemoteDispatcherConfig {
    /// Creates a configuration for `base_url` with default timeout and agent.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms: 5_000,
            user_agent: "dispatch-probe/0.1".to_string(),
        }
    }
}

// ============================================================================
// SECTION: Remote Dispatcher
// ============================================================================

/// Request dispatcher forwarding probes over HTTP.
///
/// # Invariants
/// - One blocking request per probe call; no connection state is exposed to
///   callers.
pub struct RemoteDispatcher {
    /// Adapter configuration.
    config: RemoteDispatcherConfig,
    /// HTTP client used for outbound requests.
    client: Client,
}

impl RemoteDispatcher {
    /// Creates a remote dispatcher with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Invocation`] when the HTTP client cannot be
    /// created.
    pub fn new(config: RemoteDispatcherConfig) -> Result<Self, DispatchError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .redirect(Policy::none())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|err| {
                DispatchError::invocation(format!("failed to build http client: {err}"))
            })?;
        Ok(Self {
            config,
            client,
        })
    }

    /// Returns the base URL probes are issued against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

impl RequestDispatcher for RemoteDispatcher {
    fn process(
        &self,
        request: &ProbeRequest,
        response: &mut ResponseSink,
        _ctx: &DispatchContext,
    ) -> Result<(), DispatchError> {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), request.path);
        let reply = self
            .client
            .get(&url)
            .send()
            .map_err(|err| DispatchError::invocation(format!("http request failed: {err}")))?;
        let status = reply.status().as_u16();
        let body = reply
            .text()
            .map_err(|err| DispatchError::invocation(format!("http body read failed: {err}")))?;
        response.set_status(status);
        response.write_body(&body);
        Ok(())
    }
}
