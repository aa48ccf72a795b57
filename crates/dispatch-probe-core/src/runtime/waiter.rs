// crates/dispatch-probe-core/src/runtime/waiter.rs
// ============================================================================
// Module: Readiness Waiter
// Description: Bounded polling until a target reports an expected status.
// Purpose: Gate scenarios on target readiness without arbitrary sleeps.
// Dependencies: crate::runtime::probe, crate::telemetry
// ============================================================================

//! ## Overview
//! The waiter is a bounded polling loop with two states, polling and done,
//! and one failure transition to timed-out. Each iteration issues an
//! unchecked probe, records the observed status, and either returns on a
//! match, fails at the deadline, or sleeps one poll interval. The full
//! status history travels with the timeout error for diagnosability.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::thread;
use std::time::Duration;
use std::time::Instant;

use thiserror::Error;

use crate::core::ProbeRequest;
use crate::interfaces::DispatchError;
use crate::runtime::probe::ProbeError;
use crate::runtime::probe::RequestProbe;
use crate::telemetry::PollEvent;
use crate::telemetry::ProbeObserver;

// ============================================================================
// SECTION: Waiter Configuration
// ============================================================================

/// Default overall wait budget.
const DEFAULT_BUDGET: Duration = Duration::from_secs(30);
/// Default pause between polls.
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Invalid waiter configuration.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WaiterConfigError {
    /// The wait budget was zero.
    #[error("wait budget must be greater than zero")]
    ZeroBudget,
    /// The poll interval was zero.
    #[error("poll interval must be greater than zero")]
    ZeroPollInterval,
}

/// Explicit timing parameters for readiness polling.
///
/// # Invariants
/// - Both durations are non-zero once validated by [`WaiterConfig::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaiterConfig {
    /// Overall wall-clock budget for the wait.
    pub budget: Duration,
    /// Pause between consecutive polls.
    pub poll_interval: Duration,
}

impl WaiterConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`WaiterConfigError`] when either duration is zero.
    pub const fn new(budget: Duration, poll_interval: Duration) -> Result<Self, WaiterConfigError> {
        if budget.is_zero() {
            return Err(WaiterConfigError::ZeroBudget);
        }
        if poll_interval.is_zero() {
            return Err(WaiterConfigError::ZeroPollInterval);
        }
        Ok(Self {
            budget,
            poll_interval,
        })
    }
}

impl Default for WaiterConfig {
    fn default() -> Self {
        Self {
            budget: DEFAULT_BUDGET,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

// ============================================================================
// SECTION: Wait Errors
// ============================================================================

/// Readiness wait failures.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - Timeouts carry every status observed while polling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WaitError {
    /// The expected status was never observed within the budget.
    #[error(
        "did not get status {expected} at {path} within {budget:?} \
         ({attempts} attempts, observed {statuses:?})"
    )]
    Timeout {
        /// Path that was polled.
        path: String,
        /// Status that was awaited.
        expected: u16,
        /// Budget that elapsed.
        budget: Duration,
        /// Number of polls issued.
        attempts: u32,
        /// Every status observed, in order.
        statuses: Vec<u16>,
    },
    /// The probe itself failed; the environment is misconfigured.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

// ============================================================================
// SECTION: Readiness Report
// ============================================================================

/// Summary of a successful readiness wait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadinessReport {
    /// Number of polls issued, including the successful one.
    pub attempts: u32,
    /// Wall-clock time spent polling.
    pub elapsed: Duration,
    /// Every status observed, in order, ending with the expected one.
    pub statuses: Vec<u16>,
}

// ============================================================================
// SECTION: Readiness Waiter
// ============================================================================

/// Polls a path until the target reports an expected status or the budget
/// elapses.
///
/// # Invariants
/// - Polling stops at or after the deadline, never unbounded.
/// - Transient non-ready statuses are tolerated; dispatch failures are not.
pub struct ReadinessWaiter {
    /// Timing parameters for the polling loop.
    config: WaiterConfig,
    /// Optional observer notified after every poll.
    observer: Option<Box<dyn ProbeObserver>>,
}

impl ReadinessWaiter {
    /// Creates a waiter with the given timing configuration.
    #[must_use]
    pub const fn new(config: WaiterConfig) -> Self {
        Self {
            config,
            observer: None,
        }
    }

    /// Attaches an observer notified after every poll.
    #[must_use]
    pub fn with_observer(mut self, observer: Box<dyn ProbeObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Returns the waiter's timing configuration.
    #[must_use]
    pub const fn config(&self) -> WaiterConfig {
        self.config
    }

    /// Polls `path` through `probe` until `expected_status` is observed.
    ///
    /// Polls are issued with no status check so transient non-ready responses
    /// never fail the wait. The deadline is evaluated between iterations: for
    /// any positive budget the wait fails no earlier than the budget and no
    /// later than one poll interval past it, plus per-probe execution time.
    ///
    /// # Errors
    ///
    /// Returns [`WaitError::Timeout`] when `expected_status` is never
    /// observed within the budget, with the full status history, and
    /// [`WaitError::Dispatch`] as soon as a probe call itself fails.
    pub fn wait_until_ready(
        &self,
        probe: &RequestProbe<'_>,
        path: &str,
        expected_status: u16,
    ) -> Result<ReadinessReport, WaitError> {
        let request = ProbeRequest::new(path);
        let start = Instant::now();
        let deadline = start + self.config.budget;
        let mut statuses: Vec<u16> = Vec::new();
        let mut attempts: u32 = 0;
        loop {
            attempts = attempts.saturating_add(1);
            let response = probe.execute(&request).map_err(|err| match err {
                ProbeError::Dispatch(dispatch) => WaitError::Dispatch(dispatch),
                // Readiness polls carry no expectation, so a mismatch here
                // means the probe contract was violated.
                ProbeError::StatusMismatch {
                    path: at,
                    expected,
                    actual,
                } => WaitError::Dispatch(DispatchError::invocation(format!(
                    "unexpected status assertion at {at}: expected {expected}, got {actual}"
                ))),
            })?;
            statuses.push(response.status);
            self.observe(path, attempts, response.status, start.elapsed());
            if response.status == expected_status {
                return Ok(ReadinessReport {
                    attempts,
                    elapsed: start.elapsed(),
                    statuses,
                });
            }
            if Instant::now() >= deadline {
                return Err(WaitError::Timeout {
                    path: path.to_string(),
                    expected: expected_status,
                    budget: self.config.budget,
                    attempts,
                    statuses,
                });
            }
            thread::sleep(self.config.poll_interval);
        }
    }

    /// Notifies the observer of one completed poll, when one is attached.
    fn observe(&self, path: &str, attempt: u32, status: u16, elapsed: Duration) {
        if let Some(observer) = &self.observer {
            observer.on_poll(&PollEvent {
                path: path.to_string(),
                attempt,
                status,
                elapsed,
            });
        }
    }
}
