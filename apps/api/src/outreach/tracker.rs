//! Caller-side request status with a stale-response guard.
//!
//! Every submission takes a monotonically increasing token. Only the outcome
//! carrying the latest token may change the status; earlier requests that
//! resolve late are discarded.

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use tracing::warn;

use crate::outreach::generator::GenerationError;
use crate::outreach::models::GenerationResult;

/// Shown when a failure carries no message of its own.
pub const RETRY_LATER_MESSAGE: &str = "请稍后重试";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Success {
        result: GenerationResult,
    },
    Error {
        message: String,
    },
}

impl RequestStatus {
    pub fn failed(message: impl Into<String>) -> Self {
        let message = message.into();
        RequestStatus::Error {
            message: if message.trim().is_empty() {
                RETRY_LATER_MESSAGE.to_string()
            } else {
                message
            },
        }
    }
}

/// Identifies one submission. Later submissions compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
struct TrackerState {
    latest: u64,
    status: RequestStatus,
}

#[derive(Debug, Default)]
pub struct RequestTracker {
    state: Mutex<TrackerState>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, TrackerState> {
        // Every write leaves the state whole, so a poisoned lock is still usable
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Starts a new request: issues its token and enters `Loading`,
    /// dropping any previous result or error.
    pub fn begin(&self) -> RequestToken {
        let mut state = self.lock();
        state.latest += 1;
        state.status = RequestStatus::Loading;
        RequestToken(state.latest)
    }

    /// Records the outcome of `token`. Returns `false` and leaves the status
    /// untouched if a newer request has been issued since.
    pub fn resolve(
        &self,
        token: RequestToken,
        outcome: &Result<GenerationResult, GenerationError>,
    ) -> bool {
        let mut state = self.lock();
        if token.0 != state.latest {
            warn!(
                "Discarding stale response for request {} (latest is {})",
                token.0, state.latest
            );
            return false;
        }

        state.status = match outcome {
            Ok(result) => RequestStatus::Success {
                result: result.clone(),
            },
            Err(e) => RequestStatus::failed(e.user_message()),
        };
        true
    }

    /// Ends `token`'s cycle without an outcome, e.g. when its task died.
    /// Same staleness rule as `resolve`.
    pub fn abandon(&self, token: RequestToken) -> bool {
        let mut state = self.lock();
        if token.0 != state.latest {
            return false;
        }
        state.status = RequestStatus::failed(RETRY_LATER_MESSAGE);
        true
    }

    pub fn status(&self) -> RequestStatus {
        self.lock().status.clone()
    }
}
