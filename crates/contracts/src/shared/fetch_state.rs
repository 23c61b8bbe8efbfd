use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a fetch attempt failed. All variants travel through the same `error`
/// slot of [`FetchState`].
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("HTTP error: {status} {status_text}")]
    Status { status: u16, status_text: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Which settlements a [`FetchState`] accepts when attempts overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettlePolicy {
    /// Every settlement is applied; the last one to settle wins.
    #[default]
    LastSettled,
    /// Only the most recently started attempt may settle.
    LatestOnly,
}

/// Handle tying a settlement back to the attempt that started it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn seq(&self) -> u64 {
        self.0
    }
}

/// Lifecycle of requests against one endpoint: last good payload, whether a
/// request is in flight, and the last failure.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<FetchError>,
    policy: SettlePolicy,
    last_started: u64,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::new(SettlePolicy::default())
    }
}

impl<T> FetchState<T> {
    pub fn new(policy: SettlePolicy) -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
            policy,
            last_started: 0,
        }
    }

    pub fn policy(&self) -> SettlePolicy {
        self.policy
    }

    /// Start an attempt: loading on, previous error cleared.
    pub fn begin(&mut self) -> FetchTicket {
        self.last_started += 1;
        self.loading = true;
        self.error = None;
        FetchTicket(self.last_started)
    }

    /// Apply the outcome of an attempt. Returns `false` when the outcome was
    /// dropped as stale under [`SettlePolicy::LatestOnly`].
    pub fn settle(&mut self, ticket: FetchTicket, result: Result<T, FetchError>) -> bool {
        if self.policy == SettlePolicy::LatestOnly && ticket.0 != self.last_started {
            return false;
        }
        match result {
            Ok(data) => self.data = Some(data),
            Err(err) => self.error = Some(err),
        }
        self.loading = false;
        true
    }
}
