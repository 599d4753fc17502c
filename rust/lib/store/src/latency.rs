//! Latency strategies.
//!
//! Stores call `Latency::wait` once per operation, after the operation has
//! been applied and before its result is handed back. Tests use
//! `NoLatency`; the CLI uses `SimulatedLatency` to mimic a remote backend.

use std::fmt;
use std::time::Duration;

use paperdesk_core::LatencyConfig;

/// Store operation kinds, used to pick a delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    GetAll,
    GetById,
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Operation::GetAll => "get_all",
            Operation::GetById => "get_by_id",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        f.write_str(s)
    }
}

/// Pluggable async completion. Implementations must not fail.
#[async_trait::async_trait]
pub trait Latency: Send + Sync + 'static {
    async fn wait(&self, op: Operation);
}

/// Resolves immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

#[async_trait::async_trait]
impl Latency for NoLatency {
    async fn wait(&self, _op: Operation) {}
}

/// Sleeps a fixed, per-operation duration on the tokio timer.
#[derive(Debug, Clone)]
pub struct SimulatedLatency {
    profile: LatencyConfig,
}

impl SimulatedLatency {
    pub fn new(profile: LatencyConfig) -> Self {
        Self { profile }
    }

    /// Delay configured for `op`. Zero when the profile is disabled.
    pub fn delay_for(&self, op: Operation) -> Duration {
        if !self.profile.enabled {
            return Duration::ZERO;
        }
        match op {
            Operation::GetAll => self.profile.get_all(),
            Operation::GetById => self.profile.get_by_id(),
            Operation::Create => self.profile.create(),
            Operation::Update => self.profile.update(),
            Operation::Delete => self.profile.delete(),
        }
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self::new(LatencyConfig::default())
    }
}

#[async_trait::async_trait]
impl Latency for SimulatedLatency {
    async fn wait(&self, op: Operation) {
        let delay = self.delay_for(op);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}
