//! Poll loop timing parsed from environment variables.

use super::{parse_env, parse_secs};
use anyhow::Result;
use std::time::Duration;

/// Poll loop environment configuration
#[derive(Debug, Clone)]
pub struct PollingEnvConfig {
    /// Sleep between two cycles.
    pub poll_interval: Duration,
    /// Sleep after an unexpected cycle failure.
    pub error_cooldown: Duration,
    /// Cap on notifications emitted per cycle (signals and shots alerts combined).
    pub max_signals_per_cycle: usize,
}

impl Default for PollingEnvConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(120),
            error_cooldown: Duration::from_secs(60),
            max_signals_per_cycle: 1,
        }
    }
}

impl PollingEnvConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            poll_interval: parse_secs("POLL_INTERVAL_SECS", 120)?,
            error_cooldown: parse_secs("ERROR_COOLDOWN_SECS", 60)?,
            max_signals_per_cycle: parse_env("MAX_SIGNALS_PER_CYCLE", 1usize)?,
        })
    }
}
