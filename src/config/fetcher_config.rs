//! Data-source access configuration: endpoint, cache TTL, retry and pacing bounds.

use super::{parse_env, parse_millis, parse_secs};
use anyhow::Result;
use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.sofascore.com/api/v1/";

/// Fetcher environment configuration
#[derive(Debug, Clone)]
pub struct FetcherEnvConfig {
    pub base_url: String,
    pub request_timeout: Duration,
    pub cache_ttl: Duration,
    /// Attempt budget for reliable endpoints.
    pub max_attempts: u32,
    pub backoff_initial_min: Duration,
    pub backoff_initial_max: Duration,
    pub backoff_max: Duration,
    pub pacing_min: Duration,
    pub pacing_max: Duration,
}

impl Default for FetcherEnvConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(15),
            cache_ttl: Duration::from_secs(30),
            max_attempts: 3,
            backoff_initial_min: Duration::from_millis(500),
            backoff_initial_max: Duration::from_millis(1500),
            backoff_max: Duration::from_millis(8000),
            pacing_min: Duration::from_millis(300),
            pacing_max: Duration::from_millis(900),
        }
    }
}

impl FetcherEnvConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            base_url: env::var("SOFASCORE_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            request_timeout: parse_secs("REQUEST_TIMEOUT_SECS", 15)?,
            cache_ttl: parse_secs("CACHE_TTL_SECS", 30)?,
            max_attempts: parse_env("FETCH_MAX_ATTEMPTS", 3u32)?,
            backoff_initial_min: parse_millis("BACKOFF_INITIAL_MIN_MS", 500)?,
            backoff_initial_max: parse_millis("BACKOFF_INITIAL_MAX_MS", 1500)?,
            backoff_max: parse_millis("BACKOFF_MAX_MS", 8000)?,
            pacing_min: parse_millis("PACING_MIN_MS", 300)?,
            pacing_max: parse_millis("PACING_MAX_MS", 900)?,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_attempts == 0 {
            anyhow::bail!("FETCH_MAX_ATTEMPTS must be at least 1");
        }
        if self.backoff_initial_min > self.backoff_initial_max {
            anyhow::bail!(
                "BACKOFF_INITIAL_MIN_MS ({:?}) exceeds BACKOFF_INITIAL_MAX_MS ({:?})",
                self.backoff_initial_min,
                self.backoff_initial_max
            );
        }
        if self.pacing_min > self.pacing_max {
            anyhow::bail!(
                "PACING_MIN_MS ({:?}) exceeds PACING_MAX_MS ({:?})",
                self.pacing_min,
                self.pacing_max
            );
        }
        Ok(())
    }
}
