//! Configuration module for goalscout.
//!
//! This module provides structured configuration loading from environment variables,
//! organized by concern: Polling, Fetcher, Strategy, Notifier, and Storage.

mod fetcher_config;
mod notifier_config;
mod polling_config;
mod storage_config;
mod strategy_config;

pub use fetcher_config::FetcherEnvConfig;
pub use notifier_config::NotifierEnvConfig;
pub use polling_config::PollingEnvConfig;
pub use storage_config::StorageEnvConfig;
pub use strategy_config::StrategyEnvConfig;

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Main application configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub polling: PollingEnvConfig,
    pub fetcher: FetcherEnvConfig,
    pub strategy: StrategyEnvConfig,
    pub notifier: NotifierEnvConfig,
    pub storage: StorageEnvConfig,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This orchestrates loading from all sub-config modules. Unset variables
    /// fall back to defaults; set-but-invalid values are reported as errors.
    pub fn from_env() -> Result<Self> {
        let polling = PollingEnvConfig::from_env().context("Failed to load polling config")?;
        let fetcher = FetcherEnvConfig::from_env().context("Failed to load fetcher config")?;
        let strategy = StrategyEnvConfig::from_env().context("Failed to load strategy config")?;
        let notifier = NotifierEnvConfig::from_env().context("Failed to load notifier config")?;
        let storage = StorageEnvConfig::from_env();

        fetcher.validate()?;

        Ok(Self {
            polling,
            fetcher,
            strategy,
            notifier,
            storage,
        })
    }
}

pub(crate) fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr + ToString,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .trim()
        .parse::<T>()
        .context(format!("Failed to parse {}", key))
}

pub(crate) fn parse_secs(key: &str, default: u64) -> Result<Duration> {
    parse_env::<u64>(key, default).map(Duration::from_secs)
}

pub(crate) fn parse_millis(key: &str, default: u64) -> Result<Duration> {
    parse_env::<u64>(key, default).map(Duration::from_millis)
}

pub(crate) fn parse_bool(key: &str, default: bool) -> bool {
    env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse::<bool>()
        .unwrap_or(default)
}

/// Reads a variable, treating empty strings as unset.
pub(crate) fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
