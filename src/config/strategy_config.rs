//! Strategy configuration parsing from environment variables.
//!
//! This module handles loading ensemble thresholds, training preconditions and
//! the optional per-side shots alert.

use super::{non_empty_var, parse_bool, parse_env};
use anyhow::Result;

/// Strategy environment configuration
#[derive(Debug, Clone)]
pub struct StrategyEnvConfig {
    /// Classifier fires when the predicted goal probability exceeds this.
    pub classifier_threshold: f64,
    /// Triggered strategies needed for the ensemble to fire.
    pub min_votes: usize,
    pub min_training_samples: usize,

    // Per-side shots-on-target alert
    pub shots_alert_enabled: bool,
    pub shots_alert_threshold: u32,

    /// Overrides the built-in competition blacklist when set.
    pub blacklist_keywords: Option<Vec<String>>,
}

impl Default for StrategyEnvConfig {
    fn default() -> Self {
        Self {
            classifier_threshold: 0.1,
            min_votes: 2,
            min_training_samples: 10,
            shots_alert_enabled: false,
            shots_alert_threshold: 4,
            blacklist_keywords: None,
        }
    }
}

impl StrategyEnvConfig {
    pub fn from_env() -> Result<Self> {
        let blacklist_keywords = non_empty_var("BLACKLIST_KEYWORDS").map(|raw| {
            raw.split(',')
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect()
        });

        Ok(Self {
            classifier_threshold: parse_env("CLASSIFIER_THRESHOLD", 0.1f64)?,
            min_votes: parse_env("MIN_VOTES", 2usize)?,
            min_training_samples: parse_env("MIN_TRAINING_SAMPLES", 10usize)?,
            shots_alert_enabled: parse_bool("SHOTS_ALERT_ENABLED", false),
            shots_alert_threshold: parse_env("SHOTS_ALERT_THRESHOLD", 4u32)?,
            blacklist_keywords,
        })
    }
}
