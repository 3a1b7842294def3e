//! Signal detection domain: feature vectors, strategy votes, outcome tracking records.

pub mod features;
pub mod keys;
pub mod samples;

pub use features::{FEATURE_COUNT, MatchFeatures};
pub use keys::SignalKey;
pub use samples::{Label, Outcome, PendingTarget, TrainingSample};

use serde::Serialize;

/// Result of a single strategy evaluating one match state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyVote {
    pub strategy: String,
    pub triggered: bool,
    pub probability: f64,
}

impl StrategyVote {
    pub fn new(strategy: impl Into<String>, triggered: bool, probability: f64) -> Self {
        Self {
            strategy: strategy.into(),
            triggered,
            probability: probability.clamp(0.0, 1.0),
        }
    }

    pub fn abstain(strategy: impl Into<String>) -> Self {
        Self::new(strategy, false, 0.0)
    }
}

/// Combined outcome of the ensemble for one match state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnsembleDecision {
    pub votes: Vec<StrategyVote>,
    pub triggered_count: usize,
    pub fired: bool,
    pub probability: f64,
}

impl EnsembleDecision {
    /// "threshold_rule, classifier" style list of strategies that voted yes.
    pub fn triggered_names(&self) -> Vec<&str> {
        self.votes
            .iter()
            .filter(|v| v.triggered)
            .map(|v| v.strategy.as_str())
            .collect()
    }
}
