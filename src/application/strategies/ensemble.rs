use super::classifier_strategy::ClassifierStrategy;
use super::possession_attack::PossessionAttackStrategy;
use super::threshold_rule::ThresholdRuleStrategy;
use super::traits::{EvaluationContext, SignalStrategy};
use crate::config::StrategyEnvConfig;
use crate::domain::signals::{EnsembleDecision, StrategyVote};
use std::sync::Arc;

/// Signal Ensemble
///
/// Runs every child strategy on the same match state and counts agreement.
/// - Fires only when at least `min_votes` strategies trigger
/// - Probability is the plain mean over the strategies that triggered
#[derive(Clone)]
pub struct SignalEnsemble {
    strategies: Vec<Arc<dyn SignalStrategy>>,
    min_votes: usize,
}

impl SignalEnsemble {
    pub fn new(strategies: Vec<Arc<dyn SignalStrategy>>, min_votes: usize) -> Self {
        Self {
            strategies,
            min_votes,
        }
    }

    /// Classifier + threshold rule + possession attack, 2 of 3 by default.
    pub fn standard(config: &StrategyEnvConfig) -> Self {
        let strategies: Vec<Arc<dyn SignalStrategy>> = vec![
            Arc::new(ClassifierStrategy::new(config.classifier_threshold)),
            Arc::new(ThresholdRuleStrategy::default()),
            Arc::new(PossessionAttackStrategy::default()),
        ];
        Self::new(strategies, config.min_votes)
    }

    pub fn min_votes(&self) -> usize {
        self.min_votes
    }

    pub fn strategy_names(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    pub fn evaluate(&self, ctx: &EvaluationContext) -> EnsembleDecision {
        let votes = self.strategies.iter().map(|s| s.evaluate(ctx)).collect();
        combine(votes, self.min_votes)
    }
}

/// Vote counting, separated from evaluation so it can be checked on raw votes.
pub fn combine(votes: Vec<StrategyVote>, min_votes: usize) -> EnsembleDecision {
    let triggered: Vec<f64> = votes
        .iter()
        .filter(|v| v.triggered)
        .map(|v| v.probability)
        .collect();
    let triggered_count = triggered.len();

    let probability = if triggered_count == 0 {
        0.0
    } else {
        triggered.iter().sum::<f64>() / triggered_count as f64
    };

    EnsembleDecision {
        votes,
        triggered_count,
        fired: triggered_count > 0 && triggered_count >= min_votes,
        probability,
    }
}

// Implement Debug manually since Arc<dyn SignalStrategy> doesn't impl Debug
impl std::fmt::Debug for SignalEnsemble {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignalEnsemble")
            .field("strategies", &self.strategy_names())
            .field("min_votes", &self.min_votes)
            .finish()
    }
}
