use super::traits::{EvaluationContext, SignalStrategy};
use crate::domain::signals::StrategyVote;

pub const NAME: &str = "possession_attack";

const TRIGGERED_PROBABILITY: f64 = 0.8;

/// One side dominating the ball while also testing the keeper.
pub struct PossessionAttackStrategy {
    possession_diff_above: f64,
    shots_above: f64,
}

impl Default for PossessionAttackStrategy {
    fn default() -> Self {
        Self {
            possession_diff_above: 40.0,
            shots_above: 3.0,
        }
    }
}

impl SignalStrategy for PossessionAttackStrategy {
    fn name(&self) -> &str {
        NAME
    }

    fn evaluate(&self, ctx: &EvaluationContext) -> StrategyVote {
        let triggered = ctx.features.possession_diff() > self.possession_diff_above
            && ctx.features.shots_on_target_total() > self.shots_above;
        if triggered {
            StrategyVote::new(NAME, true, TRIGGERED_PROBABILITY)
        } else {
            StrategyVote::abstain(NAME)
        }
    }
}
