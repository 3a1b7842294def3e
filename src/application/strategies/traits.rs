use crate::application::ml::GoalPredictor;
use crate::domain::football::LiveEvent;
use crate::domain::signals::{MatchFeatures, StrategyVote};

/// Everything a strategy may look at for one match state.
pub struct EvaluationContext<'a> {
    pub event: &'a LiveEvent,
    pub features: &'a MatchFeatures,
    pub predictor: &'a dyn GoalPredictor,
}

/// A single voter in the signal ensemble.
pub trait SignalStrategy: Send + Sync {
    fn name(&self) -> &str;

    /// Always returns a vote; a non-trigger is a vote too.
    fn evaluate(&self, ctx: &EvaluationContext) -> StrategyVote;
}
