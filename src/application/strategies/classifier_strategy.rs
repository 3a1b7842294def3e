use super::traits::{EvaluationContext, SignalStrategy};
use crate::application::ml::StubPredictor;
use crate::domain::signals::StrategyVote;
use tracing::warn;

pub const NAME: &str = "classifier";

/// Asks the goal predictor, first half only and only while the half is goalless.
pub struct ClassifierStrategy {
    threshold: f64,
}

impl ClassifierStrategy {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    fn stub_vote(&self, ctx: &EvaluationContext) -> StrategyVote {
        let (triggered, probability) = StubPredictor::rule(ctx.features);
        StrategyVote::new(NAME, triggered, probability)
    }
}

impl SignalStrategy for ClassifierStrategy {
    fn name(&self) -> &str {
        NAME
    }

    fn evaluate(&self, ctx: &EvaluationContext) -> StrategyVote {
        if !ctx.event.is_in_first_half() || ctx.event.first_half_goals() > 0 {
            return StrategyVote::abstain(NAME);
        }

        if !ctx.predictor.is_trained() {
            return self.stub_vote(ctx);
        }

        match ctx.predictor.predict_probability(ctx.features) {
            Ok(p) => StrategyVote::new(NAME, p > self.threshold, p),
            Err(e) => {
                warn!(
                    "ClassifierStrategy: {} {} failed on {}: {}. Using stub rule",
                    ctx.predictor.name(),
                    ctx.predictor.version(),
                    ctx.event.display_name(),
                    e
                );
                self.stub_vote(ctx)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ml::GoalPredictor;
    use crate::application::strategies::test_support::{FailingPredictor, FixedPredictor, event_in};
    use crate::domain::football::MatchPeriod;
    use crate::domain::signals::MatchFeatures;

    fn vote(period: MatchPeriod, goals: u32, predictor: &dyn GoalPredictor, shots: f64) -> StrategyVote {
        let event = event_in(period, goals);
        let features = MatchFeatures::new(shots, 0.0, 0.0, 20.0);
        ClassifierStrategy::new(0.1).evaluate(&EvaluationContext {
            event: &event,
            features: &features,
            predictor,
        })
    }

    #[test]
    fn test_stub_rule_before_training() {
        let v = vote(MatchPeriod::FirstHalf, 0, &StubPredictor, 2.0);
        assert!(v.triggered);
        assert_eq!(v.probability, 0.5);

        let v = vote(MatchPeriod::FirstHalf, 0, &StubPredictor, 0.0);
        assert!(!v.triggered);
        assert_eq!(v.probability, 0.0);
    }

    #[test]
    fn test_never_triggers_once_first_half_has_a_goal() {
        let v = vote(MatchPeriod::FirstHalf, 1, &FixedPredictor(0.9), 9.0);
        assert!(!v.triggered);
        let v = vote(MatchPeriod::FirstHalf, 1, &StubPredictor, 9.0);
        assert!(!v.triggered);
    }

    #[test]
    fn test_inactive_outside_first_half() {
        let v = vote(MatchPeriod::SecondHalf, 0, &FixedPredictor(0.9), 9.0);
        assert!(!v.triggered);
        let v = vote(MatchPeriod::HalfTime, 0, &StubPredictor, 9.0);
        assert!(!v.triggered);
    }

    #[test]
    fn test_trained_model_threshold() {
        assert!(vote(MatchPeriod::FirstHalf, 0, &FixedPredictor(0.11), 0.0).triggered);
        assert!(!vote(MatchPeriod::FirstHalf, 0, &FixedPredictor(0.1), 9.0).triggered);
    }

    #[test]
    fn test_prediction_error_falls_back_to_stub() {
        let v = vote(MatchPeriod::FirstHalf, 0, &FailingPredictor, 3.0);
        assert!(v.triggered);
        assert_eq!(v.probability, 0.5);
    }
}
