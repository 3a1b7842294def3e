use super::traits::{EvaluationContext, SignalStrategy};
use crate::domain::signals::StrategyVote;

pub const NAME: &str = "threshold_rule";

/// Volume of pressure: many shots on target or many corners.
pub struct ThresholdRuleStrategy {
    shots_above: f64,
    corners_above: f64,
}

impl Default for ThresholdRuleStrategy {
    fn default() -> Self {
        Self {
            shots_above: 7.0,
            corners_above: 5.0,
        }
    }
}

impl SignalStrategy for ThresholdRuleStrategy {
    fn name(&self) -> &str {
        NAME
    }

    fn evaluate(&self, ctx: &EvaluationContext) -> StrategyVote {
        let shots = ctx.features.shots_on_target_total();
        let corners = ctx.features.corners_total();
        let triggered = shots > self.shots_above || corners > self.corners_above;
        let probability = (shots * 0.1 + corners * 0.05).min(1.0);
        StrategyVote::new(NAME, triggered, probability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ml::StubPredictor;
    use crate::application::strategies::test_support::event_in;
    use crate::domain::football::MatchPeriod;
    use crate::domain::signals::MatchFeatures;

    fn vote(shots: f64, corners: f64) -> StrategyVote {
        let event = event_in(MatchPeriod::FirstHalf, 0);
        let features = MatchFeatures::new(shots, corners, 0.0, 30.0);
        ThresholdRuleStrategy::default().evaluate(&EvaluationContext {
            event: &event,
            features: &features,
            predictor: &StubPredictor,
        })
    }

    #[test]
    fn test_boundaries_are_exclusive() {
        assert!(!vote(7.0, 5.0).triggered);
        assert!(vote(8.0, 0.0).triggered);
        assert!(vote(0.0, 6.0).triggered);
    }

    #[test]
    fn test_probability_reported_and_capped() {
        let v = vote(8.0, 2.0);
        assert!((v.probability - 0.9).abs() < 1e-9);

        let quiet = vote(3.0, 1.0);
        assert!(!quiet.triggered);
        assert!((quiet.probability - 0.35).abs() < 1e-9);

        assert_eq!(vote(12.0, 8.0).probability, 1.0);
    }
}
