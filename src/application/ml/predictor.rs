use crate::domain::errors::ModelError;
use crate::domain::signals::MatchFeatures;

/// Estimates the probability of a first-half goal for a match state.
pub trait GoalPredictor: Send + Sync {
    /// Probability (0.0 to 1.0) of the positive class.
    fn predict_probability(&self, features: &MatchFeatures) -> Result<f64, ModelError>;

    /// False for the fallback rule used before any model is fitted.
    fn is_trained(&self) -> bool;

    /// Get model name/type
    fn name(&self) -> &str;

    /// Get model version/id
    fn version(&self) -> &str;
}

/// Placeholder used until enough labeled samples exist to fit a model.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubPredictor;

impl StubPredictor {
    /// Any shot on target gives an even chance; otherwise nothing.
    pub fn rule(features: &MatchFeatures) -> (bool, f64) {
        if features.shots_on_target_total() >= 1.0 {
            (true, 0.5)
        } else {
            (false, 0.0)
        }
    }
}

impl GoalPredictor for StubPredictor {
    fn predict_probability(&self, features: &MatchFeatures) -> Result<f64, ModelError> {
        Ok(Self::rule(features).1)
    }

    fn is_trained(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        "stub"
    }

    fn version(&self) -> &str {
        "untrained"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_rule() {
        assert_eq!(
            StubPredictor::rule(&MatchFeatures::new(1.0, 0.0, 0.0, 10.0)),
            (true, 0.5)
        );
        assert_eq!(
            StubPredictor::rule(&MatchFeatures::new(0.0, 9.0, 60.0, 10.0)),
            (false, 0.0)
        );
        assert!(!StubPredictor.is_trained());
    }
}
