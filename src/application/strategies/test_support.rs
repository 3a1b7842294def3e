use crate::application::ml::GoalPredictor;
use crate::domain::errors::ModelError;
use crate::domain::football::{LiveEvent, MatchPeriod};
use crate::domain::signals::MatchFeatures;
use serde_json::json;

/// A live match between "Alpha" and "Beta" in the given period with
/// `first_half_goals` scored by the home side before the break.
pub fn event_in(period: MatchPeriod, first_half_goals: u32) -> LiveEvent {
    let (code, kind) = match period {
        MatchPeriod::NotStarted => (0, "notstarted"),
        MatchPeriod::FirstHalf => (6, "inprogress"),
        MatchPeriod::HalfTime => (31, "inprogress"),
        MatchPeriod::SecondHalf => (7, "inprogress"),
        MatchPeriod::ExtraTime => (41, "inprogress"),
        MatchPeriod::Penalties => (50, "inprogress"),
        MatchPeriod::Ended => (100, "finished"),
        MatchPeriod::Unknown => (999, "unknown"),
    };
    let mut event = LiveEvent::from_json(&json!({
        "event": {
            "id": 1001,
            "homeTeam": {"name": "Alpha"},
            "awayTeam": {"name": "Beta"},
            "tournament": {"name": "Premier League"},
            "status": {"code": code, "description": "", "type": kind},
            "homeScore": {"current": first_half_goals, "period1": first_half_goals},
            "awayScore": {"current": 0, "period1": 0}
        }
    }))
    .expect("valid event fixture");
    event.period = period;
    event
}

pub struct FixedPredictor(pub f64);

impl GoalPredictor for FixedPredictor {
    fn predict_probability(&self, _features: &MatchFeatures) -> Result<f64, ModelError> {
        Ok(self.0)
    }

    fn is_trained(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "fixed"
    }

    fn version(&self) -> &str {
        "test"
    }
}

pub struct FailingPredictor;

impl GoalPredictor for FailingPredictor {
    fn predict_probability(&self, features: &MatchFeatures) -> Result<f64, ModelError> {
        Err(ModelError::FeatureLength {
            expected: 5,
            actual: features.as_slice().len(),
        })
    }

    fn is_trained(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "failing"
    }

    fn version(&self) -> &str {
        "test"
    }
}
