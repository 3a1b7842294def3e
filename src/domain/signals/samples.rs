use super::features::MatchFeatures;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Training label for a resolved signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Success,
    Failure,
}

impl Label {
    /// Regression target used by the forest: 1.0 for a goal, 0.0 otherwise.
    pub fn as_target(&self) -> f64 {
        match self {
            Self::Success => 1.0,
            Self::Failure => 0.0,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Failure => write!(f, "failure"),
        }
    }
}

/// Resolution state of a pending target after observing the match again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
    Pending,
}

impl Outcome {
    pub fn label(&self) -> Option<Label> {
        match self {
            Self::Success => Some(Label::Success),
            Self::Failure => Some(Label::Failure),
            Self::Pending => None,
        }
    }
}

/// A match under observation after a signal was emitted for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingTarget {
    pub event_id: u64,
    pub features: MatchFeatures,
    pub goals_at_signal: u32,
    pub match_name: String,
    #[serde(default)]
    pub tournament: String,
    pub signaled_at: DateTime<Utc>,
}

/// Labeled feature vector. Kept as a plain `Vec` so samples recorded with an
/// older feature layout still load and are filtered out at training time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSample {
    pub features: Vec<f64>,
    pub label: Label,
}

impl TrainingSample {
    pub fn new(features: &MatchFeatures, label: Label) -> Self {
        Self {
            features: features.to_vec(),
            label,
        }
    }
}
