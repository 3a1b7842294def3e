use serde::{Deserialize, Serialize};

pub const FEATURE_COUNT: usize = 4;

/// Ordered feature vector: shots on target, corners, possession gap, minute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchFeatures([f64; FEATURE_COUNT]);

impl MatchFeatures {
    pub fn new(
        shots_on_target_total: f64,
        corners_total: f64,
        possession_diff: f64,
        match_minute: f64,
    ) -> Self {
        Self([
            shots_on_target_total,
            corners_total,
            possession_diff,
            match_minute,
        ])
    }

    pub fn shots_on_target_total(&self) -> f64 {
        self.0[0]
    }

    pub fn corners_total(&self) -> f64 {
        self.0[1]
    }

    pub fn possession_diff(&self) -> f64 {
        self.0[2]
    }

    pub fn match_minute(&self) -> f64 {
        self.0[3]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.0.to_vec()
    }
}

impl From<[f64; FEATURE_COUNT]> for MatchFeatures {
    fn from(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }
}
