use super::predictor::GoalPredictor;
use crate::domain::errors::ModelError;
use crate::domain::signals::MatchFeatures;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use smartcore::ensemble::random_forest_regressor::{
    RandomForestRegressor, RandomForestRegressorParameters,
};
use smartcore::linalg::basic::matrix::DenseMatrix;
use std::fmt;

type Forest = RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>;

/// Random forest fitted on 0/1 targets; the mean leaf value is read as the
/// goal probability.
#[derive(Serialize, Deserialize)]
pub struct ForestPredictor {
    model: Forest,
    n_features: usize,
    trained_on: usize,
    trained_at: DateTime<Utc>,
    version: String,
}

impl ForestPredictor {
    pub fn fit(
        rows: Vec<Vec<f64>>,
        targets: Vec<f64>,
        params: RandomForestRegressorParameters,
    ) -> Result<Self, ModelError> {
        let n_features = rows.first().map(Vec::len).unwrap_or(0);
        let trained_on = rows.len();
        let x = DenseMatrix::from_2d_vec(&rows).map_err(|e| ModelError::Matrix(e.to_string()))?;
        let model = RandomForestRegressor::fit(&x, &targets, params)
            .map_err(|e| ModelError::Training(e.to_string()))?;
        let trained_at = Utc::now();

        Ok(Self {
            model,
            n_features,
            trained_on,
            version: format!("rf-{}-{}", trained_on, trained_at.format("%Y%m%dT%H%M%S")),
            trained_at,
        })
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    pub fn trained_on(&self) -> usize {
        self.trained_on
    }

    pub fn trained_at(&self) -> DateTime<Utc> {
        self.trained_at
    }
}

impl GoalPredictor for ForestPredictor {
    fn predict_probability(&self, features: &MatchFeatures) -> Result<f64, ModelError> {
        let row = features.to_vec();
        if row.len() != self.n_features {
            return Err(ModelError::FeatureLength {
                expected: self.n_features,
                actual: row.len(),
            });
        }

        let input = DenseMatrix::from_2d_vec(&vec![row])
            .map_err(|e| ModelError::Matrix(e.to_string()))?;
        let predictions = self
            .model
            .predict(&input)
            .map_err(|e| ModelError::Prediction(e.to_string()))?;

        predictions
            .first()
            .map(|p| p.clamp(0.0, 1.0))
            .ok_or_else(|| ModelError::Prediction("No prediction returned".to_string()))
    }

    fn is_trained(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "random_forest"
    }

    fn version(&self) -> &str {
        &self.version
    }
}

impl fmt::Debug for ForestPredictor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForestPredictor")
            .field("n_features", &self.n_features)
            .field("trained_on", &self.trained_on)
            .field("version", &self.version)
            .finish()
    }
}
