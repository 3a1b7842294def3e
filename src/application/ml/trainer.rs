use super::forest_predictor::ForestPredictor;
use super::predictor::GoalPredictor;
use crate::domain::errors::ModelError;
use crate::domain::signals::{Label, TrainingSample};
use smartcore::ensemble::random_forest_regressor::RandomForestRegressorParameters;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, info};

/// Why a training pass did not produce a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NotEnoughSamples { have: usize, need: usize },
    NotEnoughAfterFilter { have: usize, need: usize },
    SingleClass,
    Unchanged,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEnoughSamples { have, need } => {
                write!(f, "{} samples, need {}", have, need)
            }
            Self::NotEnoughAfterFilter { have, need } => {
                write!(f, "{} samples with a consistent feature length, need {}", have, need)
            }
            Self::SingleClass => write!(f, "all samples share one label"),
            Self::Unchanged => write!(f, "no new samples since last fit"),
        }
    }
}

#[derive(Debug)]
pub enum TrainOutcome {
    Trained(ForestPredictor),
    Skipped(SkipReason),
}

/// Refits the forest from the full sample history whenever it grows.
#[derive(Debug, Clone)]
pub struct IncrementalTrainer {
    min_samples: usize,
    n_trees: usize,
    max_depth: u16,
    min_samples_split: usize,
    last_trained_count: Option<usize>,
}

impl IncrementalTrainer {
    pub fn new(min_samples: usize) -> Self {
        Self {
            min_samples: min_samples.max(1),
            n_trees: 100,
            max_depth: 6,
            min_samples_split: 2,
            last_trained_count: None,
        }
    }

    /// Marks `count` samples as already reflected in the loaded model.
    pub fn with_trained_count(mut self, count: usize) -> Self {
        self.last_trained_count = Some(count);
        self
    }

    pub fn min_samples(&self) -> usize {
        self.min_samples
    }

    pub fn train(&mut self, samples: &[TrainingSample]) -> Result<TrainOutcome, ModelError> {
        if self.last_trained_count == Some(samples.len()) {
            return Ok(TrainOutcome::Skipped(SkipReason::Unchanged));
        }
        if samples.len() < self.min_samples {
            return Ok(TrainOutcome::Skipped(SkipReason::NotEnoughSamples {
                have: samples.len(),
                need: self.min_samples,
            }));
        }

        let usable = filter_modal_length(samples);
        if usable.len() < self.min_samples {
            debug!(
                "Trainer: {} of {} samples share the modal feature length",
                usable.len(),
                samples.len()
            );
            return Ok(TrainOutcome::Skipped(SkipReason::NotEnoughAfterFilter {
                have: usable.len(),
                need: self.min_samples,
            }));
        }

        let positives = usable.iter().filter(|s| s.label == Label::Success).count();
        if positives == 0 || positives == usable.len() {
            return Ok(TrainOutcome::Skipped(SkipReason::SingleClass));
        }

        let rows: Vec<Vec<f64>> = usable.iter().map(|s| s.features.clone()).collect();
        let targets: Vec<f64> = usable.iter().map(|s| s.label.as_target()).collect();
        let params = RandomForestRegressorParameters::default()
            .with_n_trees(self.n_trees)
            .with_max_depth(self.max_depth)
            .with_min_samples_split(self.min_samples_split);

        let model = ForestPredictor::fit(rows, targets, params)?;
        self.last_trained_count = Some(samples.len());

        info!(
            "Trainer: fitted {} {} on {} samples ({} positive)",
            model.name(),
            model.version(),
            usable.len(),
            positives
        );
        Ok(TrainOutcome::Trained(model))
    }
}

/// Keeps the samples whose feature vector has the most common length.
/// Ties go to the length seen first.
pub fn filter_modal_length(samples: &[TrainingSample]) -> Vec<&TrainingSample> {
    let mut counts: HashMap<usize, usize> = HashMap::new();
    let mut order = Vec::new();
    for sample in samples {
        let len = sample.features.len();
        let count = counts.entry(len).or_insert(0);
        if *count == 0 {
            order.push(len);
        }
        *count += 1;
    }

    let mut modal: Option<(usize, usize)> = None;
    for len in order {
        let count = counts[&len];
        if modal.is_none_or(|(_, best)| count > best) {
            modal = Some((len, count));
        }
    }

    match modal {
        Some((len, _)) => samples.iter().filter(|s| s.features.len() == len).collect(),
        None => Vec::new(),
    }
}
