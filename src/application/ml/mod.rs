pub mod forest_predictor;
pub mod predictor;
pub mod trainer;

pub use forest_predictor::ForestPredictor;
pub use predictor::{GoalPredictor, StubPredictor};
pub use trainer::{IncrementalTrainer, SkipReason, TrainOutcome, filter_modal_length};
