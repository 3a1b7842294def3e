//! File locations for persisted state, the model artifact and the training journal.

use std::env;
use std::path::PathBuf;

/// Storage environment configuration
#[derive(Debug, Clone)]
pub struct StorageEnvConfig {
    pub state_path: PathBuf,
    pub model_path: PathBuf,
    pub training_csv_path: PathBuf,
}

impl Default for StorageEnvConfig {
    fn default() -> Self {
        Self {
            state_path: PathBuf::from("data/state.json"),
            model_path: PathBuf::from("data/ml/model.json"),
            training_csv_path: PathBuf::from("data/ml/training_data.csv"),
        }
    }
}

impl StorageEnvConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            state_path: env::var("STATE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.state_path),
            model_path: env::var("MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.model_path),
            training_csv_path: env::var("TRAINING_CSV_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.training_csv_path),
        }
    }
}
