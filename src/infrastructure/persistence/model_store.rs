use super::state_store::write_atomic;
use crate::application::ml::ForestPredictor;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing::{error, info, warn};

/// JSON artifact holding the fitted forest.
pub struct ModelStore {
    model_path: PathBuf,
}

impl ModelStore {
    pub fn new(model_path: impl Into<PathBuf>) -> Self {
        Self {
            model_path: model_path.into(),
        }
    }

    /// `None` when no artifact exists or it cannot be read; the caller then
    /// runs on the stub rule until the next fit.
    pub fn load(&self) -> Option<ForestPredictor> {
        if !self.model_path.exists() {
            warn!(
                "ML Model file not found at {:?}. Classifier will use the stub rule.",
                self.model_path
            );
            return None;
        }

        let file = match File::open(&self.model_path) {
            Ok(file) => file,
            Err(e) => {
                error!("Failed to open model file: {}", e);
                return None;
            }
        };

        match serde_json::from_reader::<_, ForestPredictor>(BufReader::new(file)) {
            Ok(model) => {
                info!(
                    "Successfully loaded ML model from {:?} ({} samples, trained {})",
                    self.model_path,
                    model.trained_on(),
                    model.trained_at().format("%Y-%m-%d %H:%M UTC")
                );
                Some(model)
            }
            Err(e) => {
                error!("Failed to deserialize ML model: {}", e);
                None
            }
        }
    }

    pub fn save(&self, model: &ForestPredictor) -> Result<()> {
        let bytes = serde_json::to_vec(model).context("Failed to serialize model")?;
        write_atomic(&self.model_path, &bytes)?;
        info!("Saved ML model to {:?}", self.model_path);
        Ok(())
    }
}
