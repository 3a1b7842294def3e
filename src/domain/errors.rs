use thiserror::Error;

/// Errors raised while talking to the sports-data source
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Data unavailable for {path} (HTTP {status})")]
    Unavailable { path: String, status: u16 },

    #[error("HTTP {status} from {path}")]
    Http { path: String, status: u16 },

    #[error("Transport failure for {path}: {reason}")]
    Transport { path: String, reason: String },

    #[error("Malformed payload from {path}: {reason}")]
    Malformed { path: String, reason: String },
}

impl FetchError {
    /// Whether another attempt could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            FetchError::Unavailable { .. } => false,
            FetchError::Http { status, .. } => *status == 429 || *status >= 500 || *status == 403,
            FetchError::Transport { .. } | FetchError::Malformed { .. } => true,
        }
    }
}

/// Errors related to the goal classifier
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Matrix creation failed: {0}")]
    Matrix(String),

    #[error("Prediction failed: {0}")]
    Prediction(String),

    #[error("Training failed: {0}")]
    Training(String),

    #[error("Feature vector has {actual} values, model expects {expected}")]
    FeatureLength { expected: usize, actual: usize },
}
