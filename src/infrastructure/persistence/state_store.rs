use crate::domain::signals::{PendingTarget, SignalKey, TrainingSample};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Everything that must survive a restart.
///
/// Missing fields load as empty and unknown fields are ignored, so older
/// and newer files both stay readable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedState {
    pub pending: Vec<PendingTarget>,
    pub notified: Vec<SignalKey>,
    pub samples: Vec<TrainingSample>,
    pub saved_at: Option<DateTime<Utc>>,
}

pub struct StateStore {
    file_path: PathBuf,
}

impl StateStore {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    /// An absent file is a fresh start, not an error.
    pub fn load(&self) -> Result<PersistedState> {
        if !self.file_path.exists() {
            info!("StateStore: no state at {:?}, starting empty", self.file_path);
            return Ok(PersistedState::default());
        }

        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("Failed to read state file {:?}", self.file_path))?;
        let state: PersistedState = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse state JSON {:?}", self.file_path))?;

        info!(
            "StateStore: loaded {} pending, {} notified, {} samples from {:?}",
            state.pending.len(),
            state.notified.len(),
            state.samples.len(),
            self.file_path
        );
        Ok(state)
    }

    pub fn save(&self, state: &PersistedState) -> Result<()> {
        let mut snapshot = state.clone();
        snapshot.saved_at = Some(Utc::now());
        let content =
            serde_json::to_string_pretty(&snapshot).context("Failed to serialize state")?;
        write_atomic(&self.file_path, content.as_bytes())?;
        debug!("StateStore: saved state to {:?}", self.file_path);
        Ok(())
    }
}

/// Write to a sibling temp file then rename over the target.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {:?}", parent))?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, bytes)
        .with_context(|| format!("Failed to write temp file {:?}", temp_path))?;
    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename {:?} to {:?}", temp_path, path))?;
    Ok(())
}
