use crate::domain::signals::{Label, PendingTarget};
use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use tracing::debug;

/// One resolved signal, flattened for offline analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalRow {
    pub resolved_at: i64,
    pub event_id: u64,
    pub match_name: String,
    pub tournament: String,
    pub shots_on_target_total: f64,
    pub corners_total: f64,
    pub possession_diff: f64,
    pub match_minute: f64,
    pub label: Label,
}

impl JournalRow {
    pub fn new(target: &PendingTarget, label: Label) -> Self {
        Self {
            resolved_at: Utc::now().timestamp(),
            event_id: target.event_id,
            match_name: target.match_name.clone(),
            tournament: target.tournament.clone(),
            shots_on_target_total: target.features.shots_on_target_total(),
            corners_total: target.features.corners_total(),
            possession_diff: target.features.possession_diff(),
            match_minute: target.features.match_minute(),
            label,
        }
    }
}

/// Append-only CSV of labeled samples. The header is written once, when the
/// file is created.
pub struct TrainingJournal {
    output_path: PathBuf,
}

impl TrainingJournal {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    pub fn append(&self, row: &JournalRow) -> Result<()> {
        if let Some(parent) = self.output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {:?}", parent))?;
        }

        let needs_header = fs::metadata(&self.output_path)
            .map(|m| m.len() == 0)
            .unwrap_or(true);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.output_path)
            .with_context(|| format!("Failed to open journal {:?}", self.output_path))?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);
        writer.serialize(row).context("Failed to write journal row")?;
        writer.flush().context("Failed to flush journal")?;

        debug!(
            "TrainingJournal: recorded {} for event {}",
            row.label, row.event_id
        );
        Ok(())
    }

    pub fn read_all(&self) -> Result<Vec<JournalRow>> {
        let mut reader = csv::Reader::from_path(&self.output_path)
            .with_context(|| format!("Failed to open journal {:?}", self.output_path))?;
        reader
            .deserialize()
            .collect::<Result<Vec<JournalRow>, _>>()
            .context("Failed to parse journal")
    }
}
