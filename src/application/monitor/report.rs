use serde::Serialize;

/// What one poll cycle did. Serialized into the `METRICS_JSON:` line.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CycleReport {
    pub live_events: usize,
    pub skipped_blacklisted: usize,
    pub without_statistics: usize,
    pub evaluated: usize,
    pub signals: usize,
    pub shots_alerts: usize,
    pub notification_failures: usize,
    pub resolved_success: usize,
    pub resolved_failure: usize,
    pub unresolved: usize,
    pub retrained: bool,
    pub pending_total: usize,
    pub samples_total: usize,
    pub notified_total: usize,
    pub model: String,
}

impl CycleReport {
    /// Notifications that count against the per-cycle action cap.
    pub fn actions(&self) -> usize {
        self.signals + self.shots_alerts
    }
}
