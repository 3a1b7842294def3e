//! Push-based cycle reporter for goalscout
//!
//! Outputs one structured JSON line per poll cycle to stdout.
//!
//! **Security**: This system only SENDS data, never accepts requests.

use crate::application::monitor::CycleReport;
use serde::Serialize;
use std::time::Instant;
use tracing::warn;

/// Metrics snapshot for JSON output
#[derive(Serialize)]
pub struct CycleSnapshot<'a> {
    pub timestamp: String,
    pub uptime_seconds: u64,
    pub version: &'static str,
    pub cycle: &'a CycleReport,
}

/// Writes a `METRICS_JSON:` line after each cycle.
#[derive(Debug)]
pub struct CycleReporter {
    start_time: Instant,
}

impl Default for CycleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl CycleReporter {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    pub fn snapshot<'a>(&self, report: &'a CycleReport) -> CycleSnapshot<'a> {
        CycleSnapshot {
            timestamp: chrono::Utc::now().to_rfc3339(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            version: env!("CARGO_PKG_VERSION"),
            cycle: report,
        }
    }

    pub fn report(&self, report: &CycleReport) {
        match serde_json::to_string(&self.snapshot(report)) {
            // Use a special prefix so logs can be easily filtered
            Ok(json) => println!("METRICS_JSON:{}", json),
            Err(e) => warn!("Failed to serialize cycle metrics: {}", e),
        }
    }
}
