//! In-memory adapters for tests and dry runs.

use crate::domain::errors::FetchError;
use crate::domain::ports::{NotificationButton, Notifier, SportsDataSource};
use anyhow::{Result, bail};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

#[derive(Default)]
struct ScriptedPath {
    queued: VecDeque<Result<Value, FetchError>>,
    sticky: Option<Value>,
    calls: usize,
}

/// Data source answering from per-path scripts.
///
/// Queued results are consumed first, then the sticky response is served.
/// Unknown paths answer 404.
#[derive(Default)]
pub struct MockDataSource {
    paths: Mutex<HashMap<String, ScriptedPath>>,
}

impl MockDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_path<R>(&self, path: &str, f: impl FnOnce(&mut ScriptedPath) -> R) -> R {
        let mut paths = self.paths.lock().unwrap_or_else(|e| e.into_inner());
        f(paths.entry(path.to_string()).or_default())
    }

    /// Response served whenever the queue for `path` is empty.
    pub fn set_response(&self, path: &str, payload: Value) {
        self.with_path(path, |p| p.sticky = Some(payload));
    }

    pub fn clear_response(&self, path: &str) {
        self.with_path(path, |p| p.sticky = None);
    }

    pub fn push_response(&self, path: &str, payload: Value) {
        self.with_path(path, |p| p.queued.push_back(Ok(payload)));
    }

    pub fn push_error(&self, path: &str, error: FetchError) {
        self.with_path(path, |p| p.queued.push_back(Err(error)));
    }

    pub fn calls(&self, path: &str) -> usize {
        self.with_path(path, |p| p.calls)
    }
}

#[async_trait]
impl SportsDataSource for MockDataSource {
    async fn fetch_json(&self, path: &str) -> Result<Value, FetchError> {
        self.with_path(path, |p| {
            p.calls += 1;
            if let Some(next) = p.queued.pop_front() {
                return next;
            }
            p.sticky.clone().ok_or_else(|| FetchError::Unavailable {
                path: path.to_string(),
                status: 404,
            })
        })
    }
}

/// A message captured by [`RecordingNotifier`].
#[derive(Debug, Clone, PartialEq)]
pub struct SentMessage {
    pub text: String,
    pub buttons: Vec<NotificationButton>,
}

/// Notifier that keeps every message; can be switched to fail or to answer slowly.
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<SentMessage>>,
    failing: AtomicBool,
    latency_ms: AtomicU64,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Each send records its message, then waits `latency` before answering.
    pub fn set_latency(&self, latency: Duration) {
        self.latency_ms
            .store(latency.as_millis() as u64, Ordering::SeqCst);
    }

    /// Messages that were attempted, including failed deliveries.
    pub fn messages(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.messages().into_iter().map(|m| m.text).collect()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, text: &str, buttons: &[NotificationButton]) -> Result<()> {
        self.sent
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(SentMessage {
                text: text.to_string(),
                buttons: buttons.to_vec(),
            });
        let latency = self.latency_ms.load(Ordering::SeqCst);
        if latency > 0 {
            tokio::time::sleep(Duration::from_millis(latency)).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            bail!("simulated delivery failure");
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "recording"
    }
}
