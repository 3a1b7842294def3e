use super::backoff::BackoffPolicy;
use super::endpoint::Endpoint;
use super::ttl_cache::TtlCache;
use crate::config::FetcherEnvConfig;
use crate::domain::football::{Incident, LiveEvent, StatisticsSnapshot};
use crate::domain::ports::SportsDataSource;
use crate::infrastructure::observability::Metrics;
use rand::Rng;
use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Cached, retrying access to the data source.
///
/// Every failure mode ends in `None`: callers treat a missing payload as
/// "no data this cycle" and carry on.
pub struct ResilientFetcher {
    source: Arc<dyn SportsDataSource>,
    cache: TtlCache<String, Value>,
    backoff: BackoffPolicy,
    max_attempts: u32,
    pacing_min: Duration,
    pacing_max: Duration,
    metrics: Metrics,
}

impl ResilientFetcher {
    pub fn new(source: Arc<dyn SportsDataSource>, config: &FetcherEnvConfig, metrics: Metrics) -> Self {
        Self {
            source,
            cache: TtlCache::new(config.cache_ttl),
            backoff: BackoffPolicy::new(
                config.backoff_initial_min,
                config.backoff_initial_max,
                config.backoff_max,
            ),
            max_attempts: config.max_attempts.max(1),
            pacing_min: config.pacing_min,
            pacing_max: config.pacing_max.max(config.pacing_min),
            metrics,
        }
    }

    pub async fn fetch(&mut self, endpoint: Endpoint) -> Option<Value> {
        let path = endpoint.path();

        if let Some(cached) = self.cache.get(&path) {
            debug!("Fetcher: cache hit for {}", path);
            return Some(cached);
        }

        let attempts = endpoint.attempt_budget(self.max_attempts);
        let mut previous_delay = None;

        for attempt in 1..=attempts {
            let started = Instant::now();
            let result = self.source.fetch_json(&path).await;
            self.metrics
                .observe_fetch_latency(endpoint.label(), started.elapsed().as_secs_f64());

            match result {
                Ok(payload) => {
                    self.cache.put(path, payload.clone());
                    self.pace().await;
                    return Some(payload);
                }
                Err(e) if !e.is_transient() => {
                    debug!("Fetcher: {} not available: {}", path, e);
                    self.metrics
                        .inc_fetch_failure(endpoint.label(), "unavailable");
                    return None;
                }
                Err(e) if attempt < attempts => {
                    let delay = self.backoff.next_delay(previous_delay);
                    previous_delay = Some(delay);
                    warn!(
                        "Fetcher: attempt {}/{} for {} failed: {}. Retrying in {:?}",
                        attempt, attempts, path, e, delay
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => {
                    if endpoint.has_reduced_budget() {
                        debug!("Fetcher: {} treated as absent: {}", path, e);
                    } else {
                        warn!(
                            "Fetcher: giving up on {} after {} attempts: {}",
                            path, attempts, e
                        );
                    }
                    self.metrics.inc_fetch_failure(endpoint.label(), "exhausted");
                }
            }
        }

        None
    }

    /// Live matches; empty when the list endpoint cannot be reached.
    pub async fn live_events(&mut self) -> Vec<LiveEvent> {
        match self.fetch(Endpoint::LiveEvents).await {
            Some(payload) => {
                let events = LiveEvent::list_from_json(&payload);
                info!("Fetcher: {} live events", events.len());
                events
            }
            None => Vec::new(),
        }
    }

    pub async fn event(&mut self, id: u64) -> Option<LiveEvent> {
        let payload = self.fetch(Endpoint::Event(id)).await?;
        let event = LiveEvent::from_json(&payload);
        if event.is_none() {
            debug!("Fetcher: event/{} payload has no parsable event", id);
        }
        event
    }

    /// Statistics for a match, `None` when missing or empty.
    pub async fn statistics(&mut self, id: u64) -> Option<StatisticsSnapshot> {
        let payload = self.fetch(Endpoint::Statistics(id)).await?;
        let stats = StatisticsSnapshot::from_json(&payload);
        if stats.is_empty() { None } else { Some(stats) }
    }

    pub async fn incidents(&mut self, id: u64) -> Vec<Incident> {
        self.fetch(Endpoint::Incidents(id))
            .await
            .map(|payload| Incident::list_from_json(&payload))
            .unwrap_or_default()
    }

    /// Drop a cached payload so the next fetch hits the source.
    pub fn invalidate(&mut self, endpoint: Endpoint) {
        self.cache.remove(&endpoint.path());
    }

    async fn pace(&self) {
        let delay = if self.pacing_max > self.pacing_min {
            let min = self.pacing_min.as_millis() as u64;
            let max = self.pacing_max.as_millis() as u64;
            Duration::from_millis(rand::rng().random_range(min..=max))
        } else {
            self.pacing_min
        };

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::FetchError;
    use crate::infrastructure::mock::MockDataSource;
    use serde_json::json;

    fn fast_config() -> FetcherEnvConfig {
        FetcherEnvConfig {
            cache_ttl: Duration::from_secs(60),
            max_attempts: 3,
            backoff_initial_min: Duration::ZERO,
            backoff_initial_max: Duration::ZERO,
            backoff_max: Duration::ZERO,
            pacing_min: Duration::ZERO,
            pacing_max: Duration::ZERO,
            ..Default::default()
        }
    }

    fn fetcher(source: Arc<MockDataSource>) -> ResilientFetcher {
        ResilientFetcher::new(source, &fast_config(), Metrics::new().unwrap())
    }

    fn server_error(path: &str) -> FetchError {
        FetchError::Http {
            path: path.to_string(),
            status: 503,
        }
    }

    #[tokio::test]
    async fn test_second_fetch_is_served_from_cache() {
        let source = Arc::new(MockDataSource::new());
        source.set_response("event/1", json!({"event": {"id": 1}}));
        let mut fetcher = fetcher(source.clone());

        assert!(fetcher.fetch(Endpoint::Event(1)).await.is_some());
        assert!(fetcher.fetch(Endpoint::Event(1)).await.is_some());
        assert_eq!(source.calls("event/1"), 1);
    }

    #[tokio::test]
    async fn test_invalidated_entry_is_refetched() {
        let source = Arc::new(MockDataSource::new());
        source.set_response("event/5", json!({"event": {"id": 5}}));
        let mut fetcher = fetcher(source.clone());

        assert!(fetcher.fetch(Endpoint::Event(5)).await.is_some());
        fetcher.invalidate(Endpoint::Event(5));
        fetcher.invalidate(Endpoint::Event(6));
        assert!(fetcher.fetch(Endpoint::Event(5)).await.is_some());
        assert_eq!(source.calls("event/5"), 2);
    }

    #[tokio::test]
    async fn test_transient_failures_are_retried() {
        let source = Arc::new(MockDataSource::new());
        source.push_error("event/2", server_error("event/2"));
        source.push_error("event/2", server_error("event/2"));
        source.set_response("event/2", json!({"event": {}}));
        let mut fetcher = fetcher(source.clone());

        assert!(fetcher.fetch(Endpoint::Event(2)).await.is_some());
        assert_eq!(source.calls("event/2"), 3);
    }

    #[tokio::test]
    async fn test_exhausted_budget_yields_none() {
        let source = Arc::new(MockDataSource::new());
        for _ in 0..5 {
            source.push_error("event/3", server_error("event/3"));
        }
        let mut fetcher = fetcher(source.clone());

        assert!(fetcher.fetch(Endpoint::Event(3)).await.is_none());
        assert_eq!(source.calls("event/3"), 3);
    }

    #[tokio::test]
    async fn test_statistics_get_a_single_attempt() {
        let source = Arc::new(MockDataSource::new());
        source.push_error("event/4/statistics", server_error("event/4/statistics"));
        source.set_response("event/4/statistics", json!({"statistics": []}));
        let mut fetcher = fetcher(source.clone());

        assert!(fetcher.statistics(4).await.is_none());
        assert_eq!(source.calls("event/4/statistics"), 1);
    }

    #[tokio::test]
    async fn test_not_found_is_not_retried() {
        let source = Arc::new(MockDataSource::new());
        let mut fetcher = fetcher(source.clone());

        assert!(fetcher.event(99).await.is_none());
        assert_eq!(source.calls("event/99"), 1);
    }

    #[tokio::test]
    async fn test_live_events_degrade_to_empty() {
        let source = Arc::new(MockDataSource::new());
        for _ in 0..3 {
            source.push_error(
                "sport/football/events/live",
                FetchError::Transport {
                    path: "sport/football/events/live".into(),
                    reason: "connection reset".into(),
                },
            );
        }
        let mut fetcher = fetcher(source);
        assert!(fetcher.live_events().await.is_empty());
    }
}
