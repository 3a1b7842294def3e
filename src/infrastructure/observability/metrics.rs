//! Prometheus metrics definitions for goalscout
//!
//! All metrics use the `goalscout_` prefix and are read-only.

use prometheus::{
    CounterVec, Gauge, HistogramOpts, HistogramVec, IntCounter, Opts, Registry, TextEncoder,
    core::{AtomicF64, GenericGauge},
};
use std::sync::Arc;

/// Prometheus metrics for the signal monitor
#[derive(Clone)]
pub struct Metrics {
    registry: Arc<Registry>,
    /// Completed poll cycles
    pub cycles_total: IntCounter,
    /// Ensemble signals emitted, labelled by number of agreeing strategies
    pub signals_total: CounterVec,
    /// Notifications by kind and delivery status
    pub notifications_total: CounterVec,
    /// Resolved pending targets by outcome
    pub outcomes_total: CounterVec,
    /// Fetches that ended without data, by endpoint and reason
    pub fetch_failures_total: CounterVec,
    /// Data-source request latency in seconds
    pub fetch_latency_seconds: HistogramVec,
    /// Targets awaiting their first-half outcome
    pub pending_targets: GenericGauge<AtomicF64>,
    /// Labeled samples accumulated so far
    pub training_samples: GenericGauge<AtomicF64>,
    /// 1 when a trained classifier is active, 0 for the stub rule
    pub model_trained: GenericGauge<AtomicF64>,
}

impl Metrics {
    /// Create a new Metrics instance with all gauges and counters registered
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let cycles_total = IntCounter::with_opts(Opts::new(
            "goalscout_cycles_total",
            "Completed poll cycles",
        ))?;
        registry.register(Box::new(cycles_total.clone()))?;

        let signals_total = CounterVec::new(
            Opts::new("goalscout_signals_total", "Ensemble signals emitted"),
            &["votes"],
        )?;
        registry.register(Box::new(signals_total.clone()))?;

        let notifications_total = CounterVec::new(
            Opts::new(
                "goalscout_notifications_total",
                "Notifications by kind and delivery status",
            ),
            &["kind", "status"],
        )?;
        registry.register(Box::new(notifications_total.clone()))?;

        let outcomes_total = CounterVec::new(
            Opts::new("goalscout_outcomes_total", "Resolved signals by outcome"),
            &["outcome"],
        )?;
        registry.register(Box::new(outcomes_total.clone()))?;

        let fetch_failures_total = CounterVec::new(
            Opts::new(
                "goalscout_fetch_failures_total",
                "Fetches that yielded no data",
            ),
            &["endpoint", "reason"],
        )?;
        registry.register(Box::new(fetch_failures_total.clone()))?;

        let fetch_latency_seconds = HistogramVec::new(
            HistogramOpts::new(
                "goalscout_fetch_latency_seconds",
                "Data-source request latency in seconds",
            )
            .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]),
            &["endpoint"],
        )?;
        registry.register(Box::new(fetch_latency_seconds.clone()))?;

        let pending_targets = Gauge::with_opts(Opts::new(
            "goalscout_pending_targets",
            "Signals awaiting their first-half outcome",
        ))?;
        registry.register(Box::new(pending_targets.clone()))?;

        let training_samples = Gauge::with_opts(Opts::new(
            "goalscout_training_samples",
            "Labeled samples accumulated",
        ))?;
        registry.register(Box::new(training_samples.clone()))?;

        let model_trained = Gauge::with_opts(Opts::new(
            "goalscout_model_trained",
            "Trained classifier active (1) or stub rule (0)",
        ))?;
        registry.register(Box::new(model_trained.clone()))?;

        Ok(Self {
            registry: Arc::new(registry),
            cycles_total,
            signals_total,
            notifications_total,
            outcomes_total,
            fetch_failures_total,
            fetch_latency_seconds,
            pending_targets,
            training_samples,
            model_trained,
        })
    }

    /// Render all metrics in Prometheus text format
    pub fn render(&self) -> String {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        encoder
            .encode_to_string(&metric_families)
            .unwrap_or_default()
    }

    pub fn inc_signal(&self, votes: usize) {
        self.signals_total
            .with_label_values(&[votes.to_string().as_str()])
            .inc();
    }

    pub fn inc_notification(&self, kind: &str, delivered: bool) {
        let status = if delivered { "sent" } else { "failed" };
        self.notifications_total
            .with_label_values(&[kind, status])
            .inc();
    }

    pub fn inc_outcome(&self, outcome: &str) {
        self.outcomes_total.with_label_values(&[outcome]).inc();
    }

    pub fn inc_fetch_failure(&self, endpoint: &str, reason: &str) {
        self.fetch_failures_total
            .with_label_values(&[endpoint, reason])
            .inc();
    }

    /// Observe data-source latency
    pub fn observe_fetch_latency(&self, endpoint: &str, latency: f64) {
        self.fetch_latency_seconds
            .with_label_values(&[endpoint])
            .observe(latency);
    }

    /// Counter value for one notification kind/status pair; used by reports and tests.
    pub fn notifications(&self, kind: &str, status: &str) -> f64 {
        self.notifications_total
            .with_label_values(&[kind, status])
            .get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_render_with_prefix() {
        let metrics = Metrics::new().unwrap();
        metrics.cycles_total.inc();
        metrics.inc_signal(2);
        metrics.inc_notification("signal", true);
        metrics.pending_targets.set(3.0);

        let output = metrics.render();
        assert!(output.contains("goalscout_cycles_total 1"));
        assert!(output.contains("goalscout_signals_total{votes=\"2\"} 1"));
        assert!(output.contains("goalscout_pending_targets 3"));
        assert_eq!(metrics.notifications("signal", "sent"), 1.0);
    }
}
