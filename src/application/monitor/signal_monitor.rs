use super::report::CycleReport;
use crate::application::features::{self, ExtractedFeatures};
use crate::application::fetcher::{Endpoint, ResilientFetcher};
use crate::application::filters::CompetitionFilter;
use crate::application::ml::{GoalPredictor, IncrementalTrainer, StubPredictor, TrainOutcome};
use crate::application::notifications::messages;
use crate::application::strategies::{EvaluationContext, ShotsAlertWatcher, SignalEnsemble};
use crate::application::tracking::{OutcomeTracker, SignalDeduplicator, resolve};
use crate::config::{Config, PollingEnvConfig};
use crate::domain::football::statistics::SHOTS_ON_TARGET;
use crate::domain::football::{EventStatus, LiveEvent, StatisticsSnapshot};
use crate::domain::ports::{NotificationButton, Notifier, SportsDataSource};
use crate::domain::signals::{EnsembleDecision, Label, PendingTarget, SignalKey, TrainingSample};
use crate::infrastructure::observability::{CycleReporter, Metrics};
use crate::infrastructure::persistence::{
    JournalRow, ModelStore, PersistedState, StateStore, TrainingJournal,
};
use anyhow::Result;
use chrono::Utc;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Service context for the detection and feedback loop.
///
/// Owns every piece of mutable state (cache, classifier handle, dedup set,
/// pending targets, samples). Runs on a single task, so nothing is locked.
pub struct SignalMonitor {
    fetcher: ResilientFetcher,
    notifier: Arc<dyn Notifier>,
    filter: CompetitionFilter,
    ensemble: SignalEnsemble,
    shots_alert: Option<ShotsAlertWatcher>,
    predictor: Arc<dyn GoalPredictor>,
    trainer: IncrementalTrainer,
    dedup: SignalDeduplicator,
    tracker: OutcomeTracker,
    samples: Vec<TrainingSample>,
    state_store: StateStore,
    model_store: ModelStore,
    journal: TrainingJournal,
    metrics: Metrics,
    reporter: CycleReporter,
    polling: PollingEnvConfig,
}

impl SignalMonitor {
    /// Wires the monitor and restores persisted state and the model artifact.
    pub fn new(
        config: &Config,
        source: Arc<dyn SportsDataSource>,
        notifier: Arc<dyn Notifier>,
        metrics: Metrics,
    ) -> Result<Self> {
        let state_store = StateStore::new(&config.storage.state_path);
        let model_store = ModelStore::new(&config.storage.model_path);
        let state = state_store.load()?;

        let mut trainer = IncrementalTrainer::new(config.strategy.min_training_samples);
        let predictor: Arc<dyn GoalPredictor> = match model_store.load() {
            Some(model) => {
                trainer = trainer.with_trained_count(state.samples.len());
                Arc::new(model)
            }
            None => Arc::new(StubPredictor),
        };

        let shots_alert = config
            .strategy
            .shots_alert_enabled
            .then(|| ShotsAlertWatcher::new(config.strategy.shots_alert_threshold));

        let monitor = Self {
            fetcher: ResilientFetcher::new(source, &config.fetcher, metrics.clone()),
            notifier,
            filter: CompetitionFilter::from_config(config.strategy.blacklist_keywords.as_ref()),
            ensemble: SignalEnsemble::standard(&config.strategy),
            shots_alert,
            predictor,
            trainer,
            dedup: SignalDeduplicator::new(state.notified),
            tracker: OutcomeTracker::new(state.pending),
            samples: state.samples,
            state_store,
            model_store,
            journal: TrainingJournal::new(&config.storage.training_csv_path),
            metrics,
            reporter: CycleReporter::new(),
            polling: config.polling.clone(),
        };
        monitor.update_gauges();

        info!(
            "Monitor: ready with {:?}, predictor {} {}, {} pending, {} samples",
            monitor.ensemble,
            monitor.predictor.name(),
            monitor.predictor.version(),
            monitor.tracker.len(),
            monitor.samples.len()
        );
        info!(
            "Monitor: training from {} samples, shots alert {}",
            monitor.trainer.min_samples(),
            match &monitor.shots_alert {
                Some(watcher) => format!("at {} on target", watcher.threshold()),
                None => "off".to_string(),
            }
        );
        Ok(monitor)
    }

    pub fn pending(&self) -> &[PendingTarget] {
        self.tracker.pending()
    }

    pub fn samples(&self) -> &[TrainingSample] {
        &self.samples
    }

    pub fn is_notified(&self, key: &SignalKey) -> bool {
        self.dedup.already_notified(key)
    }

    pub fn predictor(&self) -> &dyn GoalPredictor {
        self.predictor.as_ref()
    }

    pub async fn announce_startup(&self) {
        let trained = self.predictor.is_trained().then(|| self.predictor.version());
        let text = messages::startup_message(self.tracker.len(), trained);
        self.notify("startup", &text, &[]).await;
    }

    /// Single cycle followed by the metrics line; used by `--once`.
    pub async fn run_once(&mut self) -> Result<CycleReport> {
        let report = self.run_cycle().await?;
        self.reporter.report(&report);
        Ok(report)
    }

    /// Poll until `shutdown` resolves, then save state.
    ///
    /// `shutdown` is only observed between cycles: a cycle that has started
    /// always finishes, so a sent notification is never lost from the saved
    /// dedup set and pending targets. A failed cycle is logged and followed by
    /// the error cooldown instead of the normal interval.
    pub async fn run<F>(&mut self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        info!(
            "Monitor: polling every {:?} (cooldown {:?} after errors)",
            self.polling.poll_interval, self.polling.error_cooldown
        );

        loop {
            let delay = match self.run_cycle().await {
                Ok(report) => {
                    self.reporter.report(&report);
                    self.polling.poll_interval
                }
                Err(e) => {
                    error!(
                        "Monitor: cycle failed: {:#}. Retrying in {:?}",
                        e, self.polling.error_cooldown
                    );
                    self.polling.error_cooldown
                }
            };

            tokio::select! {
                biased;
                _ = &mut shutdown => break,
                _ = tokio::time::sleep(delay) => {}
            }
        }

        info!("Monitor: shutdown requested, saving state");
        if let Err(e) = self.save_state() {
            error!("Monitor: failed to save state on shutdown: {:#}", e);
        }
        debug!("Monitor: final metrics\n{}", self.metrics.render());
        Ok(())
    }

    pub async fn run_cycle(&mut self) -> Result<CycleReport> {
        self.run_cycle_at(Utc::now().timestamp()).await
    }

    /// One detection and feedback pass as of `now_ts` (unix seconds).
    pub async fn run_cycle_at(&mut self, now_ts: i64) -> Result<CycleReport> {
        let mut report = CycleReport::default();
        let mut signaled_now = HashSet::new();

        let live = self.fetcher.live_events().await;
        report.live_events = live.len();

        for listed in &live {
            if self.action_cap_reached(&report) {
                debug!("Monitor: action cap reached, deferring remaining matches");
                break;
            }
            if listed.status != EventStatus::InProgress {
                continue;
            }
            if self.filter.is_blacklisted(listed) {
                report.skipped_blacklisted += 1;
                continue;
            }
            self.process_match(listed, now_ts, &mut report, &mut signaled_now)
                .await;
        }

        self.resolve_pending(&signaled_now, &mut report).await;
        report.retrained = self.retrain();
        self.save_state()?;

        self.metrics.cycles_total.inc();
        self.update_gauges();
        report.pending_total = self.tracker.len();
        report.samples_total = self.samples.len();
        report.notified_total = self.dedup.len();
        report.model = format!("{} {}", self.predictor.name(), self.predictor.version());

        info!(
            "Monitor: cycle done. {} live, {} evaluated, {} signals, {} alerts, {} resolved, {} pending",
            report.live_events,
            report.evaluated,
            report.signals,
            report.shots_alerts,
            report.resolved_success + report.resolved_failure,
            report.pending_total
        );
        Ok(report)
    }

    fn action_cap_reached(&self, report: &CycleReport) -> bool {
        let cap = self.polling.max_signals_per_cycle;
        cap > 0 && report.actions() >= cap
    }

    async fn process_match(
        &mut self,
        listed: &LiveEvent,
        now_ts: i64,
        report: &mut CycleReport,
        signaled_now: &mut HashSet<u64>,
    ) {
        let id = listed.id;
        let match_key = SignalKey::Match(id);
        let wants_signal = listed.is_in_first_half()
            && !self.dedup.already_notified(&match_key)
            && !self.tracker.is_pending(id);
        if !wants_signal && self.shots_alert.is_none() {
            return;
        }

        let Some(stats) = self.fetcher.statistics(id).await else {
            debug!("Monitor: no statistics for {}", listed.display_name());
            report.without_statistics += 1;
            return;
        };

        if wants_signal {
            let event = self.fetcher.event(id).await.unwrap_or_else(|| listed.clone());
            if event.is_in_first_half()
                && self
                    .evaluate_signal(&event, &stats, now_ts, report)
                    .await
            {
                signaled_now.insert(id);
            }
        }

        if self.shots_alert.is_some() {
            self.check_shots_alerts(listed, &stats, report).await;
        }
    }

    /// Returns true when a signal was emitted for the match.
    async fn evaluate_signal(
        &mut self,
        event: &LiveEvent,
        stats: &StatisticsSnapshot,
        now_ts: i64,
        report: &mut CycleReport,
    ) -> bool {
        let extracted = features::extract(event, Some(stats), &[], now_ts);
        let decision = self.ensemble.evaluate(&EvaluationContext {
            event,
            features: &extracted.features,
            predictor: self.predictor.as_ref(),
        });
        report.evaluated += 1;
        debug!(
            "Monitor: {} -> {}/{} votes, p={:.2}",
            extracted.summary,
            decision.triggered_count,
            decision.votes.len(),
            decision.probability
        );

        if !decision.fired {
            return false;
        }

        // Incidents only feed the summary, so they are fetched for signals alone.
        let incidents = self.fetcher.incidents(event.id).await;
        let extracted = features::extract(event, Some(stats), &incidents, now_ts);
        self.emit_signal(event, &extracted, &decision, report).await;
        true
    }

    async fn emit_signal(
        &mut self,
        event: &LiveEvent,
        extracted: &ExtractedFeatures,
        decision: &EnsembleDecision,
        report: &mut CycleReport,
    ) {
        info!(
            "Monitor: SIGNAL {} ({}) votes={} [{}] p={:.2}",
            extracted.summary,
            event.tournament,
            decision.triggered_count,
            decision.triggered_names().join(", "),
            decision.probability
        );

        self.dedup.mark_notified(SignalKey::Match(event.id));
        self.tracker.track(PendingTarget {
            event_id: event.id,
            features: extracted.features,
            goals_at_signal: event.first_half_goals(),
            match_name: event.display_name(),
            tournament: event.tournament.clone(),
            signaled_at: Utc::now(),
        });
        self.metrics.inc_signal(decision.triggered_count);
        report.signals += 1;

        let text = messages::signal_message(event, &extracted.summary, decision);
        let buttons = [messages::match_button(event)];
        if !self.notify("signal", &text, &buttons).await {
            report.notification_failures += 1;
        }
    }

    async fn check_shots_alerts(
        &mut self,
        event: &LiveEvent,
        stats: &StatisticsSnapshot,
        report: &mut CycleReport,
    ) {
        let Some(watcher) = &self.shots_alert else {
            return;
        };
        let alerts = watcher.check(event, stats);
        let (home, away) = stats
            .stat(SHOTS_ON_TARGET)
            .map(|item| (item.home_value() as u32, item.away_value() as u32))
            .unwrap_or_default();

        for alert in alerts {
            if self.action_cap_reached(report) {
                break;
            }
            if self.dedup.already_notified(&alert.key) {
                continue;
            }

            info!(
                "Monitor: {} reached {} shots on target in {}",
                alert.team,
                alert.shots_on_target,
                event.display_name()
            );
            self.dedup.mark_notified(alert.key.clone());
            report.shots_alerts += 1;
            let text = messages::shots_alert_message(event, &alert, home, away);
            let buttons = [messages::match_button(event)];
            if !self.notify("shots_alert", &text, &buttons).await {
                report.notification_failures += 1;
            }
        }
    }

    async fn resolve_pending(&mut self, signaled_now: &HashSet<u64>, report: &mut CycleReport) {
        let ids: Vec<u64> = self
            .tracker
            .pending()
            .iter()
            .map(|t| t.event_id)
            .filter(|id| !signaled_now.contains(id))
            .collect();

        for id in ids {
            // Outcomes are judged on the current score, never a cached one.
            self.fetcher.invalidate(Endpoint::Event(id));
            let Some(event) = self.fetcher.event(id).await else {
                debug!("Monitor: event {} unavailable, keeping it pending", id);
                report.unresolved += 1;
                continue;
            };
            let Some(target) = self.tracker.pending().iter().find(|t| t.event_id == id) else {
                continue;
            };

            let outcome = resolve(target, &event);
            let Some(label) = outcome.label() else {
                report.unresolved += 1;
                continue;
            };
            let Some(target) = self.tracker.complete(id) else {
                continue;
            };
            self.record_outcome(&target, &event, label, report).await;
        }
    }

    async fn record_outcome(
        &mut self,
        target: &PendingTarget,
        event: &LiveEvent,
        label: Label,
        report: &mut CycleReport,
    ) {
        self.samples.push(TrainingSample::new(&target.features, label));
        self.metrics.inc_outcome(&label.to_string());
        if let Err(e) = self.journal.append(&JournalRow::new(target, label)) {
            warn!("Monitor: failed to journal outcome for {}: {:#}", target.event_id, e);
        }

        match label {
            Label::Success => {
                info!("Monitor: signal for {} confirmed by a goal", target.match_name);
                report.resolved_success += 1;
                let text = messages::success_message(target, event);
                let buttons = [messages::match_button(event)];
                if !self.notify("success", &text, &buttons).await {
                    report.notification_failures += 1;
                }
            }
            Label::Failure => {
                info!(
                    "Monitor: signal for {} expired without a first-half goal ({})",
                    target.match_name, event.period
                );
                report.resolved_failure += 1;
            }
        }
    }

    /// Refits when the sample count changed; swaps the predictor on success.
    fn retrain(&mut self) -> bool {
        match self.trainer.train(&self.samples) {
            Ok(TrainOutcome::Trained(model)) => {
                if let Err(e) = self.model_store.save(&model) {
                    warn!("Monitor: new model not persisted: {:#}", e);
                }
                self.predictor = Arc::new(model);
                true
            }
            Ok(TrainOutcome::Skipped(reason)) => {
                debug!("Monitor: training skipped: {}", reason);
                false
            }
            Err(e) => {
                warn!("Monitor: training failed, keeping current predictor: {}", e);
                false
            }
        }
    }

    async fn notify(&self, kind: &str, text: &str, buttons: &[NotificationButton]) -> bool {
        match self.notifier.send(text, buttons).await {
            Ok(()) => {
                self.metrics.inc_notification(kind, true);
                true
            }
            Err(e) => {
                warn!(
                    "Monitor: {} notification via {} failed: {:#}",
                    kind,
                    self.notifier.name(),
                    e
                );
                self.metrics.inc_notification(kind, false);
                false
            }
        }
    }

    pub fn snapshot(&self) -> PersistedState {
        PersistedState {
            pending: self.tracker.pending().to_vec(),
            notified: self.dedup.keys().cloned().collect(),
            samples: self.samples.clone(),
            saved_at: None,
        }
    }

    pub fn save_state(&self) -> Result<()> {
        self.state_store.save(&self.snapshot())
    }

    fn update_gauges(&self) {
        self.metrics.pending_targets.set(self.tracker.len() as f64);
        self.metrics.training_samples.set(self.samples.len() as f64);
        self.metrics
            .model_trained
            .set(if self.predictor.is_trained() { 1.0 } else { 0.0 });
    }
}
