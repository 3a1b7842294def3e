use crate::domain::football::statistics::SHOTS_ON_TARGET;
use crate::domain::football::{LiveEvent, StatisticsSnapshot};
use crate::domain::signals::SignalKey;

/// One side has reached the shots-on-target threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct ShotsAlert {
    pub key: SignalKey,
    pub team: String,
    pub shots_on_target: u32,
}

/// Per-side alert on raw shots on target, independent of the ensemble.
#[derive(Debug, Clone)]
pub struct ShotsAlertWatcher {
    threshold: u32,
}

impl ShotsAlertWatcher {
    pub fn new(threshold: u32) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Home side first, then away.
    pub fn check(&self, event: &LiveEvent, stats: &StatisticsSnapshot) -> Vec<ShotsAlert> {
        let Some(item) = stats.stat(SHOTS_ON_TARGET) else {
            return Vec::new();
        };

        [
            (&event.home_team, item.home_value()),
            (&event.away_team, item.away_value()),
        ]
        .into_iter()
        .filter(|(_, shots)| *shots >= self.threshold as f64)
        .map(|(team, shots)| ShotsAlert {
            key: SignalKey::Side(event.id, team.clone()),
            team: team.clone(),
            shots_on_target: shots as u32,
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::strategies::test_support::event_in;
    use crate::domain::football::MatchPeriod;
    use serde_json::json;

    fn stats(home: &str, away: &str) -> StatisticsSnapshot {
        StatisticsSnapshot::from_json(&json!({"statistics": [{
            "period": "ALL",
            "groups": [{"statisticsItems": [
                {"name": "Shots on target", "home": home, "away": away}
            ]}]
        }]}))
    }

    #[test]
    fn test_alerts_each_side_at_threshold() {
        let event = event_in(MatchPeriod::SecondHalf, 0);
        let alerts = ShotsAlertWatcher::new(4).check(&event, &stats("4", "2"));

        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].team, "Alpha");
        assert_eq!(alerts[0].shots_on_target, 4);
        assert_eq!(alerts[0].key.to_string(), format!("{}-Alpha", event.id));
    }

    #[test]
    fn test_no_alert_without_the_statistic() {
        let event = event_in(MatchPeriod::FirstHalf, 0);
        let empty = StatisticsSnapshot::default();
        assert!(ShotsAlertWatcher::new(1).check(&event, &empty).is_empty());
    }
}
