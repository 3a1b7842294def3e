use crate::domain::football::statistics::{BALL_POSSESSION, CORNER_KICKS, SHOTS_ON_TARGET};
use crate::domain::football::{Incident, LiveEvent, StatisticsSnapshot};
use crate::domain::signals::MatchFeatures;

const MAX_MINUTE: f64 = 120.0;

/// Features plus the one-line human summary used in logs and messages.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedFeatures {
    pub features: MatchFeatures,
    pub summary: String,
    pub red_cards: usize,
}

/// Builds the feature vector for one match state.
///
/// Missing statistics yield zero counts, so a match without coverage
/// produces `[0, 0, 0, minute]` rather than an error.
pub fn extract(
    event: &LiveEvent,
    stats: Option<&StatisticsSnapshot>,
    incidents: &[Incident],
    now_ts: i64,
) -> ExtractedFeatures {
    let (shots, corners, possession_diff) = match stats {
        Some(stats) => (
            stats.total(SHOTS_ON_TARGET),
            stats.total(CORNER_KICKS),
            stats.abs_diff(BALL_POSSESSION),
        ),
        None => (0.0, 0.0, 0.0),
    };
    let minute = match_minute(event, now_ts);
    let features = MatchFeatures::new(shots, corners, possession_diff, minute);
    let red_cards = incidents.iter().filter(|i| i.is_red_card()).count();

    let mut summary = format!(
        "{} | {}' | SoT {} | Corners {} | Poss diff {}%",
        event.display_name(),
        minute as u32,
        shots,
        corners,
        possession_diff
    );
    if red_cards > 0 {
        summary.push_str(&format!(" | Red cards {}", red_cards));
    }

    ExtractedFeatures {
        features,
        summary,
        red_cards,
    }
}

/// Explicit minute if plausible, else whole minutes since the current period
/// kicked off, else 0.
pub fn match_minute(event: &LiveEvent, now_ts: i64) -> f64 {
    if let Some(minute) = event.time.minute.filter(|m| in_range(*m)) {
        return minute;
    }

    event
        .time
        .current_period_start_timestamp
        .map(|start| ((now_ts - start) / 60) as f64)
        .filter(|m| in_range(*m))
        .unwrap_or(0.0)
}

fn in_range(minute: f64) -> bool {
    minute.is_finite() && (0.0..=MAX_MINUTE).contains(&minute)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const KICKOFF: i64 = 1_700_000_000;

    fn event(time: serde_json::Value) -> LiveEvent {
        LiveEvent::from_json(&json!({
            "event": {
                "id": 7,
                "homeTeam": {"name": "Alpha"},
                "awayTeam": {"name": "Beta"},
                "tournament": {"name": "Eredivisie"},
                "status": {"code": 6, "description": "1st half", "type": "inprogress"},
                "time": time
            }
        }))
        .unwrap()
    }

    fn stats() -> StatisticsSnapshot {
        StatisticsSnapshot::from_json(&json!({"statistics": [{
            "period": "ALL",
            "groups": [{"statisticsItems": [
                {"name": "Shots on target", "home": "5", "away": "3"},
                {"name": "Corner kicks", "home": "2", "away": "x"},
                {"name": "Ball possession", "home": "70%", "away": "30%"}
            ]}]
        }]}))
    }

    #[test]
    fn test_extracts_features_and_summary() {
        let event = event(json!({"currentPeriodStartTimestamp": KICKOFF}));
        let extracted = extract(&event, Some(&stats()), &[], KICKOFF + 30 * 60 + 59);

        assert_eq!(extracted.features, MatchFeatures::new(8.0, 2.0, 40.0, 30.0));
        assert_eq!(
            extracted.summary,
            "Alpha - Beta | 30' | SoT 8 | Corners 2 | Poss diff 40%"
        );
    }

    #[test]
    fn test_missing_statistics_yield_zeros() {
        let event = event(json!({}));
        let extracted = extract(&event, None, &[], KICKOFF);
        assert_eq!(extracted.features, MatchFeatures::default());
    }

    #[test]
    fn test_minute_sources() {
        let explicit = event(json!({"minute": 17.0, "currentPeriodStartTimestamp": KICKOFF}));
        assert_eq!(match_minute(&explicit, KICKOFF + 600), 17.0);

        let implausible = event(json!({"minute": 500.0, "currentPeriodStartTimestamp": KICKOFF}));
        assert_eq!(match_minute(&implausible, KICKOFF + 600), 10.0);

        let future_start = event(json!({"currentPeriodStartTimestamp": KICKOFF + 600}));
        assert_eq!(match_minute(&future_start, KICKOFF), 0.0);

        let stale = event(json!({"currentPeriodStartTimestamp": KICKOFF}));
        assert_eq!(match_minute(&stale, KICKOFF + 200 * 60), 0.0);
    }

    #[test]
    fn test_red_cards_in_summary() {
        let incidents = Incident::list_from_json(&json!({"incidents": [
            {"incidentType": "card", "incidentClass": "red", "time": 20}
        ]}));
        let extracted = extract(&event(json!({})), None, &incidents, KICKOFF);
        assert_eq!(extracted.red_cards, 1);
        assert!(extracted.summary.ends_with("| Red cards 1"));
    }
}
