use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// Lifecycle status of a match as reported by the data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    NotStarted,
    InProgress,
    Finished,
    Other,
}

impl EventStatus {
    fn from_type(kind: &str) -> Self {
        match kind {
            "notstarted" => Self::NotStarted,
            "inprogress" => Self::InProgress,
            "finished" => Self::Finished,
            _ => Self::Other,
        }
    }
}

/// Current period of play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPeriod {
    NotStarted,
    FirstHalf,
    HalfTime,
    SecondHalf,
    ExtraTime,
    Penalties,
    Ended,
    Unknown,
}

impl MatchPeriod {
    /// Maps SofaScore status codes, falling back to the description text.
    fn from_status(code: Option<u32>, description: &str) -> Self {
        match code {
            Some(0) => Self::NotStarted,
            Some(6) => Self::FirstHalf,
            Some(31) => Self::HalfTime,
            Some(7) => Self::SecondHalf,
            Some(32) | Some(33) | Some(34) | Some(41) | Some(42) => Self::ExtraTime,
            Some(50) => Self::Penalties,
            Some(60) | Some(70) | Some(90) | Some(100) | Some(110) | Some(120) => Self::Ended,
            _ => match description.to_lowercase().as_str() {
                "1st half" => Self::FirstHalf,
                "halftime" => Self::HalfTime,
                "2nd half" => Self::SecondHalf,
                "ended" => Self::Ended,
                "not started" => Self::NotStarted,
                _ => Self::Unknown,
            },
        }
    }
}

impl fmt::Display for MatchPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => write!(f, "Not started"),
            Self::FirstHalf => write!(f, "1st half"),
            Self::HalfTime => write!(f, "Half time"),
            Self::SecondHalf => write!(f, "2nd half"),
            Self::ExtraTime => write!(f, "Extra time"),
            Self::Penalties => write!(f, "Penalties"),
            Self::Ended => write!(f, "Ended"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Per-period goals for one side. Missing periods count as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Score {
    #[serde(default)]
    pub current: Option<u32>,
    #[serde(default)]
    pub period1: Option<u32>,
    #[serde(default)]
    pub period2: Option<u32>,
}

impl Score {
    pub fn first_half(&self) -> u32 {
        self.period1.unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.current.unwrap_or(0)
    }
}

/// Clock information attached to an event.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EventTime {
    /// Explicit minute when the source provides one.
    pub minute: Option<f64>,
    /// Unix seconds at which the current period kicked off.
    pub current_period_start_timestamp: Option<i64>,
}

/// Read-only snapshot of a live match.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveEvent {
    pub id: u64,
    pub home_team: String,
    pub away_team: String,
    pub tournament: String,
    pub slug: Option<String>,
    pub custom_id: Option<String>,
    pub status: EventStatus,
    pub period: MatchPeriod,
    pub home_score: Score,
    pub away_score: Score,
    pub time: EventTime,
}

impl LiveEvent {
    pub fn first_half_goals(&self) -> u32 {
        self.home_score.first_half() + self.away_score.first_half()
    }

    pub fn display_name(&self) -> String {
        format!("{} - {}", self.home_team, self.away_team)
    }

    pub fn is_in_first_half(&self) -> bool {
        self.status == EventStatus::InProgress && self.period == MatchPeriod::FirstHalf
    }

    /// Parses the `{"events": [...]}` envelope. Malformed entries are skipped.
    pub fn list_from_json(payload: &Value) -> Vec<LiveEvent> {
        payload
            .get("events")
            .and_then(Value::as_array)
            .map(|events| events.iter().filter_map(Self::from_raw_value).collect())
            .unwrap_or_default()
    }

    /// Parses the `{"event": {...}}` envelope returned by the detail endpoint.
    pub fn from_json(payload: &Value) -> Option<LiveEvent> {
        payload.get("event").and_then(Self::from_raw_value)
    }

    fn from_raw_value(value: &Value) -> Option<LiveEvent> {
        let raw: RawEvent = serde_json::from_value(value.clone()).ok()?;
        Some(raw.into())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEvent {
    id: u64,
    home_team: RawNamed,
    away_team: RawNamed,
    #[serde(default)]
    tournament: Option<RawNamed>,
    #[serde(default)]
    slug: Option<String>,
    #[serde(default)]
    custom_id: Option<String>,
    #[serde(default)]
    status: Option<RawStatus>,
    #[serde(default)]
    home_score: Option<Score>,
    #[serde(default)]
    away_score: Option<Score>,
    #[serde(default)]
    time: Option<RawTime>,
}

#[derive(Debug, Deserialize)]
struct RawNamed {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct RawStatus {
    #[serde(default)]
    code: Option<u32>,
    #[serde(default)]
    description: String,
    #[serde(rename = "type", default)]
    kind: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTime {
    #[serde(default)]
    minute: Option<f64>,
    #[serde(default)]
    current_period_start_timestamp: Option<i64>,
}

impl From<RawEvent> for LiveEvent {
    fn from(raw: RawEvent) -> Self {
        let (status, period) = match &raw.status {
            Some(s) => (
                EventStatus::from_type(&s.kind),
                MatchPeriod::from_status(s.code, &s.description),
            ),
            None => (EventStatus::Other, MatchPeriod::Unknown),
        };
        let time = raw
            .time
            .map(|t| EventTime {
                minute: t.minute,
                current_period_start_timestamp: t.current_period_start_timestamp,
            })
            .unwrap_or_default();

        LiveEvent {
            id: raw.id,
            home_team: raw.home_team.name,
            away_team: raw.away_team.name,
            tournament: raw.tournament.map(|t| t.name).unwrap_or_default(),
            slug: raw.slug,
            custom_id: raw.custom_id,
            status,
            period,
            home_score: raw.home_score.unwrap_or_default(),
            away_score: raw.away_score.unwrap_or_default(),
            time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_event(code: u32, kind: &str, home_p1: u32, away_p1: u32) -> Value {
        json!({
            "id": 42,
            "homeTeam": {"name": "Alpha"},
            "awayTeam": {"name": "Beta"},
            "tournament": {"name": "Premier League"},
            "status": {"code": code, "description": "1st half", "type": kind},
            "homeScore": {"current": home_p1, "period1": home_p1},
            "awayScore": {"current": away_p1, "period1": away_p1},
            "time": {"currentPeriodStartTimestamp": 1_700_000_000}
        })
    }

    #[test]
    fn test_parses_live_list() {
        let payload = json!({"events": [raw_event(6, "inprogress", 0, 1), {"broken": true}]});
        let events = LiveEvent::list_from_json(&payload);

        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.id, 42);
        assert_eq!(event.display_name(), "Alpha - Beta");
        assert_eq!(event.status, EventStatus::InProgress);
        assert_eq!(event.period, MatchPeriod::FirstHalf);
        assert_eq!(event.first_half_goals(), 1);
        assert_eq!(event.time.current_period_start_timestamp, Some(1_700_000_000));
    }

    #[test]
    fn test_detail_envelope_and_period_mapping() {
        let payload = json!({"event": raw_event(31, "inprogress", 1, 0)});
        let event = LiveEvent::from_json(&payload).unwrap();
        assert_eq!(event.period, MatchPeriod::HalfTime);
        assert!(!event.is_in_first_half());

        let payload = json!({"event": raw_event(100, "finished", 0, 0)});
        let event = LiveEvent::from_json(&payload).unwrap();
        assert_eq!(event.status, EventStatus::Finished);
        assert_eq!(event.period, MatchPeriod::Ended);
    }

    #[test]
    fn test_missing_scores_default_to_zero() {
        let payload = json!({"event": {
            "id": 7,
            "homeTeam": {"name": "A"},
            "awayTeam": {"name": "B"}
        }});
        let event = LiveEvent::from_json(&payload).unwrap();
        assert_eq!(event.first_half_goals(), 0);
        assert_eq!(event.status, EventStatus::Other);
        assert_eq!(event.tournament, "");
    }
}
