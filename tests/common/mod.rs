#![allow(dead_code)]

use goalscout::config::Config;
use goalscout::infrastructure::mock::MockDataSource;
use serde_json::{Value, json};
use std::path::PathBuf;
use std::time::Duration;

pub const NOW: i64 = 1_760_000_000;

/// Config with no waiting anywhere and files under a fresh temp directory.
pub fn test_config() -> (Config, PathBuf) {
    let dir = std::env::temp_dir().join(format!("goalscout-it-{}", uuid::Uuid::new_v4()));
    let mut config = Config::default();

    config.fetcher.cache_ttl = Duration::ZERO;
    config.fetcher.backoff_initial_min = Duration::ZERO;
    config.fetcher.backoff_initial_max = Duration::ZERO;
    config.fetcher.backoff_max = Duration::ZERO;
    config.fetcher.pacing_min = Duration::ZERO;
    config.fetcher.pacing_max = Duration::ZERO;

    config.storage.state_path = dir.join("state.json");
    config.storage.model_path = dir.join("ml/model.json");
    config.storage.training_csv_path = dir.join("ml/training_data.csv");
    (config, dir)
}

/// Raw event object as found in the live list or under `"event"`.
pub fn raw_event(id: u64, tournament: &str, status_code: u32, home_p1: u32, away_p1: u32) -> Value {
    let (description, kind) = match status_code {
        6 => ("1st half", "inprogress"),
        31 => ("Halftime", "inprogress"),
        7 => ("2nd half", "inprogress"),
        100 => ("Ended", "finished"),
        _ => ("Not started", "notstarted"),
    };
    json!({
        "id": id,
        "slug": format!("home-{}-away-{}", id, id),
        "customId": format!("c{}", id),
        "homeTeam": {"name": format!("Home {}", id)},
        "awayTeam": {"name": format!("Away {}", id)},
        "tournament": {"name": tournament},
        "status": {"code": status_code, "description": description, "type": kind},
        "homeScore": {"current": home_p1, "period1": home_p1},
        "awayScore": {"current": away_p1, "period1": away_p1},
        "time": {"currentPeriodStartTimestamp": NOW - 30 * 60}
    })
}

pub fn live_list(events: Vec<Value>) -> Value {
    json!({ "events": events })
}

pub fn detail(event: Value) -> Value {
    json!({ "event": event })
}

pub fn statistics(shots: (u32, u32), corners: (u32, u32), possession: (u32, u32)) -> Value {
    json!({"statistics": [{
        "period": "ALL",
        "groups": [{"statisticsItems": [
            {"name": "Ball possession", "home": format!("{}%", possession.0), "away": format!("{}%", possession.1)},
            {"name": "Shots on target", "home": shots.0.to_string(), "away": shots.1.to_string()},
            {"name": "Corner kicks", "home": corners.0.to_string(), "away": corners.1.to_string()}
        ]}]
    }]})
}

pub fn live_path() -> &'static str {
    "sport/football/events/live"
}

pub fn event_path(id: u64) -> String {
    format!("event/{}", id)
}

pub fn stats_path(id: u64) -> String {
    format!("event/{}/statistics", id)
}

/// One first-half match at 0-0 with 8 shots on target, 2 corners, 55/45 possession.
pub fn pressure_match(source: &MockDataSource, id: u64) {
    source.set_response(&event_path(id), detail(raw_event(id, "Eredivisie", 6, 0, 0)));
    source.set_response(&stats_path(id), statistics((5, 3), (1, 1), (55, 45)));
}
