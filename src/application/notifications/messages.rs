//! Telegram HTML message bodies.

use crate::application::strategies::ShotsAlert;
use crate::domain::football::LiveEvent;
use crate::domain::ports::NotificationButton;
use crate::domain::signals::{EnsembleDecision, PendingTarget};

const MATCH_PAGE_BASE: &str = "https://www.sofascore.com";

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Public match page. Falls back to the id-only route without a slug.
pub fn match_url(event: &LiveEvent) -> String {
    match (&event.slug, &event.custom_id) {
        (Some(slug), Some(custom_id)) => {
            format!("{}/{}/{}#id:{}", MATCH_PAGE_BASE, slug, custom_id, event.id)
        }
        _ => format!("{}/event/{}", MATCH_PAGE_BASE, event.id),
    }
}

pub fn match_button(event: &LiveEvent) -> NotificationButton {
    NotificationButton::new("Open match", match_url(event))
}

pub fn signal_message(event: &LiveEvent, summary: &str, decision: &EnsembleDecision) -> String {
    format!(
        "⚽️ <b>First-half goal signal</b>\n🏆 {}\n{}\n📊 {}\n🗳 {}/{} strategies: {}\n📈 Probability {:.0}%",
        escape_html(&event.tournament),
        escape_html(&event.display_name()),
        escape_html(summary),
        decision.triggered_count,
        decision.votes.len(),
        decision.triggered_names().join(", "),
        decision.probability * 100.0
    )
}

pub fn success_message(target: &PendingTarget, event: &LiveEvent) -> String {
    format!(
        "✅ <b>Goal!</b> Signal confirmed\n🏆 {}\n{}\n⏱ First half: {} - {}",
        escape_html(&target.tournament),
        escape_html(&target.match_name),
        event.home_score.first_half(),
        event.away_score.first_half()
    )
}

pub fn shots_alert_message(event: &LiveEvent, alert: &ShotsAlert, home: u32, away: u32) -> String {
    format!(
        "🎯 <b>{}</b> reached {} shots on target\n🏆 {}\n⚽️ {} vs {}\n📈 {} - {}",
        escape_html(&alert.team),
        alert.shots_on_target,
        escape_html(&event.tournament),
        escape_html(&event.home_team),
        escape_html(&event.away_team),
        home,
        away
    )
}

pub fn startup_message(pending: usize, model_version: Option<&str>) -> String {
    let model = match model_version {
        Some(version) => format!("trained model {}", escape_html(version)),
        None => "no trained model yet, using the stub rule".to_string(),
    };
    format!(
        "✅ <b>Bot started</b>\nWatching live first halves.\n⏳ Pending signals: {}\n🤖 {}",
        pending, model
    )
}
