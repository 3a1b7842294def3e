//! Typed view over the grouped statistics payload.
//!
//! The source reports every value as a display string ("7", "55%"). Parsing
//! happens once here; callers read numbers through accessors that fall back
//! to zero on anything unparsable.

use serde::Deserialize;
use serde_json::Value;

pub const SHOTS_ON_TARGET: &str = "Shots on target";
pub const CORNER_KICKS: &str = "Corner kicks";
pub const BALL_POSSESSION: &str = "Ball possession";

/// One named statistic with raw home/away strings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StatisticItem {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub home: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub away: Option<String>,
}

impl StatisticItem {
    pub fn home_value(&self) -> f64 {
        parse_stat_value(self.home.as_deref())
    }

    pub fn away_value(&self) -> f64 {
        parse_stat_value(self.away.as_deref())
    }

    pub fn total(&self) -> f64 {
        self.home_value() + self.away_value()
    }

    pub fn abs_diff(&self) -> f64 {
        (self.home_value() - self.away_value()).abs()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatisticGroup {
    #[serde(default)]
    statistics_items: Vec<StatisticItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct StatisticPeriod {
    #[serde(default)]
    period: String,
    #[serde(default)]
    groups: Vec<StatisticGroup>,
}

/// Statistics for one match, restricted to a single period (whole match by preference).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatisticsSnapshot {
    items: Vec<StatisticItem>,
}

impl StatisticsSnapshot {
    pub fn new(items: Vec<StatisticItem>) -> Self {
        Self { items }
    }

    /// Parses `{"statistics": [{"period": "ALL", "groups": [...]}, ...]}`.
    ///
    /// The `ALL` period wins; otherwise the first period listed is used.
    pub fn from_json(payload: &Value) -> Self {
        let periods: Vec<StatisticPeriod> = payload
            .get("statistics")
            .cloned()
            .and_then(|v| serde_json::from_value(v).ok())
            .unwrap_or_default();

        let chosen = periods
            .iter()
            .position(|p| p.period.eq_ignore_ascii_case("ALL"))
            .or(if periods.is_empty() { None } else { Some(0) });

        let items = chosen
            .map(|idx| {
                periods[idx]
                    .groups
                    .iter()
                    .flat_map(|g| g.statistics_items.iter().cloned())
                    .collect()
            })
            .unwrap_or_default();

        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First item with the given name.
    pub fn stat(&self, name: &str) -> Option<&StatisticItem> {
        self.items.iter().find(|item| item.name == name)
    }

    pub fn total(&self, name: &str) -> f64 {
        self.stat(name).map(StatisticItem::total).unwrap_or(0.0)
    }

    pub fn abs_diff(&self, name: &str) -> f64 {
        self.stat(name).map(StatisticItem::abs_diff).unwrap_or(0.0)
    }
}

/// Parses "7", "55%", " 3 " into a number; anything else is zero.
pub fn parse_stat_value(raw: Option<&str>) -> f64 {
    raw.map(|s| s.trim().trim_end_matches('%').trim())
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Accepts strings or bare numbers for the home/away display values.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
