use serde::Deserialize;
use serde_json::Value;

/// A single in-match incident (goal, card, substitution, period marker...).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    #[serde(default)]
    pub incident_type: String,
    #[serde(default)]
    pub incident_class: Option<String>,
    #[serde(default)]
    pub time: Option<i64>,
    #[serde(default)]
    pub is_home: Option<bool>,
}

impl Incident {
    pub fn is_red_card(&self) -> bool {
        self.incident_type == "card"
            && matches!(
                self.incident_class.as_deref(),
                Some("red") | Some("yellowRed")
            )
    }

    pub fn is_goal(&self) -> bool {
        self.incident_type == "goal"
    }

    /// Parses `{"incidents": [...]}`; entries that fail to parse are dropped.
    pub fn list_from_json(payload: &Value) -> Vec<Incident> {
        payload
            .get("incidents")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|v| serde_json::from_value(v.clone()).ok())
                    .collect()
            })
            .unwrap_or_default()
    }
}
