use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Deduplication key: a whole match, or one side of a match.
///
/// Persisted as `"<id>"` or `"<id>-<team>"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum SignalKey {
    Match(u64),
    Side(u64, String),
}

impl SignalKey {
    pub fn event_id(&self) -> u64 {
        match self {
            Self::Match(id) | Self::Side(id, _) => *id,
        }
    }
}

impl fmt::Display for SignalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Match(id) => write!(f, "{}", id),
            Self::Side(id, team) => write!(f, "{}-{}", id, team),
        }
    }
}

impl FromStr for SignalKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('-') {
            Some((id, team)) => {
                let id = id
                    .parse::<u64>()
                    .map_err(|e| format!("Invalid signal key '{}': {}", s, e))?;
                Ok(Self::Side(id, team.to_string()))
            }
            None => s
                .parse::<u64>()
                .map(Self::Match)
                .map_err(|e| format!("Invalid signal key '{}': {}", s, e)),
        }
    }
}

impl From<SignalKey> for String {
    fn from(key: SignalKey) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for SignalKey {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
