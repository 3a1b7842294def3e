use crate::domain::football::LiveEvent;
use tracing::debug;

/// Substrings that mark a competition as out of scope (youth, reserve,
/// women's, friendlies and cups). Matched case-insensitively.
pub const DEFAULT_BLACKLIST: &[&str] = &[
    "u17",
    "u18",
    "u19",
    "u20",
    "u21",
    "u23",
    "youth",
    "junior",
    "reserve",
    "women",
    "femenino",
    "feminine",
    "friendl",
    "exhibition",
    "cup",
];

/// Rejects matches whose competition or team names contain a blacklisted keyword.
#[derive(Debug, Clone)]
pub struct CompetitionFilter {
    keywords: Vec<String>,
}

impl Default for CompetitionFilter {
    fn default() -> Self {
        Self::new(DEFAULT_BLACKLIST.iter().map(|k| k.to_string()).collect())
    }
}

impl CompetitionFilter {
    pub fn new(keywords: Vec<String>) -> Self {
        let keywords = keywords
            .into_iter()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        Self { keywords }
    }

    /// Built-in list unless an override is configured.
    pub fn from_config(overrides: Option<&Vec<String>>) -> Self {
        match overrides {
            Some(keywords) => Self::new(keywords.clone()),
            None => Self::default(),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// True when any keyword appears in the tournament or either team name.
    pub fn is_blacklisted(&self, event: &LiveEvent) -> bool {
        let haystack = format!(
            "{} {} {}",
            event.tournament, event.home_team, event.away_team
        )
        .to_lowercase();

        match self.keywords.iter().find(|k| haystack.contains(k.as_str())) {
            Some(keyword) => {
                debug!(
                    "CompetitionFilter: skipping {} ({}), matched '{}'",
                    event.display_name(),
                    event.tournament,
                    keyword
                );
                true
            }
            None => false,
        }
    }
}
