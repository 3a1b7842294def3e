use std::fmt;

/// Data-source endpoints the monitor needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    LiveEvents,
    Event(u64),
    Statistics(u64),
    Incidents(u64),
}

impl Endpoint {
    pub fn path(&self) -> String {
        match self {
            Self::LiveEvents => "sport/football/events/live".to_string(),
            Self::Event(id) => format!("event/{}", id),
            Self::Statistics(id) => format!("event/{}/statistics", id),
            Self::Incidents(id) => format!("event/{}/incidents", id),
        }
    }

    /// Metric label, independent of the event id.
    pub fn label(&self) -> &'static str {
        match self {
            Self::LiveEvents => "live_events",
            Self::Event(_) => "event",
            Self::Statistics(_) => "statistics",
            Self::Incidents(_) => "incidents",
        }
    }

    /// Statistics are often missing for lower leagues; a failure there means
    /// "not available", so it gets one attempt only.
    pub fn has_reduced_budget(&self) -> bool {
        matches!(self, Self::Statistics(_))
    }

    pub fn attempt_budget(&self, normal_attempts: u32) -> u32 {
        if self.has_reduced_budget() {
            1
        } else {
            normal_attempts.max(1)
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_and_budgets() {
        assert_eq!(Endpoint::LiveEvents.path(), "sport/football/events/live");
        assert_eq!(Endpoint::Statistics(9).path(), "event/9/statistics");
        assert_eq!(Endpoint::Statistics(9).attempt_budget(5), 1);
        assert_eq!(Endpoint::Event(9).attempt_budget(5), 5);
        assert_eq!(Endpoint::Incidents(9).attempt_budget(0), 1);
    }
}
