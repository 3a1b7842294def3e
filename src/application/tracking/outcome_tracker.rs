use crate::domain::football::{EventStatus, LiveEvent, MatchPeriod};
use crate::domain::signals::{Outcome, PendingTarget};

/// Decides what happened to a signal given a fresh view of the match.
pub fn resolve(target: &PendingTarget, event: &LiveEvent) -> Outcome {
    if event.first_half_goals() > target.goals_at_signal {
        Outcome::Success
    } else if event.status != EventStatus::InProgress || event.period != MatchPeriod::FirstHalf {
        Outcome::Failure
    } else {
        Outcome::Pending
    }
}

/// Signals waiting for the end of the first half (or a goal before it).
#[derive(Debug, Clone, Default)]
pub struct OutcomeTracker {
    pending: Vec<PendingTarget>,
}

impl OutcomeTracker {
    pub fn new(pending: Vec<PendingTarget>) -> Self {
        Self { pending }
    }

    /// Adds a target unless one is already tracked for the same match.
    pub fn track(&mut self, target: PendingTarget) -> bool {
        if self.is_pending(target.event_id) {
            return false;
        }
        self.pending.push(target);
        true
    }

    pub fn is_pending(&self, event_id: u64) -> bool {
        self.pending.iter().any(|t| t.event_id == event_id)
    }

    pub fn pending(&self) -> &[PendingTarget] {
        &self.pending
    }

    /// Removes and returns the target for `event_id`.
    pub fn complete(&mut self, event_id: u64) -> Option<PendingTarget> {
        let idx = self.pending.iter().position(|t| t.event_id == event_id)?;
        Some(self.pending.remove(idx))
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
