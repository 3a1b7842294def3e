use crate::domain::signals::SignalKey;
use std::collections::BTreeSet;

/// Remembers every key that has been notified. Entries are never removed.
#[derive(Debug, Clone, Default)]
pub struct SignalDeduplicator {
    notified: BTreeSet<SignalKey>,
}

impl SignalDeduplicator {
    pub fn new(keys: impl IntoIterator<Item = SignalKey>) -> Self {
        Self {
            notified: keys.into_iter().collect(),
        }
    }

    pub fn already_notified(&self, key: &SignalKey) -> bool {
        self.notified.contains(key)
    }

    /// Returns false when the key was already present.
    pub fn mark_notified(&mut self, key: SignalKey) -> bool {
        self.notified.insert(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &SignalKey> {
        self.notified.iter()
    }

    pub fn len(&self) -> usize {
        self.notified.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notified.is_empty()
    }
}
