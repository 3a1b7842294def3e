pub mod deduplicator;
pub mod outcome_tracker;

pub use deduplicator::SignalDeduplicator;
pub use outcome_tracker::{OutcomeTracker, resolve};
