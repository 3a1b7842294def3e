pub mod classifier_strategy;
pub mod ensemble;
pub mod possession_attack;
pub mod shots_alert;
pub mod threshold_rule;
mod traits;

#[cfg(test)]
pub(crate) mod test_support;

pub use classifier_strategy::ClassifierStrategy;
pub use ensemble::{SignalEnsemble, combine};
pub use possession_attack::PossessionAttackStrategy;
pub use shots_alert::{ShotsAlert, ShotsAlertWatcher};
pub use threshold_rule::ThresholdRuleStrategy;
pub use traits::{EvaluationContext, SignalStrategy};
