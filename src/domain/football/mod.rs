pub mod event;
pub mod incident;
pub mod statistics;

pub use event::{EventStatus, EventTime, LiveEvent, MatchPeriod, Score};
pub use incident::Incident;
pub use statistics::{StatisticItem, StatisticsSnapshot};
