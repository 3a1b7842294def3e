pub mod competition_filter;

pub use competition_filter::{CompetitionFilter, DEFAULT_BLACKLIST};
