pub mod feature_extractor;

pub use feature_extractor::{ExtractedFeatures, extract, match_minute};
