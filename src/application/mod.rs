// Data access: cache, backoff, retrying fetcher
pub mod fetcher;

// Per-match pipeline
pub mod features;
pub mod filters;
pub mod strategies;

// Classifier and its training loop
pub mod ml;

// Dedup and outcome resolution
pub mod tracking;

pub mod notifications;

// Service context and poll loop
pub mod monitor;
