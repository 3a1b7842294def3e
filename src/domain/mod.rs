// Live football data model
pub mod football;

// Signal detection and feedback records
pub mod signals;

// Port interfaces
pub mod ports;

// Domain-specific error types
pub mod errors;
