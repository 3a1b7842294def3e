//! Push-based observability for goalscout
//!
//! Observability is **outbound data only**: no HTTP server, no incoming requests.
//! Counters live in a Prometheus registry and each cycle is summarized as a
//! structured JSON line on stdout (for Loki, Fluentd, CloudWatch).

pub mod metrics;
pub mod reporter;

pub use metrics::Metrics;
pub use reporter::CycleReporter;
