pub mod backoff;
pub mod endpoint;
pub mod resilient_fetcher;
pub mod ttl_cache;

pub use backoff::BackoffPolicy;
pub use endpoint::Endpoint;
pub use resilient_fetcher::ResilientFetcher;
pub use ttl_cache::TtlCache;
