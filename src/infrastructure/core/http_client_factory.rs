use anyhow::{Context, Result};
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use std::time::Duration;

const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) goalscout/",
    env!("CARGO_PKG_VERSION")
);

pub struct HttpClientFactory;

impl HttpClientFactory {
    /// Plain client for the sports-data source. Retries are handled by the
    /// caller so that each endpoint can have its own attempt budget.
    pub fn create_data_client(timeout: Duration) -> Result<Client> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .pool_max_idle_per_host(5)
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .build()
            .context("Failed to build data-source HTTP client")
    }

    /// Creates a new HTTP client with retry middleware
    pub fn create_retrying_client(max_retries: u32) -> ClientWithMiddleware {
        // Exponential backoff on transient failures (5xx, 429, connect errors)
        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(max_retries);

        let client = Client::builder()
            .pool_max_idle_per_host(2)
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build()
    }
}
