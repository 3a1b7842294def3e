use crate::config::FetcherEnvConfig;
use crate::domain::errors::FetchError;
use crate::domain::ports::SportsDataSource;
use crate::infrastructure::core::HttpClientFactory;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::debug;

/// SofaScore public API adapter.
pub struct SofascoreClient {
    client: Client,
    base_url: String,
}

impl SofascoreClient {
    pub fn new(config: &FetcherEnvConfig) -> Result<Self> {
        Ok(Self {
            client: HttpClientFactory::create_data_client(config.request_timeout)?,
            base_url: normalize_base_url(&config.base_url),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    }
}

/// 404 means the resource does not exist for this match (typically
/// statistics for lower leagues); every other non-success status is an error.
fn classify_status(path: &str, status: StatusCode) -> Option<FetchError> {
    if status.is_success() {
        None
    } else if status == StatusCode::NOT_FOUND {
        Some(FetchError::Unavailable {
            path: path.to_string(),
            status: status.as_u16(),
        })
    } else {
        Some(FetchError::Http {
            path: path.to_string(),
            status: status.as_u16(),
        })
    }
}

#[async_trait]
impl SportsDataSource for SofascoreClient {
    async fn fetch_json(&self, path: &str) -> Result<Value, FetchError> {
        let url = self.url(path);
        debug!("SofascoreClient: GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                path: path.to_string(),
                reason: e.to_string(),
            })?;

        if let Some(err) = classify_status(path, response.status()) {
            return Err(err);
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| FetchError::Malformed {
                path: path.to_string(),
                reason: e.to_string(),
            })
    }
}
