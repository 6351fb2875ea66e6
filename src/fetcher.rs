use reqwest::{header::ACCEPT, StatusCode};
use tracing::{debug, warn};
use url::Url;

use crate::{config::FetcherConfig, error::FetchError, year::YearInfo};

/// Fetches year details from the GetFullYear API.
/// The internal HTTP client is already wrapped in `Arc`, so the fetcher is cheap to clone
/// and can be shared between tasks. It keeps no state between calls.
#[derive(Debug, Clone)]
pub struct YearFetcher {
    client: reqwest::Client,
    config: FetcherConfig,
}

impl YearFetcher {
    /// Create a fetcher for the production endpoint.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_config(FetcherConfig::default())
    }

    pub fn with_config(config: FetcherConfig) -> Result<Self, FetchError> {
        let client = reqwest::ClientBuilder::new()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client, config })
    }

    pub fn endpoint(&self) -> &Url {
        &self.config.endpoint
    }

    /// GET the endpoint and decode the body. Anything but `200 OK` is an error carrying the status.
    /// Nothing is retried.
    pub async fn fetch(&self) -> Result<YearInfo, FetchError> {
        debug!("Fetching year from {}", self.config.endpoint);

        let response = self
            .client
            .get(self.config.endpoint.as_str())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!("Unexpected status code: {}", status.as_u16());
            return Err(FetchError::UnexpectedStatus { status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(e))?;

        Ok(serde_json::from_slice(&body)?)
    }

    fn transport_error(&self, error: reqwest::Error) -> FetchError {
        if error.is_timeout() {
            warn!(
                "Request to {} timed out after {:?}",
                self.config.endpoint, self.config.timeout
            );
            FetchError::Timeout(self.config.timeout)
        } else {
            FetchError::Transport(error)
        }
    }
}

/// Fetch the current year from the production endpoint with a freshly built fetcher.
pub async fn get_full_year() -> Result<YearInfo, FetchError> {
    YearFetcher::new()?.fetch().await
}
