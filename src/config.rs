use std::time::Duration;

use url::Url;

use crate::error::FetchError;

/// Production endpoint of the GetFullYear API.
pub const ENDPOINT: &str = "https://getfullyear.com/api/year";

/// User agent sent with every request.
pub const USER_AGENT: &str = "GetFullYear/1.0";

/// Overall request/response timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Where and how a [`YearFetcher`](crate::YearFetcher) talks to the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetcherConfig {
    pub endpoint: Url,
    pub timeout: Duration,
    pub user_agent: String,
}

impl FetcherConfig {
    /// Production settings pointed at a different `endpoint`, e.g. a local stub server.
    pub fn with_endpoint(endpoint: &str) -> Result<Self, FetchError> {
        Ok(Self {
            endpoint: Url::parse(endpoint)?,
            ..Self::default()
        })
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(ENDPOINT).expect("ENDPOINT is a valid URL"),
            timeout: DEFAULT_TIMEOUT,
            user_agent: USER_AGENT.to_string(),
        }
    }
}
