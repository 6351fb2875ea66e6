use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("failed to get full year: unexpected status code {}", .status.as_u16())]
    UnexpectedStatus { status: StatusCode },
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// The HTTP status that caused the failure, if the server answered with something other than `200 OK`.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::UnexpectedStatus { status } => Some(*status),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}
