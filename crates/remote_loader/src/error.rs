use reqwest::StatusCode;
use shared::error::PayloadError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid endpoint url '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("invalid http method '{0}'")]
    InvalidMethod(String),
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("request to {url} returned {status}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },
    #[error("unexpected response from {url}: {source}")]
    Payload {
        url: String,
        body: String,
        #[source]
        source: PayloadError,
    },
}

impl LoadError {
    /// Raw response body, when the server answered at all.
    pub fn response_body(&self) -> &str {
        match self {
            Self::Status { body, .. } | Self::Payload { body, .. } => body,
            Self::InvalidUrl { .. } | Self::InvalidMethod(_) | Self::Transport { .. } => "",
        }
    }
}
