use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{
    header::{ACCEPT, CACHE_CONTROL},
    Client, Method, StatusCode,
};
use shared::{
    domain::{Identifier, Item},
    protocol::{decode_catalog, decode_selection},
};
use tracing::{debug, warn};
use url::Url;

pub mod error;
pub mod generation;

pub use error::LoadError;
pub use generation::{LoadGenerations, LoadSlot, LoadTicket};

pub const DEFAULT_METHOD: &str = "GET";

/// One endpoint call: where to go and with which HTTP method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub url: String,
    pub method: String,
}

impl LoadRequest {
    pub fn new(url: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: method.into(),
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(url, DEFAULT_METHOD)
    }

    fn method(&self) -> Result<Method, LoadError> {
        let normalized = self.method.trim().to_ascii_uppercase();
        if normalized.is_empty() {
            return Ok(Method::GET);
        }
        Method::from_bytes(normalized.as_bytes())
            .map_err(|_| LoadError::InvalidMethod(self.method.clone()))
    }

    fn url(&self) -> Result<Url, LoadError> {
        Url::parse(self.url.trim()).map_err(|source| LoadError::InvalidUrl {
            url: self.url.clone(),
            source,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: String,
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, method: Method, url: Url) -> Result<HttpResponse, LoadError>;
}

pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, method: Method, url: Url) -> Result<HttpResponse, LoadError> {
        let transport_error = |source| LoadError::Transport {
            url: url.to_string(),
            source,
        };
        let res = self
            .http
            .request(method, url.clone())
            .header(ACCEPT, "application/json")
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await
            .map_err(transport_error)?;
        let status = res.status();
        let body = res.text().await.map_err(transport_error)?;
        Ok(HttpResponse { status, body })
    }
}

/// Fetches the available-items and selected-items endpoints.
#[derive(Clone)]
pub struct RemoteLoader {
    transport: Arc<dyn Transport>,
}

impl RemoteLoader {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub fn reqwest() -> Self {
        Self::new(Arc::new(ReqwestTransport::new()))
    }

    pub async fn fetch_catalog(&self, request: &LoadRequest) -> Result<Vec<Item>, LoadError> {
        let body = self.fetch_body(request).await?;
        decode_catalog(&body).map_err(|source| LoadError::Payload {
            url: request.url.clone(),
            body,
            source,
        })
    }

    pub async fn fetch_selection(
        &self,
        request: &LoadRequest,
    ) -> Result<Vec<Identifier>, LoadError> {
        let body = self.fetch_body(request).await?;
        decode_selection(&body).map_err(|source| LoadError::Payload {
            url: request.url.clone(),
            body,
            source,
        })
    }

    async fn fetch_body(&self, request: &LoadRequest) -> Result<String, LoadError> {
        let method = request.method()?;
        let url = request.url()?;
        debug!(%method, %url, "sending remote load request");

        let response = self.transport.send(method, url).await?;
        if !response.status.is_success() {
            warn!(url = %request.url, status = %response.status, "remote load rejected");
            return Err(LoadError::Status {
                url: request.url.clone(),
                status: response.status,
                body: response.body,
            });
        }
        Ok(response.body)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
