//! HTTP transport used by the Open-Meteo client.
//!
//! The client only needs a single operation, "GET this URL and hand me the
//! status and body", so it is expressed as a small async trait. Production
//! code uses [`ReqwestTransport`]; tests plug in an in-memory stub.

use async_trait::async_trait;
use reqwest::Url;
use thiserror::Error;
use tracing::{debug, warn};

/// A transport-level failure (DNS, TLS, connection reset, ...).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Raw response of a completed HTTP exchange.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError>;
}

/// [`HttpTransport`] backed by a shared `reqwest` client.
///
/// No request timeout is configured; a hung request stays pending until the
/// connection itself gives up.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("lazyweather/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        let start = tokio::time::Instant::now();
        debug!(%url, "HTTP GET start");

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            warn!(%url, error = %e, "HTTP GET failed");
            TransportError::new(e.to_string())
        })?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| {
            warn!(%url, error = %e, "Failed reading body");
            TransportError::new(e.to_string())
        })?;

        debug!(
            %url,
            status,
            latency_ms = start.elapsed().as_millis(),
            "HTTP GET done"
        );

        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}
