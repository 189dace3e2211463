//! Pluggable HTTP transport
//!
//! The client only needs "send this GET, give me status, headers and body".
//! [`ReqwestTransport`] is the default; tests and embedders can supply their
//! own implementation, for example to route through a custom proxy or to
//! return canned responses.

use crate::error::{ApiError, Result};
use bytes::Bytes;
use std::future::Future;
use std::time::Duration;

/// Sends fully prepared requests and returns the buffered response
pub trait Transport: Send + Sync {
    /// Execute `request` and buffer the response body
    fn send(
        &self,
        request: http::Request<()>,
    ) -> impl Future<Output = Result<http::Response<Bytes>>> + Send;
}

/// Transport backed by a shared [`reqwest::Client`]
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Wrap an existing client
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Build a client with an optional overall request timeout
    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::new(builder.build()?))
    }
}

impl Transport for ReqwestTransport {
    fn send(
        &self,
        request: http::Request<()>,
    ) -> impl Future<Output = Result<http::Response<Bytes>>> + Send {
        let client = self.client.clone();
        async move {
            let (parts, ()) = request.into_parts();
            let url = parts.uri.to_string();

            let response = client
                .request(parts.method, url)
                .headers(parts.headers)
                .send()
                .await?;

            let mut builder = http::Response::builder()
                .status(response.status())
                .version(response.version());
            if let Some(headers) = builder.headers_mut() {
                headers.extend(
                    response
                        .headers()
                        .iter()
                        .map(|(name, value)| (name.clone(), value.clone())),
                );
            }
            let body = response.bytes().await?;

            builder.body(body).map_err(ApiError::from)
        }
    }
}
