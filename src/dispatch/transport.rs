use std::time::Duration;

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::{Client, header::USER_AGENT};
use tracing::debug;

use crate::error::{DispatchError, TransportError};

/// A single GET the dispatcher wants performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeRequest {
    pub url: String,
    /// `None` means no User-Agent header is sent at all.
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeResponse {
    pub status: u16,
}

/// Network seam of the dispatcher.
///
/// Implementations return `Ok` for every received response, whatever its
/// status code, and `Err` only when no response was obtained.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, request: &ProbeRequest) -> Result<ProbeResponse, TransportError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportOptions {
    /// Sizes the connection pool so it never becomes the bottleneck.
    pub concurrency: usize,
    pub request_timeout: Duration,
    /// Timeout for establishing a new connection.
    pub connect_timeout: Duration,
    pub insecure: bool,
}

/// Production transport backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    request_timeout: Duration,
}

impl ReqwestTransport {
    /// Builds the client. No default User-Agent is configured so that each
    /// request carries exactly the header of its profile, or none.
    ///
    /// # Errors
    ///
    /// Returns an error when the TLS backend or client cannot be initialised.
    pub fn new(options: &TransportOptions) -> Result<Self, DispatchError> {
        let mut builder = Client::builder()
            .timeout(options.request_timeout)
            .connect_timeout(options.connect_timeout.min(options.request_timeout))
            .pool_max_idle_per_host(options.concurrency.max(1));

        if options.insecure {
            builder = builder
                .danger_accept_invalid_certs(true)
                .danger_accept_invalid_hostnames(true);
        }

        let client = builder
            .build()
            .map_err(|err| DispatchError::BuildClientFailed { source: err })?;
        Ok(Self {
            client,
            request_timeout: options.request_timeout,
        })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, request: &ProbeRequest) -> Result<ProbeResponse, TransportError> {
        let mut builder = self.client.get(&request.url);
        if let Some(user_agent) = request.user_agent.as_deref() {
            builder = builder.header(USER_AGENT, user_agent);
        }

        let response = builder
            .send()
            .await
            .map_err(|err| classify_error(err, self.request_timeout))?;
        let status = response.status().as_u16();

        // The response counts once headers arrive. The body is drained off the
        // timed path so the connection can go back to the pool; reqwest's own
        // timeout bounds a stalled body.
        let url = request.url.clone();
        drop(tokio::spawn(async move {
            if let Err(err) = drain_response_body(response).await {
                debug!("Failed to drain response body from {}: {}", url, err);
            }
        }));

        Ok(ProbeResponse { status })
    }
}

fn classify_error(err: reqwest::Error, timeout: Duration) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout { timeout }
    } else if err.is_connect() {
        TransportError::Connect { source: err }
    } else {
        TransportError::Request { source: err }
    }
}

async fn drain_response_body(response: reqwest::Response) -> Result<u64, reqwest::Error> {
    let mut stream = response.bytes_stream();
    let mut total_bytes: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let bytes = chunk?;
        total_bytes = total_bytes.saturating_add(u64::try_from(bytes.len()).unwrap_or(u64::MAX));
    }
    Ok(total_bytes)
}
