use std::time::Duration;

use thiserror::Error;

/// Failure to obtain any HTTP response for a single request.
///
/// These never abort a run; the dispatcher folds them into the request's
/// outcome.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Request timed out after {}ms", .timeout.as_millis())]
    Timeout { timeout: Duration },
    #[error("Connection failed: {source}")]
    Connect {
        #[source]
        source: reqwest::Error,
    },
    #[error("Request failed: {source}")]
    Request {
        #[source]
        source: reqwest::Error,
    },
    #[error("Concurrency limiter closed before the request started")]
    LimiterClosed,
    #[error("{message}")]
    Other { message: String },
}

impl TransportError {
    /// Renders the error together with its source chain, e.g.
    /// `Connection failed: error sending request: tcp connect error: Connection refused`.
    #[must_use]
    pub fn describe(&self) -> String {
        let mut parts = vec![self.to_string()];
        let mut current = std::error::Error::source(self);
        while let Some(source) = current {
            let text = source.to_string();
            if parts.last().is_none_or(|last| !last.contains(&text)) {
                parts.push(text);
            }
            current = source.source();
        }
        parts.join(": ")
    }
}
