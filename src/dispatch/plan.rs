use std::time::Duration;

use url::Url;

use crate::error::DispatchError;

/// Per-request timeout applied when none is configured.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Representative endpoints a bot would hit; one is chosen per request.
pub const ENDPOINT_PATHS: [&str; 6] = [
    "/",
    "/api/data",
    "/login",
    "/search?q=test",
    "/products",
    "/about",
];

/// Everything the dispatcher needs to know about a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchPlan {
    pub target_url: String,
    pub count: usize,
    pub concurrency: usize,
    /// Base pause after each request; the actual pause adds up to 50% jitter.
    pub delay: Duration,
    pub request_timeout: Duration,
}

impl DispatchPlan {
    #[must_use]
    pub fn new(target_url: impl Into<String>, count: usize, concurrency: usize) -> Self {
        Self {
            target_url: target_url.into(),
            count,
            concurrency,
            delay: Duration::ZERO,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Checks the plan and returns the slash-trimmed base URL requests are
    /// built from.
    ///
    /// # Errors
    ///
    /// Returns an error when the concurrency limit is zero or the target URL
    /// is empty, malformed, or not http(s).
    pub fn validate(&self) -> Result<String, DispatchError> {
        if self.concurrency == 0 {
            return Err(DispatchError::ZeroConcurrency);
        }
        let base = self.target_url.trim().trim_end_matches('/');
        if base.is_empty() {
            return Err(DispatchError::EmptyTargetUrl);
        }
        let parsed = Url::parse(base).map_err(|err| DispatchError::InvalidTargetUrl {
            url: self.target_url.clone(),
            source: err,
        })?;
        match parsed.scheme() {
            "http" | "https" => Ok(base.to_owned()),
            other => Err(DispatchError::UnsupportedScheme {
                url: self.target_url.clone(),
                scheme: other.to_owned(),
            }),
        }
    }
}

pub(crate) fn resolve_url(base: &str, path: &str) -> String {
    let mut url = String::with_capacity(base.len().saturating_add(path.len()));
    url.push_str(base);
    url.push_str(path);
    url
}
