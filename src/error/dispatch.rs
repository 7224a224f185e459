use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Profile pool is empty; select at least one category with User-Agents.")]
    EmptyProfilePool,
    #[error("Concurrency limit must be >= 1.")]
    ZeroConcurrency,
    #[error("Target URL must not be empty.")]
    EmptyTargetUrl,
    #[error("Invalid target URL '{url}': {source}")]
    InvalidTargetUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Unsupported scheme '{scheme}' in target URL '{url}'. Use http or https.")]
    UnsupportedScheme { url: String, scheme: String },
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Run cancelled after {completed} of {total} requests completed.")]
    Cancelled { completed: usize, total: usize },
    #[error("Request task failed: {source}")]
    TaskJoin {
        #[source]
        source: tokio::task::JoinError,
    },
}
