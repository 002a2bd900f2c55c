use std::time::Duration;

/// Default HTTP timeout: 30 seconds.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Controls source retrieval behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceConfig {
    /// Overall timeout for HTTP fetches. `None` disables the timeout.
    pub http_timeout: Option<Duration>,
    /// Maximum number of redirects followed by HTTP fetches.
    pub max_redirects: usize,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            http_timeout: Some(DEFAULT_HTTP_TIMEOUT),
            max_redirects: 10,
        }
    }
}
