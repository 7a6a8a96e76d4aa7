//! Client configuration
//!
//! The server root is injected through [`ClientConfig`] rather than
//! hard-wired, so tests (and non-default deployments) can point the client
//! at another host.

use std::time::Duration;

/// Default server root, matching the admin console the reader page ships with.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_USER_AGENT: &str = concat!("pingback-client-rs/", env!("CARGO_PKG_VERSION"));

/// Configuration for [`PingbackClient`](crate::PingbackClient)
///
/// # Example
///
/// ```
/// use pingback_client_rs::{ClientConfig, PingbackClient};
/// use std::time::Duration;
///
/// let config = ClientConfig::new()
///     .with_base_url("https://rhino.example.org")
///     .with_timeout(Duration::from_secs(10));
///
/// let client = PingbackClient::with_config(config);
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: Option<String>,
    user_agent: Option<String>,
    /// Request timeout applied to every call
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration with the default server root and timeout
    pub fn new() -> Self {
        Self {
            base_url: None,
            user_agent: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set a custom server root (scheme and authority; a trailing slash is
    /// tolerated and ignored)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom User-Agent header value
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// The server root to use, normalized without a trailing slash
    pub fn effective_base_url(&self) -> String {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string()
    }

    /// The User-Agent value to use
    pub fn effective_user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
