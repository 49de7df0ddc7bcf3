//! Client configuration options.

use std::time::Duration;

/// Default vendor API base URL.
pub const DEFAULT_BASE_URL: &str = "https://Openapi.5paisa.com/VendorsAPI/Service1.svc";

/// Default base URL for the historical-candle host.
pub const DEFAULT_HISTORICAL_BASE_URL: &str = "https://openapi.5paisa.com/V2/historical";

/// Configuration for the 5paisa client.
///
/// # Example
///
/// ```
/// use fivepaisa_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the vendor API
    pub base_url: String,
    /// Base URL for historical candle data
    pub historical_base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            historical_base_url: DEFAULT_HISTORICAL_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("fivepaisa-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the API base URL. Useful for testing against a mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the historical-data base URL.
    pub fn with_historical_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.historical_base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
