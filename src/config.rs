//! Client configuration for NCBI E-utilities requests
//!
//! NCBI asks every client to identify itself with a contact email and a tool
//! name. Both are sent with each request. The remaining settings control
//! request pacing, the HTTP timeout and where requests are sent.

use std::time::Duration;

use crate::rate_limit::RateLimiter;

/// Default NCBI E-utilities endpoint
pub const DEFAULT_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

/// Placeholder contact used when none is configured
pub const DEFAULT_CONTACT_EMAIL: &str = "your-email@example.com";

/// Default tool name reported to NCBI
pub const DEFAULT_TOOL: &str = "get-papers-list";

/// NCBI request ceiling for clients without an API key
pub(crate) const NCBI_DEFAULT_RATE: f64 = 3.0;

/// Configuration for [`PubMedClient`](crate::PubMedClient)
///
/// # Example
///
/// ```
/// use pubmed_industry_papers::ClientConfig;
///
/// let config = ClientConfig::new()
///     .with_email("researcher@university.edu")
///     .with_tool("my-survey");
///
/// assert_eq!(config.effective_tool(), "my-survey");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Contact email sent with every request
    pub email: String,
    /// Tool name sent with every request
    pub tool: Option<String>,
    /// Override for the E-utilities base URL
    pub base_url: Option<String>,
    /// Requests per second; defaults to the NCBI limit
    pub rate_limit: Option<f64>,
    /// HTTP request timeout
    pub timeout: Duration,
    /// Custom User-Agent header
    pub user_agent: Option<String>,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self {
            email: DEFAULT_CONTACT_EMAIL.to_string(),
            tool: None,
            base_url: None,
            rate_limit: None,
            timeout: Duration::from_secs(30),
            user_agent: None,
        }
    }

    pub fn with_email<S: Into<String>>(mut self, email: S) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_tool<S: Into<String>>(mut self, tool: S) -> Self {
        self.tool = Some(tool.into());
        self
    }

    /// Point the client at a different server (used by mocked tests)
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_rate_limit(mut self, rate: f64) -> Self {
        self.rate_limit = Some(rate);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Whether the contact email is still the built-in placeholder
    pub fn uses_placeholder_email(&self) -> bool {
        self.email == DEFAULT_CONTACT_EMAIL
    }

    pub fn effective_rate_limit(&self) -> f64 {
        self.rate_limit.unwrap_or(NCBI_DEFAULT_RATE)
    }

    pub fn effective_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .map(|url| url.trim_end_matches('/'))
            .unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn effective_user_agent(&self) -> String {
        self.user_agent.clone().unwrap_or_else(|| {
            format!(
                "{}/{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            )
        })
    }

    pub fn effective_tool(&self) -> &str {
        self.tool.as_deref().unwrap_or(DEFAULT_TOOL)
    }

    /// Query parameters identifying this client to NCBI
    pub fn build_api_params(&self) -> Vec<(String, String)> {
        vec![
            ("email".to_string(), self.email.clone()),
            ("tool".to_string(), self.effective_tool().to_string()),
        ]
    }

    pub fn create_rate_limiter(&self) -> RateLimiter {
        RateLimiter::new(self.effective_rate_limit())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
