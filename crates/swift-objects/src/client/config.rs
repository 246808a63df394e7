//! Swift client configuration management.

use std::fmt;
use std::time::Duration;

use url::Url;

use crate::{Error, Result};

/// Default timeout for HTTP requests: 30 seconds.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Swift client configuration.
///
/// Carries the storage endpoint, a pre-acquired auth token, and transport
/// settings. Token acquisition and renewal are the caller's responsibility;
/// this crate only attaches the token to outgoing requests.
#[derive(Clone)]
pub struct SwiftConfig {
    /// Storage endpoint URL, including the account path.
    ///
    /// Examples: "https://storage.example.com/v1/AUTH_account",
    /// "http://localhost:8080/v1/AUTH_test"
    endpoint: Url,
    /// Pre-acquired auth token sent as `X-Auth-Token`.
    token: String,
    /// Request timeout for individual operations.
    request_timeout: Duration,
    /// User-Agent header to send with requests.
    user_agent: String,
}

impl SwiftConfig {
    /// Creates a new configuration with the specified endpoint and token.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint URL has no hostname or uses a scheme
    /// other than `http` or `https`.
    pub fn new(endpoint: Url, token: impl Into<String>) -> Result<Self> {
        match endpoint.scheme() {
            "https" => {}
            "http" => {
                tracing::warn!(
                    target: crate::TRACING_TARGET_CLIENT,
                    endpoint = %endpoint,
                    "Endpoint uses plain HTTP, the auth token travels unencrypted"
                );
            }
            other => {
                return Err(Error::Config(format!(
                    "Invalid endpoint scheme '{other}', expected 'http' or 'https'"
                )));
            }
        }

        if endpoint.host().is_none() {
            return Err(Error::Config(
                "Endpoint must include a valid hostname".to_string(),
            ));
        }

        Ok(Self {
            endpoint,
            token: token.into(),
            request_timeout: DEFAULT_TIMEOUT,
            user_agent: Self::default_user_agent(),
        })
    }

    /// Returns the default user agent string.
    fn default_user_agent() -> String {
        format!("swift-objects/{}", env!("CARGO_PKG_VERSION"))
    }

    /// Sets the request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Sets the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Returns the endpoint URL.
    #[inline]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Returns the auth token.
    #[inline]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the request timeout.
    #[inline]
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Returns the User-Agent string.
    #[inline]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Returns a masked version of the token for logging.
    pub fn token_masked(&self) -> String {
        if self.token.chars().count() > 8 {
            let prefix: String = self.token.chars().take(4).collect();
            format!("{prefix}****")
        } else {
            "****".to_string()
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns validation errors if the token is empty or the request timeout
    /// is zero.
    pub fn validate(&self) -> Result<()> {
        if self.token.is_empty() {
            return Err(Error::Config("Auth token cannot be empty".to_string()));
        }

        if self.request_timeout.is_zero() {
            return Err(Error::Config(
                "Request timeout must be greater than zero".to_string(),
            ));
        }

        if self.request_timeout < Duration::from_secs(1) {
            tracing::warn!(
                target: crate::TRACING_TARGET_CLIENT,
                timeout = ?self.request_timeout,
                "Request timeout is very short and may cause operation failures"
            );
        }

        Ok(())
    }
}

impl fmt::Debug for SwiftConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwiftConfig")
            .field("endpoint", &self.endpoint.as_str())
            .field("token", &self.token_masked())
            .field("request_timeout", &self.request_timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
