//! Swift service client implementation using reqwest.

use std::sync::Arc;

use reqwest::header::ACCEPT;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use url::Url;

use super::config::SwiftConfig;
use crate::{Error, Result, TRACING_TARGET_CLIENT};

/// Maximum number of characters of an error response body kept for reporting.
const ERROR_BODY_LIMIT: usize = 1024;

/// Inner client that holds the HTTP client and configuration.
struct SwiftClientInner {
    http: Client,
    config: SwiftConfig,
}

impl std::fmt::Debug for SwiftClientInner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwiftClientInner")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Connection handle for a Swift storage endpoint.
///
/// Builds authenticated requests against container and object paths. Cheap to
/// clone; all clones share the same underlying HTTP connection pool.
#[derive(Clone, Debug)]
pub struct SwiftClient {
    inner: Arc<SwiftClientInner>,
}

impl SwiftClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be created.
    pub fn new(config: SwiftConfig) -> Result<Self> {
        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            endpoint = %config.endpoint(),
            token = %config.token_masked(),
            "Creating Swift client"
        );

        config.validate()?;

        let http = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(config.user_agent())
            .build()?;

        Self::with_http_client(http, config)
    }

    /// Creates a new client with a pre-configured HTTP client.
    ///
    /// Useful when the HTTP client needs settings this crate doesn't expose,
    /// such as proxies or custom TLS roots. The configuration is still
    /// validated.
    pub fn with_http_client(http: Client, config: SwiftConfig) -> Result<Self> {
        config.validate()?;

        let inner = SwiftClientInner { http, config };
        let client = Self {
            inner: Arc::new(inner),
        };

        tracing::info!(
            target: TRACING_TARGET_CLIENT,
            endpoint = %client.config().endpoint(),
            "Swift client created successfully"
        );

        Ok(client)
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &SwiftConfig {
        &self.inner.config
    }

    /// Builds the URL for a container listing, `/{container}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the container name is empty or contains `/`.
    pub fn container_url(&self, container: &str) -> Result<Url> {
        if container.is_empty() {
            return Err(Error::InvalidRequest(
                "Container name cannot be empty".to_string(),
            ));
        }
        if container.contains('/') {
            return Err(Error::InvalidRequest(format!(
                "Container name '{container}' cannot contain '/'"
            )));
        }

        let mut url = self.inner.config.endpoint().clone();
        url.path_segments_mut()
            .map_err(|_| Error::Config("Endpoint cannot be a base URL".to_string()))?
            .pop_if_empty()
            .push(container);
        Ok(url)
    }

    /// Builds the URL for an object, `/{container}/{object}`.
    ///
    /// Object names may contain `/` (pseudo-directories); each slash-separated
    /// segment is percent-encoded individually so the slashes stay literal.
    ///
    /// # Errors
    ///
    /// Returns an error if either name is empty or the container contains `/`.
    pub fn object_url(&self, container: &str, object: &str) -> Result<Url> {
        if object.is_empty() {
            return Err(Error::InvalidRequest(
                "Object name cannot be empty".to_string(),
            ));
        }

        let mut url = self.container_url(container)?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| Error::Config("Endpoint cannot be a base URL".to_string()))?;
            for segment in object.split('/') {
                segments.push(segment);
            }
        }
        Ok(url)
    }

    /// Starts a request with the auth token attached.
    ///
    /// The `Accept` header is left to the caller since listings switch between
    /// JSON and plaintext bodies.
    pub fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.inner
            .http
            .request(method, url)
            .header("X-Auth-Token", self.inner.config.token())
    }

    /// Starts a request expecting a JSON-describable response.
    pub fn request_json(&self, method: Method, url: Url) -> RequestBuilder {
        self.request(method, url).header(ACCEPT, "application/json")
    }
}

/// Maps a response onto the operation's accepted status codes.
///
/// 404 becomes [`Error::NotFound`], 401/403 [`Error::Unauthorized`]; any other
/// unaccepted status is surfaced as [`Error::UnexpectedStatus`] with a
/// truncated body snippet.
pub(crate) async fn expect_status(
    response: Response,
    accepted: &[StatusCode],
    resource: &str,
) -> Result<Response> {
    let status = response.status();
    if accepted.contains(&status) {
        return Ok(response);
    }

    match status {
        StatusCode::NOT_FOUND => Err(Error::NotFound(resource.to_string())),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(Error::Unauthorized {
            status: status.as_u16(),
        }),
        _ => {
            let body: String = response
                .text()
                .await
                .unwrap_or_default()
                .chars()
                .take(ERROR_BODY_LIMIT)
                .collect();
            Err(Error::UnexpectedStatus {
                status: status.as_u16(),
                body,
            })
        }
    }
}
