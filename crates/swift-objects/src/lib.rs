#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

// Tracing target constants for consistent logging
pub const TRACING_TARGET_CLIENT: &str = "swift_objects::client";
pub const TRACING_TARGET_OBJECTS: &str = "swift_objects::objects";

pub mod client;
pub mod operations;
pub mod types;

// Re-export for convenience
pub use crate::client::{SwiftClient, SwiftConfig};
pub use crate::operations::{
    CreateReceipt, DownloadResult, GetResult, ListPage, ObjectOperations, ObjectPager,
};
pub use crate::types::{
    CopyOpts, CreateOpts, DeleteOpts, Destination, DownloadOpts, GetOpts, ListOpts, Object,
    ObjectMetadata, UpdateOpts,
};

/// Error type for Swift object storage operations.
#[derive(Debug, thiserror::Error)]
#[must_use = "errors should be handled appropriately"]
pub enum Error {
    /// Configuration error.
    ///
    /// This includes invalid configuration parameters, missing required
    /// settings, or a malformed endpoint URL.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid request parameters.
    ///
    /// This occurs when container/object names, metadata keys, or option
    /// values cannot be turned into a valid HTTP request.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Resource not found.
    ///
    /// This occurs when the requested container or object doesn't exist.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The auth token was rejected by the server.
    #[error("Authentication rejected (status {status})")]
    Unauthorized {
        /// HTTP status code returned by the server (401 or 403).
        status: u16,
    },

    /// The server answered with a status code the operation doesn't accept.
    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus {
        /// HTTP status code returned by the server.
        status: u16,
        /// Response body, truncated for logging.
        body: String,
    },

    /// Malformed response body or header during extraction.
    #[error("Response decode error: {0}")]
    Decode(String),

    /// Deserialization of a JSON listing body failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Transport-level failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// Returns whether this error indicates a configuration issue.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_))
    }

    /// Returns whether this error indicates a missing resource.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Returns whether the server rejected the request as a client error.
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::NotFound(_) | Error::Unauthorized { .. } | Error::InvalidRequest(_) => true,
            Error::UnexpectedStatus { status, .. } => (400..500).contains(status),
            _ => false,
        }
    }

    /// Returns whether the server itself failed to handle the request.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::UnexpectedStatus { status, .. } if (500..600).contains(status))
    }

    /// Returns the HTTP status code associated with this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Unauthorized { status } => Some(*status),
            Error::UnexpectedStatus { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Specialized [`Result`] type for Swift operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let err = Error::NotFound("testContainer/testObject".to_string());
        assert!(err.is_not_found());
        assert!(err.is_client_error());
        assert!(!err.is_server_error());

        let err = Error::UnexpectedStatus {
            status: 503,
            body: "service unavailable".to_string(),
        };
        assert!(err.is_server_error());
        assert!(!err.is_client_error());
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn test_unauthorized_status() {
        let err = Error::Unauthorized { status: 401 };
        assert!(err.is_client_error());
        assert_eq!(err.status(), Some(401));
    }
}
