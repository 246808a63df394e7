//! Options for updating object metadata in place.

use reqwest::RequestBuilder;
use reqwest::header::{CONTENT_DISPOSITION, CONTENT_ENCODING, CONTENT_TYPE};

use super::metadata::ObjectMetadata;
use crate::Result;

/// Options for a metadata update request.
///
/// A POST replaces the object's user metadata wholesale with the entries
/// given here; entries absent from `metadata` are removed on the server.
#[derive(Debug, Clone, Default)]
pub struct UpdateOpts {
    /// Replacement user metadata (`X-Object-Meta-*`).
    pub metadata: ObjectMetadata,
    /// New content type (`Content-Type`).
    pub content_type: Option<String>,
    /// New content encoding (`Content-Encoding`).
    pub content_encoding: Option<String>,
    /// New content disposition (`Content-Disposition`).
    pub content_disposition: Option<String>,
    /// Ask the server to re-infer the content type (`X-Detect-Content-Type`).
    pub detect_content_type: bool,
    /// Delete the object this many seconds from now (`X-Delete-After`).
    pub delete_after: Option<u64>,
    /// Delete the object at this Unix timestamp (`X-Delete-At`).
    pub delete_at: Option<i64>,
}

impl UpdateOpts {
    /// Sets the replacement metadata.
    pub fn with_metadata(mut self, metadata: ObjectMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Sets the new content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Sets the new content encoding.
    pub fn with_content_encoding(mut self, content_encoding: impl Into<String>) -> Self {
        self.content_encoding = Some(content_encoding.into());
        self
    }

    /// Sets the new content disposition.
    pub fn with_content_disposition(mut self, content_disposition: impl Into<String>) -> Self {
        self.content_disposition = Some(content_disposition.into());
        self
    }

    /// Asks the server to re-infer the content type.
    pub fn with_detect_content_type(mut self) -> Self {
        self.detect_content_type = true;
        self
    }

    /// Schedules deletion this many seconds from now.
    pub fn with_delete_after(mut self, seconds: u64) -> Self {
        self.delete_after = Some(seconds);
        self
    }

    /// Schedules deletion at a Unix timestamp.
    pub fn with_delete_at(mut self, timestamp: i64) -> Self {
        self.delete_at = Some(timestamp);
        self
    }

    pub(crate) fn apply(&self, mut request: RequestBuilder) -> Result<RequestBuilder> {
        if let Some(content_type) = &self.content_type {
            request = request.header(CONTENT_TYPE, content_type);
        }
        if let Some(content_encoding) = &self.content_encoding {
            request = request.header(CONTENT_ENCODING, content_encoding);
        }
        if let Some(content_disposition) = &self.content_disposition {
            request = request.header(CONTENT_DISPOSITION, content_disposition);
        }
        if self.detect_content_type {
            request = request.header("X-Detect-Content-Type", "true");
        }
        if let Some(seconds) = self.delete_after {
            request = request.header("X-Delete-After", seconds.to_string());
        }
        if let Some(timestamp) = self.delete_at {
            request = request.header("X-Delete-At", timestamp.to_string());
        }
        self.metadata.apply(request)
    }
}
