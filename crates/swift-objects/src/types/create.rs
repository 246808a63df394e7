//! Options for creating or replacing an object.

use reqwest::RequestBuilder;
use reqwest::header::{CONTENT_DISPOSITION, CONTENT_ENCODING, CONTENT_TYPE, ETAG};

use super::metadata::ObjectMetadata;
use crate::Result;

/// Options for a create (upload) request.
#[derive(Debug, Clone, Default)]
pub struct CreateOpts {
    /// Content type of the uploaded data (`Content-Type`).
    pub content_type: Option<String>,
    /// Content encoding of the uploaded data (`Content-Encoding`).
    pub content_encoding: Option<String>,
    /// Content disposition to store with the object (`Content-Disposition`).
    pub content_disposition: Option<String>,
    /// Ask the server to infer the content type from the name
    /// (`X-Detect-Content-Type`).
    pub detect_content_type: bool,
    /// Expected MD5 checksum; the server rejects a mismatching upload (`ETag`).
    pub etag: Option<String>,
    /// Delete the object this many seconds after upload (`X-Delete-After`).
    pub delete_after: Option<u64>,
    /// Delete the object at this Unix timestamp (`X-Delete-At`).
    pub delete_at: Option<i64>,
    /// User metadata stored with the object (`X-Object-Meta-*`).
    pub metadata: ObjectMetadata,
}

impl CreateOpts {
    /// Sets the content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Sets the content encoding.
    pub fn with_content_encoding(mut self, content_encoding: impl Into<String>) -> Self {
        self.content_encoding = Some(content_encoding.into());
        self
    }

    /// Sets the content disposition.
    pub fn with_content_disposition(mut self, content_disposition: impl Into<String>) -> Self {
        self.content_disposition = Some(content_disposition.into());
        self
    }

    /// Asks the server to infer the content type.
    pub fn with_detect_content_type(mut self) -> Self {
        self.detect_content_type = true;
        self
    }

    /// Sets the expected MD5 checksum.
    pub fn with_etag(mut self, etag: impl Into<String>) -> Self {
        self.etag = Some(etag.into());
        self
    }

    /// Schedules deletion this many seconds after upload.
    pub fn with_delete_after(mut self, seconds: u64) -> Self {
        self.delete_after = Some(seconds);
        self
    }

    /// Schedules deletion at a Unix timestamp.
    pub fn with_delete_at(mut self, timestamp: i64) -> Self {
        self.delete_at = Some(timestamp);
        self
    }

    /// Sets the user metadata.
    pub fn with_metadata(mut self, metadata: ObjectMetadata) -> Self {
        self.metadata = metadata;
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
        if let Some(etag) = &self.etag {
            request = request.header(ETAG, etag);
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
