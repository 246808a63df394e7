//! Options for server-side object copies.

use reqwest::RequestBuilder;
use reqwest::header::{CONTENT_DISPOSITION, CONTENT_ENCODING, CONTENT_TYPE};

use super::destination::Destination;
use super::metadata::ObjectMetadata;
use crate::Result;

/// Options for a copy request.
///
/// The destination is required; content headers and metadata, when set,
/// replace the source object's values on the copy.
#[derive(Debug, Clone)]
pub struct CopyOpts {
    /// Copy target (`Destination` header).
    pub destination: Destination,
    /// Content type override for the copy (`Content-Type`).
    pub content_type: Option<String>,
    /// Content encoding override for the copy (`Content-Encoding`).
    pub content_encoding: Option<String>,
    /// Content disposition override for the copy (`Content-Disposition`).
    pub content_disposition: Option<String>,
    /// User metadata for the copy (`X-Object-Meta-*`).
    pub metadata: ObjectMetadata,
}

impl CopyOpts {
    /// Creates copy options targeting the given destination.
    pub fn new(destination: Destination) -> Self {
        Self {
            destination,
            content_type: None,
            content_encoding: None,
            content_disposition: None,
            metadata: ObjectMetadata::new(),
        }
    }

    /// Sets the content type override.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Sets the content encoding override.
    pub fn with_content_encoding(mut self, content_encoding: impl Into<String>) -> Self {
        self.content_encoding = Some(content_encoding.into());
        self
    }

    /// Sets the content disposition override.
    pub fn with_content_disposition(mut self, content_disposition: impl Into<String>) -> Self {
        self.content_disposition = Some(content_disposition.into());
        self
    }

    /// Sets the user metadata for the copy.
    pub fn with_metadata(mut self, metadata: ObjectMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub(crate) fn apply(&self, mut request: RequestBuilder) -> Result<RequestBuilder> {
        request = request.header("Destination", self.destination.header_value());
        if let Some(content_type) = &self.content_type {
            request = request.header(CONTENT_TYPE, content_type);
        }
        if let Some(content_encoding) = &self.content_encoding {
            request = request.header(CONTENT_ENCODING, content_encoding);
        }
        if let Some(content_disposition) = &self.content_disposition {
            request = request.header(CONTENT_DISPOSITION, content_disposition);
        }
        self.metadata.apply(request)
    }
}
