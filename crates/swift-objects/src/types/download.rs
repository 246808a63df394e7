//! Options for downloading object content.

use reqwest::RequestBuilder;
use reqwest::header::{IF_MATCH, IF_MODIFIED_SINCE, IF_NONE_MATCH, IF_UNMODIFIED_SINCE, RANGE};
use time::OffsetDateTime;

use super::http_date;
use crate::Result;

/// Options for a download request.
///
/// All fields are optional; the default value downloads the whole object
/// unconditionally.
#[derive(Debug, Clone, Default)]
pub struct DownloadOpts {
    /// Only download if the ETag matches (`If-Match`).
    pub if_match: Option<String>,
    /// Only download if the ETag differs (`If-None-Match`).
    pub if_none_match: Option<String>,
    /// Only download if modified since this time (`If-Modified-Since`).
    pub if_modified_since: Option<OffsetDateTime>,
    /// Only download if unmodified since this time (`If-Unmodified-Since`).
    pub if_unmodified_since: Option<OffsetDateTime>,
    /// Byte range to download, e.g. "bytes=0-99" (`Range`).
    pub range: Option<String>,
}

impl DownloadOpts {
    /// Sets the `If-Match` condition.
    pub fn with_if_match(mut self, etag: impl Into<String>) -> Self {
        self.if_match = Some(etag.into());
        self
    }

    /// Sets the `If-None-Match` condition.
    pub fn with_if_none_match(mut self, etag: impl Into<String>) -> Self {
        self.if_none_match = Some(etag.into());
        self
    }

    /// Sets the `If-Modified-Since` condition.
    pub fn with_if_modified_since(mut self, since: OffsetDateTime) -> Self {
        self.if_modified_since = Some(since);
        self
    }

    /// Sets the `If-Unmodified-Since` condition.
    pub fn with_if_unmodified_since(mut self, since: OffsetDateTime) -> Self {
        self.if_unmodified_since = Some(since);
        self
    }

    /// Requests a byte range, e.g. "bytes=0-99".
    pub fn with_range(mut self, range: impl Into<String>) -> Self {
        self.range = Some(range.into());
        self
    }

    pub(crate) fn apply(&self, mut request: RequestBuilder) -> Result<RequestBuilder> {
        if let Some(etag) = &self.if_match {
            request = request.header(IF_MATCH, etag);
        }
        if let Some(etag) = &self.if_none_match {
            request = request.header(IF_NONE_MATCH, etag);
        }
        if let Some(since) = self.if_modified_since {
            request = request.header(IF_MODIFIED_SINCE, http_date::format(since)?);
        }
        if let Some(since) = self.if_unmodified_since {
            request = request.header(IF_UNMODIFIED_SINCE, http_date::format(since)?);
        }
        if let Some(range) = &self.range {
            request = request.header(RANGE, range);
        }
        Ok(request)
    }
}
