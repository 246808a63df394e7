//! Options for listing the objects of a container.

use serde::Serialize;

/// Options for a listing request, serialized into the query string.
///
/// With `full` set the server returns a JSON body describing each object;
/// otherwise it returns a plaintext body with one object name per line.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListOpts {
    /// Request the full JSON listing instead of plaintext names.
    #[serde(skip)]
    pub full: bool,
    /// Maximum number of entries per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Return entries after this name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    /// Return entries before this name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_marker: Option<String>,
    /// Only return entries with this name prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Roll up entries under this delimiter, e.g. "/".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,
    /// Only return entries in this pseudo-directory path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ListOpts {
    /// Requests the full JSON listing.
    pub fn full(mut self) -> Self {
        self.full = true;
        self
    }

    /// Sets the page size limit.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the starting marker.
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    /// Sets the end marker.
    pub fn with_end_marker(mut self, end_marker: impl Into<String>) -> Self {
        self.end_marker = Some(end_marker.into());
        self
    }

    /// Sets the name prefix filter.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Sets the rollup delimiter.
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = Some(delimiter.into());
        self
    }

    /// Sets the pseudo-directory path filter.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_fields_skip_serialization() {
        let opts = ListOpts::default();
        let value = serde_json::to_value(&opts).unwrap();
        assert_eq!(value, serde_json::json!({}));
    }

    #[test]
    fn test_query_fields() {
        let opts = ListOpts::default()
            .full()
            .with_limit(100)
            .with_marker("goodbye")
            .with_prefix("reports/");
        let value = serde_json::to_value(&opts).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "limit": 100,
                "marker": "goodbye",
                "prefix": "reports/",
            })
        );
    }
}
