//! User metadata carried in `X-Object-Meta-*` headers.

use std::collections::HashMap;

use reqwest::RequestBuilder;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Header prefix for user metadata on objects.
const META_PREFIX: &str = "x-object-meta-";

/// User metadata attached to an object.
///
/// Each entry maps to one `X-Object-Meta-{Key}` header on requests and is
/// read back from the matching response headers. Keys are canonicalized to
/// the `Word-Word` header form on extraction, so round trips are stable
/// regardless of the casing the transport reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectMetadata(HashMap<String, String>);

impl ObjectMetadata {
    /// Creates empty metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a metadata entry.
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Returns the value for a key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the entries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Appends one `X-Object-Meta-{Key}` header per entry.
    ///
    /// # Errors
    ///
    /// Returns an error if a key or value cannot form a valid HTTP header.
    pub(crate) fn apply(&self, mut request: RequestBuilder) -> Result<RequestBuilder> {
        for (key, value) in &self.0 {
            let name = HeaderName::from_bytes(format!("X-Object-Meta-{key}").as_bytes())
                .map_err(|_| {
                    Error::InvalidRequest(format!("Invalid metadata key '{key}'"))
                })?;
            let value = HeaderValue::from_str(value).map_err(|_| {
                Error::InvalidRequest(format!("Invalid metadata value for key '{key}'"))
            })?;
            request = request.header(name, value);
        }
        Ok(request)
    }

    /// Extracts user metadata from response headers.
    ///
    /// Header values that aren't valid UTF-8 are skipped.
    pub(crate) fn from_headers(headers: &HeaderMap) -> Self {
        let entries = headers
            .iter()
            .filter_map(|(name, value)| {
                let key = name.as_str().strip_prefix(META_PREFIX)?;
                let value = value.to_str().ok()?;
                Some((canonicalize_key(key), value.to_string()))
            })
            .collect();
        Self(entries)
    }
}

impl From<HashMap<String, String>> for ObjectMetadata {
    fn from(entries: HashMap<String, String>) -> Self {
        Self(entries)
    }
}

impl FromIterator<(String, String)> for ObjectMetadata {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Canonicalizes a metadata key to the `Word-Word` header form.
///
/// The transport lowercases header names, so "Release-State" arrives as
/// "release-state"; this restores the conventional casing.
fn canonicalize_key(key: &str) -> String {
    key.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}
