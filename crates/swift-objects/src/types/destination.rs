//! Validated copy destination, `/{container}/{object}`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Copy target sent in the `Destination` header.
///
/// Always of the form `/{container}/{object}`; the object part may itself
/// contain slashes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Destination {
    container: String,
    object: String,
}

impl Destination {
    /// Creates a destination from container and object names.
    ///
    /// # Errors
    ///
    /// Returns an error if either name is empty or the container contains `/`.
    pub fn new(container: impl Into<String>, object: impl Into<String>) -> Result<Self> {
        let container = container.into();
        let object = object.into();

        if container.is_empty() {
            return Err(Error::InvalidRequest(
                "Destination container cannot be empty".to_string(),
            ));
        }
        if container.contains('/') {
            return Err(Error::InvalidRequest(format!(
                "Destination container '{container}' cannot contain '/'"
            )));
        }
        if object.is_empty() {
            return Err(Error::InvalidRequest(
                "Destination object cannot be empty".to_string(),
            ));
        }

        Ok(Self { container, object })
    }

    /// Returns the target container name.
    pub fn container(&self) -> &str {
        &self.container
    }

    /// Returns the target object name.
    pub fn object(&self) -> &str {
        &self.object
    }

    /// Returns the header value, `/{container}/{object}`.
    pub fn header_value(&self) -> String {
        format!("/{}/{}", self.container, self.object)
    }
}

impl FromStr for Destination {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.strip_prefix('/').unwrap_or(s);
        match trimmed.split_once('/') {
            Some((container, object)) => Self::new(container, object),
            None => Err(Error::InvalidRequest(format!(
                "Destination '{s}' must be of the form /container/object"
            ))),
        }
    }
}

impl TryFrom<String> for Destination {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Destination> for String {
    fn from(destination: Destination) -> Self {
        destination.header_value()
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.container, self.object)
    }
}
