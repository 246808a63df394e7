//! Options for reading object headers without the body.

use reqwest::RequestBuilder;

/// Options for a get (HEAD) request.
#[derive(Debug, Clone, Default)]
pub struct GetOpts {
    /// Ask the proxy for the newest replica instead of the fastest
    /// (`X-Newest`).
    pub newest: bool,
}

impl GetOpts {
    /// Requests the newest replica.
    pub fn with_newest(mut self) -> Self {
        self.newest = true;
        self
    }

    pub(crate) fn apply(&self, mut request: RequestBuilder) -> RequestBuilder {
        if self.newest {
            request = request.header("X-Newest", "true");
        }
        request
    }
}
